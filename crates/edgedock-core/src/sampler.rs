//! Background pointer sampler.
//!
//! One thread per active period reads the pointer position at a fixed
//! rate and hands every reading to a [`SampleSink`]. The thread never
//! touches dock state or window APIs; the sink is the only way out, and
//! whoever owns the receiving end applies samples on the UI thread.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use crate::host::{PointerSource, Sampler};
use crate::{DockError, Point};

/// A message from the sampler thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sample {
    /// The pointer position read on one tick.
    Position(Point),
    /// The loop ended on its own because the OS query failed.
    /// `generation` identifies the worker that sent it.
    Stopped { generation: u64, error: DockError },
}

/// Thread-safe hand-off from the sampler thread to the UI thread.
pub trait SampleSink: Send + Sync + 'static {
    /// Delivers one sample. Returns `false` once nobody is listening,
    /// which ends the loop.
    fn deliver(&self, sample: Sample) -> bool;
}

impl SampleSink for mpsc::Sender<Sample> {
    fn deliver(&self, sample: Sample) -> bool {
        self.send(sample).is_ok()
    }
}

/// Collapses each run of consecutive positions into its newest entry.
///
/// The UI thread only cares about the latest pointer position, so when
/// it falls behind it can skip stale readings. `Stopped` markers keep
/// their place in the order.
pub fn coalesce(samples: impl IntoIterator<Item = Sample>) -> Vec<Sample> {
    let mut out: Vec<Sample> = Vec::new();
    for sample in samples {
        if let Sample::Position(p) = sample
            && let Some(Sample::Position(last)) = out.last_mut()
        {
            *last = p;
            continue;
        }
        out.push(sample);
    }
    out
}

struct Worker {
    stop: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

/// Fixed-rate pointer sampler running on its own thread.
pub struct PointerSampler<P, K> {
    source: Arc<P>,
    sink: Arc<K>,
    interval: Duration,
    worker: Option<Worker>,
    /// Bumped on every spawn.
    generation: u64,
}

impl<P, K> PointerSampler<P, K>
where
    P: PointerSource + Sync,
    K: SampleSink,
{
    pub fn new(source: P, sink: K, interval: Duration) -> Self {
        Self {
            source: Arc::new(source),
            sink: Arc::new(sink),
            interval,
            worker: None,
            generation: 0,
        }
    }

    /// Whether a sampling thread is alive right now.
    pub fn is_running(&self) -> bool {
        self.worker
            .as_ref()
            .is_some_and(|w| !w.handle.is_finished())
    }
}

impl<P, K> Sampler for PointerSampler<P, K>
where
    P: PointerSource + Sync,
    K: SampleSink,
{
    fn start(&mut self) {
        if self.is_running() {
            return;
        }
        // Reap a loop that ended on its own before spawning a new one.
        if let Some(old) = self.worker.take() {
            let _ = old.handle.join();
        }

        let stop = Arc::new(AtomicBool::new(false));
        let stop_flag = stop.clone();
        let source = self.source.clone();
        let sink = self.sink.clone();
        let interval = self.interval;
        self.generation += 1;
        let generation = self.generation;
        let handle =
            thread::spawn(move || run(&*source, &*sink, interval, &stop_flag, generation));

        crate::log_debug!("sampler #{generation} started ({}ms)", interval.as_millis());
        self.worker = Some(Worker { stop, handle });
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        worker.stop.store(true, Ordering::Relaxed);
        let _ = worker.handle.join();
        crate::log_debug!("sampler #{} stopped", self.generation);
    }

    fn generation(&self) -> u64 {
        self.generation
    }
}

impl<P, K> Drop for PointerSampler<P, K> {
    fn drop(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.stop.store(true, Ordering::Relaxed);
            let _ = worker.handle.join();
        }
    }
}

/// The sampling loop. The stop flag is checked at the top of every
/// iteration, so a stop request is observed within one interval.
fn run<P, K>(source: &P, sink: &K, interval: Duration, stop: &AtomicBool, generation: u64)
where
    P: PointerSource + ?Sized,
    K: SampleSink + ?Sized,
{
    while !stop.load(Ordering::Relaxed) {
        match source.position() {
            Ok(p) => {
                if !sink.deliver(Sample::Position(p)) {
                    return;
                }
            }
            Err(error) => {
                crate::log_warn!("sampler #{generation} exiting: {error}");
                let _ = sink.deliver(Sample::Stopped { generation, error });
                return;
            }
        }
        thread::sleep(interval);
    }
}
