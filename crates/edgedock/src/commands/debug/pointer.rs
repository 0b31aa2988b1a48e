use std::sync::mpsc;
use std::time::Duration;

use edgedock_core::{PointerSampler, Sample, Sampler, config};
use edgedock_windows::CursorSource;

/// Runs the pointer sampler against the real cursor and prints `count`
/// readings.
pub fn execute(count: usize) {
    let interval = config::load().dock.sample_interval_ms;
    println!("Sampling the cursor every {interval}ms ({count} samples)...\n");

    let (tx, rx) = mpsc::channel::<Sample>();
    let mut sampler = PointerSampler::new(CursorSource, tx, Duration::from_millis(interval));
    sampler.start();

    for (i, sample) in rx.iter().take(count).enumerate() {
        match sample {
            Sample::Position(p) => println!("{:>4}  ({}, {})", i + 1, p.x, p.y),
            Sample::Stopped { error, .. } => {
                eprintln!("Sampler stopped: {error}");
                break;
            }
        }
    }

    sampler.stop();
}
