//! Pointer reads for the sampler thread and the way its samples get
//! back to the UI thread.

use std::sync::mpsc::Sender;

use edgedock_core::{DockError, Point, PointerSource, Sample, SampleSink};
use windows::Win32::Foundation::{HWND, LPARAM, POINT, WPARAM};
use windows::Win32::UI::WindowsAndMessaging::{GetCursorPos, PostMessageW, WM_APP};

/// Posted to the panel after one or more samples were queued.
pub(crate) const WM_SAMPLES_READY: u32 = WM_APP + 1;

/// Reads the global cursor position with `GetCursorPos`.
#[derive(Debug, Default, Clone, Copy)]
pub struct CursorSource;

impl PointerSource for CursorSource {
    fn position(&self) -> Result<Point, DockError> {
        let mut pt = POINT::default();
        // SAFETY: GetCursorPos writes into the POINT we own.
        unsafe { GetCursorPos(&mut pt) }.map_err(|e| DockError::PointerQuery(e.to_string()))?;
        Ok(Point::new(pt.x, pt.y))
    }
}

/// Queues samples on a channel and wakes the panel's message pump.
///
/// The window handle is stored as a plain integer so the sink can live
/// on the sampler thread; only `PostMessageW` ever sees it again.
pub struct PostedSink {
    tx: Sender<Sample>,
    hwnd: usize,
}

impl PostedSink {
    pub fn new(tx: Sender<Sample>, hwnd: HWND) -> Self {
        Self {
            tx,
            hwnd: hwnd.0 as usize,
        }
    }
}

impl SampleSink for PostedSink {
    fn deliver(&self, sample: Sample) -> bool {
        if self.tx.send(sample).is_err() {
            return false;
        }
        let hwnd = HWND(self.hwnd as *mut _);
        // Fails once the panel is destroyed, which ends the sampling loop.
        unsafe { PostMessageW(Some(hwnd), WM_SAMPLES_READY, WPARAM(0), LPARAM(0)) }.is_ok()
    }
}
