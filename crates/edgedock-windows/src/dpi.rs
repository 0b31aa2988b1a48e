use windows::Win32::UI::HiDpi::{
    DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2, SetProcessDpiAwarenessContext,
};

/// Declares this process as per-monitor DPI aware (V2).
///
/// Without this, `GetCursorPos` and `GetWindowRect` report coordinates
/// scaled to the primary monitor's DPI while `SetWindowPos` may not,
/// and the hidden panel lands a few pixels off its edge. With
/// per-monitor awareness every API agrees on raw pixels.
///
/// Must be called once at process startup, before the panel exists.
pub fn enable_dpi_awareness() {
    // SAFETY: SetProcessDpiAwarenessContext is safe to call once at startup.
    // If it fails (e.g. already set via manifest), we ignore the error.
    unsafe {
        let _ = SetProcessDpiAwarenessContext(DPI_AWARENESS_CONTEXT_PER_MONITOR_AWARE_V2);
    }
}
