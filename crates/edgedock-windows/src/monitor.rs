use std::mem;

use edgedock_core::{Rect, WindowResult};
use windows::Win32::Foundation::HWND;
use windows::Win32::Graphics::Gdi::{
    GetMonitorInfoW, HMONITOR, MONITOR_DEFAULTTOPRIMARY, MONITORINFO, MonitorFromWindow,
};

/// Returns the full bounds of the primary monitor.
///
/// The panel docks to the physical screen edge, so this is the monitor
/// rectangle and not the work area: the taskbar does not push the
/// sliver inward.
pub fn primary_screen() -> WindowResult<Rect> {
    // MonitorFromWindow with a null HWND and MONITOR_DEFAULTTOPRIMARY
    // returns the primary monitor handle.
    let monitor = unsafe { MonitorFromWindow(HWND::default(), MONITOR_DEFAULTTOPRIMARY) };
    bounds_for_monitor(monitor)
}

fn bounds_for_monitor(monitor: HMONITOR) -> WindowResult<Rect> {
    let mut info = MONITORINFO {
        cbSize: mem::size_of::<MONITORINFO>() as u32,
        ..Default::default()
    };

    // SAFETY: GetMonitorInfoW fills the MONITORINFO struct with
    // monitor dimensions. We set cbSize as required by the API.
    let success = unsafe { GetMonitorInfoW(monitor, &mut info) };

    if !success.as_bool() {
        return Err("Failed to get monitor info".into());
    }

    let rc = info.rcMonitor;
    Ok(Rect::new(
        rc.left,
        rc.top,
        rc.right - rc.left,
        rc.bottom - rc.top,
    ))
}
