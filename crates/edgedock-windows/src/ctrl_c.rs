//! Ctrl+C signal handler using `SetConsoleCtrlHandler`.
//!
//! The handler runs on a console thread, so it cannot touch the panel.
//! It posts `WM_QUIT` to the UI thread instead, which ends the message
//! pump and runs the normal shutdown path.

use std::sync::OnceLock;

use edgedock_core::WindowResult;
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::System::Console::{CTRL_C_EVENT, SetConsoleCtrlHandler};
use windows::Win32::UI::WindowsAndMessaging::{PostThreadMessageW, WM_QUIT};

/// The UI thread to wake. Written once by `set_handler`.
static UI_THREAD: OnceLock<u32> = OnceLock::new();

/// Registers a Ctrl+C handler that posts `WM_QUIT` to `ui_thread_id`.
pub fn set_handler(ui_thread_id: u32) -> WindowResult<()> {
    UI_THREAD
        .set(ui_thread_id)
        .map_err(|_| "Ctrl+C handler already registered")?;
    unsafe { SetConsoleCtrlHandler(Some(handler), true) }?;
    Ok(())
}

unsafe extern "system" fn handler(ctrl_type: u32) -> windows::core::BOOL {
    if ctrl_type == CTRL_C_EVENT
        && let Some(&thread_id) = UI_THREAD.get()
    {
        let _ = unsafe { PostThreadMessageW(thread_id, WM_QUIT, WPARAM(0), LPARAM(0)) };
    }
    windows::core::BOOL(1)
}
