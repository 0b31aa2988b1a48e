use std::sync::mpsc::Receiver;
use std::time::Instant;

use edgedock_core::sampler;
use edgedock_core::{Point, Sample};
use windows::Win32::Foundation::HWND;
use windows::Win32::UI::Input::KeyboardAndMouse::{ReleaseCapture, SetCapture};
use windows::Win32::UI::WindowsAndMessaging::{
    DispatchMessageW, GetMessageW, KillTimer, MSG, PostQuitMessage, SetTimer, TranslateMessage,
    WM_LBUTTONDOWN, WM_LBUTTONUP, WM_MOUSEMOVE, WM_RBUTTONUP, WM_TIMER,
};

use super::PanelController;
use crate::cursor::WM_SAMPLES_READY;
use crate::panel::WM_THEME_CHANGED;
use crate::theme;

const HIDE_TIMER_ID: usize = 0x4544;

/// The Win32 message pump. Applies samples, timer ticks and drag
/// gestures to the controller and blocks until WM_QUIT is received.
///
/// After every message handled here the Win32 timer is re-synced to the
/// controller's hide deadline, so the timer never outlives a cancel.
pub(crate) fn run_message_pump(controller: &mut PanelController, samples: &Receiver<Sample>) {
    let hwnd = controller.host().hwnd();
    let mut msg = MSG::default();

    while unsafe { GetMessageW(&mut msg, None, 0, 0).as_bool() } {
        if msg.hwnd == hwnd && handle_panel_message(controller, samples, &msg) {
            sync_timer(hwnd, controller.next_deadline());
            continue;
        }

        unsafe {
            let _ = TranslateMessage(&msg);
            DispatchMessageW(&msg);
        }
    }

    unsafe {
        let _ = KillTimer(Some(hwnd), HIDE_TIMER_ID);
    }
}

/// Returns `false` for messages the window procedure should see.
fn handle_panel_message(
    controller: &mut PanelController,
    samples: &Receiver<Sample>,
    msg: &MSG,
) -> bool {
    let now = Instant::now();
    // For mouse messages, `pt` is the cursor position in screen pixels
    // when the message was posted.
    let pointer = Point::new(msg.pt.x, msg.pt.y);

    match msg.message {
        WM_SAMPLES_READY => {
            for sample in sampler::coalesce(samples.try_iter()) {
                controller.handle_sample(sample, now);
            }
        }
        WM_TIMER if msg.wParam.0 == HIDE_TIMER_ID => {
            controller.fire_due(now);
        }
        WM_LBUTTONDOWN => {
            unsafe {
                SetCapture(msg.hwnd);
            }
            controller.drag_start(pointer);
        }
        WM_MOUSEMOVE if controller.is_dragging() => controller.drag_move(pointer),
        WM_LBUTTONUP => {
            unsafe {
                let _ = ReleaseCapture();
            }
            controller.drag_end(now);
        }
        WM_RBUTTONUP => unsafe { PostQuitMessage(0) },
        WM_THEME_CHANGED => {
            let theme = theme::current();
            if theme != controller.theme() {
                edgedock_core::log_info!("theme changed to {theme:?}");
            }
            controller.set_theme(theme);
            controller.host().set_theme(theme);
        }
        _ => return false,
    }
    true
}

/// Arms the Win32 timer for `deadline`, or kills it when there is none.
fn sync_timer(hwnd: HWND, deadline: Option<Instant>) {
    unsafe {
        match deadline {
            Some(deadline) => {
                SetTimer(Some(hwnd), HIDE_TIMER_ID, timer_millis(deadline, Instant::now()), None);
            }
            None => {
                let _ = KillTimer(Some(hwnd), HIDE_TIMER_ID);
            }
        }
    }
}

/// Milliseconds until `deadline`, at least 1 so an overdue timer still
/// fires on the next tick.
fn timer_millis(deadline: Instant, now: Instant) -> u32 {
    let ms = deadline.saturating_duration_since(now).as_millis();
    u32::try_from(ms).unwrap_or(u32::MAX).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn timer_millis_rounds_down_to_whole_ms() {
        // Arrange
        let now = Instant::now();

        // Act
        let ms = timer_millis(now + Duration::from_micros(500_900), now);

        // Assert
        assert_eq!(ms, 500);
    }

    #[test]
    fn overdue_deadline_still_arms_one_ms() {
        // Arrange
        let now = Instant::now();

        // Act / Assert
        assert_eq!(timer_millis(now, now), 1);
        assert_eq!(timer_millis(now, now + Duration::from_secs(1)), 1);
    }
}
