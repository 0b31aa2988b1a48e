//! The panel: a small always-on-top popup that docks to a screen edge.
//!
//! Only the UI thread touches it. Paint and system notifications go
//! through the window procedure; everything that concerns docking is
//! handled by the message pump in `event_loop`.

use std::cell::Cell;
use std::sync::Once;

use edgedock_core::{DockError, PanelHost, Point, Rect, Size, Theme, WindowResult};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, RECT, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BeginPaint, CreateSolidBrush, DT_CENTER, DT_SINGLELINE, DT_VCENTER, DeleteObject, DrawTextW,
    EndPaint, FillRect, InvalidateRect, PAINTSTRUCT, SetBkMode, SetTextColor, TRANSPARENT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CreateWindowExW, DefWindowProcW, DestroyWindow, GetClientRect, GetWindowRect, LWA_ALPHA,
    PostMessageW, RegisterClassW, SW_SHOWNOACTIVATE, SWP_NOACTIVATE, SWP_NOSIZE, SWP_NOZORDER,
    SetLayeredWindowAttributes, SetWindowPos, ShowWindow, WM_APP, WM_PAINT, WM_SETTINGCHANGE,
    WNDCLASSW, WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_POPUP,
};
use windows::core::w;

use crate::monitor;

/// Posted by the window procedure when system settings change, so the
/// pump can re-read the theme outside of the `SendMessage` call.
pub(crate) const WM_THEME_CHANGED: u32 = WM_APP + 2;

/// Slightly translucent, like a tool palette.
const PANEL_ALPHA: u8 = 242;

thread_local! {
    /// Theme used by `WM_PAINT`. The panel lives on one thread only.
    static PANEL_THEME: Cell<Theme> = const { Cell::new(Theme::Light) };
}

static REGISTER_CLASS: Once = Once::new();

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(panel_wnd_proc),
            lpszClassName: w!("EdgedockPanel"),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn panel_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    match msg {
        WM_PAINT => {
            paint(hwnd);
            LRESULT(0)
        }
        WM_SETTINGCHANGE => {
            unsafe {
                let _ = PostMessageW(Some(hwnd), WM_THEME_CHANGED, WPARAM(0), LPARAM(0));
            }
            unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
        }
        _ => unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) },
    }
}

fn paint(hwnd: HWND) {
    let theme = PANEL_THEME.with(Cell::get);
    let mut ps = PAINTSTRUCT::default();
    unsafe {
        let hdc = BeginPaint(hwnd, &mut ps);
        let mut rc = RECT::default();
        let _ = GetClientRect(hwnd, &mut rc);

        let brush = CreateSolidBrush(COLORREF(theme.background().to_colorref()));
        FillRect(hdc, &rc, brush);
        let _ = DeleteObject(brush.into());

        SetBkMode(hdc, TRANSPARENT);
        SetTextColor(hdc, COLORREF(theme.foreground().to_colorref()));
        let mut text: Vec<u16> = theme.label().encode_utf16().collect();
        DrawTextW(
            hdc,
            &mut text,
            &mut rc,
            DT_CENTER | DT_VCENTER | DT_SINGLELINE,
        );

        let _ = EndPaint(hwnd, &ps);
    }
}

/// The panel window. Destroyed on drop.
pub struct PanelWindow {
    hwnd: HWND,
}

impl PanelWindow {
    /// Creates the panel at `rect`, hidden. Call [`Self::show`] once it
    /// has been moved to its starting position.
    pub fn create(rect: Rect, theme: Theme) -> WindowResult<Self> {
        ensure_class_registered();
        PANEL_THEME.with(|t| t.set(theme));

        let ex = WS_EX_LAYERED | WS_EX_TOOLWINDOW | WS_EX_TOPMOST | WS_EX_NOACTIVATE;
        let hwnd = unsafe {
            CreateWindowExW(
                ex,
                w!("EdgedockPanel"),
                w!("edgedock"),
                WS_POPUP,
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                None,
                None,
                None,
                None,
            )?
        };
        unsafe { SetLayeredWindowAttributes(hwnd, COLORREF(0), PANEL_ALPHA, LWA_ALPHA) }?;

        Ok(Self { hwnd })
    }

    pub fn hwnd(&self) -> HWND {
        self.hwnd
    }

    /// Makes the panel visible without taking focus.
    pub fn show(&self) {
        unsafe {
            let _ = ShowWindow(self.hwnd, SW_SHOWNOACTIVATE);
        }
    }

    /// Switches the paint colours and repaints.
    pub fn set_theme(&self, theme: Theme) {
        PANEL_THEME.with(|t| t.set(theme));
        unsafe {
            let _ = InvalidateRect(Some(self.hwnd), None, true);
        }
    }

    fn window_rect(&self) -> WindowResult<Rect> {
        let mut rc = RECT::default();
        unsafe { GetWindowRect(self.hwnd, &mut rc) }?;
        Ok(Rect::new(
            rc.left,
            rc.top,
            rc.right - rc.left,
            rc.bottom - rc.top,
        ))
    }
}

impl PanelHost for PanelWindow {
    fn move_to(&mut self, origin: Point) {
        if self.window_rect().is_ok_and(|r| r.origin() == origin) {
            return;
        }
        let moved = unsafe {
            SetWindowPos(
                self.hwnd,
                None,
                origin.x,
                origin.y,
                0,
                0,
                SWP_NOSIZE | SWP_NOZORDER | SWP_NOACTIVATE,
            )
        };
        if let Err(e) = moved {
            edgedock_core::log_debug!("move to ({},{}) failed: {e}", origin.x, origin.y);
        }
    }

    fn current_rect(&self) -> Result<Rect, DockError> {
        match self.window_rect() {
            Ok(rect) if rect.width > 0 && rect.height > 0 => Ok(rect),
            _ => Err(DockError::GeometryUnavailable),
        }
    }

    fn screen_size(&self) -> Result<Size, DockError> {
        monitor::primary_screen()
            .map(|screen| screen.size())
            .map_err(|_| DockError::GeometryUnavailable)
    }
}

impl Drop for PanelWindow {
    fn drop(&mut self) {
        unsafe {
            let _ = DestroyWindow(self.hwnd);
        }
    }
}
