use std::mem;
use std::sync::Once;

use edgedock_core::{Color, Overlay, Rect, WindowResult};
use windows::Win32::Foundation::{COLORREF, HWND, LPARAM, LRESULT, POINT, SIZE, WPARAM};
use windows::Win32::Graphics::Gdi::{
    BI_RGB, BITMAPINFO, BITMAPINFOHEADER, BLENDFUNCTION, CreateCompatibleDC, CreateDIBSection,
    DIB_RGB_COLORS, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CW_USEDEFAULT, CreateWindowExW, DefWindowProcW, DestroyWindow, HWND_TOPMOST, RegisterClassW,
    SWP_NOACTIVATE, SWP_SHOWWINDOW, SetWindowPos, ULW_ALPHA, UpdateLayeredWindow, WNDCLASSW,
    WS_EX_LAYERED, WS_EX_NOACTIVATE, WS_EX_TOOLWINDOW, WS_EX_TOPMOST, WS_EX_TRANSPARENT, WS_POPUP,
};
use windows::core::w;

/// A solid overlay over the sliver of a hidden panel.
///
/// The window only exists while shown: `show` creates it, `hide`
/// destroys it. `WS_EX_TRANSPARENT` on a layered window makes it
/// click-through, so pointer input reaches the panel underneath.
/// Content is pushed with `UpdateLayeredWindow`, so the window never
/// needs to handle `WM_PAINT`.
#[derive(Debug, Default)]
pub struct Indicator {
    hwnd: Option<HWND>,
    rect: Option<Rect>,
}

static REGISTER_CLASS: Once = Once::new();

fn ensure_class_registered() {
    REGISTER_CLASS.call_once(|| {
        let wc = WNDCLASSW {
            lpfnWndProc: Some(indicator_wnd_proc),
            lpszClassName: w!("EdgedockIndicator"),
            ..Default::default()
        };
        unsafe {
            RegisterClassW(&wc);
        }
    });
}

unsafe extern "system" fn indicator_wnd_proc(
    hwnd: HWND,
    msg: u32,
    wparam: WPARAM,
    lparam: LPARAM,
) -> LRESULT {
    unsafe { DefWindowProcW(hwnd, msg, wparam, lparam) }
}

fn create_window() -> WindowResult<HWND> {
    ensure_class_registered();

    let ex = WS_EX_LAYERED
        | WS_EX_TOOLWINDOW
        | WS_EX_TOPMOST
        | WS_EX_TRANSPARENT
        | WS_EX_NOACTIVATE;
    let hwnd = unsafe {
        CreateWindowExW(
            ex,
            w!("EdgedockIndicator"),
            w!(""),
            WS_POPUP,
            CW_USEDEFAULT,
            CW_USEDEFAULT,
            0,
            0,
            None,
            None,
            None,
            None,
        )?
    };
    Ok(hwnd)
}

impl Indicator {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn is_shown(&self) -> bool {
        self.hwnd.is_some()
    }
}

impl Overlay for Indicator {
    fn show(&mut self, rect: Rect, color: Color) {
        let hwnd = match self.hwnd {
            Some(hwnd) => hwnd,
            None => match create_window() {
                Ok(hwnd) => {
                    self.hwnd = Some(hwnd);
                    hwnd
                }
                Err(e) => {
                    edgedock_core::log_warn!("could not create indicator: {e}");
                    return;
                }
            },
        };

        unsafe {
            let _ = SetWindowPos(
                hwnd,
                Some(HWND_TOPMOST),
                rect.x,
                rect.y,
                rect.width,
                rect.height,
                SWP_NOACTIVATE | SWP_SHOWWINDOW,
            );
        }
        self.rect = Some(rect);
        render(hwnd, rect, color);
    }

    fn recolor(&mut self, color: Color) {
        if let (Some(hwnd), Some(rect)) = (self.hwnd, self.rect) {
            render(hwnd, rect, color);
        }
    }

    fn hide(&mut self) {
        self.rect = None;
        if let Some(hwnd) = self.hwnd.take() {
            unsafe {
                let _ = DestroyWindow(hwnd);
            }
        }
    }
}

impl Drop for Indicator {
    fn drop(&mut self) {
        self.hide();
    }
}

/// Fills a bitmap with `color` and applies it via `UpdateLayeredWindow`.
fn render(hwnd: HWND, rect: Rect, color: Color) {
    let (w, h) = (rect.width, rect.height);
    if w <= 0 || h <= 0 {
        return;
    }

    unsafe {
        let screen_dc = GetDC(None);
        let mem_dc = CreateCompatibleDC(Some(screen_dc));

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: w,
                biHeight: -h, // top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits = std::ptr::null_mut();
        let Ok(bmp) = CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
        else {
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        };
        if bits.is_null() {
            let _ = DeleteObject(bmp.into());
            let _ = DeleteDC(mem_dc);
            let _ = ReleaseDC(None, screen_dc);
            return;
        }

        let old = SelectObject(mem_dc, bmp.into());

        // SAFETY: `bits` is non-null (checked above) and points to
        // `w * h` pixels allocated by CreateDIBSection.
        let buf = std::slice::from_raw_parts_mut(bits as *mut u32, (w * h) as usize);
        buf.fill(color.to_argb());

        let pt_dst = POINT {
            x: rect.x,
            y: rect.y,
        };
        let size = SIZE { cx: w, cy: h };
        let pt_src = POINT::default();
        let blend = BLENDFUNCTION {
            BlendOp: 0,               // AC_SRC_OVER
            SourceConstantAlpha: 255, // opaque
            AlphaFormat: 1,           // AC_SRC_ALPHA
            ..Default::default()
        };

        let _ = UpdateLayeredWindow(
            hwnd,
            Some(screen_dc),
            Some(&pt_dst),
            Some(&size),
            Some(mem_dc),
            Some(&pt_src),
            COLORREF(0),
            Some(&blend),
            ULW_ALPHA,
        );

        SelectObject(mem_dc, old);
        let _ = DeleteObject(bmp.into());
        let _ = DeleteDC(mem_dc);
        let _ = ReleaseDC(None, screen_dc);
    }
}
