//! Light/dark detection via the per-user `AppsUseLightTheme` value under
//! `HKEY_CURRENT_USER\Software\Microsoft\Windows\CurrentVersion\Themes\Personalize`.

use edgedock_core::Theme;
use windows::Win32::System::Registry::{
    HKEY, HKEY_CURRENT_USER, KEY_QUERY_VALUE, RegCloseKey, RegOpenKeyExW, RegQueryValueExW,
};
use windows::core::PCWSTR;

const PERSONALIZE_KEY: &str = r"Software\Microsoft\Windows\CurrentVersion\Themes\Personalize";
const VALUE_NAME: &str = "AppsUseLightTheme";

/// Returns the current application theme. Anything unreadable counts
/// as light.
pub fn current() -> Theme {
    match read_apps_use_light_theme() {
        Ok(value) => theme_from_value(value),
        Err(e) => {
            edgedock_core::log_debug!("theme unknown, assuming light: {e}");
            Theme::Light
        }
    }
}

fn theme_from_value(value: u32) -> Theme {
    if value == 0 { Theme::Dark } else { Theme::Light }
}

fn read_apps_use_light_theme() -> Result<u32, String> {
    let key = open_personalize_key()?;
    let result = query_dword(key);
    close_key(key);
    result
}

fn open_personalize_key() -> Result<HKEY, String> {
    let wide_key = wide(PERSONALIZE_KEY);
    let mut key = HKEY::default();
    // SAFETY: RegOpenKeyExW is a standard Win32 registry API. We pass valid
    // pointers and close the key after use.
    let status = unsafe {
        RegOpenKeyExW(
            HKEY_CURRENT_USER,
            PCWSTR(wide_key.as_ptr()),
            None,
            KEY_QUERY_VALUE,
            &mut key,
        )
    };
    if status.is_err() {
        return Err(format!("could not open registry key: {status:?}"));
    }
    Ok(key)
}

fn query_dword(key: HKEY) -> Result<u32, String> {
    let wide_name = wide(VALUE_NAME);
    let mut data: u32 = 0;
    let mut size = std::mem::size_of::<u32>() as u32;
    // SAFETY: the buffer is a u32 and `size` holds its byte length.
    let status = unsafe {
        RegQueryValueExW(
            key,
            PCWSTR(wide_name.as_ptr()),
            None,
            None,
            Some((&mut data as *mut u32).cast()),
            Some(&mut size),
        )
    };
    if status.is_err() {
        return Err(format!("could not read {VALUE_NAME}: {status:?}"));
    }
    Ok(data)
}

fn close_key(key: HKEY) {
    // SAFETY: RegCloseKey is safe to call on any valid HKEY.
    let _ = unsafe { RegCloseKey(key) };
}

fn wide(s: &str) -> Vec<u16> {
    s.encode_utf16().chain(std::iter::once(0)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_dark() {
        assert_eq!(theme_from_value(0), Theme::Dark);
    }

    #[test]
    fn any_other_value_means_light() {
        assert_eq!(theme_from_value(1), Theme::Light);
        assert_eq!(theme_from_value(7), Theme::Light);
    }

    #[test]
    fn wide_is_nul_terminated() {
        // Act
        let w = wide("ab");

        // Assert
        assert_eq!(w, vec![b'a' as u16, b'b' as u16, 0]);
    }
}
