//! System colour theme and the colours derived from it.
//!
//! The dock logic never looks at the theme. Only the indicator and the
//! panel painter ask it for colours.

/// RGB color parsed from a hex string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Self = Self::rgb(0xFF, 0xFF, 0xFF);
    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses a hex color string like "#17191f" or "17191f".
    pub fn from_hex(hex: &str) -> Option<Self> {
        let hex = hex.trim_start_matches('#');
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }
        Some(Self {
            r: u8::from_str_radix(&hex[0..2], 16).ok()?,
            g: u8::from_str_radix(&hex[2..4], 16).ok()?,
            b: u8::from_str_radix(&hex[4..6], 16).ok()?,
        })
    }

    /// Packs the colour as `0xAARRGGBB` with full alpha.
    pub fn to_argb(self) -> u32 {
        0xFF00_0000 | (u32::from(self.r) << 16) | (u32::from(self.g) << 8) | u32::from(self.b)
    }

    /// Packs the colour as a GDI `COLORREF` value (`0x00BBGGRR`).
    pub fn to_colorref(self) -> u32 {
        (u32::from(self.b) << 16) | (u32::from(self.g) << 8) | u32::from(self.r)
    }
}

/// The OS-wide light/dark application theme.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    /// Also the fallback when the theme cannot be read.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Colour of the sliver indicator: white on light, black on dark.
    pub fn indicator(self) -> Color {
        match self {
            Self::Light => Color::WHITE,
            Self::Dark => Color::BLACK,
        }
    }

    /// Panel background.
    pub fn background(self) -> Color {
        match self {
            Self::Light => Color::rgb(0xF5, 0xF7, 0xFC),
            Self::Dark => Color::rgb(0x17, 0x19, 0x1F),
        }
    }

    /// Panel text.
    pub fn foreground(self) -> Color {
        match self {
            Self::Light => Color::rgb(0x33, 0x33, 0x33),
            Self::Dark => Color::rgb(0xE0, 0xE0, 0xE0),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light theme",
            Self::Dark => "Dark theme",
        }
    }
}
