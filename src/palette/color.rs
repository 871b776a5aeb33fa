use serde::{Deserialize, Serialize};
use std::fmt;

/// Represents a 24-bit RGB color
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub struct RgbColor(pub u8, pub u8, pub u8);

impl RgbColor {
    pub fn r(self) -> u8 {
        self.0
    }

    pub fn g(self) -> u8 {
        self.1
    }

    pub fn b(self) -> u8 {
        self.2
    }

    /// Packs into the display's 8-bit indexed format (RRRG GGBB).
    pub fn to_indexed(self) -> u8 {
        (self.0 & 0xE0) | ((self.1 & 0xE0) >> 3) | (self.2 >> 6)
    }

    /// Packs into the display's 16-bit 5-6-5 format (RRRR RGGG GGGB BBBB).
    pub fn to_rgb565(self) -> u16 {
        ((self.0 as u16 & 0xF8) << 8) | ((self.1 as u16 & 0xFC) << 3) | ((self.2 as u16 & 0xF8) >> 3)
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl From<RgbColor> for crossterm::style::Color {
    fn from(c: RgbColor) -> Self {
        crossterm::style::Color::Rgb { r: c.0, g: c.1, b: c.2 }
    }
}

impl fmt::Display for RgbColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.0, self.1, self.2)
    }
}
