use core::fmt;

use crate::color::Rgb;

pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Pack an RGB color into a u32 value (0xRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgb_to_u32(color: Rgb) -> u32 {
    ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Create an RGB color from a u32 value (0xRRGGBB format)
pub const fn rgb_from_u32(color: u32) -> Rgb {
    Rgb {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
    }
}

/// Displays a color as six upper-case hex digits, e.g. `00FF00`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HexColor(pub Rgb);

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02X}{:02X}{:02X}", self.0.r, self.0.g, self.0.b)
    }
}
