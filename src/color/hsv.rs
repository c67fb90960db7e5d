//! Conversion between the host color model and strip RGB
//!
//! The host describes colors with hue in degrees (0-360) and saturation,
//! value and lightness in percent (0-100). The strip takes 8-bit channels.

use crate::color::Rgb;

/// Value used when deriving the strip color: brightness is applied by the
/// sink, so the color itself is always computed at full value.
pub const FULL_VALUE: u8 = 100;

/// HSL color as reported by [`rgb_to_hsl`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsl {
    /// Hue in degrees (0-360)
    pub hue: u16,
    /// Saturation in percent (0-100)
    pub sat: u8,
    /// Lightness in percent (0-100)
    pub light: u8,
}

/// Convert an HSV color to RGB.
///
/// Expects `hue` in 0..=360 and `sat`/`val` in 0..=100. A hue of 360 wraps
/// back to red. Channels are rounded to the nearest integer.
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> Rgb {
    let h = f64::from(hue) / 360.0;
    let s = f64::from(sat) / 100.0;
    let v = f64::from(val) / 100.0;

    let whole = libm::floor(h * 6.0);
    let f = h * 6.0 - whole;
    let p = v * (1.0 - s);
    let q = v * (1.0 - f * s);
    let t = v * (1.0 - (1.0 - f) * s);

    let (r, g, b) = match sector(whole) {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Rgb {
        r: to_channel(r),
        g: to_channel(g),
        b: to_channel(b),
    }
}

/// Convert an RGB color to HSL.
///
/// Components are truncated toward zero. Hue is in degrees, saturation
/// and lightness in percent.
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let light = (max + min) / 2.0;

    if max == min {
        // achromatic
        return Hsl {
            hue: 0,
            sat: 0,
            light: percent(light),
        };
    }

    let delta = max - min;
    let sat = if light > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };

    let sector = if max == r {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if max == g {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };

    Hsl {
        hue: degrees(sector / 6.0),
        sat: percent(sat),
        light: percent(light),
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn sector(whole: f64) -> u8 {
    (whole as u32 % 6) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_channel(component: f64) -> u8 {
    libm::round(component * 255.0).clamp(0.0, 255.0) as u8
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn degrees(turns: f64) -> u16 {
    libm::trunc(turns * 360.0).clamp(0.0, 360.0) as u16
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn percent(fraction: f64) -> u8 {
    libm::trunc(fraction * 100.0).clamp(0.0, 100.0) as u8
}
