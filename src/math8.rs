/// Scale an 8-bit value by a factor (0-255 = 0.0-1.0)
///
/// Uses integer math for efficiency on embedded systems.
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn scale8(value: u8, scale: u8) -> u8 {
    ((value as u16 * (1 + scale as u16)) >> 8) as u8
}

/// Convert a percentage (0-100) to the 0-255 range, rounding half up.
///
/// Values above 100 saturate.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn percent8(percent: u8) -> u8 {
    let percent = if percent > 100 { 100 } else { percent };
    ((percent as u16 * 255 + 50) / 100) as u8
}
