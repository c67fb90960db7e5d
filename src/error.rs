use core::fmt;

use crate::request::Characteristic;

/// Errors reported by the light controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightError {
    /// Attribute value is outside of its domain. The state is left untouched.
    InvalidAttributeRange {
        attribute: Characteristic,
        value: i32,
    },
    /// The strip sink rejected the last call. Cached state stays valid and
    /// will be shown by the next successful render.
    SinkUnavailable,
    /// Strip length is zero or exceeds the frame capacity
    InvalidLedCount(usize),
    /// Accessory name does not fit into the name buffer
    NameTooLong,
}

impl fmt::Display for LightError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidAttributeRange { attribute, value } => write!(
                f,
                "{} value {} is out of range (0-{})",
                attribute.as_str(),
                value,
                attribute.max_value()
            ),
            Self::SinkUnavailable => f.write_str("strip sink is unavailable"),
            Self::InvalidLedCount(count) => write!(f, "invalid LED count: {}", count),
            Self::NameTooLong => f.write_str("accessory name is too long"),
        }
    }
}
