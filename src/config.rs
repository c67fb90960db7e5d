//! Startup configuration of the strip light
//!
//! Missing values fall back to the defaults. Zero is treated as missing,
//! as a zero pin or an empty strip is never a meaningful setting.

use heapless::String;

use crate::error::LightError;

/// GPIO pin driving the strip data line
pub const DEFAULT_PIN: u8 = 18;

/// Number of LEDs on the strip
pub const DEFAULT_LED_COUNT: usize = 96;

/// Capacity of the accessory name buffer
pub const NAME_CAPACITY: usize = 32;

pub type AccessoryName = String<NAME_CAPACITY>;

/// Configuration for the strip light
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightConfig {
    /// Accessory name shown by the host
    pub name: AccessoryName,
    /// GPIO pin the strip is attached to
    pub pin: u8,
    /// Number of LEDs on the strip
    pub leds: usize,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            name: AccessoryName::new(),
            pin: DEFAULT_PIN,
            leds: DEFAULT_LED_COUNT,
        }
    }
}

impl LightConfig {
    /// Create a configuration with default pin and strip length
    pub fn new(name: &str) -> Result<Self, LightError> {
        let mut config = Self::default();
        config
            .name
            .push_str(name)
            .map_err(|()| LightError::NameTooLong)?;
        Ok(config)
    }

    /// Create a configuration from optional host-supplied values
    pub fn from_options(
        name: &str,
        pin: Option<u8>,
        leds: Option<usize>,
    ) -> Result<Self, LightError> {
        let config = Self::new(name)?;
        Ok(config
            .with_pin(pin.unwrap_or(DEFAULT_PIN))
            .with_leds(leds.unwrap_or(DEFAULT_LED_COUNT)))
    }

    #[must_use]
    pub fn with_pin(mut self, pin: u8) -> Self {
        self.pin = if pin == 0 { DEFAULT_PIN } else { pin };
        self
    }

    #[must_use]
    pub fn with_leds(mut self, leds: usize) -> Self {
        self.leds = if leds == 0 { DEFAULT_LED_COUNT } else { leds };
        self
    }
}
