use crate::color::{FULL_VALUE, Rgb, hsv_to_rgb};
use crate::error::LightError;
use crate::request::Characteristic;

pub const MAX_BRIGHTNESS: u8 = 100;
pub const MAX_HUE: u16 = 360;
pub const MAX_SATURATION: u8 = 100;

/// What needs to be pushed to the strip after a state mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateChange {
    Power,
    Brightness,
    Color,
}

/// Cached light attributes
///
/// The strip has no readable state, so getters return the last value set.
/// `rgb` is derived from hue and saturation at full value; brightness is
/// never baked into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightState {
    power: bool,
    brightness: u8,
    hue: u16,
    saturation: u8,
    rgb: Rgb,
}

impl Default for LightState {
    fn default() -> Self {
        Self::new()
    }
}

impl LightState {
    pub fn new() -> Self {
        Self {
            power: true,
            brightness: 0,
            hue: 0,
            saturation: 0,
            rgb: hsv_to_rgb(0, 0, FULL_VALUE),
        }
    }

    pub const fn power(&self) -> bool {
        self.power
    }

    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn hue(&self) -> u16 {
        self.hue
    }

    pub const fn saturation(&self) -> u8 {
        self.saturation
    }

    /// Color derived from the current hue and saturation
    pub const fn rgb(&self) -> Rgb {
        self.rgb
    }

    pub fn set_power(&mut self, power: bool) -> StateChange {
        self.power = power;
        StateChange::Power
    }

    pub fn set_brightness(&mut self, brightness: u8) -> Result<StateChange, LightError> {
        check_range(Characteristic::Brightness, u16::from(brightness))?;
        self.brightness = brightness;
        Ok(StateChange::Brightness)
    }

    pub fn set_hue(&mut self, hue: u16) -> Result<StateChange, LightError> {
        check_range(Characteristic::Hue, hue)?;
        self.hue = hue;
        self.update_rgb();
        Ok(StateChange::Color)
    }

    pub fn set_saturation(&mut self, saturation: u8) -> Result<StateChange, LightError> {
        check_range(Characteristic::Saturation, u16::from(saturation))?;
        self.saturation = saturation;
        self.update_rgb();
        Ok(StateChange::Color)
    }

    fn update_rgb(&mut self) {
        self.rgb = hsv_to_rgb(self.hue, self.saturation, FULL_VALUE);
    }
}

fn check_range(attribute: Characteristic, value: u16) -> Result<(), LightError> {
    if value > attribute.max_value() {
        return Err(LightError::InvalidAttributeRange {
            attribute,
            value: i32::from(value),
        });
    }
    Ok(())
}
