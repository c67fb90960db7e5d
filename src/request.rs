//! Accessory requests
//!
//! The host reads and writes the light through four characteristics.
//! Every request is answered synchronously: a get with the cached value,
//! a set or identify with a bare acknowledgement.

use crate::error::LightError;
use crate::state::{MAX_BRIGHTNESS, MAX_HUE, MAX_SATURATION};

const CHARACTERISTIC_NAME_ON: &str = "On";
const CHARACTERISTIC_NAME_BRIGHTNESS: &str = "Brightness";
const CHARACTERISTIC_NAME_HUE: &str = "Hue";
const CHARACTERISTIC_NAME_SATURATION: &str = "Saturation";

/// Light attributes exposed to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Characteristic {
    On,
    Brightness,
    Hue,
    Saturation,
}

impl Characteristic {
    pub const ALL: [Self; 4] = [Self::On, Self::Brightness, Self::Hue, Self::Saturation];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => CHARACTERISTIC_NAME_ON,
            Self::Brightness => CHARACTERISTIC_NAME_BRIGHTNESS,
            Self::Hue => CHARACTERISTIC_NAME_HUE,
            Self::Saturation => CHARACTERISTIC_NAME_SATURATION,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            CHARACTERISTIC_NAME_ON => Some(Self::On),
            CHARACTERISTIC_NAME_BRIGHTNESS => Some(Self::Brightness),
            CHARACTERISTIC_NAME_HUE => Some(Self::Hue),
            CHARACTERISTIC_NAME_SATURATION => Some(Self::Saturation),
            _ => None,
        }
    }

    /// Largest accepted value (`On` accepts 0 and 1)
    #[allow(clippy::cast_lossless)]
    pub const fn max_value(self) -> u16 {
        match self {
            Self::On => 1,
            Self::Brightness => MAX_BRIGHTNESS as u16,
            Self::Hue => MAX_HUE,
            Self::Saturation => MAX_SATURATION as u16,
        }
    }
}

/// Typed value of a characteristic
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharacteristicValue {
    On(bool),
    Brightness(u8),
    Hue(u16),
    Saturation(u8),
}

impl CharacteristicValue {
    pub const fn characteristic(self) -> Characteristic {
        match self {
            Self::On(_) => Characteristic::On,
            Self::Brightness(_) => Characteristic::Brightness,
            Self::Hue(_) => Characteristic::Hue,
            Self::Saturation(_) => Characteristic::Saturation,
        }
    }

    /// Build a value from a raw number sent by the host
    ///
    /// Numbers outside the characteristic's domain are rejected.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_number(characteristic: Characteristic, value: i32) -> Result<Self, LightError> {
        if value < 0 || value > i32::from(characteristic.max_value()) {
            return Err(LightError::InvalidAttributeRange {
                attribute: characteristic,
                value,
            });
        }
        Ok(match characteristic {
            Characteristic::On => Self::On(value != 0),
            Characteristic::Brightness => Self::Brightness(value as u8),
            Characteristic::Hue => Self::Hue(value as u16),
            Characteristic::Saturation => Self::Saturation(value as u8),
        })
    }

    /// Numeric representation, as reported back to the host
    pub fn as_number(self) -> i32 {
        match self {
            Self::On(power) => i32::from(power),
            Self::Brightness(value) | Self::Saturation(value) => i32::from(value),
            Self::Hue(value) => i32::from(value),
        }
    }
}

/// Request issued by the host accessory layer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessoryRequest {
    Get(Characteristic),
    Set(CharacteristicValue),
    /// Ask the device to identify itself
    Identify,
}

/// Completion of an [`AccessoryRequest`]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessoryResponse {
    /// Current cached value, answering a get
    Value(CharacteristicValue),
    /// Set or identify completed
    Done,
}
