#![no_std]

pub mod color;
pub mod config;
pub mod controller;
pub mod error;
pub mod frame;
pub mod math8;
pub mod request;
pub mod shared;
pub mod sink;
pub mod state;

pub use config::{DEFAULT_LED_COUNT, DEFAULT_PIN, LightConfig};
pub use controller::LightController;
pub use error::LightError;
pub use frame::{Frame, build_frame};
pub use request::{AccessoryRequest, AccessoryResponse, Characteristic, CharacteristicValue};
pub use shared::SharedLightController;
pub use sink::{SmartLedsSink, SmartLedsSinkError};
pub use state::{LightState, StateChange};

pub use color::{Hsl, Rgb, hsv_to_rgb, rgb_to_hsl};

/// Hardware-facing strip sink
///
/// Implement this trait to support different LED drivers.
/// The controller is generic over this trait and is the only caller.
pub trait StripSink {
    type Error: core::fmt::Debug;

    /// Set the global strip brightness (0-255)
    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error>;

    /// Show a frame of packed 0xRRGGBB words, one per LED
    fn render(&mut self, frame: &[u32]) -> Result<(), Self::Error>;
}
