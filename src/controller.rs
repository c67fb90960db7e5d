use core::fmt::Debug;

#[cfg(feature = "esp32-log")]
use esp_println::println;

#[cfg(feature = "esp32-log")]
use crate::color::HexColor;
use crate::StripSink;
use crate::color::{BLACK, Rgb};
use crate::config::LightConfig;
use crate::error::LightError;
use crate::frame::{Frame, build_frame, check_led_count};
use crate::math8::percent8;
use crate::request::{AccessoryRequest, AccessoryResponse, Characteristic, CharacteristicValue};
use crate::state::{LightState, StateChange};

/// Light controller - the main orchestrator
///
/// Owns the light state and the strip sink. Every setter records the new
/// value and pushes whatever it affects to the sink before returning:
/// brightness goes to the sink as a scalar, hue, saturation and power
/// rebuild and render a full frame.
///
/// `MAX_LEDS` is the largest strip the frame buffer can hold.
pub struct LightController<S: StripSink, const MAX_LEDS: usize> {
    // External dependencies and configuration
    sink: S,
    config: LightConfig,

    // Internal state
    state: LightState,
}

impl<S: StripSink, const MAX_LEDS: usize> LightController<S, MAX_LEDS> {
    /// Create a controller for an already initialized sink
    ///
    /// Nothing is sent to the strip until the first setter or [`Self::refresh`].
    pub fn new(sink: S, config: LightConfig) -> Result<Self, LightError> {
        check_led_count::<MAX_LEDS>(config.leds)?;
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController.new] {} on pin {} with {} leds",
            config.name, config.pin, config.leds
        );
        Ok(Self {
            sink,
            config,
            state: LightState::new(),
        })
    }

    pub const fn config(&self) -> &LightConfig {
        &self.config
    }

    pub const fn state(&self) -> &LightState {
        &self.state
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub const fn power(&self) -> bool {
        self.state.power()
    }

    pub const fn brightness(&self) -> u8 {
        self.state.brightness()
    }

    pub const fn hue(&self) -> u16 {
        self.state.hue()
    }

    pub const fn saturation(&self) -> u8 {
        self.state.saturation()
    }

    /// Color currently shown while the light is on
    pub const fn rgb(&self) -> Rgb {
        self.state.rgb()
    }

    /// Turn the light on or off
    ///
    /// Off renders a blank frame, on renders the cached color.
    pub fn set_power(&mut self, power: bool) -> Result<(), LightError> {
        let change = self.state.set_power(power);
        self.apply(change)
    }

    /// Set brightness in percent (0-100)
    pub fn set_brightness(&mut self, brightness: u8) -> Result<(), LightError> {
        let change = self.state.set_brightness(brightness)?;
        self.apply(change)
    }

    /// Set hue in degrees (0-360)
    pub fn set_hue(&mut self, hue: u16) -> Result<(), LightError> {
        let change = self.state.set_hue(hue)?;
        self.apply(change)
    }

    /// Set saturation in percent (0-100)
    pub fn set_saturation(&mut self, saturation: u8) -> Result<(), LightError> {
        let change = self.state.set_saturation(saturation)?;
        self.apply(change)
    }

    /// Push brightness and the current frame to the sink
    pub fn refresh(&mut self) -> Result<(), LightError> {
        self.push_brightness()?;
        self.push_frame()
    }

    /// Identify request from the host. Does not touch the strip.
    pub fn identify(&self) {
        #[cfg(feature = "esp32-log")]
        println!("[LightController.identify] identify requested: {}", self.config.name);
    }

    /// Read the cached value of a characteristic
    pub const fn get(&self, characteristic: Characteristic) -> CharacteristicValue {
        match characteristic {
            Characteristic::On => CharacteristicValue::On(self.power()),
            Characteristic::Brightness => CharacteristicValue::Brightness(self.brightness()),
            Characteristic::Hue => CharacteristicValue::Hue(self.hue()),
            Characteristic::Saturation => CharacteristicValue::Saturation(self.saturation()),
        }
    }

    /// Write a characteristic
    pub fn set(&mut self, value: CharacteristicValue) -> Result<(), LightError> {
        match value {
            CharacteristicValue::On(power) => self.set_power(power),
            CharacteristicValue::Brightness(brightness) => self.set_brightness(brightness),
            CharacteristicValue::Hue(hue) => self.set_hue(hue),
            CharacteristicValue::Saturation(saturation) => self.set_saturation(saturation),
        }
    }

    /// Handle a request from the host accessory layer
    pub fn handle(&mut self, request: AccessoryRequest) -> Result<AccessoryResponse, LightError> {
        match request {
            AccessoryRequest::Get(characteristic) => {
                Ok(AccessoryResponse::Value(self.get(characteristic)))
            }
            AccessoryRequest::Set(value) => {
                self.set(value)?;
                Ok(AccessoryResponse::Done)
            }
            AccessoryRequest::Identify => {
                self.identify();
                Ok(AccessoryResponse::Done)
            }
        }
    }

    /// Push the part of the state affected by a change
    fn apply(&mut self, change: StateChange) -> Result<(), LightError> {
        match change {
            StateChange::Brightness => self.push_brightness(),
            StateChange::Power => self.push_frame(),
            StateChange::Color => {
                if !self.state.power() {
                    // Shown on the next power on
                    return Ok(());
                }
                self.push_frame()
            }
        }
    }

    fn push_brightness(&mut self) -> Result<(), LightError> {
        let level = percent8(self.state.brightness());
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController.set_brightness] brightness {}% -> {}",
            self.state.brightness(),
            level
        );
        self.sink.set_brightness(level).map_err(sink_unavailable)
    }

    fn push_frame(&mut self) -> Result<(), LightError> {
        let frame = self.current_frame()?;
        self.sink.render(frame.words()).map_err(sink_unavailable)
    }

    fn current_frame(&self) -> Result<Frame<MAX_LEDS>, LightError> {
        if !self.state.power() {
            #[cfg(feature = "esp32-log")]
            println!("[LightController.render] power off, blanking strip");
            return build_frame(BLACK, self.config.leds);
        }

        let rgb = self.state.rgb();
        #[cfg(feature = "esp32-log")]
        println!(
            "[LightController.render] H:{} S:{} B:{} -> RGB:{} ({}, {}, {})",
            self.state.hue(),
            self.state.saturation(),
            self.state.brightness(),
            HexColor(rgb),
            rgb.r,
            rgb.g,
            rgb.b
        );
        build_frame(rgb, self.config.leds)
    }
}

#[cfg_attr(not(feature = "esp32-log"), allow(unused_variables))]
fn sink_unavailable<E: Debug>(error: E) -> LightError {
    #[cfg(feature = "esp32-log")]
    println!("[LightController] sink unavailable: {:?}", error);
    LightError::SinkUnavailable
}
