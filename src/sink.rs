//! Strip sink adapter for `smart-leds` drivers
//!
//! Keeps the last rendered frame so that brightness changes can be shown
//! without rebuilding the frame.

use core::fmt::Debug;

use heapless::Vec;
use smart_leds::SmartLedsWrite;

use crate::StripSink;
use crate::color::{Rgb, rgb_from_u32};
use crate::math8::scale8;

/// Brightness of a freshly created sink
pub const DEFAULT_SINK_BRIGHTNESS: u8 = 255;

/// Errors reported by [`SmartLedsSink`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmartLedsSinkError<E> {
    /// The underlying driver failed to write
    Driver(E),
    /// Frame does not fit into the sink buffer
    FrameTooLong(usize),
}

/// [`StripSink`] over any `smart-leds` driver
///
/// N is the maximum number of LEDs in the strip
pub struct SmartLedsSink<W, const N: usize> {
    writer: W,
    brightness: u8,
    frame: Vec<u32, N>,
}

impl<W, const N: usize> SmartLedsSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
{
    pub const fn new(writer: W) -> Self {
        Self {
            writer,
            brightness: DEFAULT_SINK_BRIGHTNESS,
            frame: Vec::new(),
        }
    }

    /// Brightness applied to the frame (0-255)
    pub const fn brightness(&self) -> u8 {
        self.brightness
    }

    pub const fn writer(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Write the stored frame with brightness applied
    fn flush(&mut self) -> Result<(), SmartLedsSinkError<W::Error>> {
        let brightness = self.brightness;
        let pixels = self.frame.iter().map(|&word| {
            let color = rgb_from_u32(word);
            Rgb {
                r: scale8(color.r, brightness),
                g: scale8(color.g, brightness),
                b: scale8(color.b, brightness),
            }
        });
        self.writer.write(pixels).map_err(SmartLedsSinkError::Driver)
    }
}

impl<W, const N: usize> StripSink for SmartLedsSink<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: Debug,
{
    type Error = SmartLedsSinkError<W::Error>;

    fn set_brightness(&mut self, brightness: u8) -> Result<(), Self::Error> {
        self.brightness = brightness;
        if self.frame.is_empty() {
            return Ok(());
        }
        self.flush()
    }

    fn render(&mut self, frame: &[u32]) -> Result<(), Self::Error> {
        self.frame.clear();
        self.frame
            .extend_from_slice(frame)
            .map_err(|()| SmartLedsSinkError::FrameTooLong(frame.len()))?;
        self.flush()
    }
}
