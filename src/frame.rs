//! Uniform color frames
//!
//! A frame holds one packed 0xRRGGBB word per LED. Frames are built fresh
//! for every render and never partially filled.

use heapless::Vec;

use crate::color::{Rgb, rgb_from_u32, rgb_to_u32};
use crate::error::LightError;

/// One complete set of pixel values for the strip
///
/// N is the maximum number of LEDs the frame can hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    words: Vec<u32, N>,
}

impl<const N: usize> Frame<N> {
    /// Create an all-black frame of `led_count` pixels
    pub fn blank(led_count: usize) -> Result<Self, LightError> {
        check_led_count::<N>(led_count)?;
        let mut words = Vec::new();
        words
            .resize(led_count, 0)
            .map_err(|()| LightError::InvalidLedCount(led_count))?;
        Ok(Self { words })
    }

    /// Create a frame with every pixel set to `color`
    pub fn filled(color: Rgb, led_count: usize) -> Result<Self, LightError> {
        let mut frame = Self::blank(led_count)?;
        frame.words.fill(rgb_to_u32(color));
        Ok(frame)
    }

    /// Number of pixels in the frame
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Packed pixel words
    pub fn words(&self) -> &[u32] {
        &self.words
    }

    /// Pixels as RGB colors
    pub fn pixels(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.words.iter().map(|&word| rgb_from_u32(word))
    }
}

/// Expand a single color into a frame of `led_count` pixels
pub fn build_frame<const N: usize>(color: Rgb, led_count: usize) -> Result<Frame<N>, LightError> {
    Frame::filled(color, led_count)
}

/// Check that a strip of `led_count` LEDs fits a frame of capacity N
pub(crate) const fn check_led_count<const N: usize>(led_count: usize) -> Result<(), LightError> {
    if led_count == 0 || led_count > N {
        return Err(LightError::InvalidLedCount(led_count));
    }
    Ok(())
}
