mod hsv;
mod utils;

use smart_leds::RGB8;

pub use hsv::{FULL_VALUE, Hsl, hsv_to_rgb, rgb_to_hsl};
pub use utils::{BLACK, HexColor, rgb_from_u32, rgb_to_u32};

pub type Rgb = RGB8;
