//! Brightness adjustment.
//!
//! Adds a signed delta to every channel. The clamp is asymmetric: sums
//! above 255 clamp to 255, but sums that go *negative* clamp to 1 rather
//! than 0. A channel that lands exactly on 0 (for example an untouched
//! black pixel with delta 0) keeps its 0. This floor is a long-standing
//! quirk of the tool's output and is preserved literally.

use crate::grid::{Pixel, PixelGrid, PixelSource};
use crate::transforms::core::map_pixels;

/// Shift one channel by `delta`, applying the asymmetric clamp.
#[inline]
pub fn shift_channel(value: u8, delta: i32) -> u8 {
    let shifted = value as i32 + delta;
    if shifted < 0 {
        1
    } else if shifted > 255 {
        255
    } else {
        shifted as u8
    }
}

/// Adjust the brightness of every pixel of `source` by `delta`.
pub fn set_brightness<S: PixelSource + Sync>(source: &S, delta: i32) -> PixelGrid {
    map_pixels(source, |pixel| {
        Pixel::new(
            shift_channel(pixel.r, delta),
            shift_channel(pixel.g, delta),
            shift_channel(pixel.b, delta),
        )
    })
}
