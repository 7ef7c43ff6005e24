//! Contrast adjustment.
//!
//! Scales every channel away from (factor > 1) or toward (factor < 1)
//! mid-gray. The intended factor range is 0.0 to 4.0; 1.0 leaves the image
//! unchanged up to integer truncation.

use crate::grid::{Pixel, PixelGrid, PixelSource};
use crate::transforms::core::{clamp_f32, map_pixels};

/// Scale one channel around mid-gray by `factor`, clamped to `[0, 255]`.
#[inline]
pub fn scale_channel(value: u8, factor: f32) -> u8 {
    let scaled = ((value as f32 / 255.0 - 0.5) * factor + 0.5) * 255.0;
    clamp_f32(scaled.clamp(0.0, 255.0))
}

/// Adjust the contrast of every pixel of `source` by `factor`.
pub fn set_contrast<S: PixelSource + Sync>(source: &S, factor: f32) -> PixelGrid {
    map_pixels(source, |pixel| {
        Pixel::new(
            scale_channel(pixel.r, factor),
            scale_channel(pixel.g, factor),
            scale_channel(pixel.b, factor),
        )
    })
}
