//! Color inversion.

use crate::grid::{Pixel, PixelGrid, PixelSource};
use crate::transforms::core::map_pixels;

/// Complement of one pixel: each channel becomes `255 - channel`.
///
/// Needs no clamping; inputs are already bounded to `[0, 255]`.
#[inline]
pub fn invert_pixel(pixel: Pixel) -> Pixel {
    Pixel::new(255 - pixel.r, 255 - pixel.g, 255 - pixel.b)
}

/// Invert the colors of every pixel of `source`.
pub fn invert<S: PixelSource + Sync>(source: &S) -> PixelGrid {
    map_pixels(source, invert_pixel)
}
