//! Core utilities shared by all transforms.
//!
//! This module provides:
//! - the grid traversal that drives every transform
//! - channel clamping helpers used by the individual formulas
//!
//! Each transform is a pure function of a single input pixel, so the
//! traversal hands disjoint output rows to rayon workers and shares the
//! source immutably between them.

use crate::grid::{Pixel, PixelGrid, PixelSource};
use rayon::prelude::*;

/// Apply a per-pixel function to every coordinate of `source`.
///
/// Allocates an output grid of the source's dimensions, visits every
/// `(x, y)` with `x in 0..width`, `y in 0..height`, and stores
/// `f(source_pixel)` at the same coordinate. The output is fully populated
/// before it is returned.
///
/// # Panics
/// Panics if the source reports `None` for a coordinate inside its own
/// declared dimensions. Loop bounds are derived from `dimensions()`, so
/// this is an invariant violation in the source, not a recoverable state.
pub fn map_pixels<S, F>(source: &S, f: F) -> PixelGrid
where
    S: PixelSource + Sync,
    F: Fn(Pixel) -> Pixel + Sync,
{
    let (width, height) = source.dimensions();
    let mut output = PixelGrid::new(width, height);

    if width == 0 || height == 0 {
        return output;
    }

    let row_len = width * 3;
    output
        .as_raw_mut()
        .par_chunks_mut(row_len)
        .enumerate()
        .for_each(|(y, row)| {
            for x in 0..width {
                let pixel = match source.pixel_at(x, y) {
                    Some(pixel) => pixel,
                    None => panic!(
                        "pixel source reported no pixel at ({x}, {y}) inside \
                         declared dimensions {width}x{height}"
                    ),
                };
                let out = f(pixel);
                row[x * 3] = out.r;
                row[x * 3 + 1] = out.g;
                row[x * 3 + 2] = out.b;
            }
        });

    output
}

/// Truncate a float channel toward zero and clamp the result to `[0, 255]`.
#[inline]
pub fn clamp_f32(value: f32) -> u8 {
    // `as` saturates at both ends for float-to-int casts.
    value as u8
}

/// Clamp a signed channel value to `[0, 255]`.
#[inline]
pub fn clamp_i32(value: i32) -> u8 {
    value.clamp(0, 255) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Source whose declared dimensions exceed its real backing data.
    struct LyingSource {
        inner: PixelGrid,
    }

    impl PixelSource for LyingSource {
        fn dimensions(&self) -> (usize, usize) {
            let (w, h) = self.inner.dimensions();
            (w + 1, h)
        }

        fn pixel_at(&self, x: usize, y: usize) -> Option<Pixel> {
            self.inner.pixel_at(x, y)
        }
    }

    #[test]
    fn test_map_pixels_identity_preserves_grid() {
        let mut grid = PixelGrid::new(3, 2);
        grid.as_raw_mut().copy_from_slice(&[
            1, 2, 3, 4, 5, 6, 7, 8, 9, //
            10, 11, 12, 13, 14, 15, 16, 17, 18,
        ]);

        let result = map_pixels(&grid, |p| p);

        assert_eq!(result, grid);
    }

    #[test]
    fn test_map_pixels_dimension_preservation() {
        let grid = PixelGrid::new(7, 5);
        let result = map_pixels(&grid, |p| Pixel::new(p.b, p.g, p.r));
        assert_eq!(result.dimensions(), (7, 5));
    }

    #[test]
    fn test_map_pixels_empty_grid() {
        let grid = PixelGrid::new(0, 0);
        let result = map_pixels(&grid, |p| p);
        assert_eq!(result.dimensions(), (0, 0));
    }

    #[test]
    #[should_panic(expected = "no pixel at")]
    fn test_map_pixels_panics_on_source_invariant_violation() {
        let source = LyingSource {
            inner: PixelGrid::new(2, 2),
        };
        let _ = map_pixels(&source, |p| p);
    }

    #[test]
    fn test_clamp_f32_truncates_toward_zero() {
        assert_eq!(clamp_f32(26.997), 26);
        assert_eq!(clamp_f32(0.9), 0);
        assert_eq!(clamp_f32(255.0), 255);
    }

    #[test]
    fn test_clamp_f32_saturates() {
        assert_eq!(clamp_f32(360.9), 255);
        assert_eq!(clamp_f32(-12.0), 0);
    }

    #[test]
    fn test_clamp_i32() {
        assert_eq!(clamp_i32(-205), 0);
        assert_eq!(clamp_i32(0), 0);
        assert_eq!(clamp_i32(200), 200);
        assert_eq!(clamp_i32(300), 255);
    }
}
