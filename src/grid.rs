//! Pixel grid storage and read-only pixel access.
//!
//! A [`PixelGrid`] owns a `(height, width, 3)` array of 8-bit RGB samples.
//! Transforms read their input through the [`PixelSource`] trait, which
//! exposes only dimensions and per-coordinate pixel lookup, and write into a
//! freshly allocated grid. A grid is never mutated once it has been handed
//! to a transform.

use ndarray::{Array3, ArrayView3};

/// One RGB sample. Channels are conceptually in `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Read-only provider of image dimensions and pixel values.
///
/// `pixel_at` returns `None` for any coordinate outside the half-open
/// ranges `0..width` and `0..height`; it never panics and has no side
/// effects.
pub trait PixelSource {
    /// `(width, height)` of the underlying grid.
    fn dimensions(&self) -> (usize, usize);

    /// The pixel at `(x, y)`, or `None` when the coordinate is out of range.
    fn pixel_at(&self, x: usize, y: usize) -> Option<Pixel>;
}

/// Owned `width x height` RGB buffer in `(height, width, 3)` layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelGrid {
    data: Array3<u8>,
}

impl PixelGrid {
    /// Allocate a zeroed (black) grid of the given dimensions.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::<u8>::zeros((height, width, 3)),
        }
    }

    /// Wrap an existing `(height, width, 3)` array.
    ///
    /// # Panics
    /// Panics if the innermost axis is not exactly 3 channels.
    pub fn from_array(data: Array3<u8>) -> Self {
        assert_eq!(
            data.shape()[2],
            3,
            "pixel grid requires 3 channels, got {}",
            data.shape()[2]
        );
        Self { data }
    }

    /// Image width in pixels.
    pub fn width(&self) -> usize {
        self.data.shape()[1]
    }

    /// Image height in pixels.
    pub fn height(&self) -> usize {
        self.data.shape()[0]
    }

    /// Borrow the underlying array.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    /// Borrow the raw samples in row-major RGB order.
    ///
    /// Grids are always constructed in standard layout, so this never fails
    /// in practice.
    pub fn as_raw(&self) -> &[u8] {
        self.data
            .as_slice()
            .expect("pixel grid stored in standard layout")
    }

    /// Mutable access to the raw samples, for the traversal engine.
    pub(crate) fn as_raw_mut(&mut self) -> &mut [u8] {
        self.data
            .as_slice_mut()
            .expect("pixel grid stored in standard layout")
    }
}

impl PixelSource for PixelGrid {
    fn dimensions(&self) -> (usize, usize) {
        (self.width(), self.height())
    }

    fn pixel_at(&self, x: usize, y: usize) -> Option<Pixel> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        Some(Pixel::new(
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
        ))
    }
}
