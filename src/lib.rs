//! Whole-image pixel transforms over RGB rasters.
//!
//! The crate applies one of five transforms to every pixel of a decoded
//! image and produces a freshly allocated output grid of the same size:
//!
//! - **Grayscale** - collapse each pixel to a single luminance-style value
//! - **Invert** - complement every channel against 255
//! - **Brightness** - add a signed delta to every channel
//! - **Color filter** - keep one channel, suppress the other two
//! - **Contrast** - scale every channel away from (or toward) mid-gray
//!
//! ## Image Format
//!
//! Images are stored as `(height, width, 3)` arrays of `u8` RGB samples.
//! Every transform is a pure function of a single input pixel, so the grid
//! traversal is parallelized across rows with rayon; no state is carried
//! between coordinates.
//!
//! ## Architecture
//!
//! - [`grid`] - the owned pixel buffer and the read-only [`grid::PixelSource`]
//!   access contract
//! - [`transforms`] - the per-pixel formulas and the shared traversal engine
//! - [`io`] - decode/encode collaborators and output-path derivation

pub mod grid;
pub mod io;
pub mod transforms;

/// Convenience result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures surfaced by the I/O boundaries and the command surface.
///
/// Per-pixel computation never fails; only decoding, encoding, and
/// parameter validation can.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The selected operation needs an intensity argument that was not given.
    #[error("operation `{operation}` requires an intensity argument ({expected})")]
    MissingIntensity {
        operation: &'static str,
        expected: &'static str,
    },
    /// An argument was present but could not be interpreted.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
    /// Decode or encode failure from the image codec.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    /// Filesystem-level failure.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
