//! Decode/encode collaborators and output-path derivation.
//!
//! - [`load_rgb`]: read a JPEG/PNG/etc. into an owned RGB [`PixelGrid`].
//! - [`save_rgb`]: write a grid to disk; output is always JPEG.
//! - [`output_path`]: `<stem>_<suffix>.jpg` next to the input file.

use crate::grid::PixelGrid;
use crate::transforms::Transform;
use crate::{Error, Result};
use image::RgbImage;
use log::info;
use ndarray::Array3;
use std::path::{Path, PathBuf};

/// Extension used for every output file, regardless of input format.
pub const OUTPUT_EXTENSION: &str = "jpg";

/// Load an image from disk and convert it to an RGB pixel grid.
pub fn load_rgb(path: &Path) -> Result<PixelGrid> {
    let img = image::open(path)?.into_rgb8();
    let (width, height) = (img.width() as usize, img.height() as usize);
    info!("decoded {} ({width}x{height})", path.display());

    let data = Array3::from_shape_vec((height, width, 3), img.into_raw())
        .map_err(|e| Error::InvalidParameter(format!("decoded buffer has bad shape: {e}")))?;
    Ok(PixelGrid::from_array(data))
}

/// Encode a pixel grid as JPEG at `path`.
pub fn save_rgb(grid: &PixelGrid, path: &Path) -> Result<()> {
    let (width, height) = (grid.width() as u32, grid.height() as u32);
    let img = RgbImage::from_raw(width, height, grid.as_raw().to_vec()).ok_or_else(|| {
        Error::InvalidParameter("pixel grid does not match its declared dimensions".to_string())
    })?;
    img.save(path)?;
    info!("encoded {} ({width}x{height})", path.display());
    Ok(())
}

/// Derive the output path for `transform` applied to `input`.
///
/// The file lands next to the input, named `<stem>_<suffix>.jpg`.
pub fn output_path(input: &Path, transform: &Transform) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("output");
    input.with_file_name(format!("{stem}_{}.{OUTPUT_EXTENSION}", transform.suffix()))
}
