//! The five whole-image transforms and their shared traversal engine.
//!
//! Every transform follows the same shape: allocate an output grid sized
//! to the source, visit each coordinate once, derive the output pixel from
//! the input pixel alone, and store it at the same coordinate. The shared
//! loop lives in [`core::map_pixels`]; each submodule contributes one
//! per-pixel formula:
//!
//! - [`grayscale`] - legacy weighted gray conversion
//! - [`invert`] - channel complement against 255
//! - [`brightness`] - signed delta with an asymmetric clamp
//! - [`color_filter`] - keep one channel, suppress the other two
//! - [`contrast`] - scale around mid-gray, factor 0 to 4

pub mod brightness;
pub mod color_filter;
pub mod contrast;
pub mod core;
pub mod grayscale;
pub mod invert;

use crate::grid::{PixelGrid, PixelSource};
use crate::{Error, Result};
pub use color_filter::Channel;
use std::fmt;

/// One transform kind together with its parameter, if any.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Transform {
    Grayscale,
    Invert,
    /// Signed per-channel delta.
    Brightness(i32),
    /// Channel to keep.
    ColorFilter(Channel),
    /// Scale factor, intended range 0.0 to 4.0.
    Contrast(f32),
}

/// Numeric operation selectors accepted by the command surface.
const SELECTOR_CONTRAST: u8 = 0;
const SELECTOR_BRIGHTNESS: u8 = 1;
const SELECTOR_COLOR_FILTER: u8 = 2;
const SELECTOR_INVERT: u8 = 3;
const SELECTOR_GRAYSCALE: u8 = 4;

impl Transform {
    /// Resolve a numeric operation selector and optional intensity argument.
    ///
    /// Selectors 0 (contrast), 1 (brightness) and 2 (color filter) require
    /// an intensity; 3 (invert) and 4 (grayscale) take none and ignore any
    /// that is supplied.
    pub fn from_selector(selector: u8, intensity: Option<&str>) -> Result<Self> {
        match selector {
            SELECTOR_CONTRAST => {
                let raw = intensity.ok_or(Error::MissingIntensity {
                    operation: "contrast",
                    expected: "a factor between 0 and 4",
                })?;
                let factor: f32 = raw.parse().map_err(|_| {
                    Error::InvalidParameter(format!("contrast factor `{raw}` is not a number"))
                })?;
                Ok(Transform::Contrast(factor))
            }
            SELECTOR_BRIGHTNESS => {
                let raw = intensity.ok_or(Error::MissingIntensity {
                    operation: "brightness",
                    expected: "a signed integer delta",
                })?;
                let delta: i32 = raw.parse().map_err(|_| {
                    Error::InvalidParameter(format!("brightness delta `{raw}` is not an integer"))
                })?;
                Ok(Transform::Brightness(delta))
            }
            SELECTOR_COLOR_FILTER => {
                let raw = intensity.ok_or(Error::MissingIntensity {
                    operation: "color filter",
                    expected: "a channel name: red, green or blue",
                })?;
                Ok(Transform::ColorFilter(raw.parse()?))
            }
            SELECTOR_INVERT => Ok(Transform::Invert),
            SELECTOR_GRAYSCALE => Ok(Transform::Grayscale),
            other => Err(Error::InvalidParameter(format!(
                "unknown operation selector `{other}`, expected 0-4"
            ))),
        }
    }

    /// Run this transform over `source`, producing a fully populated output
    /// grid of the same dimensions.
    pub fn apply<S: PixelSource + Sync>(&self, source: &S) -> PixelGrid {
        match *self {
            Transform::Grayscale => grayscale::grayscale(source),
            Transform::Invert => invert::invert(source),
            Transform::Brightness(delta) => brightness::set_brightness(source, delta),
            Transform::ColorFilter(channel) => color_filter::color_filter(source, channel),
            Transform::Contrast(factor) => contrast::set_contrast(source, factor),
        }
    }

    /// File-name suffix identifying this transform and its parameter.
    pub fn suffix(&self) -> String {
        match *self {
            Transform::Grayscale => "gray".to_string(),
            Transform::Invert => "invert".to_string(),
            Transform::Brightness(delta) => format!("brightness_{delta}"),
            Transform::ColorFilter(channel) => {
                format!("color_filter_{}", channel.upper_name())
            }
            Transform::Contrast(factor) => format!("contrast_{factor}"),
        }
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Transform::Grayscale => write!(f, "grayscale"),
            Transform::Invert => write!(f, "invert"),
            Transform::Brightness(delta) => write!(f, "brightness {delta:+}"),
            Transform::ColorFilter(channel) => write!(f, "color filter {channel}"),
            Transform::Contrast(factor) => write!(f, "contrast {factor}"),
        }
    }
}
