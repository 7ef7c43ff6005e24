//! Single-channel color filtering.
//!
//! The selected channel passes through unchanged; the two non-selected
//! channels compute `channel - 255`, which is zero or negative for any
//! valid 8-bit input. [`filter_values`] exposes those raw signed values;
//! the whole-image transform clamps them to 0 when storing into the 8-bit
//! output grid.

use crate::grid::{Pixel, PixelGrid, PixelSource};
use crate::transforms::core::{clamp_i32, map_pixels};
use crate::Error;
use std::fmt;
use std::str::FromStr;

/// One of the three RGB channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    /// Upper-case name, as used in output file suffixes.
    pub fn upper_name(self) -> &'static str {
        match self {
            Channel::Red => "RED",
            Channel::Green => "GREEN",
            Channel::Blue => "BLUE",
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Channel::Red => "red",
            Channel::Green => "green",
            Channel::Blue => "blue",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Channel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "red" => Ok(Channel::Red),
            "green" => Ok(Channel::Green),
            "blue" => Ok(Channel::Blue),
            other => Err(Error::InvalidParameter(format!(
                "unknown channel `{other}`, expected red, green or blue"
            ))),
        }
    }
}

/// Raw filtered values `(r, g, b)` for one pixel, before any clamping.
///
/// The selected channel keeps its input value; the other two are
/// `value - 255` and therefore `<= 0`.
#[inline]
pub fn filter_values(pixel: Pixel, channel: Channel) -> (i32, i32, i32) {
    let (r, g, b) = (pixel.r as i32, pixel.g as i32, pixel.b as i32);
    match channel {
        Channel::Red => (r, g - 255, b - 255),
        Channel::Green => (r - 255, g, b - 255),
        Channel::Blue => (r - 255, g - 255, b),
    }
}

/// Keep one channel of every pixel of `source`, suppressing the other two.
///
/// Negative intermediate values clamp to 0 at the 8-bit storage boundary.
pub fn color_filter<S: PixelSource + Sync>(source: &S, channel: Channel) -> PixelGrid {
    map_pixels(source, |pixel| {
        let (r, g, b) = filter_values(pixel, channel);
        Pixel::new(clamp_i32(r), clamp_i32(g), clamp_i32(b))
    })
}
