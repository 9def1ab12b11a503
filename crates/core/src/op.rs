//! Serializable operation lists applied to an [`Image`] in order.
//!
//! Operations are written as JSON objects tagged by `"op"`:
//!
//! ```json
//! [
//!   {"op": "rgb_to_hsv"},
//!   {"op": "scale", "channel": 1, "factor": 1.5},
//!   {"op": "clamp"},
//!   {"op": "hsv_to_rgb"}
//! ]
//! ```
//!
//! Unlike the raw transforms, [`Op::apply`] checks channel preconditions first
//! and reports them as [`ImageError`] instead of panicking.

use serde::{Deserialize, Serialize};

use crate::error::ImageError;
use crate::hsv::{hsv_to_rgb, rgb_to_hsv};
use crate::image::Image;
use crate::transform::{clamp_image, rgb_to_grayscale, scale_image, shift_image};

/// All operation names, as they appear in the `"op"` tag.
const OP_NAMES: &[&str] = &[
    "grayscale",
    "shift",
    "scale",
    "clamp",
    "rgb_to_hsv",
    "hsv_to_rgb",
];

/// A single step of an image pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Op {
    /// RGB to single-channel luma.
    Grayscale,
    /// Add `delta` to one channel.
    Shift { channel: usize, delta: f32 },
    /// Multiply one channel by `factor`.
    Scale { channel: usize, factor: f32 },
    /// Clamp channels 0..=2 into [0, 1].
    Clamp,
    RgbToHsv,
    HsvToRgb,
}

impl Op {
    /// The `"op"` tag of this operation.
    pub fn name(&self) -> &'static str {
        match self {
            Op::Grayscale => "grayscale",
            Op::Shift { .. } => "shift",
            Op::Scale { .. } => "scale",
            Op::Clamp => "clamp",
            Op::RgbToHsv => "rgb_to_hsv",
            Op::HsvToRgb => "hsv_to_rgb",
        }
    }

    /// Returns a slice of all recognized operation names.
    pub fn list_names() -> &'static [&'static str] {
        OP_NAMES
    }

    /// Parses a JSON array of operations.
    pub fn parse_list(json: &str) -> Result<Vec<Op>, ImageError> {
        serde_json::from_str(json).map_err(|e| ImageError::InvalidOps(e.to_string()))
    }

    /// Checks that `im` satisfies this operation's channel requirements.
    pub fn check(&self, im: &Image) -> Result<(), ImageError> {
        match *self {
            Op::Grayscale | Op::RgbToHsv | Op::HsvToRgb if im.channels() != 3 => {
                Err(ImageError::ChannelCount {
                    op: self.name(),
                    expected: 3,
                    got: im.channels(),
                })
            }
            Op::Shift { channel, .. } | Op::Scale { channel, .. }
                if channel >= im.channels() =>
            {
                Err(ImageError::ChannelOutOfRange {
                    channel,
                    channels: im.channels(),
                })
            }
            _ => Ok(()),
        }
    }

    /// Applies this operation, consuming and returning the image.
    ///
    /// Most operations work in place; `Grayscale` returns a new 1-channel image.
    pub fn apply(&self, mut im: Image) -> Result<Image, ImageError> {
        self.check(&im)?;
        match *self {
            Op::Grayscale => return Ok(rgb_to_grayscale(&im)),
            Op::Shift { channel, delta } => shift_image(&mut im, channel, delta),
            Op::Scale { channel, factor } => scale_image(&mut im, channel, factor),
            Op::Clamp => clamp_image(&mut im),
            Op::RgbToHsv => rgb_to_hsv(&mut im),
            Op::HsvToRgb => hsv_to_rgb(&mut im),
        }
        Ok(im)
    }
}

/// Applies `ops` in order, stopping at the first failing precondition.
pub fn apply_all(ops: &[Op], im: Image) -> Result<Image, ImageError> {
    ops.iter().try_fold(im, |im, op| op.apply(im))
}
