//! Multi-channel floating-point image in channel-major (CHW) layout.
//!
//! An [`Image`] stores `channels * height * width` `f32` samples. All samples of
//! channel 0 come first, then channel 1, and so on; within a channel the plane is
//! row-major. Sample `(c, h, w)` lives at `c * H * W + h * W + w`.
//!
//! Pixel access follows two coordinate policies:
//! - reads clamp `h` and `w` to the nearest valid row/column ([`Image::get_pixel`]),
//! - writes outside the image are discarded ([`Image::set_pixel`]).

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::ImageError;

/// A `C x H x W` image of `f32` samples in channel-major order.
///
/// The buffer length always equals `channels * height * width`. Cloning
/// produces an independent buffer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Image {
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

/// Snaps a coordinate into `[0, len - 1]`.
///
/// Coordinates at or past the end snap to the last index, negative ones to 0.
fn clamp_coord(l: isize, len: usize) -> usize {
    if l >= len as isize {
        len.saturating_sub(1)
    } else if l < 0 {
        0
    } else {
        l as usize
    }
}

/// Whether a coordinate falls outside `[0, len - 1]`.
fn out_of_bounds(l: isize, len: usize) -> bool {
    l >= len as isize || l < 0
}

fn sample_count(channels: usize, height: usize, width: usize) -> Result<usize, ImageError> {
    channels
        .checked_mul(height)
        .and_then(|n| n.checked_mul(width))
        .ok_or(ImageError::InvalidDimensions)
}

impl Image {
    /// Creates a zero-filled image.
    ///
    /// Returns `ImageError::InvalidDimensions` if `channels * height * width`
    /// overflows `usize`. Zero-sized dimensions are allowed.
    pub fn new(channels: usize, height: usize, width: usize) -> Result<Self, ImageError> {
        Self::filled(channels, height, width, 0.0)
    }

    /// Creates an image with every sample set to `value`.
    pub fn filled(
        channels: usize,
        height: usize,
        width: usize,
        value: f32,
    ) -> Result<Self, ImageError> {
        let len = sample_count(channels, height, width)?;
        Ok(Self {
            channels,
            height,
            width,
            data: vec![value; len],
        })
    }

    /// Adopts a pre-built CHW buffer.
    ///
    /// Returns `ImageError::BufferLength` if `data.len()` is not
    /// `channels * height * width`.
    pub fn from_data(
        channels: usize,
        height: usize,
        width: usize,
        data: Vec<f32>,
    ) -> Result<Self, ImageError> {
        let expected = sample_count(channels, height, width)?;
        if data.len() != expected {
            return Err(ImageError::BufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            channels,
            height,
            width,
            data,
        })
    }

    /// Builds an image from parts whose sizes the caller already derived
    /// from an existing image.
    pub(crate) fn from_raw_parts(
        channels: usize,
        height: usize,
        width: usize,
        data: Vec<f32>,
    ) -> Self {
        debug_assert_eq!(data.len(), channels * height * width);
        Self {
            channels,
            height,
            width,
            data,
        }
    }

    /// Number of channel planes.
    pub fn channels(&self) -> usize {
        self.channels
    }

    /// Image height in rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Image width in columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Total number of samples (`channels * height * width`).
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether the image holds no samples.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Read-only access to the CHW buffer.
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the CHW buffer. The length cannot change through this.
    pub fn data_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consumes the image and returns its buffer.
    pub fn into_data(self) -> Vec<f32> {
        self.data
    }

    /// The `height * width` plane of channel `c`.
    ///
    /// # Panics
    /// Panics if `c >= self.channels()`.
    pub fn channel(&self, c: usize) -> &[f32] {
        let plane = self.height * self.width;
        &self.data[c * plane..(c + 1) * plane]
    }

    /// Mutable plane of channel `c`.
    ///
    /// # Panics
    /// Panics if `c >= self.channels()`.
    pub fn channel_mut(&mut self, c: usize) -> &mut [f32] {
        let plane = self.height * self.width;
        &mut self.data[c * plane..(c + 1) * plane]
    }

    /// Flat offset of `(c, h, w)`. No bounds checking.
    #[inline]
    pub fn index(&self, c: usize, h: usize, w: usize) -> usize {
        c * self.height * self.width + h * self.width + w
    }

    /// Clamped read: returns the sample at `(c, h, w)` with `h` and `w`
    /// snapped to the nearest valid row and column.
    ///
    /// # Panics
    /// Panics if `c >= self.channels()` or the image has no rows or columns.
    pub fn get_pixel(&self, c: usize, h: isize, w: isize) -> f32 {
        let h = clamp_coord(h, self.height);
        let w = clamp_coord(w, self.width);
        self.data[self.index(c, h, w)]
    }

    /// Bounded write: stores `value` at `(c, h, w)` if `h` and `w` are inside
    /// the image. Out-of-bounds writes leave the buffer untouched.
    ///
    /// # Panics
    /// Panics if `c >= self.channels()` and the coordinates are in bounds.
    pub fn set_pixel(&mut self, c: usize, h: isize, w: isize, value: f32) {
        if out_of_bounds(h, self.height) || out_of_bounds(w, self.width) {
            return;
        }
        let idx = self.index(c, h as usize, w as usize);
        self.data[idx] = value;
    }
}

#[derive(Deserialize)]
struct ImageRepr {
    channels: usize,
    height: usize,
    width: usize,
    data: Vec<f32>,
}

impl<'de> Deserialize<'de> for Image {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let repr = ImageRepr::deserialize(deserializer)?;
        Image::from_data(repr.channels, repr.height, repr.width, repr.data)
            .map_err(serde::de::Error::custom)
    }
}
