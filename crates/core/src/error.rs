//! Error types for the pixelops core.

use thiserror::Error;

/// Recoverable errors produced by image construction and operation pipelines.
///
/// The pixel primitives themselves never return these: coordinate problems are
/// clamped or discarded, and channel-count contract breaches panic. These
/// variants are for the layers that validate input before calling them.
#[derive(Debug, Error)]
pub enum ImageError {
    /// `channels * height * width` overflowed `usize`, or a dimension does
    /// not fit the target format.
    #[error("invalid dimensions: channels * height * width must fit in memory")]
    InvalidDimensions,

    /// A buffer handed to [`Image::from_data`](crate::Image::from_data) had the wrong length.
    #[error("buffer length mismatch: expected {expected} samples, got {got}")]
    BufferLength { expected: usize, got: usize },

    /// An operation needs a specific channel count.
    #[error("{op} requires {expected} channels, image has {got}")]
    ChannelCount {
        op: &'static str,
        expected: usize,
        got: usize,
    },

    /// A channel index was not below the image's channel count.
    #[error("channel {channel} out of range for image with {channels} channels")]
    ChannelOutOfRange { channel: usize, channels: usize },

    /// An encoder cannot represent this many channels.
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(usize),

    /// An operation list could not be parsed.
    #[error("invalid operation list: {0}")]
    InvalidOps(String),

    /// A file could not be read or written.
    #[error("I/O error: {0}")]
    Io(String),
}
