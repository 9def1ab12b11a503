#![deny(unsafe_code)]
//! Core types for the pixelops image toolkit.
//!
//! Provides the channel-major [`Image`] with clamped reads and bounded writes,
//! whole-image transforms (copy, grayscale, shift, scale, clamp), in-place
//! RGB/HSV conversion, and the serializable [`Op`] pipeline. This crate does no
//! I/O; see `pixelops-io` for PNG decode/encode.

pub mod error;
pub mod hsv;
pub mod image;
pub mod op;
pub mod transform;

pub use error::ImageError;
pub use hsv::{hsv_to_rgb, rgb_to_hsv};
pub use image::Image;
pub use op::{apply_all, Op};
pub use transform::{clamp_image, copy_image, rgb_to_grayscale, scale_image, shift_image};
