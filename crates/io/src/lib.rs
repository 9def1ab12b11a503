#![deny(unsafe_code)]
//! File collaborator for pixelops: turns PNG files into channel-major
//! [`Image`](pixelops_core::Image)s and back.
//!
//! The core crate never touches the filesystem. This crate owns decoding,
//! encoding and the HWC <-> CHW layout change so the CLI (and any other
//! front end) can share them.

pub mod pixel;

#[cfg(feature = "png")]
pub mod file;

#[cfg(feature = "png")]
pub use file::{load_image, save_png};
pub use pixel::{from_interleaved, to_interleaved};
