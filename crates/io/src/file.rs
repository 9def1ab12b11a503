//! PNG load/save for [`Image`].
//!
//! Feature-gated behind `png` (default on). Decoding and encoding go through
//! the `image` crate; the layout conversion lives in [`crate::pixel`].

use std::path::Path;

use image::{DynamicImage, GrayImage, ImageFormat, ImageReader, RgbImage};
use pixelops_core::{Image, ImageError};

use crate::pixel::{from_interleaved, to_interleaved};

/// Loads a PNG file as a CHW image.
///
/// The format is sniffed from the file contents, so the extension does not
/// matter. Grayscale files load as one channel; everything else loads as
/// 3-channel RGB with any alpha channel dropped. Returns `ImageError::Io` if
/// the file cannot be read or decoded.
pub fn load_image(path: &Path) -> Result<Image, ImageError> {
    let decoded = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| ImageError::Io(e.to_string()))?
        .decode()
        .map_err(|e| ImageError::Io(e.to_string()))?;
    let (width, height) = (decoded.width() as usize, decoded.height() as usize);
    let im = if decoded.color().has_color() {
        from_interleaved(decoded.to_rgb8().as_raw(), 3, height, width)?
    } else {
        from_interleaved(decoded.to_luma8().as_raw(), 1, height, width)?
    };
    tracing::debug!(
        path = %path.display(),
        channels = im.channels(),
        height,
        width,
        "loaded image"
    );
    Ok(im)
}

/// Writes a 1- or 3-channel image as PNG, clamping samples to [0, 1].
///
/// Returns `ImageError::UnsupportedChannels` for other channel counts,
/// `ImageError::InvalidDimensions` if a dimension overflows `u32`, or
/// `ImageError::Io` on encode/write failure.
pub fn save_png(im: &Image, path: &Path) -> Result<(), ImageError> {
    let w = u32::try_from(im.width()).map_err(|_| ImageError::InvalidDimensions)?;
    let h = u32::try_from(im.height()).map_err(|_| ImageError::InvalidDimensions)?;
    let raw = to_interleaved(im);
    let encoded = match im.channels() {
        1 => GrayImage::from_raw(w, h, raw).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(w, h, raw).map(DynamicImage::ImageRgb8),
        n => return Err(ImageError::UnsupportedChannels(n)),
    }
    .ok_or_else(|| ImageError::Io("pixel buffer size mismatch".into()))?;
    encoded
        .save_with_format(path, ImageFormat::Png)
        .map_err(|e| ImageError::Io(e.to_string()))?;
    tracing::debug!(path = %path.display(), channels = im.channels(), "saved png");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_round_trip() {
        let im = Image::from_data(3, 1, 2, vec![1.0, 0.0, 0.0, 1.0, 0.2, 0.4]).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        save_png(&im, &path).unwrap();
        let back = load_image(&path).unwrap();

        assert_eq!(back.channels(), 3);
        assert_eq!((back.height(), back.width()), (1, 2));
        for (a, b) in back.data().iter().zip(im.data()) {
            assert!((a - b).abs() < 0.5 / 255.0 + 1e-6, "{a} vs {b}");
        }
    }

    #[test]
    fn grayscale_loads_as_one_channel() {
        let im = Image::filled(1, 4, 3, 0.5).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("gray.png");

        save_png(&im, &path).unwrap();
        let back = load_image(&path).unwrap();

        assert_eq!(back.channels(), 1);
        assert_eq!((back.height(), back.width()), (4, 3));
        assert!((back.get_pixel(0, 2, 1) - 128.0 / 255.0).abs() < 1e-6);
    }

    #[test]
    fn load_ignores_missing_extension() {
        let im = Image::from_data(3, 2, 2, (0..12).map(|i| i as f32 / 11.0).collect()).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let named = dir.path().join("photo.png");
        let bare = dir.path().join("photo");
        save_png(&im, &named).unwrap();
        std::fs::copy(&named, &bare).unwrap();

        let back = load_image(&bare).unwrap();

        assert_eq!(back, load_image(&named).unwrap());
        assert_eq!((back.channels(), back.height(), back.width()), (3, 2, 2));
    }

    #[test]
    fn load_non_image_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, b"not a png").unwrap();
        assert!(matches!(load_image(&path), Err(ImageError::Io(_))));
    }

    #[test]
    fn save_rejects_two_channels() {
        let im = Image::new(2, 2, 2).unwrap();
        let dir = tempfile::tempdir().unwrap();
        let result = save_png(&im, &dir.path().join("two.png"));
        assert!(matches!(result, Err(ImageError::UnsupportedChannels(2))));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_image(&dir.path().join("missing.png"));
        assert!(matches!(result, Err(ImageError::Io(_))));
    }
}
