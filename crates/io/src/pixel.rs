//! Conversion between interleaved 8-bit pixels and channel-major [`Image`]s.
//!
//! Decoders hand out pixels as `HWC` bytes (`r, g, b, r, g, b, ...`), while the
//! core works on `CHW` floats in [0, 1]. This module is always available (no
//! feature gate) so callers with their own codec can reuse it.

use pixelops_core::{Image, ImageError};

/// Builds a CHW image from interleaved HWC bytes, mapping `0..=255` onto [0, 1].
///
/// Returns `ImageError::BufferLength` if `bytes.len()` is not
/// `channels * height * width`.
pub fn from_interleaved(
    bytes: &[u8],
    channels: usize,
    height: usize,
    width: usize,
) -> Result<Image, ImageError> {
    let mut im = Image::new(channels, height, width)?;
    if bytes.len() != im.len() {
        return Err(ImageError::BufferLength {
            expected: im.len(),
            got: bytes.len(),
        });
    }
    for c in 0..channels {
        for h in 0..height {
            for w in 0..width {
                let src = (h * width + w) * channels + c;
                let dst = im.index(c, h, w);
                im.data_mut()[dst] = bytes[src] as f32 / 255.0;
            }
        }
    }
    Ok(im)
}

/// Flattens a CHW image into interleaved HWC bytes.
///
/// Samples are clamped to [0, 1] and rounded to the nearest 8-bit level. The
/// output length is `channels * height * width`.
pub fn to_interleaved(im: &Image) -> Vec<u8> {
    let (channels, height, width) = (im.channels(), im.height(), im.width());
    let mut out = vec![0u8; im.len()];
    for c in 0..channels {
        for h in 0..height {
            for w in 0..width {
                let v = im.data()[im.index(c, h, w)];
                out[(h * width + w) * channels + c] = (v.clamp(0.0, 1.0) * 255.0).round() as u8;
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_interleaved_splits_channels_into_planes() {
        // 1 row, 2 pixels: (255, 0, 51), (0, 255, 102)
        let bytes = [255, 0, 51, 0, 255, 102];
        let im = from_interleaved(&bytes, 3, 1, 2).unwrap();
        assert_eq!(im.channel(0), &[1.0, 0.0]);
        assert_eq!(im.channel(1), &[0.0, 1.0]);
        assert!((im.get_pixel(2, 0, 0) - 0.2).abs() < 1e-6);
        assert!((im.get_pixel(2, 0, 1) - 0.4).abs() < 1e-6);
    }

    #[test]
    fn from_interleaved_rejects_wrong_length() {
        let result = from_interleaved(&[0; 5], 3, 1, 2);
        assert!(matches!(
            result,
            Err(ImageError::BufferLength {
                expected: 6,
                got: 5
            })
        ));
    }

    #[test]
    fn to_interleaved_correct_length() {
        let im = Image::new(3, 4, 8).unwrap();
        assert_eq!(to_interleaved(&im).len(), 3 * 4 * 8);
    }

    #[test]
    fn to_interleaved_clamps_out_of_range_samples() {
        let im = Image::from_data(1, 1, 3, vec![-0.5, 0.5, 1.5]).unwrap();
        assert_eq!(to_interleaved(&im), vec![0, 128, 255]);
    }

    #[test]
    fn to_interleaved_orders_pixels_row_major() {
        // 2 rows, 1 column, 2 channels
        let im = Image::from_data(2, 2, 1, vec![0.0, 1.0, 1.0, 0.0]).unwrap();
        assert_eq!(to_interleaved(&im), vec![0, 255, 255, 0]);
    }

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn bytes_survive_conversion(
                (c, h, w) in (1_usize..=4, 1_usize..=8, 1_usize..=8),
                seed in any::<u64>(),
            ) {
                let bytes: Vec<u8> = (0..c * h * w)
                    .map(|i| (seed.wrapping_mul(i as u64 + 1) >> 7) as u8)
                    .collect();
                let im = from_interleaved(&bytes, c, h, w).unwrap();
                prop_assert_eq!(to_interleaved(&im), bytes);
            }
        }
    }
}
