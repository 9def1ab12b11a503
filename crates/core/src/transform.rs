//! Whole-image transforms built on the pixel accessors.
//!
//! Note that [`clamp_image`] clamps sample *values* into [0, 1]; it has nothing
//! to do with the coordinate clamping done by [`Image::get_pixel`].

use crate::image::Image;

/// ITU-R BT.601 luma weights for R, G, B.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Returns an independent copy of `im` with identical dimensions and samples.
pub fn copy_image(im: &Image) -> Image {
    im.clone()
}

/// Reduces a 3-channel RGB image to a 1-channel luma image.
///
/// Each output pixel is `0.299 R + 0.587 G + 0.114 B`, accumulated in `f64`
/// and stored as `f32`.
///
/// # Panics
/// Panics if `im` does not have exactly 3 channels.
pub fn rgb_to_grayscale(im: &Image) -> Image {
    assert_eq!(im.channels(), 3, "rgb_to_grayscale requires a 3-channel image");
    let (height, width) = (im.height(), im.width());
    let data = (0..height)
        .flat_map(|h| (0..width).map(move |w| (h, w)))
        .map(|(h, w)| {
            let r = im.data()[im.index(0, h, w)] as f64;
            let g = im.data()[im.index(1, h, w)] as f64;
            let b = im.data()[im.index(2, h, w)] as f64;
            (LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b) as f32
        })
        .collect();
    Image::from_raw_parts(1, height, width, data)
}

/// Adds `delta` to every pixel of channel `c`.
///
/// # Panics
/// Panics if `c >= im.channels()` on a non-empty image.
pub fn shift_image(im: &mut Image, c: usize, delta: f32) {
    for_each_pixel(im, c, |v| v + delta);
}

/// Multiplies every pixel of channel `c` by `factor`.
///
/// # Panics
/// Panics if `c >= im.channels()` on a non-empty image.
pub fn scale_image(im: &mut Image, c: usize, factor: f32) {
    for_each_pixel(im, c, |v| v * factor);
}

/// Clamps every sample of channels 0, 1 and 2 into [0, 1].
///
/// Channels past the third are left alone; images with fewer than three
/// channels have all of their channels clamped.
pub fn clamp_image(im: &mut Image) {
    for c in 0..im.channels().min(3) {
        for v in im.channel_mut(c) {
            if *v > 1.0 {
                *v = 1.0;
            } else if *v < 0.0 {
                *v = 0.0;
            }
        }
    }
}

/// Rewrites channel `c` through `f`, one pixel at a time via get/set.
fn for_each_pixel(im: &mut Image, c: usize, f: impl Fn(f32) -> f32) {
    let (height, width) = (im.height() as isize, im.width() as isize);
    for h in 0..height {
        for w in 0..width {
            let v = im.get_pixel(c, h, w);
            im.set_pixel(c, h, w, f(v));
        }
    }
}
