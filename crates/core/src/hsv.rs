//! In-place RGB <-> HSV conversion for 3-channel images.
//!
//! Both directions reuse the image buffer: after [`rgb_to_hsv`] channel 0 holds
//! hue, channel 1 saturation and channel 2 value, all nominally in [0, 1].
//! Neither direction clamps its output, so round-off can leave values a hair
//! outside that range.
//!
//! Sector selection relies on exact float equality and on the order in which
//! the comparisons run. [`three_way_max`] / [`three_way_min`] resolve ties by
//! their cascade, and [`pixel_hsv_to_rgb`] is a first-match decision list over
//! the integer sector boundaries.

use crate::image::Image;

/// Largest of three values, picked by cascaded comparison.
pub fn three_way_max(a: f32, b: f32, c: f32) -> f32 {
    if a > b {
        if a > c {
            a
        } else {
            c
        }
    } else if b > c {
        b
    } else {
        c
    }
}

/// Smallest of three values, picked by cascaded comparison.
pub fn three_way_min(a: f32, b: f32, c: f32) -> f32 {
    if a < b {
        if a < c {
            a
        } else {
            c
        }
    } else if b < c {
        b
    } else {
        c
    }
}

/// Converts one RGB triple to `(hue, saturation, value)`.
///
/// Pure black maps to `(0, 0, 0)`. Only that exact input is guarded against
/// division by zero.
pub fn pixel_rgb_to_hsv(r: f32, g: f32, b: f32) -> (f32, f32, f32) {
    let v = three_way_max(r, g, b);

    let (s, chroma) = if r == 0.0 && g == 0.0 && b == 0.0 {
        (0.0, 0.0)
    } else {
        let m = three_way_min(r, g, b);
        let chroma = v - m;
        (chroma / v, chroma)
    };

    let h = if chroma == 0.0 {
        0.0
    } else {
        let sector = if v == r {
            (g - b) / chroma
        } else if v == g {
            (b - r) / chroma + 2.0
        } else {
            (r - g) / chroma + 4.0
        };
        if sector >= 0.0 {
            sector / 6.0
        } else {
            sector / 6.0 + 1.0
        }
    };

    (h, s, v)
}

/// Converts one HSV triple back to `(r, g, b)`.
///
/// The branches are tried in order and the first match wins, so exact
/// boundary values (`h * 6 == 5.0`, ...) take their dedicated arm. Hue at or
/// past 1, and negative hue, fall through to the red arm.
pub fn pixel_hsv_to_rgb(h: f32, s: f32, v: f32) -> (f32, f32, f32) {
    let c = v * s;
    let max = v;
    let min = v - c;
    let h_ = h * 6.0;

    if c == 0.0 {
        (v, v, v)
    } else if h_ > 5.0 && h_ < 6.0 {
        let g = min;
        (max, g, -(((h_ / 6.0 - 1.0) * 6.0 * c) - g))
    } else if h_ == 5.0 {
        (max, min, max)
    } else if h_ > 4.0 && h_ < 5.0 {
        let g = min;
        ((h_ - 4.0) * c + g, g, max)
    } else if h_ == 4.0 {
        (min, min, max)
    } else if h_ > 3.0 && h_ < 4.0 {
        let r = min;
        (r, -(((h_ - 4.0) * c) - r), max)
    } else if h_ == 3.0 {
        (min, max, max)
    } else if h_ > 2.0 && h_ < 3.0 {
        let r = min;
        (r, max, (h_ - 2.0) * c + r)
    } else if h_ == 2.0 {
        (min, max, min)
    } else if h_ > 1.0 && h_ < 2.0 {
        let b = min;
        (-(((h_ - 2.0) * c) - b), max, b)
    } else if h_ == 1.0 {
        (max, max, min)
    } else if h_ > 0.0 && h_ < 1.0 {
        let b = min;
        (max, (h_ * c) + b, b)
    } else {
        (max, min, min)
    }
}

/// Rewrites an RGB image as HSV in place.
///
/// # Panics
/// Panics if `im` does not have exactly 3 channels.
pub fn rgb_to_hsv(im: &mut Image) {
    map_pixels(im, "rgb_to_hsv", pixel_rgb_to_hsv);
}

/// Rewrites an HSV image (as produced by [`rgb_to_hsv`]) as RGB in place.
///
/// # Panics
/// Panics if `im` does not have exactly 3 channels.
pub fn hsv_to_rgb(im: &mut Image) {
    map_pixels(im, "hsv_to_rgb", pixel_hsv_to_rgb);
}

fn map_pixels(im: &mut Image, op: &str, f: fn(f32, f32, f32) -> (f32, f32, f32)) {
    assert_eq!(im.channels(), 3, "{op} requires a 3-channel image");
    for h in 0..im.height() {
        for w in 0..im.width() {
            let (i0, i1, i2) = (im.index(0, h, w), im.index(1, h, w), im.index(2, h, w));
            let data = im.data_mut();
            let (x, y, z) = f(data[i0], data[i1], data[i2]);
            data[i0] = x;
            data[i1] = y;
            data[i2] = z;
        }
    }
}
