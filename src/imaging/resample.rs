//! Bilinear scaling and rotation into freshly allocated images
//!
//! Both operations materialize the source grid first, so the result never
//! borrows from it. Identity requests (`factor == 1`, `fraction == 0`) copy the
//! pixels unchanged instead of resampling.

use image::RgbaImage;
use image::imageops::{self, FilterType};

use crate::imaging::grid::{Color, PixelGrid};

/// Resample `grid` to `ceil(factor * size)` in each dimension
pub fn scale<G: PixelGrid + ?Sized>(grid: &G, factor: f64) -> RgbaImage {
    let source = grid.to_image();
    let width = scaled_dimension(source.width(), factor);
    let height = scaled_dimension(source.height(), factor);

    if (width, height) == source.dimensions() {
        return source;
    }
    if width == 0 || height == 0 || source.width() == 0 || source.height() == 0 {
        return RgbaImage::new(width, height);
    }
    imageops::resize(&source, width, height, FilterType::Triangle)
}

fn scaled_dimension(length: u32, factor: f64) -> u32 {
    let scaled = (f64::from(length) * factor).ceil();
    if scaled.is_finite() && scaled > 0.0 {
        scaled.min(f64::from(u32::MAX)) as u32
    } else {
        0
    }
}

/// Rotate `grid` by `fraction` of a full turn about its centre
///
/// The canvas grows to the rotated bounding box
/// (`|w cos| + |h sin|` by `|w sin| + |h cos|`, each rounded up); corners
/// uncovered by the source stay transparent.
pub fn rotate<G: PixelGrid + ?Sized>(grid: &G, fraction: f64) -> RgbaImage {
    let source = grid.to_image();
    let angle = std::f64::consts::TAU * fraction;
    if angle.rem_euclid(std::f64::consts::TAU) == 0.0 {
        return source;
    }

    let (sin, cos) = angle.sin_cos();
    let (w, h) = (f64::from(source.width()), f64::from(source.height()));
    let width = ceil_extent((w * cos).abs() + (h * sin).abs());
    let height = ceil_extent((w * sin).abs() + (h * cos).abs());

    let source_centre = (w / 2.0, h / 2.0);
    let target_centre = (f64::from(width) / 2.0, f64::from(height) / 2.0);

    RgbaImage::from_fn(width, height, |column, row| {
        // Inverse map the destination pixel centre into source space
        let u = f64::from(column) + 0.5 - target_centre.0;
        let v = f64::from(row) + 0.5 - target_centre.1;
        let x = u.mul_add(cos, v * sin) + source_centre.0 - 0.5;
        let y = v.mul_add(cos, -u * sin) + source_centre.1 - 0.5;
        bilinear_sample(&source, x, y)
    })
}

// Absorbs the rounding noise of sin/cos at quarter turns before rounding up
fn ceil_extent(extent: f64) -> u32 {
    (extent - ROTATION_EPSILON).ceil().max(0.0) as u32
}

const ROTATION_EPSILON: f64 = 1e-9;

fn bilinear_sample(img: &RgbaImage, x: f64, y: f64) -> Color {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i32, y0 as i32);

    let sample = |sx: i32, sy: i32| -> [f64; 4] {
        let p = img.at(sx, sy);
        [
            f64::from(p.0[0]),
            f64::from(p.0[1]),
            f64::from(p.0[2]),
            f64::from(p.0[3]),
        ]
    };

    let tl = sample(x0, y0);
    let tr = sample(x0 + 1, y0);
    let bl = sample(x0, y0 + 1);
    let br = sample(x0 + 1, y0 + 1);

    let lerp = |a: f64, b: f64, t: f64| (b - a).mul_add(t, a);
    let mut out = [0u8; 4];
    for (c, channel) in out.iter_mut().enumerate() {
        let pick = |s: &[f64; 4]| s.get(c).copied().unwrap_or(0.0);
        let top = lerp(pick(&tl), pick(&tr), fx);
        let bottom = lerp(pick(&bl), pick(&br), fx);
        *channel = lerp(top, bottom, fy).round().clamp(0.0, 255.0) as u8;
    }
    image::Rgba(out)
}
