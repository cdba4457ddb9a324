//! Pure per-pixel color transforms

use crate::imaging::grid::Color;

/// Pure function from one color to another, applied lazily by color views
pub trait ColorTransform {
    /// Map a stored color to the observed color
    fn convert(&self, color: Color) -> Color;
}

impl<T: ColorTransform + ?Sized> ColorTransform for &T {
    fn convert(&self, color: Color) -> Color {
        (**self).convert(color)
    }
}

/// Reduce every channel, alpha included, to `levels` evenly spaced steps
///
/// `Quantize(0)` leaves colors untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantize(pub u8);

impl Quantize {
    fn channel(self, value: u8) -> u8 {
        let levels = f64::from(self.0);
        let step = (f64::from(value) * levels / 255.0).round();
        (step * 255.0 / levels) as u8
    }
}

impl ColorTransform for Quantize {
    fn convert(&self, color: Color) -> Color {
        if self.0 == 0 {
            return color;
        }
        image::Rgba(color.0.map(|c| self.channel(c)))
    }
}

/// Multiply red, green and blue by independent factors in `[0, 1]`
///
/// Results are truncated to 8 bits; alpha passes through.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    /// Red factor
    pub r: f64,
    /// Green factor
    pub g: f64,
    /// Blue factor
    pub b: f64,
}

impl Scale {
    /// Transform that leaves colors unchanged
    pub const IDENTITY: Self = Self::new(1.0, 1.0, 1.0);

    /// Create a scale transform from per-channel factors
    pub const fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }
}

fn scale_channel(value: u8, factor: f64) -> u8 {
    (f64::from(value) * factor).clamp(0.0, 255.0) as u8
}

impl ColorTransform for Scale {
    fn convert(&self, color: Color) -> Color {
        let [r, g, b, a] = color.0;
        image::Rgba([
            scale_channel(r, self.r),
            scale_channel(g, self.g),
            scale_channel(b, self.b),
            a,
        ])
    }
}
