//! Dominant-color signatures of image regions
//!
//! A [`Mode`] pairs a grid with the most common color in it (after coarse
//! bucketing) and how often that color occurs. Tile variants and target grid
//! cells are both reduced to modes, and matching compares modes rather than
//! pixels.

use std::collections::HashMap;

use image::RgbaImage;

use crate::color::distance::distance;
use crate::color::transform::{ColorTransform, Quantize};
use crate::imaging::grid::{Color, PixelGrid, TRANSPARENT};
use crate::imaging::resample;
use crate::io::configuration::MODE_BUCKET_LEVELS;

/// A grid together with its dominant bucket color and that color's frequency
///
/// Frequency is in `(0, 1]`. Modes are never built from regions with no
/// counted pixels, see [`Mode::compute`].
#[derive(Debug, Clone)]
pub struct Mode<G> {
    grid: G,
    color: Color,
    frequency: f64,
}

impl<G: PixelGrid> Mode<G> {
    /// Find the dominant color of `grid`
    ///
    /// Every pixel is first bucketed with [`MODE_BUCKET_LEVELS`] levels per
    /// channel. Pixels whose bucket is fully transparent are skipped, or, with
    /// `include_transparent`, counted together in one transparent bucket
    /// regardless of their RGB values. Equal counts resolve to the bucket
    /// first seen in row-major order.
    ///
    /// Returns `None` when no pixel was counted (empty region, or a fully
    /// transparent one with `include_transparent` unset).
    pub fn compute(grid: G, include_transparent: bool) -> Option<Self> {
        let bucket = Quantize(MODE_BUCKET_LEVELS);
        let mut index: HashMap<Color, usize> = HashMap::new();
        let mut counts: Vec<(Color, usize)> = Vec::new();
        let mut total = 0usize;

        for point in grid.bounds().pixels() {
            let mut color = bucket.convert(grid.at(point.x, point.y));
            if color.0[3] == 0 {
                if !include_transparent {
                    continue;
                }
                color = TRANSPARENT;
            }

            total += 1;
            let slot = *index.entry(color).or_insert_with(|| {
                counts.push((color, 0));
                counts.len() - 1
            });
            if let Some(entry) = counts.get_mut(slot) {
                entry.1 += 1;
            }
        }

        let (color, count) = counts
            .into_iter()
            .fold(None, |best: Option<(Color, usize)>, candidate| match best {
                Some(current) if current.1 >= candidate.1 => Some(current),
                _ => Some(candidate),
            })?;

        Some(Self {
            grid,
            color,
            frequency: count as f64 / total as f64,
        })
    }

    /// Copy with the grid resampled to `ceil(factor * size)`
    ///
    /// Color and frequency carry over from the source mode.
    pub fn scale(&self, factor: f64) -> Mode<RgbaImage> {
        Mode {
            grid: resample::scale(&self.grid, factor),
            color: self.color,
            frequency: self.frequency,
        }
    }

    /// Copy with the grid rotated by `fraction` of a full turn
    ///
    /// Color and frequency carry over from the source mode.
    pub fn rotate(&self, fraction: f64) -> Mode<RgbaImage> {
        Mode {
            grid: resample::rotate(&self.grid, fraction),
            color: self.color,
            frequency: self.frequency,
        }
    }

    /// Pixel dimensions of the underlying grid
    pub fn size(&self) -> (u32, u32) {
        self.grid.bounds().size()
    }
}

impl<G> Mode<G> {
    /// Underlying grid
    pub const fn grid(&self) -> &G {
        &self.grid
    }

    /// Dominant bucket color
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Share of counted pixels that fell in the dominant bucket
    pub const fn frequency(&self) -> f64 {
        self.frequency
    }

    /// Whether the dominant bucket is the transparent one
    pub const fn is_transparent(&self) -> bool {
        self.color.0[3] == 0
    }

    /// Ranking distance to another mode
    ///
    /// The color distance is divided by both frequencies, so weakly dominant
    /// colors make worse matches even at equal color distance. The value can
    /// exceed one and is only meaningful relative to other distances.
    pub fn distance_to<H>(&self, other: &Mode<H>) -> f64 {
        distance(self.color, other.color) / self.frequency / other.frequency
    }
}
