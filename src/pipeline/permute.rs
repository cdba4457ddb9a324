//! Tile permutation: color, scale and rotation variants of every tile
//!
//! Each tile is expanded into the Cartesian product of color transforms,
//! scale factors and rotations, in that nesting order, and every variant is
//! reduced to a [`Mode`]. Tiles are processed in parallel; each worker returns
//! its own variants and the results are concatenated in tile order.

use image::RgbaImage;
use rayon::prelude::*;
use tracing::debug;

use crate::analysis::mode::Mode;
use crate::color::transform::Scale;
use crate::imaging::grid::PixelGrid;

/// Which variants to generate for every tile
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PermuteConfig {
    /// Number of red factors in `[0, 1]`; 0 and 1 both keep the original red
    pub red_levels: u8,
    /// Number of green factors in `[0, 1]`; 0 and 1 both keep the original green
    pub green_levels: u8,
    /// Number of blue factors in `[0, 1]`; 0 and 1 both keep the original blue
    pub blue_levels: u8,
    /// Scale factors; `None` or empty keeps the original size
    pub scales: Option<Vec<f64>>,
    /// Rotations as fractions of a full turn; `None` or empty keeps the
    /// original orientation
    pub rotations: Option<Vec<f64>>,
}

/// A [`PermuteConfig`] with every default filled in
#[derive(Debug, Clone, PartialEq)]
pub struct Permutations {
    /// Color transforms, blue varying fastest
    pub colors: Vec<Scale>,
    /// Scale factors, never empty
    pub scales: Vec<f64>,
    /// Rotation fractions, never empty
    pub rotations: Vec<f64>,
}

impl Permutations {
    /// Number of variants generated per tile
    pub const fn per_tile(&self) -> usize {
        self.colors.len() * self.scales.len() * self.rotations.len()
    }
}

impl PermuteConfig {
    /// Resolve the implicit defaults once, before any tile is processed
    pub fn resolved(&self) -> Permutations {
        let or_identity = |values: Option<&Vec<f64>>, identity: f64| match values {
            Some(values) if !values.is_empty() => values.clone(),
            _ => vec![identity],
        };

        Permutations {
            colors: permute_colors(self.red_levels, self.green_levels, self.blue_levels),
            scales: or_identity(self.scales.as_ref(), 1.0),
            rotations: or_identity(self.rotations.as_ref(), 0.0),
        }
    }
}

/// Generate the mode of every variant of every tile
///
/// Tiles with an empty area, or with no visible pixel, contribute nothing.
/// Variants of one tile appear contiguously in color, scale, rotation order,
/// and tiles appear in input order.
pub fn permute<G>(tiles: &[G], config: &PermuteConfig) -> Vec<Mode<RgbaImage>>
where
    G: PixelGrid + Sync,
{
    let permutations = config.resolved();

    tiles
        .par_iter()
        .map(|tile| permute_image(tile, &permutations))
        .collect::<Vec<_>>()
        .into_iter()
        .flatten()
        .collect()
}

/// Expand a single tile into all of its variants
pub fn permute_image<G>(tile: &G, permutations: &Permutations) -> Vec<Mode<RgbaImage>>
where
    G: PixelGrid + ?Sized,
{
    if tile.bounds().is_empty() {
        return Vec::new();
    }

    let mut variants = Vec::with_capacity(permutations.per_tile());
    for color in &permutations.colors {
        let Some(colored) = Mode::compute(tile.with_color_model(*color), false) else {
            debug!(bounds = ?tile.bounds(), "skipping tile without visible pixels");
            return Vec::new();
        };

        for &factor in &permutations.scales {
            let scaled = colored.scale(factor);
            for &fraction in &permutations.rotations {
                variants.push(scaled.rotate(fraction));
            }
        }
    }
    variants
}

/// Every combination of per-channel color factors, blue varying fastest
pub fn permute_colors(red: u8, green: u8, blue: u8) -> Vec<Scale> {
    let (reds, greens, blues) = (iterate_steps(red), iterate_steps(green), iterate_steps(blue));

    let mut colors = Vec::with_capacity(reds.len() * greens.len() * blues.len());
    for &r in &reds {
        for &g in &greens {
            for &b in &blues {
                colors.push(Scale::new(r, g, b));
            }
        }
    }
    colors
}

/// `steps` evenly spaced values from 0 to 1 inclusive
///
/// Fewer than two steps means no variation and yields `[1.0]`.
pub fn iterate_steps(steps: u8) -> Vec<f64> {
    if steps <= 1 {
        return vec![1.0];
    }
    let step = 1.0 / f64::from(steps - 1);
    (0..steps).map(|i| f64::from(i) * step).collect()
}
