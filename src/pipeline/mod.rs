//! The mosaic pipeline: tiles are permuted into variants, variants are
//! matched to grid cells of the target, and matches are painted in order

/// Ordering and painting of matches onto the canvas
pub mod compositor;
/// Nearest-variant search over target grid cells
pub mod matcher;
/// Color, scale and rotation variants of tiles
pub mod permute;
/// Single entry point for a full tiling run
pub mod tiler;

pub use matcher::{Match, Shift};
pub use permute::{PermuteConfig, permute};
pub use tiler::{Config, tile};
