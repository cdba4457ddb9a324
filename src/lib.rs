//! Photo-mosaic construction from a pool of tile images
//!
//! Tiles are expanded into color, scale and rotation variants, every variant
//! and every grid cell of the target is reduced to its dominant color, each
//! cell is paired with its closest variant, and the pairs are painted onto a
//! canvas in a deterministic order.

#![forbid(unsafe_code)]

/// Dominant-color signatures of image regions
pub mod analysis;
/// Color distance and per-pixel color transforms
pub mod color;
/// Pixel grids, lazy views and resampling
pub mod imaging;
/// Input/output operations and error handling
pub mod io;
/// Permutation, matching and composition stages
pub mod pipeline;

pub use io::error::{MosaicError, Result};
pub use pipeline::{Config, tile};
