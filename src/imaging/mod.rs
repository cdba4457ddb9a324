//! Pixel-grid abstraction shared by every pipeline stage
//!
//! This module contains:
//! - Integer geometry and the stepped rectangle scan
//! - The `PixelGrid` trait with its owned and borrowed implementations
//! - Bilinear resampling used to derive scaled and rotated tile variants

/// Points, rectangles and rectangle scans
pub mod geometry;
/// Grid trait, owned rasters and lazy views
pub mod grid;
/// Scaling and rotation into owned images
pub mod resample;

pub use geometry::{Point, Rect};
pub use grid::{Color, PixelGrid, Raster, TRANSPARENT};
