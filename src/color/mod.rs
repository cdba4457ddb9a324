//! Color comparison and per-pixel transforms

/// Color distance metric
pub mod distance;
/// Quantize and scale transforms
pub mod transform;

pub use distance::distance;
pub use transform::{ColorTransform, Quantize, Scale};
