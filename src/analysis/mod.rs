//! Region statistics used to compare tiles against the target

/// Dominant-color signatures of image regions
pub mod mode;
