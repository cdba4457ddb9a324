//! Collaborators around the core pipeline: command line, files, progress

/// Command-line parsing and the end-to-end runner
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Error type and path context
pub mod error;
/// Image decoding, tile collection and PNG export
pub mod image;
/// Terminal progress display
pub mod progress;
/// Animated capture of the placement sequence
pub mod visualization;
