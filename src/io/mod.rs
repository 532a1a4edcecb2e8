//! Input/output operations, configuration and error handling

/// Command-line parsing and batch orchestration
pub mod cli;
/// Acquisition constants and runtime defaults
pub mod configuration;
/// Error types for all stitching operations
pub mod error;
/// Tile decoding and mosaic export
pub mod image;
/// Diagnostic logging setup
pub mod logging;
/// Progress display over position folders
pub mod progress;
