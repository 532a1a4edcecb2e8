//! Stitching of 3x3 microscopy tile acquisitions into per-channel mosaics
//!
//! Each position folder holds nine tiles per channel. The tiles of a channel
//! are arranged into grid order, placed with a fixed overlap and written as a
//! single PNG mosaic.

#![forbid(unsafe_code)]

/// Input/output operations and error handling
pub mod io;
/// Tile grouping, placement and mosaic compositing
pub mod stitching;

pub use io::error::{Result, StitchError};
