//! Tile grouping, grid placement and mosaic compositing
//!
//! This module contains the stitching pipeline:
//! - Classifying tile files into channel groups
//! - Arranging nine tiles into grid order
//! - Computing overlap-adjusted placement and painting the mosaic
//! - Driving the pipeline over a tree of position folders

/// Batch driver over position folders
pub mod batch;
/// Mosaic compositing and export
pub mod compositor;
/// Channel classification of tile files
pub mod loader;
/// Canvas geometry of the tile grid
pub mod placement;
/// Fixed-size tile sets in grid order
pub mod tileset;

pub use compositor::{Compositor, Mosaic, TileSource};
pub use placement::{GridPlacement, Overlap};
pub use tileset::TileSet;
