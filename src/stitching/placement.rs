//! Canvas geometry for a 3x3 grid of overlapping tiles
//!
//! Placement depends only on the tile size and the overlap, never on pixel
//! content. Each column after the first advances by `width - overlap.x`
//! pixels and each row after the first by `height - overlap.y`.

use crate::io::configuration::{GRID_ARITY, OVERLAP_X, OVERLAP_Y};
use crate::io::error::{Result, StitchError};

/// Pixel overlap between neighbouring tiles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Overlap {
    /// Horizontal overlap in pixels
    pub x: u32,
    /// Vertical overlap in pixels
    pub y: u32,
}

impl Default for Overlap {
    fn default() -> Self {
        Self {
            x: OVERLAP_X,
            y: OVERLAP_Y,
        }
    }
}

/// Offsets of every grid slot on the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPlacement {
    tile_width: u32,
    tile_height: u32,
    overlap: Overlap,
}

impl GridPlacement {
    /// Compute the placement for tiles of `tile_width` x `tile_height`
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::InvalidTileGeometry`] unless the tiles are
    /// strictly larger than the overlap on both axes
    pub const fn new(tile_width: u32, tile_height: u32, overlap: Overlap) -> Result<Self> {
        if tile_width <= overlap.x || tile_height <= overlap.y {
            return Err(StitchError::InvalidTileGeometry {
                tile: (tile_width, tile_height),
                overlap: (overlap.x, overlap.y),
            });
        }
        Ok(Self {
            tile_width,
            tile_height,
            overlap,
        })
    }

    /// Horizontal distance between the left edges of neighbouring columns
    pub const fn column_step(&self) -> u32 {
        self.tile_width - self.overlap.x
    }

    /// Vertical distance between the top edges of neighbouring rows
    pub const fn row_step(&self) -> u32 {
        self.tile_height - self.overlap.y
    }

    /// Output canvas size as (width, height)
    ///
    /// Equals `(3W - 2 * overlap.x, 3H - 2 * overlap.y)` for a 3x3 grid.
    pub const fn canvas_size(&self) -> (u32, u32) {
        let last = (GRID_ARITY - 1) as u32;
        (
            last * self.column_step() + self.tile_width,
            last * self.row_step() + self.tile_height,
        )
    }

    /// Top-left canvas offset (x, y) of grid slot (`row`, `col`)
    pub const fn offset(&self, row: usize, col: usize) -> (u32, u32) {
        (
            col as u32 * self.column_step(),
            row as u32 * self.row_step(),
        )
    }
}
