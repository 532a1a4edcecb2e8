//! Error types and context management for stitching operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all stitching operations
#[derive(Debug)]
pub enum StitchError {
    /// A required folder was not supplied, so the run never started
    UserCancelled {
        /// Which folder was missing
        prompt: &'static str,
    },

    /// A channel group does not hold exactly one tile per grid slot
    IncompleteGroup {
        /// Output name the group would have been written under
        output_name: String,
        /// Number of tiles actually found
        found: usize,
    },

    /// Failed to decode a tile from the filesystem
    TileDecode {
        /// Path to the tile file
        path: PathBuf,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// Tiles of one group do not share the same dimensions
    DimensionMismatch {
        /// Output name of the affected group
        output_name: String,
        /// Dimensions of the first tile (width, height)
        expected: (u32, u32),
        /// Dimensions of the offending tile (width, height)
        found: (u32, u32),
        /// Description of the offending tile, usually its path
        tile: String,
    },

    /// Tiles are too small for the configured overlap
    ///
    /// Each tile must be strictly larger than the overlap on both axes,
    /// otherwise neighbouring tiles would not advance across the canvas.
    InvalidTileGeometry {
        /// Tile dimensions (width, height)
        tile: (u32, u32),
        /// Overlap (horizontal, vertical)
        overlap: (u32, u32),
    },

    /// Failed to save a mosaic to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },
}

impl fmt::Display for StitchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UserCancelled { prompt } => {
                write!(f, "No {prompt} folder selected, nothing was stitched")
            }
            Self::IncompleteGroup { output_name, found } => {
                write!(
                    f,
                    "Missing images for {output_name}: found {found}, exactly {} are needed to complete the stitch",
                    crate::io::configuration::TILE_COUNT
                )
            }
            Self::TileDecode { path, source } => {
                write!(f, "Failed to decode tile '{}': {source}", path.display())
            }
            Self::DimensionMismatch {
                output_name,
                expected,
                found,
                tile,
            } => {
                write!(
                    f,
                    "Tile '{tile}' in {output_name} is {}x{}, expected {}x{}",
                    found.0,
                    found.1,
                    expected.0,
                    expected.1
                )
            }
            Self::InvalidTileGeometry { tile, overlap } => {
                write!(
                    f,
                    "Tiles of {}x{} cannot absorb an overlap of {}x{}",
                    tile.0, tile.1, overlap.0, overlap.1
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
        }
    }
}

impl std::error::Error for StitchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::TileDecode { source, .. } | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for stitching results
pub type Result<T> = std::result::Result<T, StitchError>;

/// Attaches the path and operation to raw I/O failures
pub trait WithPath<T> {
    /// Convert an I/O error into a [`StitchError::FileSystem`]
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| StitchError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> StitchError {
    StitchError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
