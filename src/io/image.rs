//! Tile decoding and PNG export of finished mosaics

use crate::io::error::{Result, StitchError};
use image::{DynamicImage, ImageFormat};
use std::path::Path;

/// Decode a single tile from disk
///
/// # Errors
///
/// Returns [`StitchError::TileDecode`] if the file cannot be opened or is
/// not a decodable image
pub fn load_tile(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| StitchError::TileDecode {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Write a mosaic as PNG, replacing any file already at `output_path`
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or saved to the specified path
pub fn export_mosaic_as_png(mosaic: &DynamicImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: image::ImageError::IoError(e),
        })?;
    }

    mosaic
        .save_with_format(output_path, ImageFormat::Png)
        .map_err(|e| StitchError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
