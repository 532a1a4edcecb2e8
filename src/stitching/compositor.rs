//! Mosaic compositing from nine ordered tiles
//!
//! A group of tile sources is validated, rearranged into grid order, decoded
//! and painted onto a single canvas. Tiles are drawn in grid-slot order and
//! later tiles overwrite the overlap of earlier ones; there is no blending.

use crate::io::configuration::OUTPUT_EXTENSION;
use crate::io::error::{Result, StitchError};
use crate::io::image::{export_mosaic_as_png, load_tile};
use crate::stitching::placement::{GridPlacement, Overlap};
use crate::stitching::tileset::TileSet;
use image::{ColorType, DynamicImage, ImageBuffer, Pixel, imageops};
use std::path::{Path, PathBuf};

/// Anything that can be decoded into a tile image
pub trait TileSource {
    /// Decode the tile
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::TileDecode`] if the data is not a decodable image
    fn decode(&self) -> Result<DynamicImage>;

    /// Human-readable name used in diagnostics
    fn label(&self) -> String;
}

impl TileSource for PathBuf {
    fn decode(&self) -> Result<DynamicImage> {
        load_tile(self)
    }

    fn label(&self) -> String {
        self.display().to_string()
    }
}

impl TileSource for &Path {
    fn decode(&self) -> Result<DynamicImage> {
        load_tile(self)
    }

    fn label(&self) -> String {
        self.display().to_string()
    }
}

impl TileSource for Vec<u8> {
    fn decode(&self) -> Result<DynamicImage> {
        image::load_from_memory(self).map_err(|e| StitchError::TileDecode {
            path: PathBuf::from("<memory>"),
            source: e,
        })
    }

    fn label(&self) -> String {
        format!("<memory, {} bytes>", self.len())
    }
}

/// A composited canvas and the path it will be written to
#[derive(Debug, Clone)]
pub struct Mosaic {
    /// Composited pixels
    pub image: DynamicImage,
    /// Destination file
    pub path: PathBuf,
}

impl Mosaic {
    /// Persist the mosaic as PNG, overwriting any existing file
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::ImageExport`] if the file cannot be written
    pub fn write(&self) -> Result<()> {
        export_mosaic_as_png(&self.image, &self.path)
    }
}

/// Stitches complete tile groups into mosaics
#[derive(Debug, Clone, Copy, Default)]
pub struct Compositor {
    overlap: Overlap,
}

impl Compositor {
    /// Create a compositor for the given overlap
    pub const fn new(overlap: Overlap) -> Self {
        Self { overlap }
    }

    /// Overlap this compositor places tiles with
    pub const fn overlap(&self) -> Overlap {
        self.overlap
    }

    /// Destination path of a mosaic: `<destination>/<output_name>.png`
    pub fn output_path(destination: &Path, output_name: &str) -> PathBuf {
        destination.join(format!("{output_name}.{OUTPUT_EXTENSION}"))
    }

    /// Stitch nine sources given in acquisition order and write the result
    ///
    /// Returns the path of the written mosaic.
    ///
    /// # Errors
    ///
    /// Returns an error, without writing anything, if:
    /// - `sources` does not hold exactly nine tiles
    /// - A tile cannot be decoded
    /// - Tiles differ in size or are too small for the overlap
    ///
    /// Returns [`StitchError::ImageExport`] if the mosaic cannot be written
    pub fn stitch<S: TileSource>(
        &self,
        sources: Vec<S>,
        destination: &Path,
        output_name: &str,
    ) -> Result<PathBuf> {
        let mosaic = self.build(sources, destination, output_name)?;
        mosaic.write()?;
        Ok(mosaic.path)
    }

    /// Stitch nine sources given in acquisition order without writing
    ///
    /// # Errors
    ///
    /// Same as [`Compositor::stitch`], minus the export failure
    pub fn build<S: TileSource>(
        &self,
        sources: Vec<S>,
        destination: &Path,
        output_name: &str,
    ) -> Result<Mosaic> {
        let sources = TileSet::from_acquisition_order(sources, output_name)?;
        let tiles = sources.try_map(|source| source.decode())?;
        let placement = self.placement_for(&tiles, output_name, |row, col| {
            sources
                .get(row, col)
                .map_or_else(|| format!("slot {row},{col}"), |source| source.label())
        })?;

        Ok(Mosaic {
            image: paint_dynamic(&tiles, &placement)?,
            path: Self::output_path(destination, output_name),
        })
    }

    /// Composite already decoded tiles in grid order
    ///
    /// # Errors
    ///
    /// Returns an error if the tiles differ in size or are too small for the
    /// overlap
    pub fn composite(
        &self,
        tiles: &TileSet<DynamicImage>,
        output_name: &str,
    ) -> Result<DynamicImage> {
        let placement =
            self.placement_for(tiles, output_name, |row, col| format!("slot {row},{col}"))?;
        paint_dynamic(tiles, &placement)
    }

    // All nine tiles must share the first tile's dimensions
    fn placement_for(
        &self,
        tiles: &TileSet<DynamicImage>,
        output_name: &str,
        label: impl Fn(usize, usize) -> String,
    ) -> Result<GridPlacement> {
        let expected = tiles
            .get(0, 0)
            .map(|tile| (tile.width(), tile.height()))
            .ok_or_else(|| StitchError::IncompleteGroup {
                output_name: output_name.to_string(),
                found: 0,
            })?;

        for (row, col, tile) in tiles.iter() {
            let found = (tile.width(), tile.height());
            if found != expected {
                return Err(StitchError::DimensionMismatch {
                    output_name: output_name.to_string(),
                    expected,
                    found,
                    tile: label(row, col),
                });
            }
        }

        GridPlacement::new(expected.0, expected.1, self.overlap)
    }
}

// Canvas keeps the first tile's pixel format; PNG has no float formats
fn paint_dynamic(
    tiles: &TileSet<DynamicImage>,
    placement: &GridPlacement,
) -> Result<DynamicImage> {
    let color = tiles
        .get(0, 0)
        .map_or(ColorType::Rgba16, DynamicImage::color);

    let mosaic = match color {
        ColorType::L8 => DynamicImage::ImageLuma8(paint(
            &tiles.try_map(|t| Ok(t.to_luma8()))?,
            placement,
        )),
        ColorType::L16 => DynamicImage::ImageLuma16(paint(
            &tiles.try_map(|t| Ok(t.to_luma16()))?,
            placement,
        )),
        ColorType::La8 => DynamicImage::ImageLumaA8(paint(
            &tiles.try_map(|t| Ok(t.to_luma_alpha8()))?,
            placement,
        )),
        ColorType::La16 => DynamicImage::ImageLumaA16(paint(
            &tiles.try_map(|t| Ok(t.to_luma_alpha16()))?,
            placement,
        )),
        ColorType::Rgb8 => DynamicImage::ImageRgb8(paint(
            &tiles.try_map(|t| Ok(t.to_rgb8()))?,
            placement,
        )),
        ColorType::Rgb16 => DynamicImage::ImageRgb16(paint(
            &tiles.try_map(|t| Ok(t.to_rgb16()))?,
            placement,
        )),
        ColorType::Rgba8 => DynamicImage::ImageRgba8(paint(
            &tiles.try_map(|t| Ok(t.to_rgba8()))?,
            placement,
        )),
        _ => DynamicImage::ImageRgba16(paint(
            &tiles.try_map(|t| Ok(t.to_rgba16()))?,
            placement,
        )),
    };

    Ok(mosaic)
}

fn paint<P: Pixel>(
    tiles: &TileSet<ImageBuffer<P, Vec<P::Subpixel>>>,
    placement: &GridPlacement,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let (width, height) = placement.canvas_size();
    let mut canvas = ImageBuffer::new(width, height);

    for (row, col, tile) in tiles.iter() {
        let (x, y) = placement.offset(row, col);
        imageops::replace(&mut canvas, tile, i64::from(x), i64::from(y));
    }

    canvas
}
