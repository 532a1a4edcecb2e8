//! Fixed-size tile sets in grid reading order

use crate::io::configuration::{GRID_ARITY, RAW_TO_GRID, TILE_COUNT};
use crate::io::error::{Result, StitchError, invalid_parameter};
use ndarray::Array2;

/// Exactly one item per grid slot, stored in row-major grid order
///
/// The only way to build a `TileSet` is from a list of [`TILE_COUNT`] items,
/// so a malformed set can never reach the compositor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileSet<T> {
    slots: Array2<T>,
}

impl<T> TileSet<T> {
    /// Arrange items supplied in acquisition order into grid order
    ///
    /// Grid slot `i` receives raw item `RAW_TO_GRID[i]`.
    ///
    /// # Errors
    ///
    /// Returns [`StitchError::IncompleteGroup`] if `raw` does not hold exactly
    /// [`TILE_COUNT`] items
    pub fn from_acquisition_order(raw: Vec<T>, output_name: &str) -> Result<Self> {
        if raw.len() != TILE_COUNT {
            return Err(StitchError::IncompleteGroup {
                output_name: output_name.to_string(),
                found: raw.len(),
            });
        }

        let mut raw_slots: Vec<Option<T>> = raw.into_iter().map(Some).collect();
        let mut ordered = Vec::with_capacity(TILE_COUNT);
        for &raw_index in &RAW_TO_GRID {
            let item = raw_slots
                .get_mut(raw_index)
                .and_then(Option::take)
                .ok_or_else(|| {
                    invalid_parameter("raw_to_grid", &raw_index, &"raw tile used more than once")
                })?;
            ordered.push(item);
        }

        let slots = Array2::from_shape_vec((GRID_ARITY, GRID_ARITY), ordered).map_err(|e| {
            invalid_parameter("tile_set", &TILE_COUNT, &e)
        })?;
        Ok(Self { slots })
    }

    /// Item at grid position (`row`, `col`)
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.slots.get([row, col])
    }

    /// Iterate over `(row, col, item)` in grid-slot order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &T)> {
        self.slots
            .indexed_iter()
            .map(|((row, col), item)| (row, col, item))
    }

    /// Transform every item, keeping its slot
    ///
    /// # Errors
    ///
    /// Returns the first error produced by `f`, in grid-slot order
    pub fn try_map<U, F>(&self, mut f: F) -> Result<TileSet<U>>
    where
        F: FnMut(&T) -> Result<U>,
    {
        let mut mapped = Vec::with_capacity(TILE_COUNT);
        for item in &self.slots {
            mapped.push(f(item)?);
        }
        let slots = Array2::from_shape_vec((GRID_ARITY, GRID_ARITY), mapped).map_err(|e| {
            invalid_parameter("tile_set", &TILE_COUNT, &e)
        })?;
        Ok(TileSet { slots })
    }
}
