//! Grid-shaped storage: the resource Grid Field and the per-colony Pheromone Fields.
//!
//! Both are dense row-major arrays over a square grid. Reads outside the
//! grid return `None`; writes outside the grid are ignored.

use crate::types::*;
use serde::{Deserialize, Serialize};

/// Square row-major array shared by both field kinds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct Square<T> {
    size: usize,
    cells: Vec<T>,
}

impl<T: Copy> Square<T> {
    fn filled(size: usize, value: T) -> Self {
        Self {
            size,
            cells: vec![value; size * size],
        }
    }

    fn index(&self, cell: Cell) -> Option<usize> {
        cell.in_bounds(self.size).then(|| cell.y * self.size + cell.x)
    }

    fn get(&self, cell: Cell) -> Option<T> {
        self.index(cell).map(|i| self.cells[i])
    }

    fn get_mut(&mut self, cell: Cell) -> Option<&mut T> {
        self.index(cell).map(|i| &mut self.cells[i])
    }

    fn cell_at(&self, index: usize) -> Cell {
        Cell::new(index % self.size, index / self.size)
    }
}

/// Resource occupancy of every cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceGrid {
    inner: Square<Tile>,
}

impl ResourceGrid {
    /// An all-empty grid.
    pub fn new(size: usize) -> Self {
        Self {
            inner: Square::filled(size, Tile::Empty),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.size
    }

    pub fn get(&self, cell: Cell) -> Option<Tile> {
        self.inner.get(cell)
    }

    pub fn set(&mut self, cell: Cell, tile: Tile) {
        if let Some(slot) = self.inner.get_mut(cell) {
            *slot = tile;
        }
    }

    /// Empty the cell and return what it held.
    pub fn take(&mut self, cell: Cell) -> Option<Tile> {
        self.inner.get_mut(cell).map(std::mem::take)
    }

    /// Cells currently holding a resource, in row-major order.
    pub fn resources(&self) -> impl Iterator<Item = (Cell, ResourceKind)> + '_ {
        self.inner
            .cells
            .iter()
            .enumerate()
            .filter_map(|(i, tile)| tile.resource().map(|kind| (self.inner.cell_at(i), kind)))
    }

    pub fn resource_count(&self) -> usize {
        self.inner.cells.iter().filter(|t| t.is_resource()).count()
    }

    /// Numeric tags, one row per `y`.
    pub fn codes(&self) -> Vec<Vec<u8>> {
        self.inner
            .cells
            .chunks(self.inner.size.max(1))
            .map(|row| row.iter().map(|t| t.code()).collect())
            .collect()
    }
}

/// Trail intensities laid by one colony.
///
/// Values never drop below zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PheromoneField {
    inner: Square<f64>,
}

impl PheromoneField {
    /// A field with no pheromone anywhere.
    pub fn new(size: usize) -> Self {
        Self {
            inner: Square::filled(size, 0.0),
        }
    }

    pub fn size(&self) -> usize {
        self.inner.size
    }

    pub fn get(&self, cell: Cell) -> Option<f64> {
        self.inner.get(cell)
    }

    /// Intensity at a cell, zero outside the grid.
    pub fn intensity(&self, cell: Cell) -> f64 {
        self.get(cell).unwrap_or(0.0)
    }

    /// Add `amount` at a cell. Non-positive amounts are ignored.
    pub fn deposit(&mut self, cell: Cell, amount: f64) {
        if amount <= 0.0 {
            return;
        }
        if let Some(value) = self.inner.get_mut(cell) {
            *value += amount;
        }
    }

    /// Lower every cell by `rate`, clamping at zero.
    pub fn decay(&mut self, rate: f64) {
        for value in &mut self.inner.cells {
            *value = (*value - rate).max(0.0);
        }
    }

    pub fn total(&self) -> f64 {
        self.inner.cells.iter().sum()
    }

    pub fn max(&self) -> f64 {
        self.inner.cells.iter().copied().fold(0.0, f64::max)
    }

    /// Smallest value in the field (zero for an empty field).
    pub fn min(&self) -> f64 {
        self.inner
            .cells
            .iter()
            .copied()
            .reduce(f64::min)
            .unwrap_or(0.0)
    }

    /// Number of cells with a positive intensity.
    pub fn marked_cells(&self) -> usize {
        self.inner.cells.iter().filter(|v| **v > 0.0).count()
    }

    /// Intensities, one row per `y`.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.inner
            .cells
            .chunks(self.inner.size.max(1))
            .map(|row| row.to_vec())
            .collect()
    }
}
