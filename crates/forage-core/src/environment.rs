//! Environment — the shared world every ant senses and modifies.
//!
//! Ants never talk to each other. They read the Grid Field and their colony's
//! Pheromone Field, pick up resources and lay trail, and all coordination
//! emerges from those edits.

use crate::types::*;

/// The agent-facing view of the world.
///
/// Every cell handed to these methods is expected to lie on the grid; cells
/// produced by [`Cell::step`] always do.
pub trait Environment {
    /// Side length of the square grid.
    fn grid_size(&self) -> usize;

    /// Fixed home cell of a colony.
    fn nest(&self, colony: ColonyId) -> Cell;

    /// Contents of a cell.
    fn tile(&self, cell: Cell) -> Tile;

    /// Harvest the resource at `cell`.
    ///
    /// Empties the cell and schedules it to regrow at `step` plus the respawn
    /// delay. Returns `None` and changes nothing if the cell is empty.
    fn pick_up(&mut self, cell: Cell, step: Step) -> Option<ResourceKind>;

    /// Trail intensity of a colony's pheromone at a cell.
    fn pheromone(&self, colony: ColonyId, cell: Cell) -> f64;

    /// Lay one fixed-strength pheromone deposit at a cell.
    fn deposit_pheromone(&mut self, colony: ColonyId, cell: Cell);
}
