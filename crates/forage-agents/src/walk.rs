//! Movement primitives.
//!
//! Both moves are a single orthogonal step on the torus, so an ant can never
//! leave the grid.

use forage_core::environment::Environment;
use forage_core::types::*;
use rand::Rng;

/// One uniformly random orthogonal step.
pub fn random_step<R: Rng + ?Sized>(from: Cell, grid_size: usize, rng: &mut R) -> Cell {
    from.step(Direction::random(rng), grid_size)
}

/// The neighbour holding the most of `colony`'s pheromone.
///
/// Neighbours are scanned in [`Direction::SCAN_ORDER`] and a neighbour only
/// wins if it is strictly stronger than everything before it, starting from
/// zero. Returns `None` when no neighbour holds any pheromone.
pub fn strongest_neighbor(env: &dyn Environment, colony: ColonyId, from: Cell) -> Option<Cell> {
    let mut best = None;
    let mut threshold = 0.0;
    for (_, cell) in from.neighbors(env.grid_size()) {
        let intensity = env.pheromone(colony, cell);
        if intensity > threshold {
            threshold = intensity;
            best = Some(cell);
        }
    }
    best
}
