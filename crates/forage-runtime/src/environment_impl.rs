//! Concrete implementation of the Environment trait.
//!
//! In-memory grid world with:
//! - Grid Field as a dense `ResourceGrid`
//! - One `PheromoneField` per colony, indexed by `ColonyId::index`
//! - Respawn schedule as an ordered map keyed by cell
//! - Nest coordinates fixed at construction

use crate::respawn::RespawnSchedule;
use forage_core::config::SimConfig;
use forage_core::environment::Environment;
use forage_core::field::{PheromoneField, ResourceGrid};
use forage_core::types::*;
use rand::Rng;
use tracing::trace;

/// The shared world of one run.
///
/// Owns the Grid Field, both Pheromone Fields and the respawn schedule. A
/// cell is never both holding a resource and pending respawn.
#[derive(Debug, Clone)]
pub struct GridEnvironment {
    size: usize,
    grid: ResourceGrid,
    pheromones: [PheromoneField; 2],
    respawns: RespawnSchedule,
    nests: [Cell; 2],

    pheromone_decay: f64,
    pheromone_strength: f64,
    respawn_delay: Step,
}

impl GridEnvironment {
    /// An empty world with no resources. `config` must already be validated.
    pub fn new(config: &SimConfig) -> Self {
        let size = config.grid_size;
        Self {
            size,
            grid: ResourceGrid::new(size),
            pheromones: [PheromoneField::new(size), PheromoneField::new(size)],
            respawns: RespawnSchedule::new(),
            nests: ColonyId::ALL.map(|c| c.nest(size)),
            pheromone_decay: config.pheromone_decay,
            pheromone_strength: config.pheromone_strength,
            respawn_delay: config.respawn_delay,
        }
    }

    /// A world seeded with `config.num_resources` placement attempts.
    pub fn populated<R: Rng + ?Sized>(config: &SimConfig, rng: &mut R) -> Self {
        let mut env = Self::new(config);
        env.spawn_resources(config.num_resources, rng);
        env
    }

    /// Make `count` random placement attempts.
    ///
    /// Each attempt picks a uniformly random cell and, unless it is a nest,
    /// gives it a random resource kind. Repeat picks overwrite; skipped or
    /// repeated attempts are not retried.
    pub fn spawn_resources<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let cell = Cell::new(rng.gen_range(0..self.size), rng.gen_range(0..self.size));
            if self.nests.contains(&cell) {
                continue;
            }
            self.respawns.cancel(cell);
            self.grid.set(cell, Tile::Resource(ResourceKind::random(rng)));
        }
    }

    /// Lower both pheromone fields by the decay rate, clamping at zero.
    pub fn decay_pheromones(&mut self) {
        for field in &mut self.pheromones {
            field.decay(self.pheromone_decay);
        }
    }

    /// Regrow every cell whose respawn step is at or before `step`.
    ///
    /// Nest cells are not excluded here. Returns the regrown cells.
    pub fn respawn_resources<R: Rng + ?Sized>(&mut self, step: Step, rng: &mut R) -> Vec<(Cell, ResourceKind)> {
        self.respawns
            .take_due(step)
            .into_iter()
            .map(|cell| {
                let kind = ResourceKind::random(rng);
                self.grid.set(cell, Tile::Resource(kind));
                trace!(%cell, kind = kind.label(), step, "resource respawned");
                (cell, kind)
            })
            .collect()
    }

    /// Overwrite a cell, dropping any pending respawn for it.
    pub fn set_tile(&mut self, cell: Cell, tile: Tile) {
        self.respawns.cancel(cell);
        self.grid.set(cell, tile);
    }

    pub fn grid(&self) -> &ResourceGrid {
        &self.grid
    }

    pub fn pheromone_field(&self, colony: ColonyId) -> &PheromoneField {
        &self.pheromones[colony.index()]
    }

    pub fn respawn_schedule(&self) -> &RespawnSchedule {
        &self.respawns
    }

    pub fn nests(&self) -> [Cell; 2] {
        self.nests
    }

    pub fn resource_count(&self) -> usize {
        self.grid.resource_count()
    }

    pub fn pending_respawns(&self) -> usize {
        self.respawns.len()
    }

    pub fn is_pending(&self, cell: Cell) -> bool {
        self.respawns.contains(cell)
    }

    pub fn respawn_due_at(&self, cell: Cell) -> Option<Step> {
        self.respawns.due_at(cell)
    }
}

impl Environment for GridEnvironment {
    fn grid_size(&self) -> usize {
        self.size
    }

    fn nest(&self, colony: ColonyId) -> Cell {
        self.nests[colony.index()]
    }

    fn tile(&self, cell: Cell) -> Tile {
        self.grid.get(cell).unwrap_or_default()
    }

    fn pick_up(&mut self, cell: Cell, step: Step) -> Option<ResourceKind> {
        let kind = self.tile(cell).resource()?;
        self.grid.take(cell);
        let due = step.saturating_add(self.respawn_delay);
        self.respawns.schedule(cell, due);
        trace!(%cell, kind = kind.label(), step, due, "resource picked up");
        Some(kind)
    }

    fn pheromone(&self, colony: ColonyId, cell: Cell) -> f64 {
        self.pheromones[colony.index()].intensity(cell)
    }

    fn deposit_pheromone(&mut self, colony: ColonyId, cell: Cell) {
        self.pheromones[colony.index()].deposit(cell, self.pheromone_strength);
    }
}
