//! Scores, statistics and serializable snapshots of a run.

use forage_core::config::SimConfig;
use forage_core::types::*;
use serde::{Deserialize, Serialize};

/// Food delivered per colony.
///
/// Counters only ever increase within a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub a: u64,
    pub b: u64,
}

impl Scoreboard {
    pub fn get(&self, colony: ColonyId) -> u64 {
        match colony {
            ColonyId::A => self.a,
            ColonyId::B => self.b,
        }
    }

    /// Count one delivery for `colony`.
    pub fn record_delivery(&mut self, colony: ColonyId) {
        match colony {
            ColonyId::A => self.a += 1,
            ColonyId::B => self.b += 1,
        }
    }

    pub fn total(&self) -> u64 {
        self.a + self.b
    }

    /// The colony with the higher score, `None` on a tie.
    pub fn leader(&self) -> Option<ColonyId> {
        match self.a.cmp(&self.b) {
            std::cmp::Ordering::Greater => Some(ColonyId::A),
            std::cmp::Ordering::Less => Some(ColonyId::B),
            std::cmp::Ordering::Equal => None,
        }
    }
}

/// Summary counters for a run at a point in time.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationStats {
    pub step: Step,
    pub scores: Scoreboard,
    pub resources_on_grid: usize,
    pub pending_respawns: usize,
    /// Ants carrying food, indexed by `ColonyId::index`.
    pub carrying: [usize; 2],
    /// Sum of each colony's pheromone field.
    pub pheromone_totals: [f64; 2],
}

/// One ant as seen from outside.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AntSnapshot {
    pub colony: ColonyId,
    /// Position within its colony's creation order.
    pub index: usize,
    pub position: Cell,
    pub has_food: bool,
}

/// One colony's pheromone field, one row per `y`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PheromoneSnapshot {
    pub colony: ColonyId,
    pub values: Vec<Vec<f64>>,
}

/// A complete serializable picture of a run between steps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationSnapshot {
    pub config: SimConfig,
    pub seed: u64,
    pub step: Step,
    pub grid_size: usize,
    pub nests: Vec<Cell>,
    pub scores: Scoreboard,
    pub ants: Vec<AntSnapshot>,
    pub resources: Vec<(Cell, ResourceKind)>,
    pub pending_respawns: Vec<(Cell, Step)>,
    pub pheromones: Vec<PheromoneSnapshot>,
    pub stats: SimulationStats,
}

impl SimulationSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
