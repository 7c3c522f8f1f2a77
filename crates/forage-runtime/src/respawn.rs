//! Resource Respawn Schedule.
//!
//! Maps each harvested cell to the step at which it regrows. The map is
//! ordered by cell so that due entries are always processed in the same order
//! and consume randomness deterministically.

use forage_core::types::*;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Pending regrowth, keyed by cell.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RespawnSchedule {
    pending: BTreeMap<Cell, Step>,
}

impl RespawnSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record that `cell` regrows at step `due`, replacing any earlier entry.
    pub fn schedule(&mut self, cell: Cell, due: Step) {
        self.pending.insert(cell, due);
    }

    /// Drop any entry for `cell`.
    pub fn cancel(&mut self, cell: Cell) -> Option<Step> {
        self.pending.remove(&cell)
    }

    /// Remove and return every cell whose due step is at or before `step`.
    pub fn take_due(&mut self, step: Step) -> Vec<Cell> {
        let due: Vec<Cell> = self
            .pending
            .iter()
            .filter(|(_, at)| **at <= step)
            .map(|(cell, _)| *cell)
            .collect();
        for cell in &due {
            self.pending.remove(cell);
        }
        due
    }

    pub fn due_at(&self, cell: Cell) -> Option<Step> {
        self.pending.get(&cell).copied()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.pending.contains_key(&cell)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Cell, Step)> + '_ {
        self.pending.iter().map(|(cell, at)| (*cell, *at))
    }
}
