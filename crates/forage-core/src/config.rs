//! Run configuration.
//!
//! `SimConfig` gathers every tunable of a run in one place. It is checked once
//! by [`SimConfig::validate`] when a simulation is built and never again.

use crate::error::{ConfigError, ForageError, Result};
use crate::types::Step;
use serde::{Deserialize, Serialize};

/// Parameters for one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Side length of the square toroidal grid (default: 20).
    pub grid_size: usize,
    /// Ants created per colony (default: 5).
    pub ants_per_colony: usize,
    /// Random placement attempts for the initial resources (default: 15).
    pub num_resources: usize,
    /// Steps a single run advances (default: 100).
    pub steps: u64,
    /// Seed for the run's random generator. `None` picks a fresh one.
    pub seed: Option<u64>,
    /// Amount removed from every pheromone cell per step (default: 0.05).
    pub pheromone_decay: f64,
    /// Amount a returning ant lays per step (default: 3.0).
    pub pheromone_strength: f64,
    /// Steps between a pickup and the cell regrowing (default: 10).
    pub respawn_delay: Step,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            grid_size: 20,
            ants_per_colony: 5,
            num_resources: 15,
            steps: 100,
            seed: None,
            pheromone_decay: 0.05,
            pheromone_strength: 3.0,
            respawn_delay: 10,
        }
    }
}

impl SimConfig {
    /// Default parameters with the three sizing knobs set.
    pub fn new(grid_size: usize, ants_per_colony: usize, num_resources: usize) -> Self {
        Self {
            grid_size,
            ants_per_colony,
            num_resources,
            ..Self::default()
        }
    }

    pub fn with_grid_size(mut self, grid_size: usize) -> Self {
        self.grid_size = grid_size;
        self
    }

    pub fn with_ants_per_colony(mut self, ants: usize) -> Self {
        self.ants_per_colony = ants;
        self
    }

    pub fn with_resources(mut self, count: usize) -> Self {
        self.num_resources = count;
        self
    }

    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = steps;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_pheromone(mut self, strength: f64, decay: f64) -> Self {
        self.pheromone_strength = strength;
        self.pheromone_decay = decay;
        self
    }

    pub fn with_respawn_delay(mut self, delay: Step) -> Self {
        self.respawn_delay = delay;
        self
    }

    /// Check the configuration can build a simulation.
    pub fn validate(&self) -> Result<()> {
        if self.grid_size == 0 {
            return Err(ConfigError::EmptyGrid.into());
        }
        // Cells are addressed with i64 arithmetic when wrapping.
        let too_large = self.grid_size > i64::MAX as usize
            || self.grid_size.checked_mul(self.grid_size).is_none();
        if too_large {
            return Err(ConfigError::GridTooLarge(self.grid_size).into());
        }
        check_rate("pheromone_decay", self.pheromone_decay)?;
        check_rate("pheromone_strength", self.pheromone_strength)?;
        Ok(())
    }
}

fn check_rate(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ForageError::InvalidConfiguration(ConfigError::InvalidRate { field, value }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = SimConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.grid_size, 20);
        assert_eq!(config.respawn_delay, 10);
    }

    #[test]
    fn zero_grid_is_rejected() {
        let err = SimConfig::new(0, 3, 5).validate().unwrap_err();
        assert_eq!(err, ForageError::InvalidConfiguration(ConfigError::EmptyGrid));
    }

    #[test]
    fn overflowing_grid_is_rejected() {
        let err = SimConfig::default().with_grid_size(usize::MAX).validate().unwrap_err();
        assert!(matches!(
            err,
            ForageError::InvalidConfiguration(ConfigError::GridTooLarge(_))
        ));
    }

    #[test]
    fn bad_rates_are_rejected() {
        assert!(SimConfig::default().with_pheromone(-1.0, 0.05).validate().is_err());
        assert!(SimConfig::default().with_pheromone(3.0, f64::NAN).validate().is_err());
        assert!(SimConfig::default().with_pheromone(0.0, 0.0).validate().is_ok());
    }

    #[test]
    fn zero_counts_are_allowed() {
        assert!(SimConfig::new(1, 0, 0).validate().is_ok());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let config: SimConfig = serde_json::from_str(r#"{"grid_size": 8, "seed": 11}"#).unwrap();
        assert_eq!(config.grid_size, 8);
        assert_eq!(config.seed, Some(11));
        assert_eq!(config.ants_per_colony, 5);
        assert_eq!(config.pheromone_strength, 3.0);
    }
}
