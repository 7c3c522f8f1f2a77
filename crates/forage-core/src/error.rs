//! Error types for forage operations.
//!
//! The simulation is purely in-memory, so the only failure is a bad
//! configuration, caught before any state is built.

use thiserror::Error;

/// Result type for forage operations.
pub type Result<T> = std::result::Result<T, ForageError>;

/// Errors that can occur while building a simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ForageError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

/// Reasons a [`SimConfig`](crate::config::SimConfig) is rejected.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    EmptyGrid,
    #[error("grid size {0} is too large")]
    GridTooLarge(usize),
    #[error("{field} must be finite and non-negative, got {value}")]
    InvalidRate { field: &'static str, value: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ForageError::from(ConfigError::InvalidRate {
            field: "pheromone_decay",
            value: -1.0,
        });
        assert_eq!(
            err.to_string(),
            "invalid configuration: pheromone_decay must be finite and non-negative, got -1"
        );
        assert_eq!(
            ForageError::from(ConfigError::EmptyGrid).to_string(),
            "invalid configuration: grid size must be at least 1"
        );
    }
}
