//! # Forage Agents
//!
//! The ant: one member of a colony that searches for resources, carries them
//! home, and marks the way with pheromone.
//!
//! An ant is a two-state machine:
//!
//! - **Foraging** — empty-handed. Picks up whatever resource it stands on,
//!   otherwise climbs its colony's pheromone or wanders at random.
//! - **Returning** — carrying food. Delivers at its nest, otherwise lays
//!   pheromone where it stands and wanders at random.

pub mod walk;
pub mod ant;
pub mod prelude;
