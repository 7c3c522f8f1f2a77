//! # Forage Runtime
//!
//! Environment, respawn scheduling and the step loop.
//!
//! The runtime is the world the colonies live in: it owns the grid, the
//! pheromone fields and the respawn schedule, runs every ant once per tick,
//! then decays pheromone and regrows harvested cells.
//!
//! ```rust
//! use forage_runtime::prelude::*;
//!
//! let mut sim = Simulation::new(SimConfig::new(10, 3, 5).with_seed(1)).unwrap();
//! sim.advance(50);
//! println!("A: {}  B: {}", sim.score(ColonyId::A), sim.score(ColonyId::B));
//! ```

pub mod rng;
pub mod respawn;
pub mod environment_impl;
pub mod stats;
pub mod simulation;
pub mod prelude;
