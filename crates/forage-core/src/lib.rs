//! # Forage Core
//!
//! Core types for a two-colony stigmergic foraging simulation.
//!
//! Two ant colonies share a square toroidal grid. Ants wander in search of
//! resources, carry them home, and lay pheromone on the way back. Other ants
//! of the same colony climb that pheromone toward the food. This crate holds
//! the pieces everything else builds on:
//!
//! - **Cells and directions** — toroidal coordinates and the four-way moves
//! - **Grid Field** — which cells hold a resource, and of which kind
//! - **Pheromone Field** — one non-negative trail-intensity array per colony
//! - **Environment** — the trait agents read and mutate while acting
//! - **SimConfig** — validated run parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use forage_core::prelude::*;
//!
//! let config = SimConfig::default().with_grid_size(10).with_seed(7);
//! assert!(config.validate().is_ok());
//!
//! let cell = Cell::new(9, 0).step(Direction::Right, 10);
//! assert_eq!(cell, Cell::new(0, 0));
//! ```

pub mod types;
pub mod field;
pub mod environment;
pub mod config;
pub mod error;
pub mod prelude;
