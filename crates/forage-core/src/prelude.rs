//! Forage Core Prelude — convenient imports for common usage.
//!
//! ```rust
//! use forage_core::prelude::*;
//! ```

pub use crate::types::{AntAction, Cell, ColonyId, Direction, ResourceKind, Step, Tile};

pub use crate::field::{PheromoneField, ResourceGrid};

pub use crate::environment::Environment;

pub use crate::config::SimConfig;

pub use crate::error::{ConfigError, ForageError, Result};
