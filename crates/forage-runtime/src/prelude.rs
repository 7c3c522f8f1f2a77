//! Forage Runtime Prelude — convenient imports for common usage.
//!
//! ```rust
//! use forage_runtime::prelude::*;
//! ```

// Re-export simulation
pub use crate::simulation::{ForageEvent, Simulation};

// Re-export environment
pub use crate::environment_impl::GridEnvironment;
pub use crate::respawn::RespawnSchedule;

// Re-export stats and snapshots
pub use crate::stats::{AntSnapshot, PheromoneSnapshot, Scoreboard, SimulationSnapshot, SimulationStats};

pub use crate::rng::{create_rng, SimRng};

// Re-export from agents
pub use forage_agents::prelude::*;
