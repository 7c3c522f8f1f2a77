//! Forage Agents Prelude — convenient imports for common usage.
//!
//! ```rust
//! use forage_agents::prelude::*;
//! ```

pub use crate::ant::{Ant, AntState};
pub use crate::walk::{random_step, strongest_neighbor};

pub use forage_core::prelude::*;
