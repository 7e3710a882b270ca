//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Session state. There is no paused state in the core; a paused game
/// simply stops calling `tick`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionPhase {
    /// Player alive, systems running.
    #[default]
    Active,
    /// Player touched an enemy. Ticks are no-ops until a new session starts.
    PlayerDied,
}
