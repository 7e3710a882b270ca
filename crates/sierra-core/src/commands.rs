//! Per-frame input intents sent from the presentation layer to the simulation.

use serde::{Deserialize, Serialize};

use crate::types::Vector2D;

/// Input for a single tick. `fire_requested` and `reload_requested` are
/// edge-triggered: true only on the frame the control goes down.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct TickInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub sprint: bool,
    pub fire_requested: bool,
    pub reload_requested: bool,
    /// Aim target in world space.
    pub aim_point: Vector2D,
}

/// Raw held state of the controls, as polled from the device each frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct HeldInput {
    pub move_up: bool,
    pub move_down: bool,
    pub move_left: bool,
    pub move_right: bool,
    pub sprint: bool,
    pub fire_held: bool,
    pub reload_held: bool,
    pub aim_point: Vector2D,
}

/// Turns held controls into edge-triggered `TickInput`.
#[derive(Debug, Clone, Copy, Default)]
pub struct InputLatch {
    fire_was_held: bool,
    reload_was_held: bool,
}

impl InputLatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build this frame's intents. Movement and sprint pass through as
    /// held; fire and reload fire once per press.
    pub fn latch(&mut self, held: HeldInput) -> TickInput {
        let fire_requested = held.fire_held && !self.fire_was_held;
        let reload_requested = held.reload_held && !self.reload_was_held;
        self.fire_was_held = held.fire_held;
        self.reload_was_held = held.reload_held;

        TickInput {
            move_up: held.move_up,
            move_down: held.move_down,
            move_left: held.move_left,
            move_right: held.move_right,
            sprint: held.sprint,
            fire_requested,
            reload_requested,
            aim_point: held.aim_point,
        }
    }

    /// Forget previous held state (e.g. after a new session starts).
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
