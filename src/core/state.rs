//! Core domain: game state definitions for the startup flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Configuration is being checked
    #[default]
    Boot,
    /// Waiting on the sprite sheet
    Loading,
    /// Simulation ticks are running
    Run,
}

/// Ordered phases of one simulation tick in `FixedUpdate`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone, Copy)]
pub enum TickSet {
    /// Advance the tick counter and sample input
    Input,
    /// Fire expired dash/attack deadlines
    Timers,
    /// Recompute boundary collision flags
    Collision,
    /// Movement intent, dash and attack triggers
    Actions,
    /// Position and friction
    Integrate,
    /// Camera tracking
    Follow,
}
