//! Movement domain: components for the player's kinematic state.

use bevy::prelude::*;

#[derive(Component, Debug)]
pub struct Player;

/// Simulation position in world pixels, y growing downward.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct WorldPosition(pub Vec2);

/// Per-tick displacement in world pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity(pub Vec2);

/// Half width and height of the character used against playground edges.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Hitbox(pub Vec2);

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Locomotion {
    pub sprinting: bool,
}

/// Which playground edges the character is touching this tick.
/// Recomputed from position every tick, never carried over.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollisionFlags {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl CollisionFlags {
    pub fn any(&self) -> bool {
        self.left || self.right || self.up || self.down
    }

    pub fn blocks_x(&self) -> bool {
        self.left || self.right
    }

    pub fn blocks_y(&self) -> bool {
        self.up || self.down
    }
}
