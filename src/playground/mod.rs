//! Playground domain: static tile grid wiring and public exports.

mod grid;
mod spawn;

#[cfg(test)]
mod tests;

pub use grid::{Bounds, Playground};
pub use spawn::GroundTile;

use bevy::prelude::*;

use crate::core::GameState;
use crate::playground::spawn::{generate_playground, spawn_ground};

pub struct PlaygroundPlugin;

impl Plugin for PlaygroundPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            OnEnter(GameState::Loading),
            (generate_playground, spawn_ground).chain(),
        );
    }
}
