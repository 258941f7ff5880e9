//! Sprites module: character sheet loading and frame selection.
//!
//! This module handles:
//! - Loading the sprite-sheet manifest from JSON
//! - Loading the sheet image and failing hard if it is missing
//! - Choosing the sheet region and facing every frame
//! - Mapping world positions onto render transforms

pub mod animation;
mod loading;
pub mod manifest;
mod render;

#[cfg(test)]
mod tests;

use bevy::prelude::*;

pub use animation::{AnimationFrame, FrameInput, SpriteRect, facing, select_frame};
pub use loading::SpriteSheet;
pub use manifest::{SpriteSheetLayout, load_manifest};
pub use render::{CHARACTER_Z, world_to_render};

use crate::core::GameState;
use crate::sprites::loading::{load_sprite_sheet, watch_sprite_sheet};
use crate::sprites::render::{sync_world_transforms, update_player_frame};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Loading), load_sprite_sheet)
            .add_systems(
                Update,
                watch_sprite_sheet.run_if(in_state(GameState::Loading)),
            )
            .add_systems(
                Update,
                (update_player_frame, sync_world_transforms).run_if(in_state(GameState::Run)),
            );
    }
}
