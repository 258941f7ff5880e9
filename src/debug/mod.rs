//! Developer overlay: selected sprite rect, animation index and FPS.
//!
//! Compiled only with the `dev-tools` feature.

mod state;
mod systems;
mod ui;


use bevy::diagnostic::FrameTimeDiagnosticsPlugin;
use bevy::prelude::*;

pub use state::DebugState;
pub use ui::{DebugInfoOverlay, format_overlay};

use crate::core::GameState;
use crate::debug::systems::{toggle_debug_info, update_debug_info_overlay};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        if !app.is_plugin_added::<FrameTimeDiagnosticsPlugin>() {
            app.add_plugins(FrameTimeDiagnosticsPlugin::default());
        }

        app.init_resource::<DebugState>().add_systems(
            Update,
            (toggle_debug_info, update_debug_info_overlay)
                .chain()
                .run_if(in_state(GameState::Run)),
        );
    }
}
