//! Debug domain: overlay visibility.

use bevy::prelude::*;

/// Resource tracking debug overlay state
#[derive(Resource, Debug)]
pub struct DebugState {
    /// Whether the sprite/FPS readout is shown
    pub show_info: bool,
}

impl Default for DebugState {
    fn default() -> Self {
        Self { show_info: true }
    }
}
