//! Core domain: game state, tick ordering and plugin wiring.

mod resources;
mod state;
mod systems;

pub use resources::TickCounter;
pub use state::{GameState, TickSet};

use bevy::prelude::*;

use crate::core::systems::{advance_tick, log_run_started};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<TickCounter>()
            .configure_sets(
                FixedUpdate,
                (
                    TickSet::Input,
                    TickSet::Timers,
                    TickSet::Collision,
                    TickSet::Actions,
                    TickSet::Integrate,
                    TickSet::Follow,
                )
                    .chain()
                    .run_if(in_state(GameState::Run)),
            )
            .add_systems(OnEnter(GameState::Run), log_run_started)
            .add_systems(FixedUpdate, advance_tick.in_set(TickSet::Input));
    }
}
