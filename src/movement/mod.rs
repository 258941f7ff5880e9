//! Movement domain: character kinematics, edge collision and dashing.

mod bootstrap;
mod components;
pub mod dash;
pub mod kinematics;
mod resources;
mod systems;


pub use components::{CollisionFlags, Hitbox, Locomotion, Player, Velocity, WorldPosition};
pub use dash::{DashController, DashPhase, DashTuning};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, TickSet};
use crate::movement::bootstrap::{configure_movement, spawn_player};
use crate::movement::systems::{
    apply_movement_intent, confine_to_playground, detect_edges, integrate_motion, read_input,
    trigger_dash, update_dash_timers,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<DashTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, configure_movement)
            .add_systems(OnEnter(GameState::Run), spawn_player)
            .add_systems(FixedUpdate, read_input.in_set(TickSet::Input))
            .add_systems(FixedUpdate, update_dash_timers.in_set(TickSet::Timers))
            .add_systems(FixedUpdate, detect_edges.in_set(TickSet::Collision))
            .add_systems(
                FixedUpdate,
                (apply_movement_intent, trigger_dash)
                    .chain()
                    .in_set(TickSet::Actions),
            )
            .add_systems(
                FixedUpdate,
                (integrate_motion, confine_to_playground)
                    .chain()
                    .in_set(TickSet::Integrate),
            );
    }
}
