//! Combat domain: attack timing, combo tracking and the attack effect hook.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{AttackController, AttackTick};
pub use events::AttackPerformed;
pub use resources::AttackTuning;
pub use systems::{AttackEffect, resolve_attack_effect};

use bevy::prelude::*;

use crate::combat::systems::{
    apply_attack_effects, configure_attacks, trigger_attack, update_attack_timers,
};
use crate::core::TickSet;

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<AttackTuning>()
            .add_message::<AttackPerformed>()
            .add_systems(Startup, configure_attacks)
            .add_systems(FixedUpdate, update_attack_timers.in_set(TickSet::Timers))
            .add_systems(
                FixedUpdate,
                (trigger_attack, apply_attack_effects)
                    .chain()
                    .in_set(TickSet::Actions),
            );
    }
}
