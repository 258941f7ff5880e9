//! Combat domain: attack input, timers and effects.

use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::combat::components::AttackController;
use crate::combat::events::AttackPerformed;
use crate::combat::resources::AttackTuning;
use crate::content::GameConfig;
use crate::movement::{MovementInput, Player, WorldPosition};

/// Result of resolving an attack against the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackEffect {
    /// There is nothing to hit yet; attacks are animation only.
    NotImplemented,
}

pub fn resolve_attack_effect(_attack: &AttackPerformed) -> AttackEffect {
    AttackEffect::NotImplemented
}

pub(crate) fn update_attack_timers(
    time: Res<Time>,
    tuning: Res<AttackTuning>,
    mut query: Query<&mut AttackController, With<Player>>,
) {
    for mut attack in &mut query {
        let result = attack.tick(time.delta(), &tuning);
        if result.combo_reset {
            debug!("Combo window expired, combo reset");
        }
        if result.finished {
            debug!("Attack finished, combo index now {}", attack.combo_index());
        }
    }
}

pub(crate) fn trigger_attack(
    input: Res<MovementInput>,
    tuning: Res<AttackTuning>,
    mut query: Query<(Entity, &WorldPosition, &mut AttackController), With<Player>>,
    mut performed: MessageWriter<AttackPerformed>,
) {
    if !input.attack || !tuning.enabled {
        return;
    }

    for (entity, position, mut attack) in &mut query {
        if attack.try_trigger(&tuning) {
            performed.write(AttackPerformed {
                attacker: entity,
                combo_index: attack.combo_index(),
                origin: position.0,
            });
        }
    }
}

pub(crate) fn apply_attack_effects(mut events: MessageReader<AttackPerformed>) {
    for event in events.read() {
        match resolve_attack_effect(event) {
            AttackEffect::NotImplemented => warn!(
                "Attack from {:?} at {:?} (combo {}) has no effect: attacks are not implemented",
                event.attacker, event.origin, event.combo_index
            ),
        }
    }
}

/// Copy attack numbers out of the loaded configuration.
pub(crate) fn configure_attacks(
    config: Res<GameConfig>,
    mut tuning: ResMut<AttackTuning>,
) {
    *tuning = AttackTuning::from_config(&config);
    debug!("Attack tuning: {:?}", *tuning);
}
