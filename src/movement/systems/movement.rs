//! Movement domain: locomotion systems for intent, dashing and integration.

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::movement::dash::{DashController, DashTransition, DashTuning, dash_impulse};
use crate::movement::kinematics::{apply_move_intent, integrate, settle_velocity};
use crate::movement::{
    CollisionFlags, Locomotion, MovementInput, MovementTuning, Player, Velocity, WorldPosition,
};

/// Fire expired dash deadlines before anything else reads the dash phase.
pub(crate) fn update_dash_timers(
    time: Res<Time>,
    tuning: Res<DashTuning>,
    config: Res<GameConfig>,
    input: Res<MovementInput>,
    mut query: Query<(&mut DashController, &mut Velocity), With<Player>>,
) {
    let centre = config.screen.centre();

    for (mut dash, mut velocity) in &mut query {
        match dash.tick(time.delta(), &tuning) {
            Some(DashTransition::Launch) => {
                // Aim is taken now, not at trigger time.
                let aim = input.pointer_or(centre) - centre;
                let impulse = dash_impulse(aim, tuning.max_distance, tuning.speed_modifier);
                velocity.0 += impulse;
                debug!("Dash launched: aim={:?}, impulse={:?}", aim, impulse);
            }
            Some(DashTransition::End) => {
                velocity.0 = Vec2::ZERO;
                debug!("Dash ended, cooling down");
            }
            Some(DashTransition::Ready) => {
                debug!("Dash ready");
            }
            None => {}
        }
    }
}

pub(crate) fn apply_movement_intent(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut Velocity,
            &mut Locomotion,
            &CollisionFlags,
            &DashController,
        ),
        With<Player>,
    >,
) {
    for (mut velocity, mut locomotion, flags, dash) in &mut query {
        locomotion.sprinting = input.sprint && tuning.sprint_enabled;

        if dash.blocks_movement() {
            continue;
        }

        velocity.0 = apply_move_intent(velocity.0, &input, flags, &tuning, locomotion.sprinting);
    }
}

pub(crate) fn trigger_dash(
    input: Res<MovementInput>,
    tuning: Res<DashTuning>,
    mut query: Query<(&mut DashController, &CollisionFlags), With<Player>>,
) {
    if !input.dash {
        return;
    }

    for (mut dash, flags) in &mut query {
        if dash.try_trigger(flags.any(), &tuning) {
            debug!("Dash anticipating (generation {})", dash.generation());
        }
    }
}

/// Move by the current velocity, then apply friction unless dashing.
pub(crate) fn integrate_motion(
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut WorldPosition,
            &mut Velocity,
            &Locomotion,
            &DashController,
        ),
        With<Player>,
    >,
) {
    for (mut position, mut velocity, locomotion, dash) in &mut query {
        position.0 = integrate(position.0, velocity.0);

        if !dash.is_dashing() {
            velocity.0 = settle_velocity(velocity.0, &tuning, locomotion.sprinting);
        }
    }
}
