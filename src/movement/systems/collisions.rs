//! Movement domain: playground edge detection.

use bevy::prelude::*;

use crate::movement::kinematics::{block_velocity, check_bounds};
use crate::movement::{CollisionFlags, Hitbox, MovementTuning, Player, Velocity, WorldPosition};
use crate::playground::Playground;

pub(crate) fn detect_edges(
    tuning: Res<MovementTuning>,
    playground: Res<Playground>,
    mut query: Query<
        (
            &mut WorldPosition,
            &mut Velocity,
            &Hitbox,
            &mut CollisionFlags,
        ),
        With<Player>,
    >,
) {
    let bounds = playground.bounds();

    for (mut position, mut velocity, hitbox, mut flags) in &mut query {
        if !tuning.collision_enabled {
            *flags = CollisionFlags::default();
            continue;
        }

        let was = *flags;
        let check = check_bounds(position.0, hitbox.0, &bounds);
        *flags = check.flags;
        position.0 = check.position;
        velocity.0 = block_velocity(velocity.0, &flags);

        if flags.any() && !was.any() {
            debug!("Hit playground edge: {:?} at {:?}", *flags, position.0);
        }
    }
}

/// Pull a position that integration carried past an edge back onto it, so
/// the rendered frame never shows the character inside a wall. Flags and
/// velocity are left for the next tick's [`detect_edges`].
pub(crate) fn confine_to_playground(
    tuning: Res<MovementTuning>,
    playground: Res<Playground>,
    mut query: Query<(&mut WorldPosition, &Hitbox), With<Player>>,
) {
    if !tuning.collision_enabled {
        return;
    }

    let bounds = playground.bounds();
    for (mut position, hitbox) in &mut query {
        let confined = check_bounds(position.0, hitbox.0, &bounds).position;
        if confined != position.0 {
            position.0 = confined;
        }
    }
}
