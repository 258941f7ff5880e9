//! Movement domain: tuning setup and player bootstrap.

use bevy::prelude::*;

use crate::combat::AttackController;
use crate::content::GameConfig;
use crate::movement::dash::{DashController, DashTuning};
use crate::movement::{
    CollisionFlags, Hitbox, Locomotion, MovementTuning, Player, Velocity, WorldPosition,
};
use crate::playground::Playground;
use crate::sprites::{AnimationFrame, CHARACTER_Z, SpriteSheet, world_to_render};

/// Copy movement and dash numbers out of the loaded configuration.
pub(crate) fn configure_movement(
    config: Res<GameConfig>,
    mut tuning: ResMut<MovementTuning>,
    mut dash_tuning: ResMut<DashTuning>,
) {
    *tuning = MovementTuning::from_config(&config);
    *dash_tuning = DashTuning::from_config(&config);
    debug!("Movement tuning: {:?}", *tuning);
    debug!("Dash tuning: {:?}", *dash_tuning);
}

/// Spawn the character at rest in the middle of the playground.
pub(crate) fn spawn_player(
    mut commands: Commands,
    playground: Res<Playground>,
    sheet: Res<SpriteSheet>,
    existing_player: Query<Entity, With<Player>>,
) {
    if !existing_player.is_empty() {
        info!("Player already exists, skipping spawn");
        return;
    }

    let start = playground.centre();
    let frame = sheet.layout.frame_size();
    let idle = sheet.layout.idle_rect();

    commands.spawn((
        // Identity & Movement
        (
            Player,
            WorldPosition(start),
            Velocity::default(),
            Hitbox(frame / 2.0),
            Locomotion::default(),
            CollisionFlags::default(),
            DashController::default(),
        ),
        // Combat
        AttackController::default(),
        // Rendering
        AnimationFrame::default(),
        Sprite {
            image: sheet.image.clone(),
            rect: Some(idle.to_rect()),
            ..default()
        },
        Transform::from_translation(world_to_render(start).extend(CHARACTER_Z)),
    ));

    info!("Spawned player at {:?}", start);
}
