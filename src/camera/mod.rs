//! Camera domain: a 2D camera that follows the character.
//!
//! The follow position is updated inside the simulation tick, after
//! integration. The render transform is synced from it every frame.

#[cfg(test)]
mod tests;

use bevy::prelude::*;

use crate::content::GameConfig;
use crate::core::TickSet;
use crate::movement::{Player, WorldPosition};
use crate::sprites::world_to_render;

/// How the camera reacts to the character moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraMode {
    /// Sit exactly on the target
    #[default]
    Locked,
}

impl CameraMode {
    /// Next camera position, in world pixels.
    pub fn track(self, _current: Vec2, target: Vec2) -> Vec2 {
        match self {
            CameraMode::Locked => target,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, Default)]
pub struct FollowCamera {
    /// World-space position the camera looks at
    pub position: Vec2,
    pub mode: CameraMode,
}

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera)
            .add_systems(FixedUpdate, follow_player.in_set(TickSet::Follow))
            .add_systems(Update, sync_camera_transform);
    }
}

pub(crate) fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    let scale = config.screen.window_scale.max(f32::EPSILON);
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / scale,
            ..OrthographicProjection::default_2d()
        }),
        FollowCamera::default(),
        Transform::default(),
    ));
}

pub(crate) fn follow_player(
    player: Query<&WorldPosition, With<Player>>,
    mut cameras: Query<&mut FollowCamera>,
) {
    let Ok(target) = player.single() else {
        return;
    };

    for mut camera in &mut cameras {
        let next = camera.mode.track(camera.position, target.0);
        if next != camera.position {
            camera.position = next;
        }
    }
}

pub(crate) fn sync_camera_transform(
    mut cameras: Query<(&FollowCamera, &mut Transform), Changed<FollowCamera>>,
) {
    for (camera, mut transform) in &mut cameras {
        let render = world_to_render(camera.position);
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }
}
