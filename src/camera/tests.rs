//! Camera module: tests for follow behaviour.

use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::*;

use super::{CameraMode, FollowCamera, follow_player};
use crate::movement::{Player, WorldPosition};

#[test]
fn test_locked_mode_sits_on_target() {
    let next = CameraMode::Locked.track(Vec2::new(10.0, 10.0), Vec2::new(256.0, 240.0));
    assert_eq!(next, Vec2::new(256.0, 240.0));
}

#[test]
fn test_follow_mirrors_player_position() {
    let mut world = World::new();
    world.spawn((Player, WorldPosition(Vec2::new(120.5, 88.0))));
    let camera = world.spawn(FollowCamera::default()).id();

    world.run_system_once(follow_player).unwrap();

    let position = world.get::<FollowCamera>(camera).unwrap().position;
    assert_eq!(position, Vec2::new(120.5, 88.0));
}

#[test]
fn test_follow_without_player_keeps_position() {
    let mut world = World::new();
    let camera = world
        .spawn(FollowCamera {
            position: Vec2::new(5.0, 6.0),
            mode: CameraMode::Locked,
        })
        .id();

    world.run_system_once(follow_player).unwrap();

    assert_eq!(
        world.get::<FollowCamera>(camera).unwrap().position,
        Vec2::new(5.0, 6.0)
    );
}
