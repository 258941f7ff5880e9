//! Movement domain: tuning and input resources.

use bevy::prelude::*;

use crate::content::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct MovementTuning {
    pub walk_max_speed: f32,
    pub sprint_max_speed: f32,
    pub speed_increment: f32,
    pub friction: f32,
    pub idle_epsilon: f32,
    pub sprint_enabled: bool,
    pub collision_enabled: bool,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl MovementTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        let movement = &config.movement;
        Self {
            walk_max_speed: movement.walk_max_speed,
            sprint_max_speed: movement.sprint_max_speed,
            speed_increment: movement.speed_increment,
            friction: movement.friction,
            idle_epsilon: movement.idle_epsilon,
            sprint_enabled: config.features.sprint,
            collision_enabled: config.features.collision,
        }
    }

    /// Speed cap for the current locomotion mode.
    pub fn max_speed(&self, sprinting: bool) -> f32 {
        if sprinting && self.sprint_enabled {
            self.sprint_max_speed
        } else {
            self.walk_max_speed
        }
    }

    /// Velocities smaller than this snap to zero once friction has run.
    pub fn idle_threshold(&self) -> f32 {
        self.friction + self.idle_epsilon
    }
}

/// Input sampled at the start of every tick.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
    pub sprint: bool,
    pub dash: bool,
    pub attack: bool,
    /// Last pointer position in logical screen pixels, if it was ever inside
    /// the window.
    pub pointer: Option<Vec2>,
}

impl MovementInput {
    /// Pointer position, or `fallback` when it has never been seen.
    pub fn pointer_or(&self, fallback: Vec2) -> Vec2 {
        self.pointer.unwrap_or(fallback)
    }
}
