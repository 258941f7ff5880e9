//! Per-tick kinematics: movement intent, friction, speed caps, position
//! integration and playground edge checks.
//!
//! Everything here is plain arithmetic on `Vec2`/`f32` so the systems stay
//! thin and the rules can be exercised without an `App`.

use bevy::prelude::*;

use crate::movement::components::CollisionFlags;
use crate::movement::resources::{MovementInput, MovementTuning};
use crate::playground::Bounds;

/// Move `v` toward zero by `friction`, stopping at exactly zero.
pub fn apply_friction(v: f32, friction: f32) -> f32 {
    if v > 0.0 {
        (v - friction).max(0.0)
    } else if v < 0.0 {
        (v + friction).min(0.0)
    } else {
        0.0
    }
}

/// Zero out residual speed to avoid idle/walk animation flicker.
pub fn snap_idle(v: f32, threshold: f32) -> f32 {
    if v.abs() < threshold { 0.0 } else { v }
}

pub fn clamp_speed(v: f32, max_speed: f32) -> f32 {
    v.clamp(-max_speed, max_speed)
}

/// Add held-direction intent to `velocity`. Directions whose edge is
/// blocked are skipped for this tick.
pub fn apply_move_intent(
    velocity: Vec2,
    input: &MovementInput,
    collision: &CollisionFlags,
    tuning: &MovementTuning,
    sprinting: bool,
) -> Vec2 {
    let step = tuning.speed_increment;
    let cap = tuning.max_speed(sprinting);
    let mut v = velocity;

    if input.left && !collision.left {
        v.x = clamp_speed(v.x - step, cap);
    }
    if input.right && !collision.right {
        v.x = clamp_speed(v.x + step, cap);
    }
    if input.up && !collision.up {
        v.y = clamp_speed(v.y - step, cap);
    }
    if input.down && !collision.down {
        v.y = clamp_speed(v.y + step, cap);
    }

    v
}

/// Friction, idle snap and speed cap for one tick. Not applied while dashing.
pub fn settle_velocity(velocity: Vec2, tuning: &MovementTuning, sprinting: bool) -> Vec2 {
    let threshold = tuning.idle_threshold();
    let cap = tuning.max_speed(sprinting);
    let settle = |v: f32| clamp_speed(snap_idle(apply_friction(v, tuning.friction), threshold), cap);
    Vec2::new(settle(velocity.x), settle(velocity.y))
}

pub fn integrate(position: Vec2, velocity: Vec2) -> Vec2 {
    position + velocity
}

/// Result of checking one position against the playground edges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundsCheck {
    pub flags: CollisionFlags,
    /// Position pulled back onto the edge it crossed
    pub position: Vec2,
}

/// Compare the hitbox against `bounds`. Touching an edge counts as a
/// collision so a character resting on the wall keeps the flag set.
pub fn check_bounds(position: Vec2, half_extent: Vec2, bounds: &Bounds) -> BoundsCheck {
    let mut flags = CollisionFlags::default();
    let mut clamped = position;

    if position.x - half_extent.x <= bounds.min.x {
        flags.left = true;
        clamped.x = bounds.min.x + half_extent.x;
    } else if position.x + half_extent.x >= bounds.max.x {
        flags.right = true;
        clamped.x = bounds.max.x - half_extent.x;
    }

    if position.y - half_extent.y <= bounds.min.y {
        flags.up = true;
        clamped.y = bounds.min.y + half_extent.y;
    } else if position.y + half_extent.y >= bounds.max.y {
        flags.down = true;
        clamped.y = bounds.max.y - half_extent.y;
    }

    BoundsCheck {
        flags,
        position: clamped,
    }
}

/// Zero the velocity on every axis with a set collision flag.
pub fn block_velocity(velocity: Vec2, flags: &CollisionFlags) -> Vec2 {
    Vec2::new(
        if flags.blocks_x() { 0.0 } else { velocity.x },
        if flags.blocks_y() { 0.0 } else { velocity.y },
    )
}
