//! Movement domain: dash phase machine and aim impulse.
//!
//! A dash runs `Ready -> Anticipating -> Dashing -> Cooldown -> Ready`.
//! Only the current phase owns a deadline; the next one is armed when it
//! expires, so phases of one dash can never fire out of order.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct DashTuning {
    pub anticipation: Duration,
    pub active: Duration,
    pub cooldown: Duration,
    /// Longest aim vector honoured, in world pixels
    pub max_distance: f32,
    pub speed_modifier: f32,
}

impl Default for DashTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl DashTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        let dash = &config.dash;
        let active = Duration::from_millis(dash.duration_ms);
        Self {
            anticipation: active / dash.anticipation_divisor.max(1),
            active,
            cooldown: Duration::from_millis(dash.cooldown_ms),
            max_distance: dash.max_distance_tiles * config.playground.tile_size,
            speed_modifier: dash.speed_modifier,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashPhase {
    #[default]
    Ready,
    Anticipating,
    Dashing,
    Cooldown,
}

/// Phase change reported by [`DashController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashTransition {
    /// Anticipation is over: apply the impulse
    Launch,
    /// The dash window closed: stop the character
    End,
    /// Cooldown elapsed
    Ready,
}

#[derive(Component, Debug, Default)]
pub struct DashController {
    phase: DashPhase,
    deadline: Timer,
    /// Bumped on reset so a caller holding an old value can tell the dash
    /// it started is gone.
    generation: u32,
}

impl DashController {
    pub fn phase(&self) -> DashPhase {
        self.phase
    }

    pub fn generation(&self) -> u32 {
        self.generation
    }

    pub fn can_dash(&self) -> bool {
        self.phase == DashPhase::Ready
    }

    /// Friction and speed caps are suspended in this phase.
    pub fn is_dashing(&self) -> bool {
        self.phase == DashPhase::Dashing
    }

    /// Movement input is ignored from trigger until the dash ends.
    pub fn blocks_movement(&self) -> bool {
        matches!(self.phase, DashPhase::Anticipating | DashPhase::Dashing)
    }

    /// Start anticipating. Dropped, not queued, when a dash is already in
    /// progress or the character is against an edge.
    pub fn try_trigger(&mut self, collision_active: bool, tuning: &DashTuning) -> bool {
        if !self.can_dash() || collision_active {
            return false;
        }
        self.enter(DashPhase::Anticipating, tuning.anticipation);
        true
    }

    /// Advance the current deadline by `delta`. At most one transition
    /// happens per call.
    pub fn tick(&mut self, delta: Duration, tuning: &DashTuning) -> Option<DashTransition> {
        if self.phase == DashPhase::Ready {
            return None;
        }

        self.deadline.tick(delta);
        if !self.deadline.just_finished() {
            return None;
        }

        match self.phase {
            DashPhase::Anticipating => {
                self.enter(DashPhase::Dashing, tuning.active);
                Some(DashTransition::Launch)
            }
            DashPhase::Dashing => {
                self.enter(DashPhase::Cooldown, tuning.cooldown);
                Some(DashTransition::End)
            }
            DashPhase::Cooldown => {
                self.phase = DashPhase::Ready;
                Some(DashTransition::Ready)
            }
            DashPhase::Ready => None,
        }
    }

    /// Abandon any dash in flight.
    pub fn reset(&mut self) {
        self.phase = DashPhase::Ready;
        self.deadline = Timer::default();
        self.generation = self.generation.wrapping_add(1);
    }

    fn enter(&mut self, phase: DashPhase, duration: Duration) {
        self.phase = phase;
        self.deadline = Timer::new(duration, TimerMode::Once);
    }
}

/// Velocity added when a dash launches. The aim vector is capped to
/// `max_distance` (a zero vector stays zero) and then divided by
/// `speed_modifier`.
pub fn dash_impulse(aim: Vec2, max_distance: f32, speed_modifier: f32) -> Vec2 {
    if !aim.is_finite() || speed_modifier <= 0.0 {
        return Vec2::ZERO;
    }
    aim.clamp_length_max(max_distance) / speed_modifier
}
