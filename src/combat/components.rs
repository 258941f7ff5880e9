//! Combat domain: attack timing and combo tracking.

use bevy::prelude::*;
use std::time::Duration;

use crate::combat::resources::AttackTuning;

/// What happened during one [`AttackController::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AttackTick {
    /// The attack animation ran out and the combo advanced
    pub finished: bool,
    /// No follow-up came in time and the combo went back to zero
    pub combo_reset: bool,
}

/// Attack state for one character.
///
/// Two deadlines run independently: the attack itself, and the combo
/// window that decays the combo index. Each trigger re-arms the combo
/// window, so only the most recent attack can reset the combo.
#[derive(Component, Debug, Default)]
pub struct AttackController {
    attacking: bool,
    combo_index: u32,
    attack_timer: Timer,
    combo_timer: Option<Timer>,
}

impl AttackController {
    pub fn is_attacking(&self) -> bool {
        self.attacking
    }

    /// Horizontal offset of the attack frame on the sprite sheet.
    pub fn combo_index(&self) -> u32 {
        self.combo_index
    }

    pub fn try_trigger(&mut self, tuning: &AttackTuning) -> bool {
        if self.attacking {
            return false;
        }

        self.attacking = true;
        if self.combo_index > tuning.combo_max {
            self.combo_index = 0;
        }
        self.attack_timer = Timer::new(tuning.duration, TimerMode::Once);
        self.combo_timer = Some(Timer::new(tuning.combo_window, TimerMode::Once));
        true
    }

    pub fn tick(&mut self, delta: Duration, tuning: &AttackTuning) -> AttackTick {
        let mut result = AttackTick::default();

        if let Some(timer) = self.combo_timer.as_mut() {
            timer.tick(delta);
            if timer.just_finished() {
                self.combo_timer = None;
                self.combo_index = 0;
                result.combo_reset = true;
            }
        }

        if self.attacking {
            self.attack_timer.tick(delta);
            if self.attack_timer.just_finished() {
                self.attacking = false;
                self.combo_index = self.combo_index.saturating_add(tuning.combo_step);
                result.finished = true;
            }
        }

        result
    }
}
