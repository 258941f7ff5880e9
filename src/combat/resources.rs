//! Combat domain: attack tuning.

use bevy::prelude::*;
use std::time::Duration;

use crate::content::GameConfig;

#[derive(Resource, Debug, Clone)]
pub struct AttackTuning {
    pub duration: Duration,
    pub combo_window: Duration,
    /// Sheet column width added per completed attack
    pub combo_step: u32,
    /// The index resets to zero on the next trigger once above this
    pub combo_max: u32,
    pub enabled: bool,
}

impl Default for AttackTuning {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}

impl AttackTuning {
    pub fn from_config(config: &GameConfig) -> Self {
        let attack = &config.attack;
        Self {
            duration: Duration::from_millis(attack.duration_ms),
            combo_window: Duration::from_millis(attack.combo_window_ms),
            combo_step: attack.combo_step,
            combo_max: attack.combo_max,
            enabled: config.features.attack,
        }
    }
}
