//! Content domain: RON-backed game configuration.
//!
//! Every tunable the simulation reads lives here. Field defaults mirror the
//! shipped `assets/data/game.ron`, so a missing file still yields a playable
//! game.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Top-level configuration loaded from `assets/data/game.ron`.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct GameConfig {
    pub screen: ScreenDef,
    pub playground: PlaygroundDef,
    pub movement: MovementDef,
    pub dash: DashDef,
    pub attack: AttackDef,
    pub features: FeatureToggles,
    /// Path of the sprite-sheet manifest, relative to the working directory.
    pub sprite_manifest: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen: ScreenDef::default(),
            playground: PlaygroundDef::default(),
            movement: MovementDef::default(),
            dash: DashDef::default(),
            attack: AttackDef::default(),
            features: FeatureToggles::default(),
            sprite_manifest: "assets/sprites/runner.json".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ScreenDef {
    /// Logical screen width in pixels
    pub width: u32,
    /// Logical screen height in pixels
    pub height: u32,
    /// Physical pixels per logical pixel
    pub window_scale: f32,
    pub ticks_per_second: f64,
    pub title: String,
}

impl Default for ScreenDef {
    fn default() -> Self {
        Self {
            width: 480,
            height: 320,
            window_scale: 4.0,
            ticks_per_second: 60.0,
            title: "Fun time".to_string(),
        }
    }
}

impl ScreenDef {
    /// Fixed reference point for aiming: the middle of the logical screen.
    pub fn centre(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

/// RGBA colour as four bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Rgba(pub u8, pub u8, pub u8, pub u8);

impl From<Rgba> for Color {
    fn from(c: Rgba) -> Self {
        Color::srgba_u8(c.0, c.1, c.2, c.3)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlaygroundDef {
    pub tile_size: f32,
    pub rows: usize,
    pub cols: usize,
    /// Tile colours. The last entry is reserved for the solid border.
    pub palette: Vec<Rgba>,
    pub solid_border: bool,
    /// Fixed layout seed; a fresh one is drawn when absent.
    pub seed: Option<u64>,
}

impl Default for PlaygroundDef {
    fn default() -> Self {
        Self {
            tile_size: 32.0,
            rows: 16,
            cols: 16,
            palette: vec![
                Rgba(0x49, 0x63, 0x8c, 0xff),
                Rgba(0x5d, 0x74, 0x99, 0xff),
                Rgba(0x2b, 0x42, 0x66, 0xff),
                Rgba(0x42, 0x5a, 0x80, 0xff),
            ],
            solid_border: true,
            seed: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementDef {
    pub walk_max_speed: f32,
    pub sprint_max_speed: f32,
    /// Velocity added per tick while a direction is held
    pub speed_increment: f32,
    /// Velocity removed per tick on each axis
    pub friction: f32,
    /// Added to `friction` to form the idle snap threshold
    pub idle_epsilon: f32,
}

impl Default for MovementDef {
    fn default() -> Self {
        Self {
            walk_max_speed: 2.35,
            sprint_max_speed: 3.5,
            speed_increment: 1.0,
            friction: 0.25,
            idle_epsilon: 0.05,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashDef {
    /// Length of the dash-active window
    pub duration_ms: u64,
    /// Anticipation lasts `duration_ms / anticipation_divisor`
    pub anticipation_divisor: u32,
    pub cooldown_ms: u64,
    /// Maximum aim length, in tiles
    pub max_distance_tiles: f32,
    /// The capped aim vector is divided by this to get the impulse
    pub speed_modifier: f32,
}

impl Default for DashDef {
    fn default() -> Self {
        Self {
            duration_ms: 450,
            anticipation_divisor: 6,
            cooldown_ms: 300,
            max_distance_tiles: 2.0,
            speed_modifier: 8.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct AttackDef {
    pub duration_ms: u64,
    pub combo_window_ms: u64,
    /// Added to the combo index after each completed attack (one sheet column)
    pub combo_step: u32,
    /// The combo index wraps to zero once it exceeds this
    pub combo_max: u32,
}

impl Default for AttackDef {
    fn default() -> Self {
        Self {
            duration_ms: 300,
            combo_window_ms: 700,
            combo_step: 32,
            combo_max: 96,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct FeatureToggles {
    pub sprint: bool,
    pub collision: bool,
    pub attack: bool,
}

impl Default for FeatureToggles {
    fn default() -> Self {
        Self {
            sprint: true,
            collision: true,
            attack: true,
        }
    }
}
