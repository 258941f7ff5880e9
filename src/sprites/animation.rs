//! Animation frame selection.
//!
//! Picks the sheet region and facing for the character from its current
//! state. Selection is a pure function of state and the tick counter.

use bevy::prelude::*;

use crate::sprites::manifest::{SheetPoint, SpriteSheetLayout};

/// Region of the sprite sheet, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SpriteRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl SpriteRect {
    pub fn to_rect(self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            (self.x + self.width) as f32,
            (self.y + self.height) as f32,
        )
    }
}

/// Character state the frame choice depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub moving: bool,
    pub sprinting: bool,
    pub dashing: bool,
    pub attacking: bool,
    pub combo_index: u32,
}

/// Last frame chosen for the character.
#[derive(Component, Debug, Clone, Copy, PartialEq, Default)]
pub struct AnimationFrame {
    pub rect: SpriteRect,
    /// Position in the walk cycle
    pub index: u32,
    /// 1.0 facing right, -1.0 facing left
    pub facing: f32,
}

/// Horizontal facing. Movement wins; at rest the character looks toward
/// the pointer's side of the screen.
pub fn facing(velocity_x: f32, pointer_x: f32, centre_x: f32) -> f32 {
    if velocity_x > 0.0 {
        1.0
    } else if velocity_x < 0.0 {
        -1.0
    } else if pointer_x > centre_x {
        1.0
    } else {
        -1.0
    }
}

/// Walk cycle position for `tick`; sprinting cycles faster.
pub fn animation_index(tick: u64, sprinting: bool, layout: &SpriteSheetLayout) -> u32 {
    let ticks_per_frame = if sprinting {
        layout.sprint_ticks_per_frame
    } else {
        layout.walk_ticks_per_frame
    };
    ((tick / u64::from(ticks_per_frame.max(1))) % u64::from(layout.frame_count.max(1))) as u32
}

/// Sheet region for the current state. Attacking overrides dashing, which
/// overrides idle, which overrides the walk cycle.
pub fn select_frame(state: &FrameInput, tick: u64, layout: &SpriteSheetLayout) -> (SpriteRect, u32) {
    let index = animation_index(tick, state.sprinting, layout);

    let origin = if state.attacking {
        SheetPoint {
            x: state.combo_index,
            y: layout.attack_row,
        }
    } else if state.dashing {
        layout.dash_origin
    } else if !state.moving {
        layout.idle_origin
    } else {
        SheetPoint {
            x: layout.walk_origin.x + index * layout.frame_width,
            y: layout.walk_origin.y,
        }
    };

    (layout.rect_at(origin), index)
}
