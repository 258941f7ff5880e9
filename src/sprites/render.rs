//! Render-side sync: world positions to transforms, and frame selection.

use bevy::prelude::*;

use crate::combat::AttackController;
use crate::content::GameConfig;
use crate::core::TickCounter;
use crate::movement::{DashController, Locomotion, MovementInput, Player, Velocity, WorldPosition};
use crate::sprites::animation::{AnimationFrame, FrameInput, facing, select_frame};
use crate::sprites::loading::SpriteSheet;

/// Depth of the character above the ground tiles.
pub const CHARACTER_Z: f32 = 1.0;

/// Map y-down world pixels onto bevy's y-up translation.
pub fn world_to_render(position: Vec2) -> Vec2 {
    Vec2::new(position.x, -position.y)
}

pub(crate) fn sync_world_transforms(
    mut query: Query<(&WorldPosition, &mut Transform), Changed<WorldPosition>>,
) {
    for (position, mut transform) in &mut query {
        let render = world_to_render(position.0);
        transform.translation.x = render.x;
        transform.translation.y = render.y;
    }
}

pub(crate) fn update_player_frame(
    ticks: Res<TickCounter>,
    sheet: Res<SpriteSheet>,
    input: Res<MovementInput>,
    config: Res<GameConfig>,
    mut query: Query<
        (
            &Velocity,
            &Locomotion,
            &DashController,
            &AttackController,
            &mut AnimationFrame,
            &mut Sprite,
        ),
        With<Player>,
    >,
) {
    let centre = config.screen.centre();
    let pointer = input.pointer_or(centre);

    for (velocity, locomotion, dash, attack, mut frame, mut sprite) in &mut query {
        let state = FrameInput {
            moving: velocity.0 != Vec2::ZERO,
            sprinting: locomotion.sprinting,
            dashing: dash.blocks_movement(),
            attacking: attack.is_attacking(),
            combo_index: attack.combo_index(),
        };
        let (rect, index) = select_frame(&state, ticks.0, &sheet.layout);
        let facing_sign = facing(velocity.0.x, pointer.x, centre.x);

        *frame = AnimationFrame {
            rect,
            index,
            facing: facing_sign,
        };
        sprite.rect = Some(rect.to_rect());
        sprite.flip_x = facing_sign < 0.0;
    }
}
