//! Movement domain: input sampling for the tick.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::content::GameConfig;
use crate::movement::MovementInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    config: Res<GameConfig>,
    mut input: ResMut<MovementInput>,
) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.up = keyboard.pressed(KeyCode::KeyW) || keyboard.pressed(KeyCode::ArrowUp);
    input.down = keyboard.pressed(KeyCode::KeyS) || keyboard.pressed(KeyCode::ArrowDown);
    input.sprint = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::ShiftRight);
    input.dash = keyboard.pressed(KeyCode::Space);
    input.attack = mouse.pressed(MouseButton::Left);

    // Keep the last known position while the cursor is outside the window.
    if let Ok(window) = windows.single() {
        if let Some(cursor) = window.cursor_position() {
            input.pointer = Some(cursor / config.screen.window_scale);
        }
    }
}
