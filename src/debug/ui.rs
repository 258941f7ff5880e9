//! Debug domain: overlay node and text formatting.

use bevy::prelude::*;

use crate::sprites::AnimationFrame;

/// Marker for the debug info overlay
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub(crate) fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(8.0),
            top: Val::Px(8.0),
            padding: UiRect::all(Val::Px(6.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}

/// Overlay text for the current frame. FPS is blank until the diagnostic
/// has a smoothed value.
pub fn format_overlay(frame: &AnimationFrame, fps: Option<f64>) -> String {
    let rect = frame.rect;
    let fps = fps.map_or_else(|| "--".to_string(), |fps| format!("{fps:.0}"));
    format!(
        "Rect: ({}, {}, {}, {})\nFrame: {}\nFPS: {}",
        rect.x, rect.y, rect.width, rect.height, frame.index, fps
    )
}
