mod camera;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod movement;
mod playground;
mod sprites;

use bevy::prelude::*;
use bevy::window::WindowResolution;
use std::path::Path;

use crate::content::{CONFIG_PATH, ContentPlugin};

fn main() -> AppExit {
    let content = ContentPlugin::load(Path::new(CONFIG_PATH));
    let screen = content.config().screen.clone();
    let scale = screen.window_scale;

    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: screen.title.clone(),
                    resolution: WindowResolution::new(
                        (screen.width as f32 * scale) as u32,
                        (screen.height as f32 * scale) as u32,
                    ),
                    resizable: false,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .insert_resource(Time::<Fixed>::from_hz(screen.ticks_per_second))
    .add_plugins((
        core::CorePlugin,
        content,
        playground::PlaygroundPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        sprites::SpritesPlugin,
        camera::CameraPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
