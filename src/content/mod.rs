//! Content domain: game configuration loading and validation.

mod data;
mod loader;
mod validation;

#[cfg(test)]
mod tests;

pub use data::{
    AttackDef, DashDef, FeatureToggles, GameConfig, MovementDef, PlaygroundDef, Rgba, ScreenDef,
};
pub use loader::{ConfigError, ConfigSource, load_config, parse_config};
pub use validation::{ValidationError, validate_config};

use bevy::prelude::*;
use std::path::Path;

use crate::core::GameState;

/// Default location of the game configuration.
pub const CONFIG_PATH: &str = "assets/data/game.ron";

/// Outcome of reading the configuration, reported once logging is up.
#[derive(Resource, Debug, Clone)]
pub struct ConfigStatus(pub Result<ConfigSource, String>);

/// Loads the configuration eagerly so the window and tick rate can be set
/// from it before the app is built.
pub struct ContentPlugin {
    config: GameConfig,
    status: Result<ConfigSource, String>,
}

impl ContentPlugin {
    pub fn load(path: &Path) -> Self {
        match load_config(path) {
            Ok((config, source)) => Self {
                config,
                status: Ok(source),
            },
            Err(e) => Self {
                config: GameConfig::default(),
                status: Err(e.to_string()),
            },
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(self.config.clone())
            .insert_resource(ConfigStatus(self.status.clone()))
            .add_systems(Startup, report_config_status);
    }
}

/// Log where the configuration came from and leave `Boot`, or exit if it
/// could not be loaded.
fn report_config_status(
    status: Res<ConfigStatus>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    match &status.0 {
        Ok(ConfigSource::File(file)) => {
            info!("Loaded game configuration from {}", file);
            next_state.set(GameState::Loading);
        }
        Ok(ConfigSource::Defaults(file)) => {
            warn!("Game configuration not found at {}, using defaults", file);
            next_state.set(GameState::Loading);
        }
        Err(message) => {
            error!("{}", message);
            exit.write(AppExit::error());
        }
    }
}
