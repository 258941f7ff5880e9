//! Character sprite sheet loading. Failing to load the sheet is fatal.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::path::Path;

use crate::content::GameConfig;
use crate::core::GameState;
use crate::sprites::manifest::{SpriteSheetLayout, load_manifest};

/// The character sheet and where its animations live.
#[derive(Resource, Debug, Clone)]
pub struct SpriteSheet {
    pub image: Handle<Image>,
    pub layout: SpriteSheetLayout,
}

pub(crate) fn load_sprite_sheet(
    mut commands: Commands,
    config: Res<GameConfig>,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    let path = Path::new(&config.sprite_manifest);
    let layout = match load_manifest(path) {
        Ok((layout, true)) => {
            info!("Loaded sprite manifest {}", path.display());
            layout
        }
        Ok((layout, false)) => {
            warn!(
                "Sprite manifest not found at {}, using built-in layout",
                path.display()
            );
            layout
        }
        Err(e) => {
            error!("{}", e);
            exit.write(AppExit::error());
            return;
        }
    };

    let image = asset_server.load(layout.image.clone());
    commands.insert_resource(SpriteSheet { image, layout });
}

/// Leave `Loading` once the sheet is in memory, or exit if it failed.
pub(crate) fn watch_sprite_sheet(
    asset_server: Res<AssetServer>,
    sheet: Option<Res<SpriteSheet>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(sheet) = sheet else {
        return;
    };

    match asset_server.load_state(sheet.image.id()) {
        LoadState::Loaded => {
            debug!("Sprite sheet {} ready", sheet.layout.image);
            next_state.set(GameState::Run);
        }
        LoadState::Failed(error) => {
            error!(
                "Failed to load character sprite sheet {}: {}",
                sheet.layout.image, error
            );
            exit.write(AppExit::error());
        }
        LoadState::NotLoaded | LoadState::Loading => {}
    }
}
