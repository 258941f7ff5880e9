//! Playground domain: layout generation and ground tile spawning.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::content::GameConfig;
use crate::playground::grid::Playground;
use crate::sprites::world_to_render;

/// Marker for ground tile sprites
#[derive(Component, Debug)]
pub struct GroundTile;

/// Ground sits below everything else.
const GROUND_Z: f32 = -10.0;

pub(crate) fn generate_playground(mut commands: Commands, config: Res<GameConfig>) {
    let def = &config.playground;
    let seed = def.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let playground = Playground::generate(def, &mut rng);

    info!(
        "Generated {}x{} playground with seed {} (border: {})",
        playground.rows, playground.cols, seed, playground.solid_border
    );

    commands.insert_resource(playground);
}

pub(crate) fn spawn_ground(
    mut commands: Commands,
    config: Res<GameConfig>,
    playground: Res<Playground>,
) {
    let palette = &config.playground.palette;
    let size = Vec2::splat(playground.tile_size);

    for (row, col, tile) in playground.iter() {
        let Some(&colour) = palette.get(tile as usize) else {
            warn!("Tile ({}, {}) has no palette entry {}", row, col, tile);
            continue;
        };
        let centre = playground.tile_centre(row, col);
        commands.spawn((
            GroundTile,
            Sprite::from_color(Color::from(colour), size),
            Transform::from_translation(world_to_render(centre).extend(GROUND_Z)),
        ));
    }

    debug!("Spawned {} ground tiles", playground.rows * playground.cols);
}
