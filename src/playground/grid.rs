//! Playground domain: the static tile grid and its world-space bounds.

use bevy::prelude::*;
use rand::Rng;

use crate::content::PlaygroundDef;

/// Axis-aligned walkable area in world pixels (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

/// Tile-type grid generated once at startup and never mutated.
#[derive(Resource, Debug, Clone)]
pub struct Playground {
    pub tile_size: f32,
    pub rows: usize,
    pub cols: usize,
    pub solid_border: bool,
    /// Row-major palette indices
    tiles: Vec<u8>,
}

impl Playground {
    /// Fill the grid from `rng`. Interior tiles draw from every palette
    /// index except the last, which is reserved for the border ring.
    pub fn generate(def: &PlaygroundDef, rng: &mut impl Rng) -> Self {
        let border_index = def.palette.len().saturating_sub(1) as u8;
        let interior_choices = border_index.max(1);
        let mut tiles = Vec::with_capacity(def.rows * def.cols);

        for row in 0..def.rows {
            for col in 0..def.cols {
                let on_edge = row == 0 || col == 0 || row + 1 == def.rows || col + 1 == def.cols;
                let tile = if def.solid_border && on_edge {
                    border_index
                } else {
                    rng.random_range(0..interior_choices)
                };
                tiles.push(tile);
            }
        }

        Self {
            tile_size: def.tile_size,
            rows: def.rows,
            cols: def.cols,
            solid_border: def.solid_border,
            tiles,
        }
    }

    pub fn tile(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.tiles.get(row * self.cols + col).copied()
    }

    /// Iterate `(row, col, tile)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .map(|(i, &tile)| (i / self.cols, i % self.cols, tile))
    }

    pub fn world_size(&self) -> Vec2 {
        Vec2::new(
            self.cols as f32 * self.tile_size,
            self.rows as f32 * self.tile_size,
        )
    }

    /// World-space edges the character may not cross. A solid border
    /// shrinks the area by one tile on every side.
    pub fn bounds(&self) -> Bounds {
        let inset = if self.solid_border {
            self.tile_size
        } else {
            0.0
        };
        Bounds {
            min: Vec2::splat(inset),
            max: self.world_size() - Vec2::splat(inset),
        }
    }

    pub fn centre(&self) -> Vec2 {
        self.world_size() / 2.0
    }

    /// World-space centre of a tile.
    pub fn tile_centre(&self, row: usize, col: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.tile_size,
            (row as f32 + 0.5) * self.tile_size,
        )
    }
}
