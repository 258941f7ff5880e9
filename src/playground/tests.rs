//! Playground domain: tests for grid generation and bounds.

use bevy::prelude::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::Playground;
use crate::content::PlaygroundDef;

fn generate(def: &PlaygroundDef, seed: u64) -> Playground {
    Playground::generate(def, &mut ChaCha8Rng::seed_from_u64(seed))
}

#[test]
fn test_same_seed_same_layout() {
    let def = PlaygroundDef::default();
    let a: Vec<_> = generate(&def, 7).iter().collect();
    let b: Vec<_> = generate(&def, 7).iter().collect();
    assert_eq!(a, b);
}

#[test]
fn test_border_ring_uses_reserved_colour() {
    let def = PlaygroundDef::default();
    let border = (def.palette.len() - 1) as u8;
    let playground = generate(&def, 1);

    for (row, col, tile) in playground.iter() {
        let on_edge = row == 0 || col == 0 || row == def.rows - 1 || col == def.cols - 1;
        if on_edge {
            assert_eq!(tile, border, "edge tile ({row}, {col})");
        } else {
            assert!(tile < border, "interior tile ({row}, {col}) = {tile}");
        }
    }
}

#[test]
fn test_without_border_never_uses_last_colour() {
    let def = PlaygroundDef {
        solid_border: false,
        ..Default::default()
    };
    let border = (def.palette.len() - 1) as u8;
    assert!(generate(&def, 3).iter().all(|(_, _, tile)| tile < border));
}

#[test]
fn test_tile_lookup_out_of_range() {
    let def = PlaygroundDef::default();
    let playground = generate(&def, 0);
    assert!(playground.tile(0, 0).is_some());
    assert!(playground.tile(def.rows, 0).is_none());
    assert!(playground.tile(0, def.cols).is_none());
}

#[test]
fn test_bounds_shrink_with_border() {
    let mut def = PlaygroundDef::default();
    let bordered = generate(&def, 0).bounds();
    assert_eq!(bordered.min, Vec2::splat(32.0));
    assert_eq!(bordered.max, Vec2::splat(16.0 * 32.0 - 32.0));

    def.solid_border = false;
    let open = generate(&def, 0).bounds();
    assert_eq!(open.min, Vec2::ZERO);
    assert_eq!(open.max, Vec2::splat(16.0 * 32.0));
}

#[test]
fn test_tile_centre_is_row_major() {
    let playground = generate(&PlaygroundDef::default(), 0);
    assert_eq!(playground.tile_centre(0, 0), Vec2::new(16.0, 16.0));
    assert_eq!(playground.tile_centre(1, 2), Vec2::new(80.0, 48.0));
    assert_eq!(playground.centre(), Vec2::new(256.0, 256.0));
}
