//! Sprites module: tests for manifest parsing and frame selection.

use std::path::Path;

use super::animation::animation_index;
use super::manifest::{ManifestError, parse_manifest};
use super::{FrameInput, SpriteRect, SpriteSheetLayout, facing, load_manifest, select_frame};

fn layout() -> SpriteSheetLayout {
    SpriteSheetLayout::default()
}

fn rect(x: u32, y: u32) -> SpriteRect {
    SpriteRect {
        x,
        y,
        width: 32,
        height: 32,
    }
}

#[test]
fn test_facing_follows_velocity_sign() {
    assert_eq!(facing(1.5, 0.0, 240.0), 1.0);
    assert_eq!(facing(-0.25, 480.0, 240.0), -1.0);
}

#[test]
fn test_facing_at_rest_looks_toward_pointer() {
    assert_eq!(facing(0.0, 300.0, 240.0), 1.0);
    assert_eq!(facing(0.0, 100.0, 240.0), -1.0);
    // Exactly on the centre line counts as left.
    assert_eq!(facing(0.0, 240.0, 240.0), -1.0);
}

#[test]
fn test_walk_cycle_steps_every_five_ticks() {
    let layout = layout();
    let indices: Vec<_> = (0..12).map(|t| animation_index(t, false, &layout)).collect();
    assert_eq!(indices, vec![0, 0, 0, 0, 0, 1, 1, 1, 1, 1, 2, 2]);
    assert_eq!(animation_index(5 * 8, false, &layout), 0);
}

#[test]
fn test_sprint_cycles_faster() {
    let layout = layout();
    assert_eq!(animation_index(6, false, &layout), 1);
    assert_eq!(animation_index(6, true, &layout), 2);
}

#[test]
fn test_walking_frame_moves_along_row() {
    let state = FrameInput {
        moving: true,
        ..Default::default()
    };
    let (r, index) = select_frame(&state, 15, &layout());
    assert_eq!(index, 3);
    assert_eq!(r, rect(96, 32));
}

#[test]
fn test_idle_overrides_cycle() {
    let (r, _) = select_frame(&FrameInput::default(), 15, &layout());
    assert_eq!(r, rect(32, 0));
}

#[test]
fn test_dash_overrides_idle_and_walk() {
    for moving in [false, true] {
        let state = FrameInput {
            moving,
            dashing: true,
            ..Default::default()
        };
        assert_eq!(select_frame(&state, 7, &layout()).0, rect(64, 64));
    }
}

#[test]
fn test_attack_uses_combo_column() {
    let state = FrameInput {
        moving: true,
        dashing: true,
        attacking: true,
        combo_index: 64,
        ..Default::default()
    };
    assert_eq!(select_frame(&state, 0, &layout()).0, rect(64, 64));

    let state = FrameInput {
        attacking: true,
        combo_index: 96,
        ..Default::default()
    };
    assert_eq!(select_frame(&state, 0, &layout()).0, rect(96, 64));
}

#[test]
fn test_sprite_rect_to_bevy_rect() {
    let r = rect(32, 64).to_rect();
    assert_eq!(r.min.x, 32.0);
    assert_eq!(r.min.y, 64.0);
    assert_eq!(r.max.x, 64.0);
    assert_eq!(r.max.y, 96.0);
}

#[test]
fn test_manifest_rejects_zero_frame_count() {
    let mut json = serde_json::to_value(layout()).unwrap();
    json["frame_count"] = 0.into();
    let err = parse_manifest("bad.json", &json.to_string()).unwrap_err();
    assert!(matches!(err, ManifestError::Invalid { .. }));
}

#[test]
fn test_manifest_parse_error_names_file() {
    let err = parse_manifest("broken.json", "{ \"image\": ").unwrap_err();
    assert!(matches!(err, ManifestError::Parse { .. }));
    assert!(err.to_string().contains("broken.json"));
}

#[test]
fn test_shipped_manifest_matches_builtin_layout() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/sprites/runner.json");
    let (loaded, found) = load_manifest(&path).unwrap();
    assert!(found);
    assert_eq!(loaded, layout());
}

#[test]
fn test_missing_manifest_uses_builtin_layout() {
    let (loaded, found) = load_manifest(Path::new("no/such/manifest.json")).unwrap();
    assert!(!found);
    assert_eq!(loaded, layout());
}
