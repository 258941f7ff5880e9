//! Combat domain: tests for attack timing and combo progression.

use bevy::ecs::message::Messages;
use bevy::ecs::system::RunSystemOnce;
use bevy::prelude::{Entity, Vec2, World};
use std::time::Duration;

use super::systems::trigger_attack;
use super::{
    AttackController, AttackEffect, AttackPerformed, AttackTick, AttackTuning,
    resolve_attack_effect,
};
use crate::movement::{MovementInput, Player, WorldPosition};

fn tuning() -> AttackTuning {
    AttackTuning {
        duration: Duration::from_millis(300),
        combo_window: Duration::from_millis(700),
        combo_step: 32,
        combo_max: 96,
        enabled: true,
    }
}

/// Trigger and run the attack to completion, staying inside the combo window.
fn complete_attack(attack: &mut AttackController, tuning: &AttackTuning) {
    assert!(attack.try_trigger(tuning));
    let result = attack.tick(tuning.duration, tuning);
    assert!(result.finished);
    assert!(!result.combo_reset);
}

#[test]
fn test_attack_lifecycle() {
    let tuning = tuning();
    let mut attack = AttackController::default();
    assert!(!attack.is_attacking());

    assert!(attack.try_trigger(&tuning));
    assert!(attack.is_attacking());
    assert_eq!(attack.combo_index(), 0);

    assert_eq!(
        attack.tick(Duration::from_millis(100), &tuning),
        AttackTick::default()
    );
    assert!(attack.is_attacking());

    let result = attack.tick(Duration::from_millis(200), &tuning);
    assert!(result.finished);
    assert!(!attack.is_attacking());
    assert_eq!(attack.combo_index(), 32);
}

#[test]
fn test_trigger_while_attacking_is_noop() {
    let tuning = tuning();
    let mut attack = AttackController::default();
    assert!(attack.try_trigger(&tuning));
    attack.tick(Duration::from_millis(150), &tuning);

    assert!(!attack.try_trigger(&tuning));
    assert!(attack.is_attacking());
    assert_eq!(attack.combo_index(), 0);

    // The first deadline still holds: 150ms more finishes it.
    assert!(attack.tick(Duration::from_millis(150), &tuning).finished);
}

#[test]
fn test_combo_advances_through_sheet_columns() {
    let tuning = tuning();
    let mut attack = AttackController::default();
    let mut columns = Vec::new();

    for _ in 0..5 {
        assert!(attack.try_trigger(&tuning));
        columns.push(attack.combo_index());
        attack.tick(tuning.duration, &tuning);
    }

    // 128 exceeds the max, so the fifth attack starts over.
    assert_eq!(columns, vec![0, 32, 64, 96, 0]);
}

#[test]
fn test_combo_index_above_max_resets_on_next_trigger() {
    let tuning = tuning();
    let mut attack = AttackController::default();
    for _ in 0..4 {
        complete_attack(&mut attack, &tuning);
    }
    assert_eq!(attack.combo_index(), 128);

    assert!(attack.try_trigger(&tuning));
    assert_eq!(attack.combo_index(), 0);
}

#[test]
fn test_combo_decays_without_follow_up() {
    let tuning = tuning();
    let mut attack = AttackController::default();
    complete_attack(&mut attack, &tuning);
    assert_eq!(attack.combo_index(), 32);

    let result = attack.tick(Duration::from_millis(400), &tuning);
    assert!(result.combo_reset);
    assert_eq!(attack.combo_index(), 0);
}

#[test]
fn test_follow_up_keeps_stale_window_from_resetting() {
    let tuning = tuning();
    let mut attack = AttackController::default();

    // First attack at t=0 finishes at 300ms.
    complete_attack(&mut attack, &tuning);
    // Follow-up at 500ms, inside the first window (which would expire at 700ms).
    attack.tick(Duration::from_millis(200), &tuning);
    assert!(attack.try_trigger(&tuning));
    assert_eq!(attack.combo_index(), 32);

    // At 800ms the first window is long gone; the follow-up finishes.
    let result = attack.tick(Duration::from_millis(300), &tuning);
    assert!(result.finished);
    assert!(!result.combo_reset);
    assert_eq!(attack.combo_index(), 64);

    // The follow-up's own window expires at 1200ms.
    let result = attack.tick(Duration::from_millis(400), &tuning);
    assert!(result.combo_reset);
    assert_eq!(attack.combo_index(), 0);
}

#[test]
fn test_attack_effect_is_explicitly_unimplemented() {
    let event = AttackPerformed {
        attacker: Entity::PLACEHOLDER,
        combo_index: 0,
        origin: Vec2::ZERO,
    };
    assert_eq!(resolve_attack_effect(&event), AttackEffect::NotImplemented);
}

/// World with the attack button held and one player ready to attack.
fn attack_world(enabled: bool) -> (World, Entity) {
    let mut world = World::new();
    world.insert_resource(AttackTuning { enabled, ..tuning() });
    world.insert_resource(MovementInput {
        attack: true,
        ..Default::default()
    });
    world.init_resource::<Messages<AttackPerformed>>();
    let player = world
        .spawn((
            Player,
            WorldPosition(Vec2::new(64.0, 96.0)),
            AttackController::default(),
        ))
        .id();
    (world, player)
}

#[test]
fn test_held_attack_button_starts_attack() {
    let (mut world, player) = attack_world(true);
    world.run_system_once(trigger_attack).unwrap();

    assert!(world.get::<AttackController>(player).unwrap().is_attacking());
    assert!(!world.resource::<Messages<AttackPerformed>>().is_empty());
}

#[test]
fn test_disabled_attacks_ignore_the_button() {
    let (mut world, player) = attack_world(false);
    world.run_system_once(trigger_attack).unwrap();

    assert!(!world.get::<AttackController>(player).unwrap().is_attacking());
    assert!(world.resource::<Messages<AttackPerformed>>().is_empty());
}
