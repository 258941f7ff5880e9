//! Combat domain: combat-related messages.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Emitted when an attack starts
#[derive(Debug)]
pub struct AttackPerformed {
    pub attacker: Entity,
    pub combo_index: u32,
    /// World position the attack was made from
    pub origin: Vec2,
}

impl Message for AttackPerformed {}
