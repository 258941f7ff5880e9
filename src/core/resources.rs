//! Core domain: shared resources for the tick loop.

use bevy::prelude::*;

/// Number of simulation ticks run so far.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickCounter(pub u64);

impl TickCounter {
    pub fn advance(&mut self) -> u64 {
        self.0 = self.0.wrapping_add(1);
        self.0
    }
}
