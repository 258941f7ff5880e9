//! Core domain: tick loop bookkeeping.

use bevy::prelude::*;

use crate::core::resources::TickCounter;

pub(crate) fn advance_tick(mut ticks: ResMut<TickCounter>) {
    ticks.advance();
}

pub(crate) fn log_run_started(ticks: Res<TickCounter>) {
    info!("Simulation running (tick {})", ticks.0);
}
