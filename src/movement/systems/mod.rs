//! Movement domain: system modules for locomotion updates.

pub(crate) mod collisions;
pub(crate) mod input;
pub(crate) mod movement;

pub(crate) use collisions::{confine_to_playground, detect_edges};
pub(crate) use input::read_input;
pub(crate) use movement::{
    apply_movement_intent, integrate_motion, trigger_dash, update_dash_timers,
};
