//! Orrery - Solar System Kinematics
//!
//! A library crate providing the orbit geometry, the fixed-step simulation
//! and the Bevy plugins that render it.

pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod orbit;
pub mod render;
pub mod simulation;
pub mod time;
pub mod types;
pub mod ui;

#[cfg(test)]
pub mod test_utils;
