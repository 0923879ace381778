//! Startup configuration constants.
//!
//! All values are fixed for the lifetime of the process. They are collected
//! into a [`SimulationConfig`] resource so tests can run with other values.

use bevy::prelude::*;

use crate::error::SetupError;

/// Simulated time advanced per tick at a time factor of 1.
pub const BASE_STEP: f64 = 0.01;

/// Fixed tick rate of the simulation loop.
pub const TICK_RATE_HZ: f64 = 100.0;

/// Time factor at startup.
pub const INITIAL_TIME_FACTOR: f64 = 3.0;

/// Multiplier applied by each time-factor increase (and divided by each decrease).
pub const TIME_FACTOR_STEP: f64 = 1.5;

/// Angular rate of the reference orbit (`a = 1`), in radians per simulated time unit.
pub const KEPLER_RATE_CONSTANT: f64 = 2.0;

/// Orbit path sampling density in degrees.
pub const PATH_STEP_DEGREES: u32 = 5;

/// Trail length for small, fast bodies.
pub const TRAIL_RETAIN_SHORT: usize = 30;

/// Trail length for the gas giants and their moons.
pub const TRAIL_RETAIN_LONG: usize = 2000;

/// Simulation configuration resource.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub base_step: f64,
    pub tick_rate_hz: f64,
    pub initial_time_factor: f64,
    pub time_factor_step: f64,
    pub kepler_constant: f64,
    pub path_step_degrees: u32,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            base_step: BASE_STEP,
            tick_rate_hz: TICK_RATE_HZ,
            initial_time_factor: INITIAL_TIME_FACTOR,
            time_factor_step: TIME_FACTOR_STEP,
            kepler_constant: KEPLER_RATE_CONSTANT,
            path_step_degrees: PATH_STEP_DEGREES,
        }
    }
}

impl SimulationConfig {
    /// Check every value once at startup.
    pub fn validate(&self) -> Result<(), SetupError> {
        let positive = [
            ("base_step", self.base_step),
            ("tick_rate_hz", self.tick_rate_hz),
            ("initial_time_factor", self.initial_time_factor),
            ("kepler_constant", self.kepler_constant),
        ];
        for (name, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(SetupError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )));
            }
        }

        if !self.time_factor_step.is_finite() || self.time_factor_step <= 1.0 {
            return Err(SetupError::InvalidConfig(format!(
                "time_factor_step must be greater than 1, got {}",
                self.time_factor_step
            )));
        }

        if !(1..=360).contains(&self.path_step_degrees) {
            return Err(SetupError::InvalidConfig(format!(
                "path_step_degrees must be in 1..=360, got {}",
                self.path_step_degrees
            )));
        }

        Ok(())
    }
}
