//! Shared constants and simulation control state.

use bevy::prelude::*;

use crate::config::SimulationConfig;

/// Degrees to radians conversion factor
pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Radians to degrees conversion factor
pub const RAD_TO_DEG: f64 = 180.0 / std::f64::consts::PI;

/// Discrete control events from the keyboard or the HUD.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlCommand {
    IncreaseTimeFactor,
    DecreaseTimeFactor,
    TogglePause,
}

/// Commands waiting to be applied at the next tick boundary.
///
/// Writers push from `Update`; the fixed tick drains the queue before it
/// advances anything, so a command never lands in the middle of a tick.
#[derive(Resource, Default, Debug)]
pub struct ControlQueue {
    pending: Vec<ControlCommand>,
}

impl ControlQueue {
    pub fn push(&mut self, command: ControlCommand) {
        self.pending.push(command);
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Take all pending commands in arrival order.
    pub fn drain(&mut self) -> std::vec::Drain<'_, ControlCommand> {
        self.pending.drain(..)
    }
}

/// Simulation clock: base step, time factor and run state.
///
/// `time_factor` has no bounds: repeated increases or decreases grow or shrink
/// it geometrically until floating point overflows or underflows. This is an
/// accepted limitation.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct SimulationClock {
    /// Simulated time per tick at a time factor of 1.
    pub base_step: f64,
    /// Multiplier on `base_step`.
    pub time_factor: f64,
    /// Factor used by increase/decrease.
    pub factor_step: f64,
    /// Whether ticks advance the simulation.
    pub running: bool,
}

impl Default for SimulationClock {
    fn default() -> Self {
        Self::from_config(&SimulationConfig::default())
    }
}

impl SimulationClock {
    pub fn from_config(config: &SimulationConfig) -> Self {
        Self {
            base_step: config.base_step,
            time_factor: config.initial_time_factor,
            factor_step: config.time_factor_step,
            running: true,
        }
    }

    /// Simulated time covered by one running tick.
    pub fn effective_step(&self) -> f64 {
        self.base_step * self.time_factor
    }

    pub fn increase_time_factor(&mut self) {
        self.time_factor *= self.factor_step;
    }

    pub fn decrease_time_factor(&mut self) {
        self.time_factor /= self.factor_step;
    }

    pub fn toggle_pause(&mut self) {
        self.running = !self.running;
    }

    pub fn is_paused(&self) -> bool {
        !self.running
    }

    pub fn apply(&mut self, command: ControlCommand) {
        match command {
            ControlCommand::IncreaseTimeFactor => {
                self.increase_time_factor();
                info!("Time factor: {:.3}x", self.time_factor);
            }
            ControlCommand::DecreaseTimeFactor => {
                self.decrease_time_factor();
                info!("Time factor: {:.3}x", self.time_factor);
            }
            ControlCommand::TogglePause => {
                self.toggle_pause();
                info!("Simulation {}", if self.running { "running" } else { "paused" });
            }
        }
    }
}
