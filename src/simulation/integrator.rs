//! Per-tick phase integration.
//!
//! Each body's phase advances independently by `rate × step`, wrapped into
//! `[0, 2π)`. There is no coupling between bodies, so no error accumulates
//! across them. The only ordering constraint: a satellite reads its parent's
//! position after the parent has moved in the same tick, and rings are built
//! last.

use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;

use super::SimulationState;
use crate::types::SimulationClock;

/// Wrap a phase into `[0, 2π)`.
///
/// `rem_euclid` can round up to exactly `2π` for tiny negative inputs; that
/// case folds back to zero.
pub fn wrap_phase(phase: f64) -> f64 {
    let wrapped = phase.rem_euclid(TAU);
    if wrapped >= TAU { 0.0 } else { wrapped }
}

/// Advance a phase by `rate × step` and wrap it.
pub fn advance_phase(phase: f64, rate: f64, step: f64) -> f64 {
    wrap_phase(phase + rate * step)
}

impl SimulationState {
    /// Run one tick.
    ///
    /// A paused clock leaves every phase, position and ring untouched.
    /// Returns whether the state advanced.
    pub fn tick(&mut self, clock: &SimulationClock) -> bool {
        if !clock.running {
            return false;
        }

        let step = clock.effective_step();
        self.update_primaries(step);
        self.update_satellites(step);
        self.rebuild_rings();
        self.ticks += 1;
        true
    }

    /// Advance and place every body without a parent.
    pub(super) fn update_primaries(&mut self, step: f64) {
        for body in self.bodies.iter_mut().filter(|body| !body.is_satellite()) {
            body.phase = advance_phase(body.phase, body.rate, step);
            body.position = body.position_from(DVec3::ZERO);
        }
    }

    /// Advance and place satellites around their parents' current positions.
    pub(super) fn update_satellites(&mut self, step: f64) {
        for slot in 0..self.bodies.len() {
            let Some(parent_slot) = self.bodies[slot].parent_slot else {
                continue;
            };
            let parent_position = self.bodies[parent_slot].position;

            let body = &mut self.bodies[slot];
            body.phase = advance_phase(body.phase, body.rate, step);
            body.position = body.position_from(parent_position);
        }
    }

    /// Replace every ring descriptor list using the parents' current positions.
    pub(super) fn rebuild_rings(&mut self) {
        for system in &mut self.rings {
            let parent_position = self.bodies[system.parent_slot].position;
            system.descriptors = system.set.build(parent_position);
        }
        self.ring_generation += 1;
        debug!(
            "Rebuilt {} ring descriptors (generation {})",
            self.rings.iter().map(|s| s.descriptors.len()).sum::<usize>(),
            self.ring_generation
        );
    }
}
