//! Body registry and simulation state.
//!
//! [`SimulationState`] owns every body's phase and position plus the current
//! ring descriptors. It is a plain resource: the tick driver in
//! [`crate::time`] mutates it, render systems only read it. Rendered entities
//! refer to bodies through [`BodyId`], never by sharing this data.

mod integrator;

#[cfg(test)]
mod proptest_simulation;

use std::collections::HashMap;
use std::f64::consts::TAU;

use bevy::math::DVec3;
use bevy::prelude::*;
use rand::Rng;

pub use integrator::{advance_phase, wrap_phase};

use crate::config::SimulationConfig;
use crate::error::{OrbitError, SetupError};
use crate::orbit::{
    BodyDefinition, BodyId, LocalOrbit, OrbitDefinition, OrbitParams, RingDescriptor, RingSet,
    all_bodies, all_ring_sets, tuned_angular_rate,
};

/// Validated motion model of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Motion {
    /// Fixed at the origin.
    Central,
    /// Inclined ellipse with the focus at the origin.
    Heliocentric(OrbitParams),
    /// Circle around the parent's current position.
    Satellite { parent: BodyId, orbit: LocalOrbit },
}

/// Kinematic state of one body.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    id: BodyId,
    motion: Motion,
    /// Always in `[0, 2π)`.
    phase: f64,
    /// Radians per simulated time unit.
    rate: f64,
    position: DVec3,
    /// Registry slot of the parent, for satellites.
    parent_slot: Option<usize>,
}

impl Body {
    pub fn id(&self) -> BodyId {
        self.id
    }

    pub fn motion(&self) -> &Motion {
        &self.motion
    }

    pub fn phase(&self) -> f64 {
        self.phase
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn position(&self) -> DVec3 {
        self.position
    }

    pub fn parent(&self) -> Option<BodyId> {
        match self.motion {
            Motion::Satellite { parent, .. } => Some(parent),
            _ => None,
        }
    }

    pub fn is_satellite(&self) -> bool {
        self.parent_slot.is_some()
    }

    /// Position for the current phase. Primaries ignore `parent_position`.
    fn position_from(&self, parent_position: DVec3) -> DVec3 {
        match self.motion {
            Motion::Central => DVec3::ZERO,
            Motion::Heliocentric(params) => params.position_at(self.phase),
            Motion::Satellite { orbit, .. } => parent_position + orbit.offset_at(self.phase),
        }
    }
}

/// A ring set and the descriptors built for the current tick.
#[derive(Clone, Debug, PartialEq)]
pub struct RingSystem {
    set: RingSet,
    parent_slot: usize,
    descriptors: Vec<RingDescriptor>,
}

impl RingSystem {
    pub fn set(&self) -> &RingSet {
        &self.set
    }

    pub fn descriptors(&self) -> &[RingDescriptor] {
        &self.descriptors
    }
}

/// All mutable simulation state, owned by the tick driver.
#[derive(Resource, Clone, Debug)]
pub struct SimulationState {
    /// Parents always precede their satellites.
    bodies: Vec<Body>,
    index: HashMap<BodyId, usize>,
    rings: Vec<RingSystem>,
    /// Bumped every time ring descriptors are rebuilt.
    ring_generation: u64,
    /// Number of ticks that advanced the simulation.
    ticks: u64,
}

impl SimulationState {
    /// Build the registry from definitions, drawing random initial phases.
    ///
    /// Definitions must list a satellite's parent before the satellite, and a
    /// parent must itself be a primary body. Positions and rings are computed
    /// before returning.
    pub fn new(
        definitions: &[BodyDefinition],
        ring_sets: &[RingSet],
        config: &SimulationConfig,
        rng: &mut impl Rng,
    ) -> Result<Self, SetupError> {
        let mut bodies: Vec<Body> = Vec::with_capacity(definitions.len());
        let mut index: HashMap<BodyId, usize> = HashMap::with_capacity(definitions.len());

        for definition in definitions {
            let id = definition.id;
            if index.contains_key(&id) {
                return Err(SetupError::DuplicateBody(id));
            }

            let (motion, rate, parent_slot) = match definition.orbit {
                OrbitDefinition::Central => (Motion::Central, 0.0, None),
                OrbitDefinition::Heliocentric {
                    params,
                    rate_multiplier,
                } => {
                    let rate = tuned_angular_rate(
                        params.semi_major_axis(),
                        config.kepler_constant,
                        rate_multiplier,
                    );
                    (Motion::Heliocentric(params), rate, None)
                }
                OrbitDefinition::Satellite {
                    parent,
                    orbit,
                    orbit_speed,
                } => {
                    let slot = *index
                        .get(&parent)
                        .ok_or(SetupError::UnknownParent { body: id, parent })?;
                    if bodies[slot].is_satellite() {
                        return Err(SetupError::NestedSatellite { body: id, parent });
                    }
                    (Motion::Satellite { parent, orbit }, orbit_speed, Some(slot))
                }
            };

            if !rate.is_finite() {
                return Err(SetupError::InvalidOrbit {
                    body: id,
                    source: OrbitError::NonFiniteRate(rate),
                });
            }

            let phase = match motion {
                Motion::Central => 0.0,
                _ => rng.gen_range(0.0..TAU),
            };

            index.insert(id, bodies.len());
            bodies.push(Body {
                id,
                motion,
                phase,
                rate,
                position: DVec3::ZERO,
                parent_slot,
            });
        }

        let rings = ring_sets
            .iter()
            .map(|set| {
                let parent_slot = *index
                    .get(&set.parent())
                    .ok_or(SetupError::UnknownRingParent(set.parent()))?;
                Ok(RingSystem {
                    set: *set,
                    parent_slot,
                    descriptors: Vec::new(),
                })
            })
            .collect::<Result<Vec<_>, SetupError>>()?;

        let mut state = Self {
            bodies,
            index,
            rings,
            ring_generation: 0,
            ticks: 0,
        };
        state.refresh();
        Ok(state)
    }

    /// The built-in solar system with random initial phases.
    pub fn solar_system(config: &SimulationConfig, rng: &mut impl Rng) -> Result<Self, SetupError> {
        config.validate()?;
        Self::new(&all_bodies()?, &all_ring_sets()?, config, rng)
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, id: BodyId) -> Option<&Body> {
        self.index.get(&id).map(|&slot| &self.bodies[slot])
    }

    pub fn position(&self, id: BodyId) -> Option<DVec3> {
        self.body(id).map(Body::position)
    }

    pub fn rings(&self) -> &[RingSystem] {
        &self.rings
    }

    /// All current ring descriptors, across ring systems.
    pub fn ring_descriptors(&self) -> impl Iterator<Item = &RingDescriptor> {
        self.rings.iter().flat_map(|system| system.descriptors.iter())
    }

    pub fn ring_generation(&self) -> u64 {
        self.ring_generation
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Override a body's phase and recompute every position and ring.
    ///
    /// Returns `false` if the body is unknown. The phase is wrapped into `[0, 2π)`.
    pub fn set_phase(&mut self, id: BodyId, phase: f64) -> bool {
        let Some(&slot) = self.index.get(&id) else {
            return false;
        };
        self.bodies[slot].phase = wrap_phase(phase);
        self.refresh();
        true
    }

    /// Recompute positions and rings from the current phases without advancing.
    fn refresh(&mut self) {
        self.update_primaries(0.0);
        self.update_satellites(0.0);
        self.rebuild_rings();
    }
}
