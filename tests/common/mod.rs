//! Common test utilities for integration tests.

#![allow(dead_code)]

use bevy::math::DVec3;
use orrery::config::SimulationConfig;
use orrery::orbit::{BodyDefinition, BodyId, RingSet};
use orrery::simulation::SimulationState;
use orrery::types::SimulationClock;
use rand::SeedableRng;
use rand::rngs::StdRng;

pub const SEED: u64 = 42;

pub fn rng() -> StdRng {
    StdRng::seed_from_u64(SEED)
}

/// The built-in solar system with seeded phases.
pub fn solar_system() -> SimulationState {
    SimulationState::solar_system(&SimulationConfig::default(), &mut rng())
        .expect("built-in solar system must be valid")
}

/// Earth on a unit circle at the given rate, with the Moon around it and a
/// ring set attached to Earth.
pub fn earth_moon_rings(rate: f64) -> SimulationState {
    let config = SimulationConfig {
        kepler_constant: rate,
        ..Default::default()
    };
    let bodies = [
        BodyDefinition::central(BodyId::Sun),
        BodyDefinition::planet(BodyId::Earth, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0).unwrap(),
        BodyDefinition::moon(BodyId::Moon, BodyId::Earth, 0.1, 0.0, 0.0, 1.0).unwrap(),
    ];
    let rings = [RingSet::from_degrees(BodyId::Earth, 0.1, 0.2, 2, 0.0, 0.0).unwrap()];
    SimulationState::new(&bodies, &rings, &config, &mut rng()).expect("fixture must be valid")
}

pub fn running_clock(base_step: f64, time_factor: f64) -> SimulationClock {
    SimulationClock {
        base_step,
        time_factor,
        ..Default::default()
    }
}

/// Assert two points coincide within `tolerance`.
pub fn assert_close(actual: DVec3, expected: DVec3, tolerance: f64) {
    let distance = actual.distance(expected);
    assert!(
        distance <= tolerance,
        "expected {expected}, got {actual} (distance {distance:e})"
    );
}
