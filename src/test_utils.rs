//! Test utilities for kinematics tests.
//!
//! Provides seeded fixtures so that random initial phases are reproducible.

/// Fixtures for creating test simulation states.
pub mod fixtures {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::config::SimulationConfig;
    use crate::orbit::{BodyDefinition, BodyId};
    use crate::simulation::SimulationState;
    use crate::types::SimulationClock;

    /// Seed used by every fixture.
    pub const SEED: u64 = 0x5EED_0F_0A11;

    /// Deterministic RNG for initial phases.
    pub fn rng() -> StdRng {
        StdRng::seed_from_u64(SEED)
    }

    /// The built-in solar system with seeded phases.
    pub fn solar_system() -> SimulationState {
        SimulationState::solar_system(&SimulationConfig::default(), &mut rng())
            .expect("built-in solar system must be valid")
    }

    /// A lone Earth on a unit circle whose angular rate equals `rate`.
    ///
    /// With `a = 1` and a multiplier of 1, the Kepler constant is the rate.
    pub fn single_circular_body(rate: f64) -> SimulationState {
        let config = SimulationConfig {
            kepler_constant: rate,
            ..Default::default()
        };
        let earth = BodyDefinition::planet(BodyId::Earth, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0)
            .expect("unit circle must be valid");
        SimulationState::new(&[earth], &[], &config, &mut rng()).expect("single body must be valid")
    }

    /// A running clock with the given base step and time factor.
    pub fn clock(base_step: f64, time_factor: f64) -> SimulationClock {
        SimulationClock {
            base_step,
            time_factor,
            ..Default::default()
        }
    }
}

/// Assertions for kinematic invariants.
pub mod assertions {
    use bevy::math::DVec3;

    /// Assert two points coincide within `tolerance`.
    ///
    /// # Panics
    /// Panics with both points and their distance if they differ.
    pub fn assert_points_close(actual: DVec3, expected: DVec3, tolerance: f64) {
        let distance = (actual - expected).length();
        assert!(
            distance <= tolerance,
            "points differ: actual={actual}, expected={expected}, \
             distance={distance:.3e}, tolerance={tolerance:.3e}"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::BodyId;

    #[test]
    fn test_single_body_rate() {
        let state = fixtures::single_circular_body(std::f64::consts::TAU);
        assert_eq!(state.bodies().len(), 1);
        assert_eq!(state.body(BodyId::Earth).unwrap().rate(), std::f64::consts::TAU);
    }

    #[test]
    fn test_assert_points_close_accepts_equal_points() {
        let p = bevy::math::DVec3::new(1.0, 2.0, 3.0);
        assertions::assert_points_close(p, p, 0.0);
    }

    #[test]
    #[should_panic(expected = "points differ")]
    fn test_assert_points_close_rejects_far_points() {
        assertions::assert_points_close(bevy::math::DVec3::ZERO, bevy::math::DVec3::X, 0.5);
    }
}
