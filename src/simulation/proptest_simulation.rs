//! Property-based tests for the tick loop using proptest.

use bevy::math::DVec3;
use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::f64::consts::TAU;

use super::{Motion, SimulationState, advance_phase, wrap_phase};
use crate::config::SimulationConfig;
use crate::orbit::BodyId;
use crate::test_utils::{assertions, fixtures};
use crate::types::SimulationClock;

fn seeded_system(seed: u64) -> SimulationState {
    SimulationState::solar_system(&SimulationConfig::default(), &mut StdRng::seed_from_u64(seed))
        .expect("built-in solar system must be valid")
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Wrapped phases always land in [0, 2π), including negative inputs.
    #[test]
    fn prop_wrap_phase_in_range(phase in -1.0e6f64..1.0e6) {
        let wrapped = wrap_phase(phase);
        prop_assert!((0.0..TAU).contains(&wrapped), "wrap({}) = {}", phase, wrapped);
    }

    /// Wrapping preserves the angle modulo one revolution.
    #[test]
    fn prop_wrap_phase_preserves_angle(phase in -1.0e3f64..1.0e3) {
        let wrapped = wrap_phase(phase);
        prop_assert!((wrapped.sin() - phase.sin()).abs() < 1e-9);
        prop_assert!((wrapped.cos() - phase.cos()).abs() < 1e-9);
    }

    /// Negative rates (retrograde motion) still wrap into range.
    #[test]
    fn prop_advance_phase_with_negative_delta(
        phase in 0.0f64..TAU,
        rate in -50.0f64..50.0,
        step in 0.0f64..1.0,
    ) {
        let next = advance_phase(phase, rate, step);
        prop_assert!((0.0..TAU).contains(&next));
    }

    /// Ticking never leaves a phase outside [0, 2π).
    #[test]
    fn prop_tick_keeps_phases_wrapped(
        seed in any::<u64>(),
        ticks in 1usize..200,
        time_factor in 0.01f64..500.0,
    ) {
        let mut state = seeded_system(seed);
        let clock = fixtures::clock(0.01, time_factor);
        for _ in 0..ticks {
            state.tick(&clock);
        }
        for body in state.bodies() {
            prop_assert!(
                (0.0..TAU).contains(&body.phase()),
                "{} phase {}",
                body.id(),
                body.phase()
            );
            prop_assert!(body.position().is_finite());
        }
    }

    /// A paused clock freezes every body regardless of how many ticks run.
    #[test]
    fn prop_paused_ticks_change_nothing(seed in any::<u64>(), ticks in 1usize..100) {
        let mut state = seeded_system(seed);
        let before: Vec<DVec3> = state.bodies().iter().map(|b| b.position()).collect();

        let mut clock = SimulationClock::default();
        clock.toggle_pause();
        for _ in 0..ticks {
            state.tick(&clock);
        }

        let after: Vec<DVec3> = state.bodies().iter().map(|b| b.position()).collect();
        prop_assert_eq!(before, after);
    }

    /// Satellites always sit at parent position plus local offset.
    #[test]
    fn prop_satellite_tracks_parent(seed in any::<u64>(), ticks in 1usize..100) {
        let mut state = seeded_system(seed);
        let clock = SimulationClock::default();
        for _ in 0..ticks {
            state.tick(&clock);
        }

        for &id in BodyId::MOONS {
            let body = state.body(id).unwrap();
            let Motion::Satellite { parent, orbit } = *body.motion() else {
                panic!("{id} should be a satellite");
            };
            let parent_position = state.position(parent).unwrap();
            assertions::assert_points_close(
                body.position(),
                parent_position + orbit.offset_at(body.phase()),
                1e-12,
            );
        }
    }

    /// Bodies are independent: a body's phase after N ticks depends only on its own rate.
    #[test]
    fn prop_phase_advance_is_independent(seed in any::<u64>(), ticks in 1usize..50) {
        let mut state = seeded_system(seed);
        let initial: Vec<f64> = state.bodies().iter().map(|b| b.phase()).collect();
        let clock = SimulationClock::default();
        let step = clock.effective_step();
        for _ in 0..ticks {
            state.tick(&clock);
        }

        for (body, start) in state.bodies().iter().zip(initial) {
            let expected = wrap_phase(start + body.rate() * step * ticks as f64);
            let diff = wrap_phase(body.phase() - expected + TAU / 2.0) - TAU / 2.0;
            prop_assert!(diff.abs() < 1e-9, "{} drifted by {}", body.id(), diff);
        }
    }
}
