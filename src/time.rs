//! Fixed-rate tick driver for the simulation.
//!
//! One `FixedUpdate` run is one tick. Pending control commands are applied
//! first, then the simulation advances if the clock is running.

use bevy::prelude::*;

use crate::config::SimulationConfig;
use crate::simulation::SimulationState;
use crate::types::{ControlQueue, SimulationClock};

/// System set for the simulation tick, so render-side readers can order after it.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub struct TickSet;

/// Plugin providing the fixed-rate simulation tick.
///
/// Expects [`SimulationState`] to be inserted before the app runs; the
/// clock and control queue are initialised from [`SimulationConfig`].
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        let config = app
            .world()
            .get_resource::<SimulationConfig>()
            .cloned()
            .unwrap_or_default();

        app.insert_resource(Time::<Fixed>::from_hz(config.tick_rate_hz))
            .insert_resource(SimulationClock::from_config(&config))
            .insert_resource(config)
            .init_resource::<ControlQueue>()
            .add_systems(FixedUpdate, advance_simulation.in_set(TickSet));
    }
}

/// Apply queued control commands, then advance one tick if running.
///
/// The state is only flagged as changed when the tick advanced it, so readers
/// gated on `is_changed` stay idle while paused.
pub fn advance_simulation(
    mut state: ResMut<SimulationState>,
    mut clock: ResMut<SimulationClock>,
    mut queue: ResMut<ControlQueue>,
) {
    for command in queue.drain() {
        clock.apply(command);
    }

    if state.bypass_change_detection().tick(&clock) {
        state.set_changed();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::BodyId;
    use crate::test_utils::fixtures;
    use crate::types::ControlCommand;

    fn app_with_state() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(fixtures::solar_system())
            .add_plugins(TimePlugin);
        app
    }

    fn run_ticks(app: &mut App, n: usize) {
        for _ in 0..n {
            app.world_mut().run_schedule(FixedUpdate);
        }
    }

    #[test]
    fn test_plugin_configures_tick_rate() {
        let app = app_with_state();
        let fixed = app.world().resource::<Time<Fixed>>();
        assert!((fixed.timestep().as_secs_f64() - 0.01).abs() < 1e-9);
        assert!(app.world().resource::<SimulationClock>().running);
    }

    #[test]
    fn test_tick_advances_state() {
        let mut app = app_with_state();
        run_ticks(&mut app, 3);
        assert_eq!(app.world().resource::<SimulationState>().ticks(), 3);
    }

    #[test]
    fn test_pause_command_applies_before_tick() {
        let mut app = app_with_state();
        let before = app.world().resource::<SimulationState>().position(BodyId::Mars);

        app.world_mut()
            .resource_mut::<ControlQueue>()
            .push(ControlCommand::TogglePause);
        run_ticks(&mut app, 5);

        let state = app.world().resource::<SimulationState>();
        assert_eq!(state.position(BodyId::Mars), before);
        assert_eq!(state.ticks(), 0);
        assert!(app.world().resource::<ControlQueue>().is_empty());
    }

    #[test]
    fn test_paused_tick_leaves_state_unchanged() {
        let mut app = app_with_state();
        app.world_mut().resource_mut::<SimulationClock>().running = false;
        app.add_systems(Update, |state: Res<SimulationState>, mut seen: Local<u32>| {
            // Inserted before the first run, so only that run may see a change.
            if state.is_changed() {
                *seen += 1;
                assert_eq!(*seen, 1, "paused ticks must not flag the state");
            }
        });
        app.update();
        run_ticks(&mut app, 3);
        app.update();

        app.world_mut().resource_mut::<SimulationClock>().running = true;
        run_ticks(&mut app, 1);
        assert!(app.world().resource_ref::<SimulationState>().is_changed());
    }

    #[test]
    fn test_resume_while_paused() {
        let mut app = app_with_state();
        app.world_mut().resource_mut::<SimulationClock>().running = false;
        app.world_mut()
            .resource_mut::<ControlQueue>()
            .push(ControlCommand::TogglePause);
        run_ticks(&mut app, 1);
        assert_eq!(app.world().resource::<SimulationState>().ticks(), 1);
    }

    #[test]
    fn test_custom_config_is_respected() {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins)
            .insert_resource(SimulationConfig {
                tick_rate_hz: 50.0,
                initial_time_factor: 1.0,
                ..default()
            })
            .insert_resource(fixtures::solar_system())
            .add_plugins(TimePlugin);

        let clock = app.world().resource::<SimulationClock>();
        assert_eq!(clock.time_factor, 1.0);
        let fixed = app.world().resource::<Time<Fixed>>();
        assert!((fixed.timestep().as_secs_f64() - 0.02).abs() < 1e-9);
    }
}
