//! Orrery - Solar System Kinematics
//!
//! A desktop view of planets and moons moving on fixed ellipses.

use bevy::prelude::*;
use bevy::window::WindowResolution;
use bevy_egui::EguiPlugin;

use orrery::camera::CameraPlugin;
use orrery::config::SimulationConfig;
use orrery::input::InputPlugin;
use orrery::orbit::BodyId;
use orrery::render::RenderPlugin;
use orrery::simulation::SimulationState;
use orrery::time::TimePlugin;
use orrery::ui::UiPlugin;

fn main() {
    let config = SimulationConfig::default();

    let state = match SimulationState::solar_system(&config, &mut rand::thread_rng()) {
        Ok(state) => state,
        Err(err) => {
            eprintln!("failed to set up the solar system: {err}");
            std::process::exit(1);
        }
    };

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Solar System".into(),
                resolution: WindowResolution::new(1200, 800),
                ..default()
            }),
            ..default()
        }))
        .add_plugins(EguiPlugin::default())
        // Insert resources before plugins that depend on them
        .insert_resource(config)
        .insert_resource(state)
        .add_plugins((CameraPlugin, TimePlugin, InputPlugin, RenderPlugin, UiPlugin))
        .add_systems(Startup, log_rates)
        .run();
}

fn log_rates(state: Res<SimulationState>) {
    for &id in BodyId::PLANETS {
        if let Some(body) = state.body(id) {
            info!("{id}: angular rate {:.4} rad/unit", body.rate());
        }
    }
}
