//! Scene background and lighting.
//!
//! The Sun is the only light source; a dim global ambient term keeps the
//! night sides of planets readable.

use bevy::light::GlobalAmbientLight;
use bevy::prelude::*;

/// Plugin providing background color and lighting.
pub struct BackgroundPlugin;

impl Plugin for BackgroundPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::BLACK))
            .add_systems(Startup, spawn_lighting);
    }
}

/// Spawn lighting for the scene.
fn spawn_lighting(mut commands: Commands) {
    commands.insert_resource(GlobalAmbientLight {
        brightness: 80.0,
        ..default()
    });

    // Point light at the Sun's fixed position
    commands.spawn((
        PointLight {
            intensity: 2.0e6,
            range: 100.0,
            shadows_enabled: false,
            ..default()
        },
        Transform::from_translation(Vec3::ZERO),
    ));

    info!("Scene lighting initialized");
}
