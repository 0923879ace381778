//! Body rendering and spawning.
//!
//! Each simulated body gets one sphere entity carrying a [`BodyVisual`]
//! handle. The handle only stores the [`BodyId`]; kinematic state stays in
//! [`SimulationState`].

use bevy::prelude::*;

use crate::config::{TRAIL_RETAIN_LONG, TRAIL_RETAIN_SHORT};
use crate::orbit::BodyId;
use crate::simulation::SimulationState;

use super::trails::Trail;

/// Component linking a rendered entity to its simulated body.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct BodyVisual {
    pub id: BodyId,
}

/// Fixed visual properties of a body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyStyle {
    /// Sphere radius in scene units.
    pub radius: f32,
    pub color: Color,
    /// Number of trail points kept, if the body leaves a trail.
    pub trail: Option<usize>,
}

/// Plugin providing body spawning.
pub struct BodyRenderPlugin;

impl Plugin for BodyRenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_bodies);
    }
}

/// Visual style for a body.
pub fn body_style(id: BodyId) -> BodyStyle {
    let (radius, color, trail) = match id {
        BodyId::Sun => (0.2, Color::srgb(1.0, 1.0, 0.0), None),
        BodyId::Mercury => (0.03, Color::srgb(0.7, 0.7, 0.7), Some(TRAIL_RETAIN_SHORT)),
        BodyId::Venus => (0.06, Color::srgb(1.0, 0.6, 0.0), Some(TRAIL_RETAIN_SHORT)),
        BodyId::Earth => (0.06, Color::srgb(0.0, 0.0, 1.0), Some(TRAIL_RETAIN_SHORT)),
        BodyId::Moon => (0.02, Color::srgb(0.8, 0.8, 0.8), Some(TRAIL_RETAIN_SHORT)),
        BodyId::Mars => (0.05, Color::srgb(1.0, 0.0, 0.0), Some(TRAIL_RETAIN_SHORT)),
        BodyId::Jupiter => (0.12, Color::srgb(0.8, 0.7, 0.5), Some(TRAIL_RETAIN_LONG)),
        BodyId::Io => (0.02, Color::srgb(1.0, 1.0, 0.0), Some(TRAIL_RETAIN_LONG)),
        BodyId::Europa => (0.018, Color::WHITE, Some(TRAIL_RETAIN_LONG)),
        BodyId::Ganymede => (0.025, Color::srgb(0.6, 0.6, 0.6), Some(TRAIL_RETAIN_LONG)),
        BodyId::Callisto => (0.022, Color::srgb(0.4, 0.4, 0.4), Some(TRAIL_RETAIN_LONG)),
        BodyId::Saturn => (0.11, Color::srgb(0.9, 0.8, 0.6), Some(TRAIL_RETAIN_LONG)),
    };
    BodyStyle {
        radius,
        color,
        trail,
    }
}

/// Spawn one sphere per simulated body at its initial position.
fn spawn_bodies(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    state: Res<SimulationState>,
) {
    for body in state.bodies() {
        let id = body.id();
        let style = body_style(id);

        let mesh = meshes.add(Sphere::new(style.radius));

        // Sun is emissive (glows)
        let material = materials.add(StandardMaterial {
            base_color: style.color,
            emissive: if id == BodyId::Sun {
                style.color.to_linear() * 4.0
            } else {
                LinearRgba::BLACK
            },
            ..default()
        });

        let mut entity = commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material),
            Transform::from_translation(body.position().as_vec3()),
            BodyVisual { id },
        ));
        if let Some(retain) = style.trail {
            entity.insert(Trail::new(retain));
        }
    }

    info!("Spawned {} bodies", state.bodies().len());
}
