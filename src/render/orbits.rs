//! Orbit path rendering using Bevy Gizmos.
//!
//! Paths are sampled once at startup with [`sample_ellipse_path`] and drawn
//! every frame as closed polylines. Satellites have no drawn path.

use bevy::prelude::*;

use crate::config::{PATH_STEP_DEGREES, SimulationConfig};
use crate::orbit::{BodyId, sample_ellipse_path};
use crate::render::bodies::body_style;
use crate::simulation::{Motion, SimulationState};

/// Plugin providing orbit path visualization.
pub struct OrbitPathPlugin;

impl Plugin for OrbitPathPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<OrbitPathSettings>()
            .init_resource::<OrbitPaths>()
            .add_systems(Startup, sample_orbit_paths);
    }
}

/// Settings for orbit path rendering.
#[derive(Resource)]
pub struct OrbitPathSettings {
    /// Whether to show orbit paths.
    pub visible: bool,
    /// Alpha value for orbit path color.
    pub alpha: f32,
}

impl Default for OrbitPathSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.5,
        }
    }
}

/// Pre-sampled orbit polylines, one per heliocentric body.
#[derive(Resource, Default)]
pub struct OrbitPaths {
    pub paths: Vec<(BodyId, Vec<Vec3>)>,
}

/// Sample each heliocentric orbit once.
pub fn sample_orbit_paths(
    mut paths: ResMut<OrbitPaths>,
    state: Res<SimulationState>,
    config: Option<Res<SimulationConfig>>,
) {
    let step = config.map(|c| c.path_step_degrees).unwrap_or(PATH_STEP_DEGREES);

    paths.paths = state
        .bodies()
        .iter()
        .filter_map(|body| match body.motion() {
            Motion::Heliocentric(params) => {
                let points = sample_ellipse_path(params, step)
                    .into_iter()
                    .map(|p| p.as_vec3())
                    .collect();
                Some((body.id(), points))
            }
            _ => None,
        })
        .collect();

    info!("Sampled {} orbit paths", paths.paths.len());
}

/// Draw orbit paths for primary bodies.
pub fn draw_orbit_paths(
    mut gizmos: Gizmos,
    settings: Res<OrbitPathSettings>,
    paths: Res<OrbitPaths>,
) {
    if !settings.visible {
        return;
    }

    for (id, points) in &paths.paths {
        let color = body_style(*id).color.with_alpha(settings.alpha);
        gizmos.linestrip(points.iter().copied(), color);
    }
}
