//! Rendering systems for the solar system view.
//!
//! The render side only reads [`SimulationState`](crate::simulation::SimulationState):
//! body spheres follow the simulated positions, rings are respawned whenever
//! the simulation rebuilds them, and orbit paths and trails are drawn with gizmos.

mod background;
pub mod bodies;
pub mod orbits;
pub mod rings;
pub mod sync;
pub mod trails;

use bevy::prelude::*;

use self::background::BackgroundPlugin;
use self::bodies::BodyRenderPlugin;
use self::orbits::{OrbitPathPlugin, draw_orbit_paths};
use self::rings::{RingRenderPlugin, rebuild_ring_visuals};
use self::sync::sync_body_positions;
use self::trails::{TrailPlugin, draw_trails, record_trails};

pub use self::bodies::{BodyStyle, BodyVisual, body_style};
pub use self::orbits::{OrbitPathSettings, OrbitPaths};
pub use self::rings::{RingAssets, RingVisual};
pub use self::trails::{Trail, TrailSettings};

/// Plugin aggregating all rendering functionality.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            BodyRenderPlugin,
            BackgroundPlugin,
            OrbitPathPlugin,
            RingRenderPlugin,
            TrailPlugin,
        ))
        // Positions first, then anything derived from them.
        .add_systems(
            Update,
            (
                sync_body_positions,
                rebuild_ring_visuals,
                record_trails,
                (draw_orbit_paths, draw_trails),
            )
                .chain(),
        );
    }
}
