//! Position synchronization between simulation and rendering.
//!
//! Copies body positions from [`SimulationState`] onto the Transform of the
//! matching [`BodyVisual`] entity.

use bevy::prelude::*;

use crate::render::bodies::BodyVisual;
use crate::simulation::SimulationState;

/// Sync body render positions from the simulation state.
pub fn sync_body_positions(
    mut query: Query<(&mut Transform, &BodyVisual)>,
    state: Res<SimulationState>,
) {
    if !state.is_changed() {
        return;
    }

    for (mut transform, visual) in query.iter_mut() {
        let Some(pos) = state.position(visual.id) else {
            continue;
        };
        // f64 kinematics to f32 render units
        transform.translation = pos.as_vec3();
    }
}
