//! Ring rendering.
//!
//! Ring entities are not moved: whenever the simulation rebuilds its ring
//! descriptors, every [`RingVisual`] entity is despawned and a fresh set is
//! spawned from the new descriptors. Meshes are cached per radius so only the
//! entities churn.

use std::collections::HashMap;

use bevy::prelude::*;

use crate::orbit::RingDescriptor;
use crate::simulation::SimulationState;

/// Tube radius of each ring.
pub const RING_THICKNESS: f32 = 0.002;

/// Marker for a rendered ring; `index` is its position in the descriptor list.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RingVisual {
    pub index: usize,
}

/// Cached ring assets and the descriptor generation currently on screen.
#[derive(Resource, Default)]
pub struct RingAssets {
    material: Option<Handle<StandardMaterial>>,
    meshes: HashMap<u64, Handle<Mesh>>,
    generation: Option<u64>,
}

impl RingAssets {
    /// Generation of the ring descriptors currently spawned, if any.
    pub fn generation(&self) -> Option<u64> {
        self.generation
    }
}

/// Plugin providing ring asset storage.
pub struct RingRenderPlugin;

impl Plugin for RingRenderPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RingAssets>();
    }
}

/// Transform placing a Y-normal torus at the descriptor's center, normal to its axis.
pub fn ring_transform(descriptor: &RingDescriptor) -> Transform {
    let axis = descriptor.axis.as_vec3().normalize_or(Vec3::Y);
    Transform::from_translation(descriptor.center.as_vec3())
        .with_rotation(Quat::from_rotation_arc(Vec3::Y, axis))
}

/// Replace all ring entities when the simulation produced new descriptors.
pub fn rebuild_ring_visuals(
    mut commands: Commands,
    state: Res<SimulationState>,
    old_rings: Query<Entity, With<RingVisual>>,
    mut ring_assets: ResMut<RingAssets>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let generation = state.ring_generation();
    if ring_assets.generation == Some(generation) {
        return;
    }

    for entity in old_rings.iter() {
        commands.entity(entity).despawn();
    }

    let material = ring_assets
        .material
        .get_or_insert_with(|| {
            materials.add(StandardMaterial {
                base_color: Color::srgba(0.9, 0.8, 0.6, 0.7),
                alpha_mode: AlphaMode::Blend,
                ..default()
            })
        })
        .clone();

    for (index, descriptor) in state.ring_descriptors().enumerate() {
        let radius = descriptor.radius as f32;
        let mesh = ring_assets
            .meshes
            .entry(descriptor.radius.to_bits())
            .or_insert_with(|| {
                meshes.add(Torus {
                    minor_radius: RING_THICKNESS,
                    major_radius: radius,
                })
            })
            .clone();

        commands.spawn((
            Mesh3d(mesh),
            MeshMaterial3d(material.clone()),
            ring_transform(descriptor),
            RingVisual { index },
        ));
    }

    if ring_assets.generation.is_none() {
        info!("Spawned {} ring visuals", state.ring_descriptors().count());
    }
    ring_assets.generation = Some(generation);
}
