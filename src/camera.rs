//! Camera system for the solar system view.
//!
//! A perspective camera orbiting the origin: left-drag rotates, the scroll
//! wheel zooms.

use bevy::{
    input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll},
    prelude::*,
};

/// Minimum camera distance from the origin.
pub const MIN_DISTANCE: f32 = 0.5;

/// Maximum camera distance from the origin.
pub const MAX_DISTANCE: f32 = 40.0;

/// Distance at startup, framing Saturn's orbit.
pub const DEFAULT_DISTANCE: f32 = 6.5;

/// Initial elevation above the reference plane (radians).
pub const DEFAULT_PITCH: f32 = 0.5;

/// Zoom speed multiplier for scroll wheel.
pub const ZOOM_SPEED: f32 = 0.1;

/// Radians of rotation per pixel of mouse drag.
pub const ROTATE_SPEED: f32 = 0.005;

/// Marker component for the main camera.
#[derive(Component)]
pub struct MainCamera;

/// Spherical coordinates of the camera around the origin.
#[derive(Resource, Clone, Debug, PartialEq)]
pub struct CameraState {
    pub distance: f32,
    pub yaw: f32,
    pub pitch: f32,
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            distance: DEFAULT_DISTANCE,
            yaw: 0.0,
            pitch: DEFAULT_PITCH,
        }
    }
}

impl CameraState {
    /// Camera transform looking at the origin.
    pub fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, -self.pitch, 0.0);
        let position = rotation * Vec3::new(0.0, 0.0, self.distance);
        Transform::from_translation(position).looking_at(Vec3::ZERO, Vec3::Y)
    }

    /// Apply a logarithmic zoom step; positive `scroll` moves closer.
    pub fn zoom(&mut self, scroll: f32) {
        let zoom_factor = 1.0 - scroll * ZOOM_SPEED;
        self.distance = (self.distance * zoom_factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Rotate by a mouse delta in pixels. Pitch stays short of the poles.
    pub fn rotate(&mut self, delta: Vec2) {
        const PITCH_LIMIT: f32 = std::f32::consts::FRAC_PI_2 - 0.01;
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch + delta.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }
}

/// Plugin providing camera functionality.
pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraState>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, (camera_zoom, camera_rotate, apply_camera_state).chain());
    }
}

/// Spawn the main camera.
fn setup_camera(mut commands: Commands, state: Res<CameraState>) {
    commands.spawn((Camera3d::default(), state.transform(), MainCamera));
}

/// Handle mouse scroll wheel for zoom.
fn camera_zoom(mouse_scroll: Res<AccumulatedMouseScroll>, mut state: ResMut<CameraState>) {
    if mouse_scroll.delta.y == 0.0 {
        return;
    }
    state.zoom(mouse_scroll.delta.y);
}

/// Handle left mouse button drag for rotation.
fn camera_rotate(
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mut state: ResMut<CameraState>,
) {
    if !mouse_buttons.pressed(MouseButton::Left) || mouse_motion.delta == Vec2::ZERO {
        return;
    }
    state.rotate(mouse_motion.delta);
}

fn apply_camera_state(
    state: Res<CameraState>,
    mut camera_query: Query<&mut Transform, With<MainCamera>>,
) {
    if !state.is_changed() {
        return;
    }
    let Ok(mut transform) = camera_query.single_mut() else {
        return;
    };
    *transform = state.transform();
}
