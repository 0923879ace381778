//! Bounded motion trails behind bodies.

use std::collections::VecDeque;

use bevy::prelude::*;

use crate::render::bodies::{BodyVisual, body_style};

/// Recent positions of a body, oldest first.
#[derive(Component, Clone, Debug, PartialEq)]
pub struct Trail {
    points: VecDeque<Vec3>,
    retain: usize,
}

impl Trail {
    pub fn new(retain: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(retain.min(256)),
            retain,
        }
    }

    /// Append a point, dropping the oldest once `retain` is exceeded.
    /// A point equal to the newest one is ignored, so a paused body does not
    /// grow its trail.
    pub fn record(&mut self, point: Vec3) {
        if self.points.back() == Some(&point) || self.retain == 0 {
            return;
        }
        self.points.push_back(point);
        while self.points.len() > self.retain {
            self.points.pop_front();
        }
    }

    pub fn points(&self) -> impl Iterator<Item = Vec3> + '_ {
        self.points.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Whether trails are drawn.
#[derive(Resource)]
pub struct TrailSettings {
    pub visible: bool,
    pub alpha: f32,
}

impl Default for TrailSettings {
    fn default() -> Self {
        Self {
            visible: true,
            alpha: 0.6,
        }
    }
}

/// Plugin providing trail settings.
pub struct TrailPlugin;

impl Plugin for TrailPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<TrailSettings>();
    }
}

/// Push each body's current render position onto its trail.
pub fn record_trails(mut query: Query<(&Transform, &mut Trail), Changed<Transform>>) {
    for (transform, mut trail) in query.iter_mut() {
        trail.record(transform.translation);
    }
}

/// Draw every trail as an open polyline in the body's color.
pub fn draw_trails(
    mut gizmos: Gizmos,
    settings: Res<TrailSettings>,
    query: Query<(&Trail, &BodyVisual)>,
) {
    if !settings.visible {
        return;
    }

    for (trail, visual) in query.iter() {
        if trail.len() < 2 {
            continue;
        }
        let color = body_style(visual.id).color.with_alpha(settings.alpha);
        gizmos.linestrip(trail.points(), color);
    }
}
