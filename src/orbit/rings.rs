//! Ring geometry: concentric rings centred on a parent body.
//!
//! The ring axis uses its own rotation order (tilt about X first, then node
//! about Z), which differs from the node-then-tilt order of body positions.
//! The two conventions are kept separate on purpose; unifying them changes the
//! rendered ring orientation.

use bevy::math::DVec3;

use crate::error::OrbitError;
use crate::orbit::BodyId;
use crate::types::DEG_TO_RAD;

/// Static definition of a ring system around a parent body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingSet {
    parent: BodyId,
    inner_radius: f64,
    outer_radius: f64,
    count: usize,
    inclination: f64,
    ascending_node: f64,
}

impl RingSet {
    /// Create a ring set. Angles are in radians.
    pub fn new(
        parent: BodyId,
        inner_radius: f64,
        outer_radius: f64,
        count: usize,
        inclination: f64,
        ascending_node: f64,
    ) -> Result<Self, OrbitError> {
        if !(inner_radius.is_finite() && outer_radius.is_finite())
            || inner_radius <= 0.0
            || outer_radius <= inner_radius
        {
            return Err(OrbitError::InvalidRingRadii {
                inner: inner_radius,
                outer: outer_radius,
            });
        }
        if count == 0 {
            return Err(OrbitError::EmptyRingSet);
        }
        for (name, value) in [("inclination", inclination), ("ascending_node", ascending_node)] {
            if !value.is_finite() {
                return Err(OrbitError::NonFiniteAngle { name, value });
            }
        }

        Ok(Self {
            parent,
            inner_radius,
            outer_radius,
            count,
            inclination,
            ascending_node,
        })
    }

    /// Same as [`RingSet::new`], with angles in degrees.
    pub fn from_degrees(
        parent: BodyId,
        inner_radius: f64,
        outer_radius: f64,
        count: usize,
        inclination_deg: f64,
        ascending_node_deg: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(
            parent,
            inner_radius,
            outer_radius,
            count,
            inclination_deg * DEG_TO_RAD,
            ascending_node_deg * DEG_TO_RAD,
        )
    }

    pub fn parent(&self) -> BodyId {
        self.parent
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Ring descriptors for the parent's current position.
    pub fn build(&self, parent_position: DVec3) -> Vec<RingDescriptor> {
        build_rings(
            parent_position,
            self.inner_radius,
            self.outer_radius,
            self.count,
            self.inclination,
            self.ascending_node,
        )
    }
}

/// One ring to be rendered: a circle of `radius` around `center`, normal to `axis`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingDescriptor {
    pub center: DVec3,
    pub axis: DVec3,
    pub radius: f64,
}

/// Unit normal of the ring plane.
///
/// Starts from `(0, 1, 0)`, tilts by `inclination` about X, then rotates by
/// `ascending_node` about Z, and maps the result back onto the Y-up frame:
/// `(-cos i·sin Ω, sin i, cos i·cos Ω)`.
pub fn ring_axis(inclination: f64, ascending_node: f64) -> DVec3 {
    let (sin_i, cos_i) = inclination.sin_cos();
    // Tilt about X.
    let tilted = DVec3::new(0.0, cos_i, sin_i);
    // Node about Z.
    let (sin_n, cos_n) = ascending_node.sin_cos();
    let x_node = tilted.x * cos_n - tilted.y * sin_n;
    let y_node = tilted.x * sin_n + tilted.y * cos_n;
    DVec3::new(x_node, tilted.z, y_node)
}

/// Evenly spaced rings from `inner_radius` towards `outer_radius`.
///
/// Spacing is `(outer - inner) / count` and radius `k` is `inner + k·spacing`,
/// so the outer radius itself is never reached. Pure: the caller owns any
/// previously rendered rings.
pub fn build_rings(
    parent_position: DVec3,
    inner_radius: f64,
    outer_radius: f64,
    count: usize,
    inclination: f64,
    ascending_node: f64,
) -> Vec<RingDescriptor> {
    if count == 0 {
        return Vec::new();
    }

    let spacing = (outer_radius - inner_radius) / count as f64;
    let axis = ring_axis(inclination, ascending_node);

    (0..count)
        .map(|k| RingDescriptor {
            center: parent_position,
            axis,
            radius: inner_radius + k as f64 * spacing,
        })
        .collect()
}
