//! Ellipse geometry: orbital parameters and phase to a 3D position.
//!
//! Frame conventions (Y-up, matching the render frame):
//! - The orbit is laid out in a reference plane with the focus at the origin.
//! - A planar point `(x, y)` is rotated in-plane by the plane rotation, then by
//!   the ascending node, then tilted by the inclination, which lifts the planar
//!   `y` into height (`Y`) and depth (`Z`):
//!   `(x, y) -> (x, y·sin i, y·cos i)`.

use bevy::math::DVec3;

use crate::error::OrbitError;
use crate::types::DEG_TO_RAD;

/// Number of degrees in a full sampled loop (inclusive upper bound).
const FULL_TURN_DEGREES: u32 = 360;

/// Validated shape and orientation of a heliocentric orbit.
///
/// Fields are private: the only way to obtain an `OrbitParams` is through
/// [`OrbitParams::new`], so every value reaching the geometry is in-domain.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct OrbitParams {
    semi_major_axis: f64,
    eccentricity: f64,
    plane_rotation: f64,
    inclination: f64,
    ascending_node: f64,
}

impl OrbitParams {
    /// Create orbit parameters. Angles are in radians.
    ///
    /// # Errors
    /// Rejects `a <= 0`, `e` outside `[0, 1)` and non-finite angles.
    pub fn new(
        semi_major_axis: f64,
        eccentricity: f64,
        plane_rotation: f64,
        inclination: f64,
        ascending_node: f64,
    ) -> Result<Self, OrbitError> {
        if !semi_major_axis.is_finite() || semi_major_axis <= 0.0 {
            return Err(OrbitError::NonPositiveSemiMajorAxis(semi_major_axis));
        }
        if !(0.0..1.0).contains(&eccentricity) {
            return Err(OrbitError::EccentricityOutOfRange(eccentricity));
        }
        check_angle("plane_rotation", plane_rotation)?;
        check_angle("inclination", inclination)?;
        check_angle("ascending_node", ascending_node)?;

        Ok(Self {
            semi_major_axis,
            eccentricity,
            plane_rotation,
            inclination,
            ascending_node,
        })
    }

    /// Same as [`OrbitParams::new`], with all angles given in degrees.
    pub fn from_degrees(
        semi_major_axis: f64,
        eccentricity: f64,
        plane_rotation_deg: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(
            semi_major_axis,
            eccentricity,
            plane_rotation_deg * DEG_TO_RAD,
            inclination_deg * DEG_TO_RAD,
            ascending_node_deg * DEG_TO_RAD,
        )
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.semi_major_axis
    }

    pub fn eccentricity(&self) -> f64 {
        self.eccentricity
    }

    /// In-plane rotation of the ellipse (radians).
    pub fn plane_rotation(&self) -> f64 {
        self.plane_rotation
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    /// Polar radius from the focus at angular phase `theta`.
    pub fn radius_at(&self, theta: f64) -> f64 {
        conic_radius(self.semi_major_axis, self.eccentricity, theta)
    }

    /// Position on this orbit at angular phase `theta`.
    pub fn position_at(&self, theta: f64) -> DVec3 {
        position_on_ellipse(
            self.semi_major_axis,
            self.eccentricity,
            self.plane_rotation,
            self.inclination,
            self.ascending_node,
            theta,
        )
    }
}

/// Validated local orbit of a satellite around its parent body.
///
/// Satellites move on circles; only distance and plane orientation are kept.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalOrbit {
    distance: f64,
    inclination: f64,
    ascending_node: f64,
}

impl LocalOrbit {
    /// Create a local orbit. Angles are in radians.
    pub fn new(distance: f64, inclination: f64, ascending_node: f64) -> Result<Self, OrbitError> {
        if !distance.is_finite() || distance <= 0.0 {
            return Err(OrbitError::NonPositiveDistance(distance));
        }
        check_angle("inclination", inclination)?;
        check_angle("ascending_node", ascending_node)?;

        Ok(Self {
            distance,
            inclination,
            ascending_node,
        })
    }

    /// Same as [`LocalOrbit::new`], with angles in degrees.
    pub fn from_degrees(
        distance: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
    ) -> Result<Self, OrbitError> {
        Self::new(distance, inclination_deg * DEG_TO_RAD, ascending_node_deg * DEG_TO_RAD)
    }

    pub fn distance(&self) -> f64 {
        self.distance
    }

    pub fn inclination(&self) -> f64 {
        self.inclination
    }

    pub fn ascending_node(&self) -> f64 {
        self.ascending_node
    }

    /// Offset from the parent's position at angular phase `theta`.
    pub fn offset_at(&self, theta: f64) -> DVec3 {
        satellite_offset(self.distance, theta, self.inclination, self.ascending_node)
    }
}

fn check_angle(name: &'static str, value: f64) -> Result<(), OrbitError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(OrbitError::NonFiniteAngle { name, value })
    }
}

/// Focus-centred conic radius `r = a(1 - e²) / (1 + e·cos θ)`.
pub fn conic_radius(a: f64, e: f64, theta: f64) -> f64 {
    a * (1.0 - e * e) / (1.0 + e * theta.cos())
}

/// Rotate a planar point by `angle` about the plane normal.
fn rotate_in_plane(x: f64, y: f64, angle: f64) -> (f64, f64) {
    let (sin_a, cos_a) = angle.sin_cos();
    (x * cos_a - y * sin_a, x * sin_a + y * cos_a)
}

/// Apply node rotation then inclination tilt to a planar point.
///
/// Order matters: the tilt acts on the frame produced by the node rotation.
fn orient(x: f64, y: f64, inclination: f64, ascending_node: f64) -> DVec3 {
    let (x_node, y_node) = rotate_in_plane(x, y, ascending_node);
    let (sin_i, cos_i) = inclination.sin_cos();
    DVec3::new(x_node, y_node * sin_i, y_node * cos_i)
}

/// Position on an inclined ellipse with the focus at the origin.
///
/// Precondition: `e ∈ [0, 1)`. The result is not finite for `e ≥ 1`; use
/// [`OrbitParams::new`] to validate before calling.
pub fn position_on_ellipse(
    a: f64,
    e: f64,
    plane_rotation: f64,
    inclination: f64,
    ascending_node: f64,
    theta: f64,
) -> DVec3 {
    let r = conic_radius(a, e, theta);
    let (sin_t, cos_t) = theta.sin_cos();
    let (x_rot, y_rot) = rotate_in_plane(r * cos_t, r * sin_t, plane_rotation);
    orient(x_rot, y_rot, inclination, ascending_node)
}

/// Offset of a satellite on a circular local orbit, relative to its parent.
///
/// Same node-then-tilt composition as [`position_on_ellipse`], without plane
/// rotation or eccentricity.
pub fn satellite_offset(distance: f64, theta: f64, inclination: f64, ascending_node: f64) -> DVec3 {
    let (sin_t, cos_t) = theta.sin_cos();
    orient(distance * cos_t, distance * sin_t, inclination, ascending_node)
}

/// Sample a full orbit as a closed polyline for path display.
///
/// Samples every `step_degrees` over the inclusive range `0..=360`, so the
/// default 5° step yields 73 points with the last coinciding with the first.
/// When the step does not divide 360 the 360° point is appended, so the
/// path is always closed. A step of zero is treated as one degree.
pub fn sample_ellipse_path(params: &OrbitParams, step_degrees: u32) -> Vec<DVec3> {
    let step = step_degrees.max(1);
    let mut degrees: Vec<u32> = (0..=FULL_TURN_DEGREES).step_by(step as usize).collect();
    if degrees.last() != Some(&FULL_TURN_DEGREES) {
        degrees.push(FULL_TURN_DEGREES);
    }

    degrees
        .into_iter()
        .map(|deg| params.position_at(f64::from(deg) * DEG_TO_RAD))
        .collect()
}
