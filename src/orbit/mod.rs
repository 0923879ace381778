//! Orbital kinematics: pure geometry for body positions, orbit paths and rings.
//!
//! Nothing in this module touches the ECS. Coordinate frame:
//! - Y-up, central body at the origin, Earth's orbit as the reference plane.
//! - Distances in scene units (Earth's semi-major axis = 1.0), angles in radians.

pub mod data;
pub mod ellipse;
pub mod rate;
pub mod rings;

#[cfg(test)]
mod proptest_orbit;

pub use data::{BodyDefinition, BodyId, OrbitDefinition, all_bodies, all_ring_sets};
pub use ellipse::{
    LocalOrbit, OrbitParams, conic_radius, position_on_ellipse, sample_ellipse_path,
    satellite_offset,
};
pub use rate::{orbital_angular_rate, tuned_angular_rate};
pub use rings::{RingDescriptor, RingSet, build_rings, ring_axis};
