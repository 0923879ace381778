//! Property-based tests for orbit geometry using proptest.
//!
//! Rotations must preserve distance from the focus, so every generated
//! position is checked against the planar conic radius.

use proptest::prelude::*;
use std::f64::consts::TAU;

use super::ellipse::{
    OrbitParams, conic_radius, position_on_ellipse, sample_ellipse_path, satellite_offset,
};
use super::rings::{build_rings, ring_axis};
use bevy::math::DVec3;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Distance from the origin equals the polar radius before rotation.
    #[test]
    fn prop_position_preserves_polar_radius(
        a in 0.05f64..50.0,
        e in 0.0f64..0.95,
        rotation in -TAU..TAU,
        inclination in -TAU..TAU,
        node in -TAU..TAU,
        theta in -2.0 * TAU..2.0 * TAU,
    ) {
        let p = position_on_ellipse(a, e, rotation, inclination, node, theta);
        let r = conic_radius(a, e, theta);

        // Planar Cartesian form before any rotation.
        let planar = (r * theta.cos()).hypot(r * theta.sin());

        prop_assert!(p.is_finite());
        prop_assert!(
            (p.length() - r).abs() <= 1e-9 * r.max(1.0),
            "|p|={} r={} (a={}, e={}, theta={})", p.length(), r, a, e, theta
        );
        prop_assert!((planar - r).abs() <= 1e-9 * r.max(1.0));
    }

    /// A circular orbit keeps radius `a` at every phase and orientation.
    #[test]
    fn prop_circle_has_constant_radius(
        a in 0.05f64..50.0,
        rotation in -TAU..TAU,
        inclination in -TAU..TAU,
        node in -TAU..TAU,
        theta in -TAU..TAU,
    ) {
        let p = position_on_ellipse(a, 0.0, rotation, inclination, node, theta);
        prop_assert!((p.length() - a).abs() <= 1e-9 * a.max(1.0));
    }

    /// Radius stays between perihelion and aphelion distances.
    #[test]
    fn prop_radius_bounded_by_apsides(
        a in 0.05f64..50.0,
        e in 0.0f64..0.99,
        theta in -TAU..TAU,
    ) {
        let r = conic_radius(a, e, theta);
        let tol = 1e-9 * a;
        prop_assert!(r >= a * (1.0 - e) - tol);
        prop_assert!(r <= a * (1.0 + e) + tol);
    }

    /// Path sampling is a pure function of its inputs.
    #[test]
    fn prop_sampling_is_idempotent(
        a in 0.05f64..10.0,
        e in 0.0f64..0.9,
        inclination in -TAU..TAU,
        node in -TAU..TAU,
        step in 1u32..90,
    ) {
        let params = OrbitParams::new(a, e, 0.3, inclination, node).unwrap();
        let first = sample_ellipse_path(&params, step);
        let second = sample_ellipse_path(&params, step);
        // Closed for every step, dividing 360 or not.
        let gap = (first[0] - first[first.len() - 1]).length();
        prop_assert!(gap <= 1e-9 * a.max(1.0), "step {} leaves gap {}", step, gap);
        prop_assert_eq!(first, second);
    }

    /// Satellite offsets keep their distance regardless of orientation.
    #[test]
    fn prop_satellite_offset_length(
        distance in 0.01f64..5.0,
        theta in -TAU..TAU,
        inclination in -TAU..TAU,
        node in -TAU..TAU,
    ) {
        let offset = satellite_offset(distance, theta, inclination, node);
        prop_assert!((offset.length() - distance).abs() <= 1e-12 * distance.max(1.0));
    }

    /// Ring axis is always a unit vector and shared by every ring.
    #[test]
    fn prop_ring_axis_unit_and_shared(
        inclination in -TAU..TAU,
        node in -TAU..TAU,
        inner in 0.01f64..1.0,
        width in 0.01f64..1.0,
        count in 1usize..12,
        cx in -5.0f64..5.0,
        cz in -5.0f64..5.0,
    ) {
        let axis = ring_axis(inclination, node);
        prop_assert!((axis.length() - 1.0).abs() < 1e-12);

        let center = DVec3::new(cx, 0.0, cz);
        let rings = build_rings(center, inner, inner + width, count, inclination, node);
        prop_assert_eq!(rings.len(), count);
        for (k, ring) in rings.iter().enumerate() {
            prop_assert_eq!(ring.center, center);
            prop_assert_eq!(ring.axis, axis);
            prop_assert!(ring.radius >= inner && ring.radius < inner + width);
            if k > 0 {
                prop_assert!(ring.radius > rings[k - 1].radius);
            }
        }
    }
}
