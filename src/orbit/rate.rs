//! Angular rate model derived from Kepler's third law.
//!
//! With `T² ∝ a³` the period grows as `a^(3/2)` and the orbital speed as
//! `1/√a`. The reference orbit (`a = 1`) moves at exactly `k` radians per
//! simulated time unit.

/// Base angular rate `k / √a` for an orbit with semi-major axis `a`.
///
/// `a` must be positive; [`crate::orbit::OrbitParams`] guarantees it.
pub fn orbital_angular_rate(semi_major_axis: f64, kepler_constant: f64) -> f64 {
    kepler_constant / semi_major_axis.sqrt()
}

/// Base rate scaled by a fixed per-body visual multiplier.
pub fn tuned_angular_rate(semi_major_axis: f64, kepler_constant: f64, multiplier: f64) -> f64 {
    orbital_angular_rate(semi_major_axis, kepler_constant) * multiplier
}
