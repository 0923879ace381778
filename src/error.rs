//! Error types for orbit definitions and simulation setup.
//!
//! All validation happens once, when bodies are constructed. The per-tick
//! update path never returns errors.

use crate::orbit::BodyId;

/// A single orbital or ring parameter is outside its valid domain.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum OrbitError {
    #[error("semi-major axis must be positive and finite, got {0}")]
    NonPositiveSemiMajorAxis(f64),

    #[error("eccentricity must lie in [0, 1), got {0}")]
    EccentricityOutOfRange(f64),

    #[error("angle `{name}` must be finite, got {value}")]
    NonFiniteAngle { name: &'static str, value: f64 },

    #[error("orbital distance must be positive and finite, got {0}")]
    NonPositiveDistance(f64),

    #[error("angular rate must be finite, got {0}")]
    NonFiniteRate(f64),

    #[error("ring radii must satisfy 0 < inner < outer, got inner={inner}, outer={outer}")]
    InvalidRingRadii { inner: f64, outer: f64 },

    #[error("ring set must contain at least one ring")]
    EmptyRingSet,
}

/// Failure while assembling the body registry. Always names the offending body.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum SetupError {
    #[error("invalid orbit for {body}: {source}")]
    InvalidOrbit {
        body: BodyId,
        #[source]
        source: OrbitError,
    },

    #[error("invalid ring set around {parent}: {source}")]
    InvalidRings {
        parent: BodyId,
        #[source]
        source: OrbitError,
    },

    #[error("{body} references parent {parent}, which is not defined before it")]
    UnknownParent { body: BodyId, parent: BodyId },

    #[error("{body} orbits {parent}, which is itself a satellite")]
    NestedSatellite { body: BodyId, parent: BodyId },

    #[error("ring set references {0}, which is not defined")]
    UnknownRingParent(BodyId),

    #[error("{0} is defined more than once")]
    DuplicateBody(BodyId),

    #[error("invalid simulation config: {0}")]
    InvalidConfig(String),
}
