//! Orbital parameter table for the simulated system.
//! Values are tuned for visibility, not physical accuracy: distances are in
//! scene units with Earth's orbit at 1.0 and inclinations are exaggerated.

use std::fmt;

use super::ellipse::{LocalOrbit, OrbitParams};
use super::rings::RingSet;
use crate::error::SetupError;

/// Identifier for bodies in the simulation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    // Moons
    Moon,
    Io,
    Europa,
    Ganymede,
    Callisto,
}

impl BodyId {
    /// Bodies on heliocentric orbits.
    pub const PLANETS: &'static [BodyId] = &[
        BodyId::Mercury,
        BodyId::Venus,
        BodyId::Earth,
        BodyId::Mars,
        BodyId::Jupiter,
        BodyId::Saturn,
    ];

    /// Bodies orbiting a planet.
    pub const MOONS: &'static [BodyId] = &[
        BodyId::Moon,
        BodyId::Io,
        BodyId::Europa,
        BodyId::Ganymede,
        BodyId::Callisto,
    ];

    /// Human-readable name
    pub fn name(&self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Moon => "Moon",
            BodyId::Io => "Io",
            BodyId::Europa => "Europa",
            BodyId::Ganymede => "Ganymede",
            BodyId::Callisto => "Callisto",
        }
    }
}

impl fmt::Display for BodyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a body moves.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OrbitDefinition {
    /// Fixed at the origin.
    Central,
    /// Ellipse around the origin; rate is `k/√a` times `rate_multiplier`.
    Heliocentric {
        params: OrbitParams,
        rate_multiplier: f64,
    },
    /// Circle around the parent's current position at a directly assigned rate.
    Satellite {
        parent: BodyId,
        orbit: LocalOrbit,
        orbit_speed: f64,
    },
}

/// Static definition of one body.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BodyDefinition {
    pub id: BodyId,
    pub orbit: OrbitDefinition,
}

impl BodyDefinition {
    pub fn central(id: BodyId) -> Self {
        Self {
            id,
            orbit: OrbitDefinition::Central,
        }
    }

    /// Heliocentric body from `(a, e)` and angles in degrees.
    pub fn planet(
        id: BodyId,
        semi_major_axis: f64,
        eccentricity: f64,
        plane_rotation_deg: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        rate_multiplier: f64,
    ) -> Result<Self, SetupError> {
        let params = OrbitParams::from_degrees(
            semi_major_axis,
            eccentricity,
            plane_rotation_deg,
            inclination_deg,
            ascending_node_deg,
        )
        .map_err(|source| SetupError::InvalidOrbit { body: id, source })?;

        Ok(Self {
            id,
            orbit: OrbitDefinition::Heliocentric {
                params,
                rate_multiplier,
            },
        })
    }

    /// Satellite of `parent` with angles in degrees.
    pub fn moon(
        id: BodyId,
        parent: BodyId,
        distance: f64,
        inclination_deg: f64,
        ascending_node_deg: f64,
        orbit_speed: f64,
    ) -> Result<Self, SetupError> {
        let orbit = LocalOrbit::from_degrees(distance, inclination_deg, ascending_node_deg)
            .map_err(|source| SetupError::InvalidOrbit { body: id, source })?;

        Ok(Self {
            id,
            orbit: OrbitDefinition::Satellite {
                parent,
                orbit,
                orbit_speed,
            },
        })
    }

    /// Parent body, for satellites.
    pub fn parent(&self) -> Option<BodyId> {
        match self.orbit {
            OrbitDefinition::Satellite { parent, .. } => Some(parent),
            _ => None,
        }
    }
}

/// All bodies, parents listed before their satellites.
pub fn all_bodies() -> Result<Vec<BodyDefinition>, SetupError> {
    Ok(vec![
        BodyDefinition::central(BodyId::Sun),
        // Planets: a, e, plane rotation°, inclination°, node°, rate multiplier
        BodyDefinition::planet(BodyId::Mercury, 0.4, 0.206, 20.0, 25.0, 30.0, 1.2)?,
        BodyDefinition::planet(BodyId::Venus, 0.7, 0.007, 10.0, 40.0, 90.0, 1.0)?,
        // Earth defines the reference plane.
        BodyDefinition::planet(BodyId::Earth, 1.0, 0.017, 0.0, 0.0, 0.0, 1.0)?,
        BodyDefinition::planet(BodyId::Mars, 1.5, 0.093, 15.0, 35.0, 150.0, 0.8)?,
        BodyDefinition::planet(BodyId::Jupiter, 2.1, 0.048, 5.0, 20.0, 210.0, 0.5)?,
        BodyDefinition::planet(BodyId::Saturn, 2.7, 0.056, 8.0, 15.0, SATURN_NODE_DEG, 0.4)?,
        // Moons: distance, inclination°, node°, orbit speed
        BodyDefinition::moon(BodyId::Moon, BodyId::Earth, 0.12, 30.0, 60.0, 2.0)?,
        BodyDefinition::moon(BodyId::Io, BodyId::Jupiter, 0.18, 10.0, 20.0, 3.0)?,
        BodyDefinition::moon(BodyId::Europa, BodyId::Jupiter, 0.22, 15.0, 60.0, 2.2)?,
        BodyDefinition::moon(BodyId::Ganymede, BodyId::Jupiter, 0.28, 20.0, 100.0, 1.7)?,
        BodyDefinition::moon(BodyId::Callisto, BodyId::Jupiter, 0.35, 25.0, 140.0, 1.2)?,
    ])
}

/// Saturn's ascending node, shared by its ring plane.
const SATURN_NODE_DEG: f64 = 270.0;

/// All ring systems.
pub fn all_ring_sets() -> Result<Vec<RingSet>, SetupError> {
    let saturn = RingSet::from_degrees(BodyId::Saturn, 0.13, 0.25, 5, 27.0, SATURN_NODE_DEG)
        .map_err(|source| SetupError::InvalidRings {
            parent: BodyId::Saturn,
            source,
        })?;
    Ok(vec![saturn])
}
