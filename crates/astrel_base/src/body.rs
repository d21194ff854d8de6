//! Celestial body identifiers, weighting constants, and position records.
//!
//! The 13 bodies form the fixed vocabulary shared by the chart builder,
//! aspect engine, and transit scanner. Per-body weights feed aspect
//! strength: luminaries dominate, outer planets and points weigh less.

use serde::{Deserialize, Serialize};

use crate::zodiac::{ZodiacSign, degree_in_sign};

/// The 13 celestial bodies used in chart calculations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BodyId {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
    NorthNode,
    SouthNode,
    Chiron,
}

/// All 13 bodies in traditional order.
pub const ALL_BODIES: [BodyId; 13] = [
    BodyId::Sun,
    BodyId::Moon,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
    BodyId::Pluto,
    BodyId::NorthNode,
    BodyId::SouthNode,
    BodyId::Chiron,
];

impl BodyId {
    /// English name of the body.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
            Self::Mercury => "Mercury",
            Self::Venus => "Venus",
            Self::Mars => "Mars",
            Self::Jupiter => "Jupiter",
            Self::Saturn => "Saturn",
            Self::Uranus => "Uranus",
            Self::Neptune => "Neptune",
            Self::Pluto => "Pluto",
            Self::NorthNode => "North Node",
            Self::SouthNode => "South Node",
            Self::Chiron => "Chiron",
        }
    }

    /// 0-based index into ALL_BODIES.
    pub const fn index(self) -> u8 {
        match self {
            Self::Sun => 0,
            Self::Moon => 1,
            Self::Mercury => 2,
            Self::Venus => 3,
            Self::Mars => 4,
            Self::Jupiter => 5,
            Self::Saturn => 6,
            Self::Uranus => 7,
            Self::Neptune => 8,
            Self::Pluto => 9,
            Self::NorthNode => 10,
            Self::SouthNode => 11,
            Self::Chiron => 12,
        }
    }

    /// Fixed weighting constant for aspect strength, in (0, 1].
    ///
    /// Luminaries 1.0, personal planets 0.9, social planets 0.8,
    /// outer planets 0.7, nodes 0.6, Chiron 0.5.
    pub const fn weight(self) -> f64 {
        match self {
            Self::Sun | Self::Moon => 1.0,
            Self::Mercury | Self::Venus | Self::Mars => 0.9,
            Self::Jupiter | Self::Saturn => 0.8,
            Self::Uranus | Self::Neptune | Self::Pluto => 0.7,
            Self::NorthNode | Self::SouthNode => 0.6,
            Self::Chiron => 0.5,
        }
    }
}

/// Position record for a single body within a chart.
///
/// Sign and in-sign degree are derived from `longitude_deg` on demand;
/// they can never disagree with it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CelestialBody {
    /// Body identifier.
    pub id: BodyId,
    /// Ecliptic longitude in degrees [0, 360).
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitude speed in degrees per day; negative means retrograde.
    pub speed_deg_per_day: f64,
    /// House placement (1-12).
    pub house: u8,
}

impl CelestialBody {
    /// Zodiac sign containing this body's longitude.
    pub fn sign(&self) -> ZodiacSign {
        ZodiacSign::from_longitude(self.longitude_deg)
    }

    /// Degree within the containing sign, in [0, 30).
    pub fn degree_in_sign(&self) -> f64 {
        degree_in_sign(self.longitude_deg)
    }

    /// Whether the body is in retrograde motion.
    ///
    /// Negative-signed speed means retrograde. Sign-based so a negative
    /// zero (a provider's retrograde flag with a zeroed speed) still
    /// reads as retrograde.
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day.is_sign_negative()
    }
}
