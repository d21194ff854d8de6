//! House cusp tables, forward-arc house lookup, and rulerships.
//!
//! A house table is a cyclic sequence of 12 cusp longitudes. The house
//! containing a longitude L is the unique i with L in the half-open
//! forward arc [cusp[i], cusp[i+1]), wrapping past 360 where needed.

use serde::{Deserialize, Serialize};

use crate::body::BodyId;
use crate::util::{arc_forward, normalize_360};

/// Supported house division systems. Opaque to the lookup logic; the
/// cusp values themselves come from the ephemeris provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HouseSystem {
    Placidus,
    Koch,
    Porphyry,
    Regiomontanus,
    Campanus,
    Equal,
    WholeSign,
    Topocentric,
}

impl HouseSystem {
    /// Display name of the system.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Placidus => "Placidus",
            Self::Koch => "Koch",
            Self::Porphyry => "Porphyry",
            Self::Regiomontanus => "Regiomontanus",
            Self::Campanus => "Campanus",
            Self::Equal => "Equal",
            Self::WholeSign => "Whole Sign",
            Self::Topocentric => "Topocentric",
        }
    }
}

/// Twelve house cusps plus the system that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseTable {
    /// Cusp longitudes in degrees [0, 360), house 1 first.
    pub cusps: [f64; 12],
    /// House system label.
    pub system: HouseSystem,
}

impl HouseTable {
    /// Build a table, normalizing each cusp to [0, 360).
    pub fn new(cusps: [f64; 12], system: HouseSystem) -> Self {
        let mut normalized = [0.0; 12];
        for (out, c) in normalized.iter_mut().zip(cusps) {
            *out = normalize_360(c);
        }
        Self {
            cusps: normalized,
            system,
        }
    }

    /// Validate the cusp sequence.
    ///
    /// Cusps must be finite and cyclically increasing modulo 360: the
    /// twelve forward arcs between consecutive cusps must sum to one
    /// full circle, which fails when any cusp is out of order.
    pub fn validate(&self) -> Result<(), &'static str> {
        for c in &self.cusps {
            if !c.is_finite() {
                return Err("cusp longitude must be finite");
            }
            if !(0.0..360.0).contains(c) {
                return Err("cusp longitude must be in [0, 360)");
            }
        }
        let total: f64 = (0..12).map(|i| self.house_size(i)).sum();
        if (total - 360.0).abs() > 1e-6 {
            return Err("cusps must be cyclically increasing modulo 360");
        }
        Ok(())
    }

    /// Forward arc from cusp i to cusp i+1 (0-based), handling the
    /// 0/360 boundary. Arcs over all 12 houses sum to 360 for a valid
    /// table.
    pub fn house_size(&self, i: usize) -> f64 {
        let a = self.cusps[i % 12];
        let b = self.cusps[(i + 1) % 12];
        if (a - b).abs() < f64::EPSILON {
            0.0
        } else {
            arc_forward(a, b)
        }
    }

    /// House (1-12) containing a longitude.
    ///
    /// Walks the cusps in order and returns the first forward arc that
    /// contains the longitude. House 1 is returned only as a last-resort
    /// fallback for malformed tables; valid tables always match exactly
    /// one arc.
    pub fn house_of(&self, longitude_deg: f64) -> u8 {
        let lon = normalize_360(longitude_deg);
        for i in 0..12 {
            let start = self.cusps[i];
            let end = self.cusps[(i + 1) % 12];
            let contains = if end > start {
                lon >= start && lon < end
            } else {
                // Arc wraps past 360.
                lon >= start || lon < end
            };
            if contains {
                return (i + 1) as u8;
            }
        }
        1
    }
}

/// Traditional rulers of a house (1-12) by natural sign order.
///
/// Returns an empty slice for out-of-range house numbers.
pub fn house_rulers(number: u8) -> &'static [BodyId] {
    match number {
        1 => &[BodyId::Mars],
        2 => &[BodyId::Venus],
        3 => &[BodyId::Mercury],
        4 => &[BodyId::Moon],
        5 => &[BodyId::Sun],
        6 => &[BodyId::Mercury],
        7 => &[BodyId::Venus],
        8 => &[BodyId::Pluto],
        9 => &[BodyId::Jupiter],
        10 => &[BodyId::Saturn],
        11 => &[BodyId::Uranus],
        12 => &[BodyId::Neptune],
        _ => &[],
    }
}
