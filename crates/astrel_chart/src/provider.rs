//! Ephemeris provider contract and raw-position adapter.
//!
//! The provider is an injected collaborator: the only I/O-bound step in
//! the core. Every call carries a caller-supplied timeout; expiry must
//! surface as `ProviderError::Timeout`.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use astrel_base::{BodyId, CelestialBody, HouseSystem, HouseTable, normalize_360};

use crate::error::ProviderError;
use crate::types::{ChartDateTime, GeoPosition};

/// A raw body position as returned by the ephemeris provider, before
/// normalization into a `CelestialBody`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawBodyPosition {
    pub id: BodyId,
    /// Ecliptic longitude in degrees; any finite value, normalized by
    /// the adapter.
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Longitude speed in degrees per day. Some providers zero this and
    /// report motion only through `is_retrograde`.
    pub speed_deg_per_day: f64,
    /// Provider-reported retrograde flag.
    pub is_retrograde: bool,
}

/// External ephemeris provider contract.
///
/// Implementations must return bodies using the fixed `BodyId` set and
/// enforce the supplied timeout on their own I/O.
pub trait EphemerisProvider {
    /// Raw positions for every body at the given moment and location.
    fn positions(
        &self,
        moment: &ChartDateTime,
        location: &GeoPosition,
        timeout: Duration,
    ) -> Result<Vec<RawBodyPosition>, ProviderError>;

    /// Twelve house cusp longitudes for the given moment, location, and
    /// house system.
    fn house_cusps(
        &self,
        moment: &ChartDateTime,
        location: &GeoPosition,
        system: HouseSystem,
        timeout: Duration,
    ) -> Result<[f64; 12], ProviderError>;
}

/// Normalize a raw provider record into a domain body.
///
/// The longitude is wrapped to [0, 360) and the house assigned from the
/// natal cusp table. The speed sign is reconciled with the retrograde
/// flag: the flag wins, and a zeroed speed keeps it through a negative
/// zero.
pub fn normalize_position(
    raw: &RawBodyPosition,
    table: &HouseTable,
) -> Result<CelestialBody, ProviderError> {
    if !raw.longitude_deg.is_finite() {
        return Err(ProviderError::Malformed("body longitude is not finite"));
    }
    if !raw.latitude_deg.is_finite() || !raw.speed_deg_per_day.is_finite() {
        return Err(ProviderError::Malformed(
            "body latitude or speed is not finite",
        ));
    }

    let longitude_deg = normalize_360(raw.longitude_deg);
    let speed = if raw.is_retrograde {
        -raw.speed_deg_per_day.abs()
    } else {
        raw.speed_deg_per_day.abs()
    };

    Ok(CelestialBody {
        id: raw.id,
        longitude_deg,
        latitude_deg: raw.latitude_deg,
        speed_deg_per_day: speed,
        house: table.house_of(longitude_deg),
    })
}
