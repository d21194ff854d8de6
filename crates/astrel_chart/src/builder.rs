//! Natal chart assembly.
//!
//! Orchestrates the ephemeris provider, house engine, and aspect engine.
//! All steps must succeed; any failure aborts the whole build and no
//! partial chart is ever returned.

use std::time::Duration;

use astrel_base::{HouseSystem, HouseTable, classify};

use crate::error::{ChartError, ProviderError};
use crate::provider::{EphemerisProvider, normalize_position};
use crate::types::{BirthChart, ChartAngles, ChartDateTime, GeoPosition};

/// Chart build options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartConfig {
    /// House division system requested from the provider.
    pub house_system: HouseSystem,
    /// Timeout applied to each provider call.
    pub provider_timeout: Duration,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            house_system: HouseSystem::Placidus,
            provider_timeout: Duration::from_secs(10),
        }
    }
}

/// Build a complete natal chart for a birth moment and location.
///
/// Steps: validate inputs, fetch cusps and raw positions from the
/// provider, normalize each position (assigning houses), classify all
/// pairwise aspects, and derive the chart angles from the cusps.
/// Identical inputs always yield identical charts.
pub fn build_chart(
    provider: &dyn EphemerisProvider,
    datetime: &ChartDateTime,
    location: &GeoPosition,
    config: &ChartConfig,
) -> Result<BirthChart, ChartError> {
    datetime.validate()?;
    location.validate()?;

    let cusps =
        provider.house_cusps(datetime, location, config.house_system, config.provider_timeout)?;
    let houses = HouseTable::new(cusps, config.house_system);
    houses
        .validate()
        .map_err(|msg| ChartError::Provider(ProviderError::Malformed(msg)))?;

    let raw_positions = provider.positions(datetime, location, config.provider_timeout)?;
    if raw_positions.is_empty() {
        return Err(ProviderError::Malformed("provider returned no bodies").into());
    }

    let mut bodies = Vec::with_capacity(raw_positions.len());
    for raw in &raw_positions {
        bodies.push(normalize_position(raw, &houses)?);
    }

    // O(n^2) over ~10-14 bodies; each unordered pair classified once.
    let mut aspects = Vec::new();
    for i in 0..bodies.len() {
        for j in (i + 1)..bodies.len() {
            if let Some(aspect) = classify(&bodies[i], &bodies[j]) {
                aspects.push(aspect);
            }
        }
    }

    let angles = ChartAngles::from_cusps(&houses);
    log::debug!(
        "built chart for {}-{:02}-{:02}: {} bodies, {} aspects",
        datetime.year,
        datetime.month,
        datetime.day,
        bodies.len(),
        aspects.len()
    );

    Ok(BirthChart {
        datetime: datetime.clone(),
        location: location.clone(),
        bodies,
        houses,
        aspects,
        angles,
    })
}
