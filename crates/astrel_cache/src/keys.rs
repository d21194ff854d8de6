//! Deterministic cache keys and per-kind TTLs.

use std::time::Duration;

use chrono::NaiveDate;

use astrel_chart::GeoPosition;

/// TTL for daily position sets.
pub const POSITIONS_TTL: Duration = Duration::from_secs(6 * 60 * 60);

/// TTL for built charts.
pub const CHARTS_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// TTL for transit analyses.
pub const TRANSITS_TTL: Duration = Duration::from_secs(12 * 60 * 60);

/// Key for a day's positions at a location.
///
/// Latitude and longitude are rounded to two decimals so nearby
/// coordinates share an entry.
pub fn position_key(date: NaiveDate, location: &GeoPosition) -> String {
    format!(
        "positions:{date}:{:.2}:{:.2}",
        location.latitude, location.longitude
    )
}

/// Key for a built chart, from `BirthChart::cache_id()`.
pub fn chart_key(chart_id: &str) -> String {
    format!("chart:{chart_id}")
}

/// Key for a transit analysis of a chart starting at a date.
pub fn transit_key(chart_id: &str, start_date: NaiveDate) -> String {
    format!("transits:{chart_id}:{start_date}")
}
