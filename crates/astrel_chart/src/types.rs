//! Validated value types: civil datetime, geographic position, chart
//! angles, and the assembled birth chart.

use std::str::FromStr;

use chrono::{DateTime, LocalResult, NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use astrel_base::{Aspect, CelestialBody, HouseTable};

use crate::error::ChartError;

/// Supported year range (bounds inherited from the ephemeris data set).
pub const MIN_YEAR: i32 = 1900;
pub const MAX_YEAR: i32 = 2100;

/// A civil date-time with an IANA timezone identifier.
///
/// Immutable value type; all fields are plain calendar fields so that
/// identical inputs always produce identical charts.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChartDateTime {
    pub year: i32,
    /// Month 1-12.
    pub month: u8,
    /// Day of month, valid for the month/year.
    pub day: u8,
    /// Hour 0-23.
    pub hour: u8,
    /// Minute 0-59.
    pub minute: u8,
    /// Second 0-59.
    pub second: u8,
    /// IANA timezone identifier, e.g. "Europe/Paris".
    pub timezone: String,
}

impl ChartDateTime {
    /// Construct and validate in one step.
    pub fn new(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        timezone: &str,
    ) -> Result<Self, ChartError> {
        let dt = Self {
            year,
            month,
            day,
            hour,
            minute,
            second,
            timezone: timezone.to_owned(),
        };
        dt.validate()?;
        Ok(dt)
    }

    /// Validate calendar field ranges, day-for-month validity, and the
    /// timezone identifier.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&self.year) {
            return Err(ChartError::Validation("year out of supported range"));
        }
        if !(1..=12).contains(&self.month) {
            return Err(ChartError::Validation("month must be 1-12"));
        }
        if NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32).is_none() {
            return Err(ChartError::Validation("day invalid for month"));
        }
        if self.hour > 23 {
            return Err(ChartError::Validation("hour must be 0-23"));
        }
        if self.minute > 59 {
            return Err(ChartError::Validation("minute must be 0-59"));
        }
        if self.second > 59 {
            return Err(ChartError::Validation("second must be 0-59"));
        }
        self.tz()?;
        Ok(())
    }

    /// Calendar date portion.
    pub fn date(&self) -> Result<NaiveDate, ChartError> {
        NaiveDate::from_ymd_opt(self.year, self.month as u32, self.day as u32)
            .ok_or(ChartError::Validation("day invalid for month"))
    }

    /// Parsed timezone.
    pub fn tz(&self) -> Result<Tz, ChartError> {
        Tz::from_str(&self.timezone)
            .map_err(|_| ChartError::Validation("unknown timezone identifier"))
    }

    /// Convert the local civil time to UTC.
    ///
    /// Local times that are skipped or duplicated by a DST transition
    /// are rejected rather than silently disambiguated.
    pub fn to_utc(&self) -> Result<DateTime<Utc>, ChartError> {
        let tz = self.tz()?;
        match tz.with_ymd_and_hms(
            self.year,
            self.month as u32,
            self.day as u32,
            self.hour as u32,
            self.minute as u32,
            self.second as u32,
        ) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(_, _) => {
                Err(ChartError::Validation("local time is ambiguous (DST)"))
            }
            LocalResult::None => Err(ChartError::Validation("local time does not exist (DST)")),
        }
    }
}

/// Geographic position of the observer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPosition {
    /// Latitude in degrees [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees [-180, 180].
    pub longitude: f64,
    /// Optional human-readable place label.
    pub place: Option<String>,
}

impl GeoPosition {
    /// Construct and validate in one step.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, ChartError> {
        let pos = Self {
            latitude,
            longitude,
            place: None,
        };
        pos.validate()?;
        Ok(pos)
    }

    /// Validate coordinate ranges.
    pub fn validate(&self) -> Result<(), ChartError> {
        if !self.latitude.is_finite() || !(-90.0..=90.0).contains(&self.latitude) {
            return Err(ChartError::Validation("latitude must be in [-90, 90]"));
        }
        if !self.longitude.is_finite() || !(-180.0..=180.0).contains(&self.longitude) {
            return Err(ChartError::Validation("longitude must be in [-180, 180]"));
        }
        Ok(())
    }
}

/// The four chart angles, derived from the cusp table and never stored
/// independently of it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartAngles {
    /// Ascendant = cusp 1.
    pub ascendant: f64,
    /// Midheaven = cusp 10.
    pub midheaven: f64,
    /// Descendant = cusp 7.
    pub descendant: f64,
    /// Imum coeli = cusp 4.
    pub imum_coeli: f64,
}

impl ChartAngles {
    /// Derive the angles from a cusp table.
    pub fn from_cusps(table: &HouseTable) -> Self {
        Self {
            ascendant: table.cusps[0],
            midheaven: table.cusps[9],
            descendant: table.cusps[6],
            imum_coeli: table.cusps[3],
        }
    }
}

/// A complete natal chart. Created once by the chart builder and
/// immutable afterwards; changed inputs produce a new chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthChart {
    pub datetime: ChartDateTime,
    pub location: GeoPosition,
    /// Bodies in the provider's stable order.
    pub bodies: Vec<CelestialBody>,
    pub houses: HouseTable,
    /// Pairwise aspects among the bodies, each unordered pair once.
    pub aspects: Vec<Aspect>,
    pub angles: ChartAngles,
}

impl BirthChart {
    /// Deterministic identifier for cache keying: a pure function of the
    /// birth moment and rounded coordinates.
    pub fn cache_id(&self) -> String {
        format!(
            "{:04}{:02}{:02}T{:02}{:02}{:02}:{:.4}:{:.4}",
            self.datetime.year,
            self.datetime.month,
            self.datetime.day,
            self.datetime.hour,
            self.datetime.minute,
            self.datetime.second,
            self.location.latitude,
            self.location.longitude,
        )
    }
}
