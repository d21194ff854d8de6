//! Types for transit scanning.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use astrel_base::{Aspect, BodyId};

/// Orb ceiling for transit admission. An aspect is retained only when
/// its tier is High and its orb is at or under this value; looser
/// aspects are computed but discarded to bound output size.
pub const TRANSIT_ADMISSION_ORB_DEG: f64 = 1.0;

/// Days a window extends past its qualifying day.
pub const WINDOW_SPAN_DAYS: u32 = 3;

/// Orb divisor in the significance formula `strength * (1 - orb/5)`.
pub const SIGNIFICANCE_ORB_DIVISOR: f64 = 5.0;

/// Local civil hour at which each scanned day is sampled.
pub const SAMPLE_HOUR: u8 = 12;

/// A single admitted aspect between a transiting body and a natal body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transit {
    /// Body at its scanned-day position.
    pub transiting: BodyId,
    /// Natal body being aspected.
    pub natal: BodyId,
    /// The classified aspect (transiting body first).
    pub aspect: Aspect,
    /// Day the aspect was sampled.
    pub date: NaiveDate,
    /// `strength * (1 - orb/5)`.
    pub significance: f64,
}

/// A contiguous date range with its admitted transits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitWindow {
    /// First day of the window (the qualifying day).
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
    /// Admitted transits sampled on the qualifying day, strongest first.
    pub transits: Vec<Transit>,
    /// Maximum member significance.
    pub significance: f64,
    /// Label of the dominant transit, e.g. "Mars square natal Sun".
    pub theme: String,
}

/// Result of a transit scan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitAnalysis {
    /// Qualifying windows, most significant first.
    pub windows: Vec<TransitWindow>,
    /// De-duplicated "(transiting body) in (sign)" labels, first-seen order.
    pub major_themes: Vec<String>,
    /// De-duplicated per-body recommendations, first-seen order.
    pub recommendations: Vec<String>,
}

impl TransitAnalysis {
    /// Empty result for a zero-day scan.
    pub fn empty() -> Self {
        Self {
            windows: Vec::new(),
            major_themes: Vec::new(),
            recommendations: Vec::new(),
        }
    }
}

/// Configuration for a transit scan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanConfig {
    /// Admission orb ceiling in degrees.
    pub admission_orb_deg: f64,
    /// Days each window extends past its qualifying day.
    pub window_span_days: u32,
    /// Timeout applied to each per-day provider call.
    pub provider_timeout: std::time::Duration,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            admission_orb_deg: TRANSIT_ADMISSION_ORB_DEG,
            window_span_days: WINDOW_SPAN_DAYS,
            provider_timeout: std::time::Duration::from_secs(10),
        }
    }
}

impl ScanConfig {
    /// Validate the configuration.
    pub(crate) fn validate(&self) -> Result<(), &'static str> {
        if !self.admission_orb_deg.is_finite() || self.admission_orb_deg <= 0.0 {
            return Err("admission_orb_deg must be positive");
        }
        Ok(())
    }
}
