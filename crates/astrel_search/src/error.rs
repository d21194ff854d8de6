//! Error types for transit scanning.

use std::error::Error;
use std::fmt::{Display, Formatter};

use astrel_chart::{ChartError, ProviderError};

/// Errors from a transit scan.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ScanError {
    /// Invalid scan configuration.
    InvalidConfig(&'static str),
    /// The scan window could not be materialized as calendar dates.
    InvalidWindow(&'static str),
    /// Error from chart-layer validation or the ephemeris provider.
    Chart(ChartError),
}

impl Display for ScanError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::InvalidWindow(msg) => write!(f, "invalid window: {msg}"),
            Self::Chart(e) => write!(f, "chart error: {e}"),
        }
    }
}

impl Error for ScanError {}

impl From<ChartError> for ScanError {
    fn from(e: ChartError) -> Self {
        Self::Chart(e)
    }
}

impl From<ProviderError> for ScanError {
    fn from(e: ProviderError) -> Self {
        Self::Chart(ChartError::Provider(e))
    }
}
