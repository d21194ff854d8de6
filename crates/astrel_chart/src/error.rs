//! Error types for chart construction.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from the ephemeris provider collaborator.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ProviderError {
    /// Provider unreachable or refused the request.
    Unavailable(String),
    /// The caller-supplied timeout expired.
    Timeout,
    /// Provider returned data the adapter cannot normalize.
    Malformed(&'static str),
}

impl Display for ProviderError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable(msg) => write!(f, "provider unavailable: {msg}"),
            Self::Timeout => write!(f, "provider call timed out"),
            Self::Malformed(msg) => write!(f, "malformed provider data: {msg}"),
        }
    }
}

impl Error for ProviderError {}

/// Errors from chart building.
///
/// Validation failures are caller errors and never retried. Provider
/// failures may be retried once by the caller; never internally.
/// Calculation failures are violated internal invariants, fatal to the
/// current call.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ChartError {
    /// Malformed datetime/location/cusp input.
    Validation(&'static str),
    /// The ephemeris provider failed.
    Provider(ProviderError),
    /// An internal invariant was violated.
    Calculation(&'static str),
}

impl Display for ChartError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(msg) => write!(f, "validation failure: {msg}"),
            Self::Provider(e) => write!(f, "provider failure: {e}"),
            Self::Calculation(msg) => write!(f, "calculation failure: {msg}"),
        }
    }
}

impl Error for ChartError {}

impl From<ProviderError> for ChartError {
    fn from(e: ProviderError) -> Self {
        Self::Provider(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_error_displays() {
        let e = ProviderError::Unavailable("connection refused".into());
        assert!(e.to_string().contains("connection refused"));
        assert!(ProviderError::Timeout.to_string().contains("timed out"));
    }

    #[test]
    fn chart_error_wraps_provider() {
        let e: ChartError = ProviderError::Timeout.into();
        assert!(matches!(e, ChartError::Provider(ProviderError::Timeout)));
    }

    #[test]
    fn chart_error_displays_context() {
        let e = ChartError::Validation("month out of range");
        assert!(e.to_string().contains("month out of range"));
    }
}
