//! Natal chart construction over an injected ephemeris provider.
//!
//! This crate provides:
//! - Validated civil datetime / geographic position value types
//! - The `EphemerisProvider` collaborator contract and raw-record adapter
//! - The all-or-nothing chart builder

pub mod builder;
pub mod error;
pub mod provider;
pub mod types;

pub use builder::{ChartConfig, build_chart};
pub use error::{ChartError, ProviderError};
pub use provider::{EphemerisProvider, RawBodyPosition, normalize_position};
pub use types::{BirthChart, ChartAngles, ChartDateTime, GeoPosition, MAX_YEAR, MIN_YEAR};
