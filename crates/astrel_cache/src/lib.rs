//! Cache façade for chart and transit computations.
//!
//! Wraps any string-keyed [`CacheBackend`] with a get-or-compute
//! pattern, deterministic key builders, and fixed per-kind TTLs. Cache
//! failures never fail the caller; they are logged and the value is
//! computed fresh.

pub mod backend;
pub mod error;
pub mod keys;
pub mod store;

pub use backend::{CacheBackend, MemoryBackend};
pub use error::CacheError;
pub use keys::{CHARTS_TTL, POSITIONS_TTL, TRANSITS_TTL, chart_key, position_key, transit_key};
pub use store::get_or_compute;
