//! Transit scanning: day-by-day search for significant aspects between
//! current planetary positions and a fixed natal chart, grouped into
//! significance-ranked windows.

pub mod error;
pub mod transit;
pub mod transit_types;

pub use error::ScanError;
pub use transit::scan_transits;
pub use transit_types::{
    SAMPLE_HOUR, ScanConfig, SIGNIFICANCE_ORB_DIVISOR, TRANSIT_ADMISSION_ORB_DEG, Transit,
    TransitAnalysis, TransitWindow, WINDOW_SPAN_DAYS,
};
