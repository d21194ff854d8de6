//! Core chart geometry: zodiac signs, body records, aspect classification,
//! house lookup, and three-body pattern detection.
//!
//! This crate is pure computation over longitudes. It performs no I/O and
//! knows nothing about ephemeris providers or caches; those live in the
//! `astrel_chart`, `astrel_search`, and `astrel_cache` crates.

pub mod aspect;
pub mod body;
pub mod houses;
pub mod pattern;
pub mod util;
pub mod zodiac;

pub use aspect::{
    ALL_ASPECT_TYPES, APPLYING_STEP_DAYS, Aspect, AspectType, EXACT_ORB_DEG, StrengthTier,
    classify, strength_tier,
};
pub use body::{ALL_BODIES, BodyId, CelestialBody};
pub use houses::{HouseSystem, HouseTable, house_rulers};
pub use pattern::{Pattern, PatternConfig, PatternKind, detect};
pub use util::{arc_forward, normalize_360, normalize_to_pm180, separation};
pub use zodiac::{ALL_SIGNS, ZodiacSign, degree_in_sign};
