//! Aspect classification between two bodies.
//!
//! An aspect is accepted when the angular separation of two bodies falls
//! within a fixed orb of one of the six canonical angles. Strength combines
//! orb tightness with fixed per-body weights; applying/separating is decided
//! by projecting both longitudes forward with their signed speeds.

use serde::{Deserialize, Serialize};

use crate::body::{BodyId, CelestialBody};
use crate::util::{normalize_360, separation};

/// Forward projection step (days) used to decide applying vs separating.
pub const APPLYING_STEP_DAYS: f64 = 0.25;

/// Orb below which an aspect is considered exact.
pub const EXACT_ORB_DEG: f64 = 0.1;

/// The six recognized aspect types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectType {
    Conjunction,
    Sextile,
    Square,
    Trine,
    Quincunx,
    Opposition,
}

/// All aspect types in canonical-angle order.
pub const ALL_ASPECT_TYPES: [AspectType; 6] = [
    AspectType::Conjunction,
    AspectType::Sextile,
    AspectType::Square,
    AspectType::Trine,
    AspectType::Quincunx,
    AspectType::Opposition,
];

impl AspectType {
    /// Canonical angle of the aspect in degrees.
    pub const fn canonical_angle(self) -> f64 {
        match self {
            Self::Conjunction => 0.0,
            Self::Sextile => 60.0,
            Self::Square => 90.0,
            Self::Trine => 120.0,
            Self::Quincunx => 150.0,
            Self::Opposition => 180.0,
        }
    }

    /// Maximum accepted orb for this aspect type in degrees.
    pub const fn max_orb(self) -> f64 {
        match self {
            Self::Conjunction => 8.0,
            Self::Sextile => 6.0,
            Self::Square => 7.0,
            Self::Trine => 8.0,
            Self::Quincunx => 3.0,
            Self::Opposition => 8.0,
        }
    }

    /// Lowercase name of the aspect.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Conjunction => "conjunction",
            Self::Sextile => "sextile",
            Self::Square => "square",
            Self::Trine => "trine",
            Self::Quincunx => "quincunx",
            Self::Opposition => "opposition",
        }
    }
}

/// Strength tier derived from the numeric strength.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrengthTier {
    High,
    Medium,
    Low,
}

/// Tier thresholds: > 0.8 high, > 0.5 medium, else low.
pub fn strength_tier(strength: f64) -> StrengthTier {
    if strength > 0.8 {
        StrengthTier::High
    } else if strength > 0.5 {
        StrengthTier::Medium
    } else {
        StrengthTier::Low
    }
}

/// A classified aspect between two bodies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aspect {
    /// First body of the pair.
    pub body1: BodyId,
    /// Second body of the pair.
    pub body2: BodyId,
    /// Aspect type; its canonical angle is the exact target angle.
    pub aspect_type: AspectType,
    /// Absolute deviation from the canonical angle, in [0, 180].
    pub orb_deg: f64,
    /// Whether the separation is closing as time advances.
    pub applying: bool,
    /// Combined orb/body-weight strength in [0, 1].
    pub strength: f64,
    /// Strength tier for the numeric strength.
    pub tier: StrengthTier,
}

impl Aspect {
    /// An aspect within 0.1 deg of exact.
    pub fn is_exact(&self) -> bool {
        self.orb_deg <= EXACT_ORB_DEG
    }
}

/// Strength of an aspect: orb factor times mean body weight.
///
/// `orb_factor = 1 - orb/max_orb`, clamped to [0, 1] for orbs at the
/// acceptance boundary.
fn aspect_strength(aspect_type: AspectType, orb_deg: f64, a: BodyId, b: BodyId) -> f64 {
    let orb_factor = (1.0 - orb_deg / aspect_type.max_orb()).clamp(0.0, 1.0);
    let body_factor = (a.weight() + b.weight()) / 2.0;
    orb_factor * body_factor
}

/// Whether the pair is applying: separation shrinks when both longitudes
/// advance by their signed speeds over a short step.
fn is_applying(a: &CelestialBody, b: &CelestialBody) -> bool {
    let now = separation(a.longitude_deg, b.longitude_deg);
    let later = separation(
        normalize_360(a.longitude_deg + a.speed_deg_per_day * APPLYING_STEP_DAYS),
        normalize_360(b.longitude_deg + b.speed_deg_per_day * APPLYING_STEP_DAYS),
    );
    later < now
}

/// Build an aspect record for a known type, regardless of that type's
/// acceptance orb. Used by the pattern detector, whose templates carry
/// their own tolerances.
pub(crate) fn aspect_of_type(
    a: &CelestialBody,
    b: &CelestialBody,
    aspect_type: AspectType,
) -> Aspect {
    let d = separation(a.longitude_deg, b.longitude_deg);
    let orb_deg = (d - aspect_type.canonical_angle()).abs();
    let strength = aspect_strength(aspect_type, orb_deg, a.id, b.id);
    Aspect {
        body1: a.id,
        body2: b.id,
        aspect_type,
        orb_deg,
        applying: is_applying(a, b),
        strength,
        tier: strength_tier(strength),
    }
}

/// Classify the aspect between two bodies, if any.
///
/// Picks the aspect type whose canonical angle is closest to the pair's
/// separation, and accepts it only when the deviation is within that
/// type's maximum orb. Returns `None` when no aspect is in orb.
///
/// Non-finite longitudes are a programming error upstream; they are
/// rejected here so a malformed body can never classify.
pub fn classify(a: &CelestialBody, b: &CelestialBody) -> Option<Aspect> {
    debug_assert!(
        a.longitude_deg.is_finite() && b.longitude_deg.is_finite(),
        "body longitude must be finite"
    );
    if !a.longitude_deg.is_finite() || !b.longitude_deg.is_finite() {
        return None;
    }

    let d = separation(a.longitude_deg, b.longitude_deg);

    let mut best: Option<(AspectType, f64)> = None;
    for t in ALL_ASPECT_TYPES {
        let orb = (d - t.canonical_angle()).abs();
        match best {
            Some((_, best_orb)) if orb >= best_orb => {}
            _ => best = Some((t, orb)),
        }
    }

    let (aspect_type, orb_deg) = best?;
    if orb_deg > aspect_type.max_orb() {
        return None;
    }

    let strength = aspect_strength(aspect_type, orb_deg, a.id, b.id);
    Some(Aspect {
        body1: a.id,
        body2: b.id,
        aspect_type,
        orb_deg,
        applying: is_applying(a, b),
        strength,
        tier: strength_tier(strength),
    })
}
