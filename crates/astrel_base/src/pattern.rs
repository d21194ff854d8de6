//! Three-body geometric pattern detection.
//!
//! Searches all unordered body triples for three templates: harmonic
//! (all pairs near 120), tension (an opposition with both ends square to
//! an apex), and special (a sextile with both ends quincunx to an apex).
//! O(n^3) over at most ~14 bodies, so cost is bounded; the search is not
//! meant for larger body sets.

use serde::{Deserialize, Serialize};

use crate::aspect::{Aspect, AspectType, aspect_of_type};
use crate::body::{BodyId, CelestialBody};
use crate::util::separation;

/// Tolerance around 120 deg for the harmonic template.
pub const HARMONIC_TOLERANCE_DEG: f64 = 8.0;
/// Tolerance around 180/90 deg for the tension template.
pub const TENSION_TOLERANCE_DEG: f64 = 8.0;
/// Tolerance around 60 deg for the special template's sextile pair.
pub const SPECIAL_SEXTILE_TOLERANCE_DEG: f64 = 6.0;
/// Tolerance around 150 deg for the special template's quincunx legs.
pub const SPECIAL_QUINCUNX_TOLERANCE_DEG: f64 = 3.0;

/// Named three-body configuration templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PatternKind {
    /// Three mutual trines (grand-trine-like).
    HarmonicTriple,
    /// Opposition squared by an apex body (t-square-like).
    TensionTriple,
    /// Sextile with both ends quincunx to an apex body (yod-like).
    SpecialTriple,
}

impl PatternKind {
    /// Display name of the pattern.
    pub const fn name(self) -> &'static str {
        match self {
            Self::HarmonicTriple => "harmonic triple",
            Self::TensionTriple => "tension triple",
            Self::SpecialTriple => "special triple",
        }
    }
}

/// A detected three-body configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pattern {
    /// Which template matched.
    pub kind: PatternKind,
    /// Participating bodies. For tension/special triples the apex body
    /// is last.
    pub bodies: [BodyId; 3],
    /// House placements of the participating bodies, same order.
    pub houses: [u8; 3],
    /// The aspects forming the configuration (3 per triple).
    pub aspects: Vec<Aspect>,
}

/// Detection options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PatternConfig {
    /// Return every matching triple per template instead of only the
    /// first one found. First-match is the compatible default.
    pub return_all_matches: bool,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            return_all_matches: false,
        }
    }
}

/// Whether `d` is within `tol` of `target`.
fn near(d: f64, target: f64, tol: f64) -> bool {
    (d - target).abs() <= tol
}

/// Harmonic triple: all three pairwise separations near 120.
fn harmonic(s_ab: f64, s_ac: f64, s_bc: f64) -> bool {
    near(s_ab, 120.0, HARMONIC_TOLERANCE_DEG)
        && near(s_ac, 120.0, HARMONIC_TOLERANCE_DEG)
        && near(s_bc, 120.0, HARMONIC_TOLERANCE_DEG)
}

/// Tension triple: returns the apex index (0, 1, or 2 within the triple)
/// when one pair opposes and both ends square the remaining body.
fn tension_apex(s_ab: f64, s_ac: f64, s_bc: f64) -> Option<usize> {
    let t = TENSION_TOLERANCE_DEG;
    // a-b oppose, c is apex
    if near(s_ab, 180.0, t) && near(s_ac, 90.0, t) && near(s_bc, 90.0, t) {
        return Some(2);
    }
    // a-c oppose, b is apex
    if near(s_ac, 180.0, t) && near(s_ab, 90.0, t) && near(s_bc, 90.0, t) {
        return Some(1);
    }
    // b-c oppose, a is apex
    if near(s_bc, 180.0, t) && near(s_ab, 90.0, t) && near(s_ac, 90.0, t) {
        return Some(0);
    }
    None
}

/// Special triple: returns the apex index when one pair is sextile and
/// both ends are quincunx to the remaining body.
fn special_apex(s_ab: f64, s_ac: f64, s_bc: f64) -> Option<usize> {
    let ts = SPECIAL_SEXTILE_TOLERANCE_DEG;
    let tq = SPECIAL_QUINCUNX_TOLERANCE_DEG;
    if near(s_ab, 60.0, ts) && near(s_ac, 150.0, tq) && near(s_bc, 150.0, tq) {
        return Some(2);
    }
    if near(s_ac, 60.0, ts) && near(s_ab, 150.0, tq) && near(s_bc, 150.0, tq) {
        return Some(1);
    }
    if near(s_bc, 60.0, ts) && near(s_ab, 150.0, tq) && near(s_ac, 150.0, tq) {
        return Some(0);
    }
    None
}

/// Assemble a pattern with the apex body last.
fn make_pattern(kind: PatternKind, triple: [&CelestialBody; 3], apex: usize) -> Pattern {
    // Rotate so the apex sits at the end; base pair keeps chart order.
    let (base_a, base_b, apex_body) = match apex {
        0 => (triple[1], triple[2], triple[0]),
        1 => (triple[0], triple[2], triple[1]),
        _ => (triple[0], triple[1], triple[2]),
    };
    let (pair_type, leg_type) = match kind {
        PatternKind::HarmonicTriple => (AspectType::Trine, AspectType::Trine),
        PatternKind::TensionTriple => (AspectType::Opposition, AspectType::Square),
        PatternKind::SpecialTriple => (AspectType::Sextile, AspectType::Quincunx),
    };
    Pattern {
        kind,
        bodies: [base_a.id, base_b.id, apex_body.id],
        houses: [base_a.house, base_b.house, apex_body.house],
        aspects: vec![
            aspect_of_type(base_a, base_b, pair_type),
            aspect_of_type(base_a, apex_body, leg_type),
            aspect_of_type(base_b, apex_body, leg_type),
        ],
    }
}

/// Detect three-body patterns among a chart's bodies.
///
/// Enumerates all C(n, 3) unordered triples; fewer than 3 bodies yields
/// an empty result. Each triple is tested against the three templates,
/// which are mutually exclusive for a given triple. By default at most
/// one match per template is returned (first found in chart order).
pub fn detect(bodies: &[CelestialBody], config: &PatternConfig) -> Vec<Pattern> {
    if bodies.len() < 3 {
        return Vec::new();
    }

    let mut patterns = Vec::new();
    let mut found_harmonic = false;
    let mut found_tension = false;
    let mut found_special = false;

    let n = bodies.len();
    for i in 0..n {
        for j in (i + 1)..n {
            for k in (j + 1)..n {
                let (a, b, c) = (&bodies[i], &bodies[j], &bodies[k]);
                let s_ab = separation(a.longitude_deg, b.longitude_deg);
                let s_ac = separation(a.longitude_deg, c.longitude_deg);
                let s_bc = separation(b.longitude_deg, c.longitude_deg);
                let triple = [a, b, c];

                if harmonic(s_ab, s_ac, s_bc) {
                    if !found_harmonic || config.return_all_matches {
                        patterns.push(make_pattern(PatternKind::HarmonicTriple, triple, 2));
                        found_harmonic = true;
                    }
                } else if let Some(apex) = tension_apex(s_ab, s_ac, s_bc) {
                    if !found_tension || config.return_all_matches {
                        patterns.push(make_pattern(PatternKind::TensionTriple, triple, apex));
                        found_tension = true;
                    }
                } else if let Some(apex) = special_apex(s_ab, s_ac, s_bc) {
                    if !found_special || config.return_all_matches {
                        patterns.push(make_pattern(PatternKind::SpecialTriple, triple, apex));
                        found_special = true;
                    }
                }
            }
        }
    }

    patterns
}
