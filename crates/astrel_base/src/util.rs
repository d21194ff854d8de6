//! Shared angle utilities for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}

/// Normalize an angle to (-180, +180] degrees.
pub fn normalize_to_pm180(deg: f64) -> f64 {
    let mut d = deg % 360.0;
    if d > 180.0 {
        d -= 360.0;
    } else if d <= -180.0 {
        d += 360.0;
    }
    d
}

/// Absolute angular separation between two longitudes, in [0, 180].
///
/// `separation(10, 350) = 20`, `separation(0, 180) = 180`.
pub fn separation(lon_a: f64, lon_b: f64) -> f64 {
    normalize_to_pm180(lon_a - lon_b).abs()
}

/// Forward arc from `from_deg` to `to_deg` going counterclockwise,
/// in [0, 360). Wraps past 360 when `to_deg < from_deg`.
pub fn arc_forward(from_deg: f64, to_deg: f64) -> f64 {
    normalize_360(to_deg - from_deg)
}
