//! Zodiac signs and in-sign degree computation.
//!
//! The ecliptic circle is divided into 12 equal signs of 30 degrees each,
//! starting from Aries at 0 deg. Sign and in-sign degree are always derived
//! from a longitude, never stored or mutated independently of it.

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// The 12 zodiac signs starting from Aries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// All 12 signs in order (0 = Aries, 11 = Pisces).
pub const ALL_SIGNS: [ZodiacSign; 12] = [
    ZodiacSign::Aries,
    ZodiacSign::Taurus,
    ZodiacSign::Gemini,
    ZodiacSign::Cancer,
    ZodiacSign::Leo,
    ZodiacSign::Virgo,
    ZodiacSign::Libra,
    ZodiacSign::Scorpio,
    ZodiacSign::Sagittarius,
    ZodiacSign::Capricorn,
    ZodiacSign::Aquarius,
    ZodiacSign::Pisces,
];

impl ZodiacSign {
    /// English name of the sign.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aries => "Aries",
            Self::Taurus => "Taurus",
            Self::Gemini => "Gemini",
            Self::Cancer => "Cancer",
            Self::Leo => "Leo",
            Self::Virgo => "Virgo",
            Self::Libra => "Libra",
            Self::Scorpio => "Scorpio",
            Self::Sagittarius => "Sagittarius",
            Self::Capricorn => "Capricorn",
            Self::Aquarius => "Aquarius",
            Self::Pisces => "Pisces",
        }
    }

    /// 0-based index (Aries=0 .. Pisces=11).
    pub const fn index(self) -> u8 {
        match self {
            Self::Aries => 0,
            Self::Taurus => 1,
            Self::Gemini => 2,
            Self::Cancer => 3,
            Self::Leo => 4,
            Self::Virgo => 5,
            Self::Libra => 6,
            Self::Scorpio => 7,
            Self::Sagittarius => 8,
            Self::Capricorn => 9,
            Self::Aquarius => 10,
            Self::Pisces => 11,
        }
    }

    /// Sign containing an ecliptic longitude: `ALL_SIGNS[floor(lon/30) mod 12]`.
    pub fn from_longitude(longitude_deg: f64) -> ZodiacSign {
        let lon = normalize_360(longitude_deg);
        // lon < 360 after normalization, so the index stays in 0..=11
        let idx = ((lon / 30.0).floor() as usize).min(11);
        ALL_SIGNS[idx]
    }
}

/// Degree within the containing sign: `lon mod 30`, in [0, 30).
pub fn degree_in_sign(longitude_deg: f64) -> f64 {
    normalize_360(longitude_deg) % 30.0
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-10;

    #[test]
    fn all_signs_count() {
        assert_eq!(ALL_SIGNS.len(), 12);
    }

    #[test]
    fn sign_indices_sequential() {
        for (i, s) in ALL_SIGNS.iter().enumerate() {
            assert_eq!(s.index() as usize, i);
        }
    }

    #[test]
    fn sign_names_nonempty() {
        for s in ALL_SIGNS {
            assert!(!s.name().is_empty());
        }
    }

    #[test]
    fn sign_boundaries() {
        assert_eq!(ZodiacSign::from_longitude(0.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(29.999), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(30.0), ZodiacSign::Taurus);
        assert_eq!(ZodiacSign::from_longitude(125.0), ZodiacSign::Leo);
        assert_eq!(ZodiacSign::from_longitude(359.999), ZodiacSign::Pisces);
    }

    #[test]
    fn sign_wraps_at_360() {
        assert_eq!(ZodiacSign::from_longitude(360.0), ZodiacSign::Aries);
        assert_eq!(ZodiacSign::from_longitude(390.0), ZodiacSign::Taurus);
    }

    #[test]
    fn sign_negative_longitude() {
        // -10 normalizes to 350 -> Pisces
        assert_eq!(ZodiacSign::from_longitude(-10.0), ZodiacSign::Pisces);
    }

    #[test]
    fn degree_in_sign_basic() {
        assert!((degree_in_sign(125.0) - 5.0).abs() < EPS);
        assert!((degree_in_sign(30.0)).abs() < EPS);
        assert!((degree_in_sign(359.5) - 29.5).abs() < EPS);
    }

    #[test]
    fn sign_degree_invariant_full_circle() {
        // For all longitudes the derived pair must agree with the longitude.
        let mut lon = 0.0;
        while lon < 360.0 {
            let sign = ZodiacSign::from_longitude(lon);
            let deg = degree_in_sign(lon);
            assert_eq!(sign.index() as usize, (lon / 30.0).floor() as usize);
            assert!((0.0..30.0).contains(&deg), "degree_in_sign({lon}) = {deg}");
            assert!(
                (sign.index() as f64 * 30.0 + deg - lon).abs() < EPS,
                "sign/degree disagree with lon = {lon}"
            );
            lon += 0.25;
        }
    }
}
