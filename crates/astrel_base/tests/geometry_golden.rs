//! Golden-value tests for the geometric core: fixed scenarios with known
//! signs, houses, aspects, and patterns.

use astrel_base::{
    AspectType, BodyId, CelestialBody, HouseSystem, HouseTable, PatternConfig, PatternKind,
    StrengthTier, ZodiacSign, classify, degree_in_sign, detect,
};

fn body(id: BodyId, lon: f64, speed: f64, house: u8) -> CelestialBody {
    CelestialBody {
        id,
        longitude_deg: lon,
        latitude_deg: 0.0,
        speed_deg_per_day: speed,
        house,
    }
}

/// Cusp table used across the scenarios (equal houses from 10 deg).
fn cusp_table() -> HouseTable {
    let mut cusps = [0.0; 12];
    for (i, c) in cusps.iter_mut().enumerate() {
        *c = (10.0 + i as f64 * 30.0) % 360.0;
    }
    HouseTable::new(cusps, HouseSystem::Equal)
}

// ===== Scenario A: Sun 125 (Leo) trine Moon 5 (Aries) =====

#[test]
fn scenario_a_sun_leo_trine_moon_aries() {
    let table = cusp_table();
    assert!(table.validate().is_ok());

    let sun = body(BodyId::Sun, 125.0, 0.985, table.house_of(125.0));
    let moon = body(BodyId::Moon, 5.0, 13.2, table.house_of(5.0));

    assert_eq!(sun.sign(), ZodiacSign::Leo);
    assert!((sun.degree_in_sign() - 5.0).abs() < 1e-10);
    assert_eq!(moon.sign(), ZodiacSign::Aries);
    // 125 falls in [100, 130) -> house 4; 5 falls in the wrap arc [340, 10) -> house 12.
    assert_eq!(sun.house, 4);
    assert_eq!(moon.house, 12);

    let aspect = classify(&sun, &moon).expect("trine expected");
    assert_eq!(aspect.aspect_type, AspectType::Trine);
    assert!(aspect.orb_deg.abs() < 1e-10);
    assert_eq!(aspect.tier, StrengthTier::High);
}

// ===== Scenario B: exact grand trine at 0/120/240 =====

#[test]
fn scenario_b_exactly_one_harmonic_pattern() {
    let bodies = [
        body(BodyId::Sun, 0.0, 1.0, 1),
        body(BodyId::Moon, 120.0, 13.0, 5),
        body(BodyId::Jupiter, 240.0, 0.08, 9),
    ];
    let patterns = detect(&bodies, &PatternConfig::default());
    assert_eq!(patterns.len(), 1);
    assert_eq!(patterns[0].kind, PatternKind::HarmonicTriple);
    assert_eq!(patterns[0].houses, [1, 5, 9]);
    assert!(
        patterns
            .iter()
            .all(|p| p.kind != PatternKind::TensionTriple
                && p.kind != PatternKind::SpecialTriple)
    );
}

// ===== Cross-cutting invariants =====

#[test]
fn sign_and_degree_follow_longitude_everywhere() {
    let mut lon = 0.0;
    while lon < 360.0 {
        let sign = ZodiacSign::from_longitude(lon);
        let expected = ((lon / 30.0).floor() as usize).min(11);
        assert_eq!(sign.index() as usize, expected, "lon {lon}");
        let d = degree_in_sign(lon);
        assert!((0.0..30.0).contains(&d), "lon {lon} degree {d}");
        lon += 0.1;
    }
}

#[test]
fn houses_cover_circle_without_gaps() {
    let table = cusp_table();
    let mut lon = 0.0;
    while lon < 360.0 {
        let h = table.house_of(lon);
        assert!((1..=12).contains(&h), "house_of({lon}) = {h}");
        lon += 0.1;
    }
}

#[test]
fn classification_symmetric_over_many_pairs() {
    let speeds = [0.985, 13.2, -0.5, 1.2, 0.03];
    for (i, &la) in [0.0, 61.0, 88.0, 125.0, 178.0].iter().enumerate() {
        for (j, &lb) in [5.0, 120.0, 242.0, 300.0, 359.0].iter().enumerate() {
            let a = body(BodyId::Sun, la, speeds[i], 1);
            let b = body(BodyId::Saturn, lb, speeds[j], 7);
            let ab = classify(&a, &b);
            let ba = classify(&b, &a);
            match (ab, ba) {
                (None, None) => {}
                (Some(x), Some(y)) => {
                    assert_eq!(x.aspect_type, y.aspect_type);
                    assert!((x.orb_deg - y.orb_deg).abs() < 1e-10);
                    assert!((x.strength - y.strength).abs() < 1e-10);
                    assert_eq!(x.applying, y.applying);
                }
                _ => panic!("classification not symmetric for ({la}, {lb})"),
            }
        }
    }
}
