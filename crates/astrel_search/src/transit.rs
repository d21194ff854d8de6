//! Day-by-day transit scanning against a fixed natal chart.
//!
//! For each day in the window the provider supplies same-day positions;
//! every transiting body is classified against every natal body, and
//! only tight, high-tier aspects are admitted. Qualifying days become
//! significance-ranked windows. Looser aspects are computed and
//! discarded; the double filter bounds output size.

use chrono::{Datelike, Days, NaiveDate};

use astrel_base::{BodyId, CelestialBody, StrengthTier, ZodiacSign, classify};
use astrel_chart::{BirthChart, ChartDateTime, EphemerisProvider, normalize_position};

use crate::error::ScanError;
use crate::transit_types::{
    SAMPLE_HOUR, ScanConfig, SIGNIFICANCE_ORB_DIVISOR, Transit, TransitAnalysis, TransitWindow,
};

/// Fixed recommendation template per transiting body.
fn recommendation_for(body: BodyId) -> &'static str {
    match body {
        BodyId::Sun => "Focus on identity and vitality; lead where it counts.",
        BodyId::Moon => "Track your moods; home and routine matter this period.",
        BodyId::Mercury => "Double-check communication, contracts, and travel plans.",
        BodyId::Venus => "Tend to relationships, finances, and what you value.",
        BodyId::Mars => "Channel surplus energy into deliberate action, not friction.",
        BodyId::Jupiter => "Say yes to growth, but keep commitments realistic.",
        BodyId::Saturn => "Consolidate: structure, discipline, and long-term duties.",
        BodyId::Uranus => "Expect disruption; leave room for the unconventional.",
        BodyId::Neptune => "Guard against fog; verify facts before deciding.",
        BodyId::Pluto => "Deep change is underway; let go of what is finished.",
        BodyId::NorthNode => "Lean into unfamiliar territory; it points forward.",
        BodyId::SouthNode => "Old habits feel easy; treat them as a resource, not a home.",
        BodyId::Chiron => "Old wounds surface to be worked with, not around.",
    }
}

/// "(transiting body) in (sign)" label for the major-themes list.
fn theme_label(body: BodyId, sign: ZodiacSign) -> String {
    format!("{} in {}", body.name(), sign.name())
}

/// Window headline from its dominant transit.
fn window_theme(t: &Transit) -> String {
    format!(
        "{} {} natal {}",
        t.transiting.name(),
        t.aspect.aspect_type.name(),
        t.natal.name()
    )
}

/// Sampling moment for a scanned day: local noon at the birth location,
/// in the chart's timezone.
fn sample_moment(chart: &BirthChart, date: NaiveDate) -> ChartDateTime {
    ChartDateTime {
        year: date.year(),
        month: date.month() as u8,
        day: date.day() as u8,
        hour: SAMPLE_HOUR,
        minute: 0,
        second: 0,
        timezone: chart.datetime.timezone.clone(),
    }
}

/// Significance of an admitted transit: `strength * (1 - orb/5)`.
fn significance(strength: f64, orb_deg: f64) -> f64 {
    strength * (1.0 - orb_deg / SIGNIFICANCE_ORB_DIVISOR)
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}

/// Scan a fixed-length forward window of days for significant transits.
///
/// Each of `window_days` consecutive days starting at `start_date` is
/// sampled at the chart's birth location. A day with at least one
/// admitted aspect becomes a `TransitWindow` spanning that day plus
/// `window_span_days`. Zero qualifying days is a valid outcome with an
/// empty window list; `window_days == 0` short-circuits the same way.
pub fn scan_transits(
    provider: &dyn EphemerisProvider,
    chart: &BirthChart,
    start_date: NaiveDate,
    window_days: u32,
    config: &ScanConfig,
) -> Result<TransitAnalysis, ScanError> {
    config.validate().map_err(ScanError::InvalidConfig)?;
    if window_days == 0 {
        return Ok(TransitAnalysis::empty());
    }

    let mut windows: Vec<TransitWindow> = Vec::new();
    let mut major_themes: Vec<String> = Vec::new();
    let mut recommendations: Vec<String> = Vec::new();

    for offset in 0..window_days {
        let date = start_date
            .checked_add_days(Days::new(offset as u64))
            .ok_or(ScanError::InvalidWindow("scan date out of calendar range"))?;
        let moment = sample_moment(chart, date);
        moment.validate()?;

        let raw = provider.positions(&moment, &chart.location, config.provider_timeout)?;
        let mut transiting: Vec<CelestialBody> = Vec::with_capacity(raw.len());
        for r in &raw {
            // Transiting bodies are placed in the natal houses.
            transiting.push(normalize_position(r, &chart.houses)?);
        }

        let mut day_transits: Vec<Transit> = Vec::new();
        for t in &transiting {
            for n in &chart.bodies {
                let Some(aspect) = classify(t, n) else {
                    continue;
                };
                // Admission: high tier AND tight orb; both must hold.
                if aspect.tier != StrengthTier::High || aspect.orb_deg > config.admission_orb_deg
                {
                    continue;
                }
                day_transits.push(Transit {
                    transiting: t.id,
                    natal: n.id,
                    aspect,
                    date,
                    significance: significance(aspect.strength, aspect.orb_deg),
                });
                push_unique(&mut major_themes, theme_label(t.id, t.sign()));
                push_unique(&mut recommendations, recommendation_for(t.id).to_owned());
            }
        }

        if day_transits.is_empty() {
            continue;
        }

        day_transits.sort_by(|a, b| {
            b.significance
                .partial_cmp(&a.significance)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let end = date
            .checked_add_days(Days::new(config.window_span_days as u64))
            .ok_or(ScanError::InvalidWindow("window end out of calendar range"))?;
        let top = day_transits[0].significance;
        let theme = window_theme(&day_transits[0]);
        log::debug!(
            "transit window {date}: {} admitted, peak significance {top:.3}",
            day_transits.len()
        );
        windows.push(TransitWindow {
            start: date,
            end,
            transits: day_transits,
            significance: top,
            theme,
        });
    }

    windows.sort_by(|a, b| {
        b.significance
            .partial_cmp(&a.significance)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    Ok(TransitAnalysis {
        windows,
        major_themes,
        recommendations,
    })
}
