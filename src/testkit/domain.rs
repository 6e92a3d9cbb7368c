//! Builders for domain values used across tests.

use chrono::{NaiveDate, NaiveDateTime};

use crate::domain::{DateTimeNormalizer, RawMatchRecord, RawOutcome, SiteDefinition, SiteRegistry, SourceId};

/// The instant every fixture is written against: 2024-01-12 10:00:00.
pub fn fixed_now() -> NaiveDateTime {
    at(2024, 1, 12, 10, 0)
}

/// Normalizer pinned to [`fixed_now`].
pub fn normalizer() -> DateTimeNormalizer {
    DateTimeNormalizer::fixed(fixed_now())
}

/// Build a timestamp, panicking on an impossible date.
pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(hour, minute, 0))
        .expect("valid test timestamp")
}

/// Built-in definition for `id`.
pub fn site(id: SourceId) -> SiteDefinition {
    SiteRegistry::builtin()
        .get(id)
        .cloned()
        .expect("every source has a built-in definition")
}

/// A record for `source` with the given competitors and priced outcomes.
pub fn record(source: SourceId, competitors: &[&str], outcomes: &[(&str, f64)]) -> RawMatchRecord {
    let mut record = RawMatchRecord::new(&site(source));
    record.competitors = competitors.iter().map(|c| (*c).to_string()).collect();
    record.outcomes = outcomes
        .iter()
        .filter_map(|(label, price)| RawOutcome::priced(label, *price))
        .collect();
    record
}

/// [`record`] with a kickoff and competition set.
pub fn scheduled(
    source: SourceId,
    competitors: &[&str],
    kickoff: NaiveDateTime,
    competition: &str,
    outcomes: &[(&str, f64)],
) -> RawMatchRecord {
    let mut record = record(source, competitors, outcomes);
    record.date_time = Some(kickoff);
    record.competition = Some(competition.to_string());
    record
}
