//! Resolution of colloquial kickoff phrases into absolute timestamps.
//!
//! Sources print kickoff times as French relative phrases:
//! `"Demain 23h30"`, `"Aujourd'hui 9h05"`, `"12/01 20h00"`, `"En direct"`.
//! [`DateTimeNormalizer`] turns those into a local [`NaiveDateTime`] with
//! seconds precision, or `None` when no time can be recognized.

use std::sync::OnceLock;

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use regex::Regex;

const TODAY_MARKERS: [&str; 2] = ["aujourd'hui", "auj."];
const TOMORROW_MARKERS: [&str; 1] = ["demain"];
const LIVE_MARKERS: [&str; 3] = ["en direct", "direct", "live"];

/// Serialized timestamp layout (`2024-01-12T20:00:00`).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Shortened layout used in composite match keys (`2024-01-12 20:00`).
pub const KEY_FORMAT: &str = "%Y-%m-%d %H:%M";

fn time_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"(\d{1,2})[hH:](\d{2})").expect("static time pattern"))
}

fn date_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(\d{1,2})/(\d{1,2})\s*(\d{1,2})[hH:](\d{2})").expect("static date pattern")
    })
}

/// Where "now" comes from.
#[derive(Debug, Clone, Copy, Default)]
enum Clock {
    #[default]
    Local,
    Fixed(NaiveDateTime),
}

/// Converts kickoff phrases to absolute timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DateTimeNormalizer {
    clock: Clock,
}

impl DateTimeNormalizer {
    /// Normalizer reading the local wall clock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizer pinned to a fixed instant.
    pub fn fixed(now: NaiveDateTime) -> Self {
        Self {
            clock: Clock::Fixed(now),
        }
    }

    /// Current instant, truncated to whole seconds.
    #[must_use]
    pub fn now(&self) -> NaiveDateTime {
        let now = match self.clock {
            Clock::Local => Local::now().naive_local(),
            Clock::Fixed(at) => at,
        };
        now.with_nanosecond(0).unwrap_or(now)
    }

    /// Resolve `text` against the configured clock.
    #[must_use]
    pub fn normalize(&self, text: &str) -> Option<NaiveDateTime> {
        normalize_at(text, self.now())
    }
}

/// Resolve a kickoff phrase relative to `now`.
///
/// A live marker short-circuits to `now`, even next to a today/tomorrow
/// marker. Otherwise an `HH:MM` token (the
/// separator may be `h` or `:`) is required, and the day comes from a
/// today/tomorrow marker, an explicit `DD/MM` token (current year), or
/// defaults to today.
#[must_use]
pub fn normalize_at(text: &str, now: NaiveDateTime) -> Option<NaiveDateTime> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();

    if contains_any(&lowered, &LIVE_MARKERS) {
        return Some(now);
    }

    let captures = time_pattern().captures(text)?;
    let time = parse_time(&captures[1], &captures[2])?;
    let today = now.date();

    if contains_any(&lowered, &TODAY_MARKERS) {
        return Some(today.and_time(time));
    }
    if contains_any(&lowered, &TOMORROW_MARKERS) {
        return Some((today + Duration::days(1)).and_time(time));
    }

    if let Some(explicit) = date_pattern().captures(text) {
        let day: u32 = explicit[1].parse().ok()?;
        let month: u32 = explicit[2].parse().ok()?;
        let time = parse_time(&explicit[3], &explicit[4])?;
        let date = NaiveDate::from_ymd_opt(today.year(), month, day)?;
        return Some(date.and_time(time));
    }

    // Neither marker nor explicit date: assume today, even if already past.
    Some(today.and_time(time))
}

fn parse_time(hours: &str, minutes: &str) -> Option<NaiveTime> {
    NaiveTime::from_hms_opt(hours.parse().ok()?, minutes.parse().ok()?, 0)
}

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(14, 27, 51)
            .unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn tomorrow_marker() {
        assert_eq!(normalize_at("Demain 23h30", now()), Some(at(2024, 3, 10, 23, 30)));
    }

    #[test]
    fn tomorrow_rolls_over_month_end() {
        let end_of_month = at(2024, 1, 31, 10, 0);
        assert_eq!(
            normalize_at("Demain 20:45", end_of_month),
            Some(at(2024, 2, 1, 20, 45))
        );
    }

    #[test]
    fn today_marker_pads_single_digit_hour() {
        assert_eq!(normalize_at("Aujourd'hui 9h05", now()), Some(at(2024, 3, 9, 9, 5)));
        assert_eq!(normalize_at("Auj. 21h00", now()), Some(at(2024, 3, 9, 21, 0)));
    }

    #[test]
    fn explicit_day_month_uses_current_year() {
        assert_eq!(normalize_at("12/01 20h00", now()), Some(at(2024, 1, 12, 20, 0)));
        assert_eq!(normalize_at("sam. 16/03 18:30", now()), Some(at(2024, 3, 16, 18, 30)));
    }

    #[test]
    fn live_marker_returns_now() {
        assert_eq!(normalize_at("En direct", now()), Some(now()));
        assert_eq!(normalize_at("Direct 2e MT 67'", now()), Some(now()));
    }

    #[test]
    fn live_marker_wins_over_day_marker() {
        assert_eq!(normalize_at("Aujourd'hui - En direct 21h00", now()), Some(now()));
        assert_eq!(normalize_at("Demain live 18h00", now()), Some(now()));
    }

    #[test]
    fn bare_time_falls_back_to_today() {
        assert_eq!(normalize_at("08h15", now()), Some(at(2024, 3, 9, 8, 15)));
    }

    #[test]
    fn unrecognized_input_is_none() {
        assert_eq!(normalize_at("", now()), None);
        assert_eq!(normalize_at("   ", now()), None);
        assert_eq!(normalize_at("Demain", now()), None);
        assert_eq!(normalize_at("25h00", now()), None);
        assert_eq!(normalize_at("31/02 20h00", now()), None);
    }

    #[test]
    fn fixed_clock_truncates_subseconds() {
        let precise = now().with_nanosecond(123_000_000).unwrap();
        let normalizer = DateTimeNormalizer::fixed(precise);
        assert_eq!(normalizer.normalize("En direct"), Some(now()));
    }
}
