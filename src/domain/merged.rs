//! Reconciled, cross-source view of a match.
//!
//! - [`MergedMatch`] - One real-world match with a per-outcome, per-source price table
//! - [`PriceCell`] - Either a plain price or an exchange back/lay pair
//! - [`MergeResult`] - Composite key to merged match, the exported artifact

use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::datetime::KEY_FORMAT;
use super::record::{ExchangeQuote, RawMatchRecord, RawOutcome};

/// Name of the only market modeled: who wins (or draw).
pub const WINNER_MARKET: &str = "Winner";

/// Placeholder for a missing kickoff or competition inside a composite key.
pub const MISSING_KEY_PART: &str = "N/A";

/// Source display name to price.
pub type SourcePrices = BTreeMap<String, PriceCell>;

/// Outcome label to per-source prices.
pub type OutcomeTable = BTreeMap<String, SourcePrices>;

/// A single cell of the merged price table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PriceCell {
    /// Bookmaker decimal price.
    Price(f64),
    /// Exchange back/lay pair; either side may be absent.
    Exchange {
        #[serde(rename = "Back")]
        back: Option<ExchangeQuote>,
        #[serde(rename = "Lay")]
        lay: Option<ExchangeQuote>,
    },
}

impl PriceCell {
    /// Cell written for a raw outcome.
    #[must_use]
    pub fn from_outcome(outcome: &RawOutcome) -> Self {
        match outcome {
            RawOutcome::Priced { price, .. } => PriceCell::Price(*price),
            RawOutcome::Exchange { back, lay, .. } => PriceCell::Exchange {
                back: *back,
                lay: *lay,
            },
        }
    }

    /// Plain price, if this is a bookmaker cell.
    #[must_use]
    pub fn as_price(&self) -> Option<f64> {
        match self {
            PriceCell::Price(p) => Some(*p),
            PriceCell::Exchange { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_exchange(&self) -> bool {
        matches!(self, PriceCell::Exchange { .. })
    }
}

/// Composite merge key: competitors, kickoff display and competition.
#[must_use]
pub fn match_key(record: &RawMatchRecord) -> String {
    let competitors = record
        .competitors
        .iter()
        .map(|c| c.trim())
        .collect::<Vec<_>>()
        .join(" vs ");
    let kickoff = record
        .date_time
        .map(|dt| dt.format(KEY_FORMAT).to_string())
        .unwrap_or_else(|| MISSING_KEY_PART.to_string());
    let competition = record
        .competition
        .as_deref()
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .unwrap_or(MISSING_KEY_PART);
    format!("{competitors} - {kickoff} - {competition}")
}

/// One real-world match merged across sources.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MergedMatch {
    pub competition: Option<String>,
    #[serde(with = "timestamp")]
    pub date_time: Option<NaiveDateTime>,
    pub competitors: Vec<String>,
    /// Distinct outcome labels in first-seen order; append-only.
    pub outcomes: Vec<String>,
    /// Source display name to that source's match id.
    pub ids: BTreeMap<String, String>,
    /// Market name to outcome label to source display name to price.
    pub markets: BTreeMap<String, OutcomeTable>,
}

impl MergedMatch {
    /// Empty merged match seeded from the first record seen for its key.
    pub fn from_record(record: &RawMatchRecord) -> Self {
        Self {
            competition: record.competition.clone(),
            date_time: record.date_time,
            competitors: record.competitors.clone(),
            outcomes: Vec::new(),
            ids: BTreeMap::new(),
            markets: BTreeMap::from([(WINNER_MARKET.to_string(), OutcomeTable::new())]),
        }
    }

    /// Append `label` unless already present. Returns true when appended.
    pub fn push_outcome(&mut self, label: &str) -> bool {
        if self.outcomes.iter().any(|o| o == label) {
            return false;
        }
        self.outcomes.push(label.to_string());
        self.markets
            .entry(WINNER_MARKET.to_string())
            .or_default()
            .entry(label.to_string())
            .or_default();
        true
    }

    /// Record a price for `(label, source)`; dropped unless `label` is a known outcome.
    pub fn set_price(&mut self, label: &str, source: &str, cell: PriceCell) -> bool {
        if !self.outcomes.iter().any(|o| o == label) {
            return false;
        }
        self.markets
            .entry(WINNER_MARKET.to_string())
            .or_default()
            .entry(label.to_string())
            .or_default()
            .insert(source.to_string(), cell);
        true
    }

    /// Prices for one outcome of the winner market.
    #[must_use]
    pub fn winner(&self, label: &str) -> Option<&SourcePrices> {
        self.markets.get(WINNER_MARKET)?.get(label)
    }

    /// Number of distinct sources contributing any winner price.
    #[must_use]
    pub fn source_count(&self) -> usize {
        let mut sources: Vec<&str> = self
            .markets
            .get(WINNER_MARKET)
            .into_iter()
            .flat_map(|table| table.values())
            .flat_map(|prices| prices.keys().map(String::as_str))
            .collect();
        sources.sort_unstable();
        sources.dedup();
        sources.len()
    }
}

/// Composite match key to merged match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MergeResult {
    matches: BTreeMap<String, MergedMatch>,
}

impl MergeResult {
    pub fn new(matches: BTreeMap<String, MergedMatch>) -> Self {
        Self { matches }
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MergedMatch> {
        self.matches.get(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &MergedMatch)> {
        self.matches.iter()
    }

    /// Matches ordered by kickoff, unknown kickoffs last, ties by key.
    #[must_use]
    pub fn by_kickoff(&self) -> Vec<(&String, &MergedMatch)> {
        let mut entries: Vec<_> = self.matches.iter().collect();
        entries.sort_by(|(ka, a), (kb, b)| match (a.date_time, b.date_time) {
            (Some(x), Some(y)) => x.cmp(&y).then_with(|| ka.cmp(kb)),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => ka.cmp(kb),
        });
        entries
    }
}

/// `Option<NaiveDateTime>` as `YYYY-MM-DDTHH:MM:SS` or null.
mod timestamp {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::domain::datetime::TIMESTAMP_FORMAT;

    pub fn serialize<S: Serializer>(value: &Option<NaiveDateTime>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(dt) => s.serialize_str(&dt.format(TIMESTAMP_FORMAT).to_string()),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDateTime>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        raw.map(|s| NaiveDateTime::parse_from_str(&s, TIMESTAMP_FORMAT).map_err(serde::de::Error::custom))
            .transpose()
    }
}
