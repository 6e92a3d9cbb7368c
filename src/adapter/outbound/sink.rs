//! Per-extraction accumulator shared by every source variant.
//!
//! Lives for exactly one `extract_odds` call, so repeated calls never see
//! each other's URLs.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, info, warn};

use crate::domain::{RawMatchRecord, SourceId, DRAW_LABEL};

/// Why a single event was left out of the output.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum EventSkip {
    #[error("fewer than two competitors")]
    TooFewCompetitors,

    #[error("no priced outcome")]
    NoOutcomes,

    #[error("url already extracted in this run")]
    Duplicate,

    #[error("missing {0}")]
    Missing(&'static str),
}

/// Collects complete records and drops repeats of an already-seen URL.
#[derive(Debug)]
pub(crate) struct RecordSink {
    source: SourceId,
    seen_urls: HashSet<String>,
    records: Vec<RawMatchRecord>,
    skipped: usize,
}

impl RecordSink {
    pub(crate) fn new(source: SourceId) -> Self {
        Self {
            source,
            seen_urls: HashSet::new(),
            records: Vec::new(),
            skipped: 0,
        }
    }

    /// True when `url` was already claimed in this run.
    pub(crate) fn is_duplicate(&self, url: Option<&str>) -> bool {
        url.is_some_and(|u| self.seen_urls.contains(u))
    }

    /// Take the outcome of one event: keep the record or log why it was skipped.
    pub(crate) fn accept(&mut self, index: usize, event: Result<RawMatchRecord, EventSkip>) {
        let result = event.and_then(|record| self.push(record));
        match result {
            Ok(()) => {}
            Err(reason @ EventSkip::Missing(_)) => {
                self.skipped += 1;
                warn!(source = %self.source, event = index + 1, %reason, "malformed event skipped");
            }
            Err(reason) => {
                self.skipped += 1;
                debug!(source = %self.source, event = index + 1, %reason, "event skipped");
            }
        }
    }

    /// Keep `record` if complete and its URL is new.
    pub(crate) fn push(&mut self, record: RawMatchRecord) -> Result<(), EventSkip> {
        if record.competitors.len() < 2 {
            return Err(EventSkip::TooFewCompetitors);
        }
        if !record.is_complete() {
            return Err(EventSkip::NoOutcomes);
        }
        if let Some(url) = &record.url {
            if !self.seen_urls.insert(url.clone()) {
                return Err(EventSkip::Duplicate);
            }
        }
        self.records.push(record);
        Ok(())
    }

    pub(crate) fn finish(self) -> Vec<RawMatchRecord> {
        info!(
            source = %self.source,
            matches = self.records.len(),
            skipped = self.skipped,
            "extraction finished"
        );
        self.records
    }
}

/// Winner-market label for the outcome at `position` of `count` outcomes.
///
/// Three outcomes read home / draw / away, two read home / away. Anything
/// else has no positional meaning.
///
/// Two-button rows deliberately differ from a fixed 0/1/2 slot mapping: the
/// second button is the away side, never the draw.
pub(crate) fn positional_label(position: usize, count: usize, competitors: &[String]) -> Option<String> {
    let home = || competitors.first().cloned().unwrap_or_else(|| "1".to_string());
    let away = || competitors.get(1).cloned().unwrap_or_else(|| "2".to_string());
    match (count, position) {
        (3, 0) | (2, 0) => Some(home()),
        (3, 1) => Some(DRAW_LABEL.to_string()),
        (3, 2) | (2, 1) => Some(away()),
        _ => None,
    }
}
