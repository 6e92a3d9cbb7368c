//! Cross-source match reconciliation.
//!
//! Records are grouped by their composite key (competitors, kickoff,
//! competition). The first record for a key seeds the outcome order; later
//! records append unseen labels at the end and write their prices under their
//! own source name. Prices are never averaged: the last write for an exact
//! `(label, source)` pair wins.

use std::collections::BTreeMap;

use tracing::{debug, info, warn};

use crate::domain::{
    match_key, normalize_outcome_label, MergeResult, MergedMatch, PriceCell, RawMatchRecord,
};

/// Accumulates records from any number of adapter runs into merged matches.
///
/// One reconciler covers one reconciliation pass; build a new one per
/// request.
#[derive(Debug, Default)]
pub struct MatchReconciler {
    matches: BTreeMap<String, MergedMatch>,
    accepted: usize,
}

impl MatchReconciler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge one record. A source contributing the same match again
    /// overwrites its own earlier prices and id.
    pub fn add(&mut self, record: &RawMatchRecord) {
        let key = match_key(record);
        let merged = self.matches.entry(key).or_insert_with_key(|key| {
            debug!(key = %key, source = %record.source, "new match");
            MergedMatch::from_record(record)
        });

        let labels: Vec<String> = record
            .outcomes
            .iter()
            .map(|outcome| normalize_outcome_label(outcome.label()))
            .collect();
        for label in &labels {
            merged.push_outcome(label);
        }

        for (outcome, label) in record.outcomes.iter().zip(&labels) {
            if !outcome.has_price() {
                continue;
            }
            if !merged.set_price(label, &record.source_name, PriceCell::from_outcome(outcome)) {
                warn!(label = %label, source = %record.source_name, "price dropped for unknown outcome");
            }
        }

        if let Some(id) = &record.external_id {
            merged.ids.insert(record.source_name.clone(), id.clone());
        }
        self.accepted += 1;
    }

    /// Merge every record of one adapter run, in order.
    pub fn add_batch(&mut self, records: &[RawMatchRecord]) {
        for record in records {
            self.add(record);
        }
    }

    /// Number of distinct matches so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn finish(self) -> MergeResult {
        info!(
            records = self.accepted,
            matches = self.matches.len(),
            "reconciliation finished"
        );
        MergeResult::new(self.matches)
    }
}

/// Reconcile batches in the given order.
pub fn reconcile<B>(batches: impl IntoIterator<Item = B>) -> MergeResult
where
    B: AsRef<[RawMatchRecord]>,
{
    let mut reconciler = MatchReconciler::new();
    for batch in batches {
        reconciler.add_batch(batch.as_ref());
    }
    reconciler.finish()
}
