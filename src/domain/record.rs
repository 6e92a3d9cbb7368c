//! Raw records emitted by source adapters.
//!
//! - [`RawMatchRecord`] - One event as read from one source
//! - [`RawOutcome`] - A priced outcome or an exchange back/lay selection
//! - [`ExchangeQuote`] - A price with its displayed available stake

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::site::{SiteDefinition, SourceId};

/// Canonical label for the draw outcome.
pub const DRAW_LABEL: &str = "Draw";

const DRAW_MARKERS: [&str; 6] = ["n", "x", "nul", "match nul", "draw", "the draw"];

/// Map a draw marker (`N`, `X`, `Nul`, ...) to [`DRAW_LABEL`].
///
/// Any other label is returned trimmed with its case preserved.
#[must_use]
pub fn normalize_outcome_label(label: &str) -> String {
    let trimmed = label.trim();
    if DRAW_MARKERS
        .iter()
        .any(|marker| trimmed.eq_ignore_ascii_case(marker))
    {
        DRAW_LABEL.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Back or lay side of an exchange selection.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExchangeQuote {
    pub odds: f64,
    #[serde(default)]
    pub amount: Option<f64>,
}

/// One bettable outcome as read from a source.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RawOutcome {
    /// Bookmaker outcome with a single decimal price.
    Priced {
        label: String,
        price: f64,
        #[serde(default)]
        percentage: Option<u8>,
    },
    /// Exchange selection with independent back and lay sides.
    Exchange {
        selection_id: String,
        label: String,
        back: Option<ExchangeQuote>,
        lay: Option<ExchangeQuote>,
    },
}

impl RawOutcome {
    /// Build a priced outcome, dropping invalid prices.
    #[must_use]
    pub fn priced(label: impl AsRef<str>, price: f64) -> Option<Self> {
        (price.is_finite() && price > 0.0).then(|| RawOutcome::Priced {
            label: normalize_outcome_label(label.as_ref()),
            price,
            percentage: None,
        })
    }

    /// Build an exchange outcome; `None` unless at least one side is priced.
    #[must_use]
    pub fn exchange(
        selection_id: impl Into<String>,
        label: impl AsRef<str>,
        back: Option<ExchangeQuote>,
        lay: Option<ExchangeQuote>,
    ) -> Option<Self> {
        let valid = |q: &ExchangeQuote| q.odds.is_finite() && q.odds > 0.0;
        let back = back.filter(valid);
        let lay = lay.filter(valid);
        if back.is_none() && lay.is_none() {
            return None;
        }
        Some(RawOutcome::Exchange {
            selection_id: selection_id.into(),
            label: normalize_outcome_label(label.as_ref()),
            back,
            lay,
        })
    }

    /// Attach a display percentage to a priced outcome.
    #[must_use]
    pub fn with_percentage(mut self, value: Option<u8>) -> Self {
        if let RawOutcome::Priced { percentage, .. } = &mut self {
            *percentage = value;
        }
        self
    }

    /// Label used for the merged outcome slot.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            RawOutcome::Priced { label, .. } | RawOutcome::Exchange { label, .. } => label,
        }
    }

    /// True when the outcome still carries at least one usable price.
    #[must_use]
    pub fn has_price(&self) -> bool {
        match self {
            RawOutcome::Priced { price, .. } => price.is_finite() && *price > 0.0,
            RawOutcome::Exchange { back, lay, .. } => back.is_some() || lay.is_some(),
        }
    }
}

/// One event as extracted from one source during one extraction call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMatchRecord {
    pub competition: Option<String>,
    pub date_time: Option<NaiveDateTime>,
    pub competitors: Vec<String>,
    pub url: Option<String>,
    pub external_id: Option<String>,
    pub source: SourceId,
    pub source_name: String,
    pub outcomes: Vec<RawOutcome>,
}

impl RawMatchRecord {
    /// Start a record for `site` with no fields set.
    pub fn new(site: &SiteDefinition) -> Self {
        Self {
            competition: None,
            date_time: None,
            competitors: Vec::new(),
            url: None,
            external_id: None,
            source: site.id,
            source_name: site.name.clone(),
            outcomes: Vec::new(),
        }
    }

    /// An event is kept only with two competitors and at least one priced outcome.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.competitors.len() >= 2 && self.outcomes.iter().any(RawOutcome::has_price)
    }
}
