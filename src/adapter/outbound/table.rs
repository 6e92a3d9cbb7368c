//! Market-table layout (PSEL).
//!
//! Events hold one or more `table.psel-market` elements. A `--row-col`
//! table carries a single row of buttons whose position gives the outcome
//! (home / draw / away); any other table pairs a row header label with one
//! button per row. When outcome buttons carry their own label element, those
//! labels win and the table layout is not consulted at all.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use scraper::{CaseSensitivity, ElementRef, Selector};
use tracing::debug;

use crate::domain::{
    parse_percentage, parse_price, DateTimeNormalizer, RawMatchRecord, RawOutcome, SiteDefinition,
};
use crate::error::ExtractError;
use crate::port::outbound::document::{self, compile, Document};
use crate::port::outbound::source::SourceAdapter;

use super::{positional_label, EventSkip, RecordSink};

const ROW_COL_CLASS: &str = "psel-market--row-col";

struct TableSelectors {
    events: Selector,
    competitors: Selector,
    buttons: Selector,
    link: Selector,
    competition: Selector,
    timer: Selector,
    date: Selector,
    markets: Selector,
    rows: Selector,
    row_header: Selector,
    outcome: Selector,
    outcome_label: Selector,
    outcome_price: Selector,
    progress: Selector,
}

impl TableSelectors {
    fn new(site: &SiteDefinition) -> Result<Self, ExtractError> {
        Ok(Self {
            events: compile(&site.selectors.events)?,
            competitors: compile(&site.selectors.event_name)?,
            buttons: compile(&site.selectors.odds)?,
            link: compile("a.psel-event__link")?,
            competition: compile(".psel-event-info__competition")?,
            timer: compile("time.psel-timer")?,
            date: compile(".psel-event-info__date")?,
            markets: compile("table.psel-market")?,
            rows: compile("tbody tr")?,
            row_header: compile("th[scope=\"row\"]")?,
            outcome: compile("psel-outcome")?,
            outcome_label: compile(".psel-outcome__label")?,
            outcome_price: compile(".psel-outcome__data")?,
            progress: compile(".psel-progress-bar__counter")?,
        })
    }
}

/// Adapter for sources rendering markets as tables.
pub struct MarketTableAdapter {
    site: SiteDefinition,
    dates: DateTimeNormalizer,
    selectors: TableSelectors,
}

impl MarketTableAdapter {
    /// Build the adapter, compiling every selector up front.
    pub fn new(site: SiteDefinition, dates: DateTimeNormalizer) -> Result<Self, ExtractError> {
        let selectors = TableSelectors::new(&site)?;
        Ok(Self {
            site,
            dates,
            selectors,
        })
    }

    fn extract_event(&self, event: ElementRef<'_>, sink: &RecordSink) -> Result<RawMatchRecord, EventSkip> {
        let s = &self.selectors;
        let href = document::first_attr(event, &s.link, "href");
        let url = href.as_deref().map(|h| self.site.absolute_url(h));
        if sink.is_duplicate(url.as_deref()) {
            return Err(EventSkip::Duplicate);
        }

        let competitors: Vec<String> = document::all_text(event, &s.competitors)
            .into_iter()
            .take(2)
            .collect();
        if competitors.len() < 2 {
            return Err(EventSkip::TooFewCompetitors);
        }

        let outcomes = if event.select(&s.outcome_label).next().is_some() {
            self.labeled_outcomes(event)
        } else {
            self.table_outcomes(event, &competitors)
        };
        if outcomes.is_empty() {
            return Err(EventSkip::NoOutcomes);
        }

        let date_text = document::first_text(event, &s.timer).or_else(|| document::first_text(event, &s.date));

        let mut record = RawMatchRecord::new(&self.site);
        record.competition = document::first_text(event, &s.competition);
        record.date_time = date_text.and_then(|t| self.convert_date_time(&t));
        record.external_id = href.as_deref().and_then(event_id_from_href);
        record.url = url;
        record.competitors = competitors;
        record.outcomes = outcomes;
        Ok(record)
    }

    /// Outcomes read from explicit per-outcome label elements.
    fn labeled_outcomes(&self, event: ElementRef<'_>) -> Vec<RawOutcome> {
        let s = &self.selectors;
        event
            .select(&s.outcome)
            .filter_map(|outcome| {
                let label = document::first_text(outcome, &s.outcome_label)?;
                let price = document::first_text(outcome, &s.outcome_price).and_then(|t| parse_price(&t))?;
                let percentage = document::parent_element(outcome)
                    .and_then(|cell| document::first_text(cell, &s.progress))
                    .and_then(|t| parse_percentage(&t));
                RawOutcome::priced(label, price).map(|o| o.with_percentage(percentage))
            })
            .collect()
    }

    /// Outcomes inferred from the market table layout.
    fn table_outcomes(&self, event: ElementRef<'_>, competitors: &[String]) -> Vec<RawOutcome> {
        let s = &self.selectors;
        let mut outcomes = Vec::new();
        for market in event.select(&s.markets) {
            let row_col = market
                .value()
                .has_class(ROW_COL_CLASS, CaseSensitivity::AsciiCaseInsensitive);
            for row in market.select(&s.rows) {
                if row_col {
                    outcomes.extend(self.row_col_outcomes(row, competitors));
                } else if let Some(outcome) = self.labeled_row_outcome(row) {
                    outcomes.push(outcome);
                }
            }
        }
        outcomes
    }

    fn row_col_outcomes(&self, row: ElementRef<'_>, competitors: &[String]) -> Vec<RawOutcome> {
        let buttons: Vec<ElementRef<'_>> = row.select(&self.selectors.buttons).collect();
        let count = buttons.len();
        buttons
            .into_iter()
            .enumerate()
            .filter_map(|(position, button)| {
                let label = positional_label(position, count, competitors)?;
                let price = self.button_price(button)?;
                RawOutcome::priced(label, price)
            })
            .collect()
    }

    fn labeled_row_outcome(&self, row: ElementRef<'_>) -> Option<RawOutcome> {
        let s = &self.selectors;
        let label = document::first_text(row, &s.row_header)?;
        let button = row.select(&s.buttons).next()?;
        RawOutcome::priced(label, self.button_price(button)?)
    }

    fn button_price(&self, button: ElementRef<'_>) -> Option<f64> {
        document::first_text(button, &self.selectors.outcome_price).and_then(|t| parse_price(&t))
    }
}

/// Numeric event id from a link like `/paris-football/france/ligue-1/3300308/psg-vs-lens`.
fn event_id_from_href(href: &str) -> Option<String> {
    let path = href.split(['?', '#']).next().unwrap_or(href);
    let segments: Vec<&str> = path.trim_end_matches('/').split('/').collect();
    let candidate = segments.len().checked_sub(2).and_then(|i| segments.get(i))?;
    (!candidate.is_empty() && candidate.chars().all(|c| c.is_ascii_digit())).then(|| candidate.to_string())
}

#[async_trait(?Send)]
impl SourceAdapter for MarketTableAdapter {
    fn site(&self) -> &SiteDefinition {
        &self.site
    }

    fn convert_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        self.dates.normalize(text)
    }

    async fn extract_odds(&self, document: &Document) -> Vec<RawMatchRecord> {
        let events = document.select_all(&self.selectors.events);
        debug!(source = %self.site.id, events = events.len(), "events found (live and scheduled)");

        let mut sink = RecordSink::new(self.site.id);
        for (index, event) in events.into_iter().enumerate() {
            let result = self.extract_event(event, &sink);
            sink.accept(index, result);
        }
        sink.finish()
    }
}
