//! Three-way grouped-button layout (Betclic).
//!
//! Each event card lists its competitors and a flat run of price buttons.
//! Buttons come in groups of three (home, draw, away); a short trailing
//! group is discarded. A button may carry its own label above the price,
//! otherwise the label follows from its position in the group.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::domain::{parse_price, DateTimeNormalizer, RawMatchRecord, RawOutcome, SiteDefinition};
use crate::error::ExtractError;
use crate::port::outbound::document::{self, compile, Document};
use crate::port::outbound::source::SourceAdapter;

use super::{positional_label, EventSkip, RecordSink};

const GROUP_SIZE: usize = 3;

struct CardSelectors {
    events: Selector,
    contestants: Selector,
    odds: Selector,
    date: Selector,
    hour: Selector,
    competition: Selector,
    link: Selector,
    top_label: Selector,
    top_label_span: Selector,
    price: Selector,
}

impl CardSelectors {
    fn new(site: &SiteDefinition) -> Result<Self, ExtractError> {
        Ok(Self {
            events: compile(&site.selectors.events)?,
            contestants: compile(&site.selectors.event_name)?,
            odds: compile(&site.selectors.odds)?,
            date: compile(".scoreboard_date")?,
            hour: compile(".scoreboard_hour")?,
            competition: compile("bcdk-breadcrumb .breadcrumb_itemLabel")?,
            link: compile("a[href]")?,
            top_label: compile(".btn_label.is-top")?,
            top_label_span: compile(".btn_label.is-top span")?,
            price: compile(".btn_label:not(.is-top)")?,
        })
    }
}

/// Adapter for sources rendering 1/N/2 button groups.
pub struct GroupedButtonAdapter {
    site: SiteDefinition,
    dates: DateTimeNormalizer,
    selectors: CardSelectors,
}

impl GroupedButtonAdapter {
    /// Build the adapter, compiling every selector up front.
    pub fn new(site: SiteDefinition, dates: DateTimeNormalizer) -> Result<Self, ExtractError> {
        let selectors = CardSelectors::new(&site)?;
        Ok(Self {
            site,
            dates,
            selectors,
        })
    }

    fn extract_event(&self, event: ElementRef<'_>) -> Result<RawMatchRecord, EventSkip> {
        let s = &self.selectors;
        let competitors: Vec<String> = document::all_text(event, &s.contestants)
            .into_iter()
            .take(2)
            .collect();
        if competitors.len() < 2 {
            return Err(EventSkip::TooFewCompetitors);
        }

        let date_text = [document::first_text(event, &s.date), document::first_text(event, &s.hour)]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ");

        let buttons: Vec<ElementRef<'_>> = event.select(&s.odds).collect();
        debug!(
            source = %self.site.id,
            event = %competitors.join(" vs "),
            buttons = buttons.len(),
            "reading price buttons"
        );

        let mut outcomes = Vec::new();
        for group in buttons.chunks_exact(GROUP_SIZE) {
            for (position, button) in group.iter().enumerate() {
                if let Some(outcome) = self.read_button(*button, position, &competitors) {
                    outcomes.push(outcome);
                }
            }
        }

        let mut record = RawMatchRecord::new(&self.site);
        record.competition = document::first_text(event, &s.competition);
        record.date_time = self.convert_date_time(&date_text);
        record.url = document::first_attr(event, &s.link, "href").map(|h| self.site.absolute_url(&h));
        record.competitors = competitors;
        record.outcomes = outcomes;
        Ok(record)
    }

    fn read_button(&self, button: ElementRef<'_>, position: usize, competitors: &[String]) -> Option<RawOutcome> {
        let s = &self.selectors;
        let explicit = if position == GROUP_SIZE - 1 {
            document::first_text(button, &s.top_label)
        } else {
            document::first_text(button, &s.top_label_span)
        };
        let label = explicit.or_else(|| positional_label(position, GROUP_SIZE, competitors))?;
        let price = document::first_text(button, &s.price).and_then(|t| parse_price(&t))?;
        RawOutcome::priced(label, price)
    }
}

#[async_trait(?Send)]
impl SourceAdapter for GroupedButtonAdapter {
    fn site(&self) -> &SiteDefinition {
        &self.site
    }

    fn convert_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        self.dates.normalize(text)
    }

    async fn extract_odds(&self, document: &Document) -> Vec<RawMatchRecord> {
        let events = document.select_all(&self.selectors.events);
        debug!(source = %self.site.id, events = events.len(), "events found");

        let mut sink = RecordSink::new(self.site.id);
        for (index, event) in events.into_iter().enumerate() {
            sink.accept(index, self.extract_event(event));
        }
        sink.finish()
    }
}
