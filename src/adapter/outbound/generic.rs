//! Selector-driven layout for sources without a dedicated variant (PMU, Unibet).
//!
//! Everything comes from the site definition, so a layout change on these
//! sites is a config edit rather than a code change.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Selector};
use tracing::debug;

use crate::domain::{parse_price, DateTimeNormalizer, RawMatchRecord, RawOutcome, SiteDefinition};
use crate::error::ExtractError;
use crate::port::outbound::document::{self, compile, compile_opt, Document};
use crate::port::outbound::source::SourceAdapter;

use super::{positional_label, EventSkip, RecordSink};

const NAME_SEPARATORS: [&str; 2] = [" - ", " vs "];
const EVENT_ID_ATTR: &str = "data-event-id";

struct GenericSelectors {
    events: Selector,
    name: Selector,
    odds: Selector,
    container: Option<Selector>,
    competition: Option<Selector>,
    date: Option<Selector>,
    link: Option<Selector>,
}

/// Adapter reading events purely from configured selectors.
pub struct GenericAdapter {
    site: SiteDefinition,
    dates: DateTimeNormalizer,
    selectors: GenericSelectors,
}

impl GenericAdapter {
    pub fn new(site: SiteDefinition, dates: DateTimeNormalizer) -> Result<Self, ExtractError> {
        let sel = &site.selectors;
        let selectors = GenericSelectors {
            events: compile(&sel.events)?,
            name: compile(&sel.event_name)?,
            odds: compile(&sel.odds)?,
            container: compile_opt(sel.odds_container.as_deref())?,
            competition: compile_opt(sel.competition.as_deref())?,
            date: compile_opt(sel.date.as_deref())?,
            link: compile_opt(sel.link.as_deref())?,
        };
        Ok(Self {
            site,
            dates,
            selectors,
        })
    }

    fn extract_event(&self, event: ElementRef<'_>, sink: &RecordSink) -> Result<RawMatchRecord, EventSkip> {
        let s = &self.selectors;
        let href = s.link.as_ref().and_then(|link| document::first_attr(event, link, "href"));
        let url = href.map(|h| self.site.absolute_url(&h));
        if sink.is_duplicate(url.as_deref()) {
            return Err(EventSkip::Duplicate);
        }

        let competitors = split_competitors(document::all_text(event, &s.name));
        if competitors.len() < 2 {
            return Err(EventSkip::TooFewCompetitors);
        }

        let scope = match &s.container {
            Some(container) => event.select(container).next().ok_or(EventSkip::Missing("odds container"))?,
            None => event,
        };
        let buttons: Vec<ElementRef<'_>> = scope.select(&s.odds).collect();
        let count = buttons.len();
        let outcomes: Vec<RawOutcome> = buttons
            .into_iter()
            .enumerate()
            .filter_map(|(position, button)| {
                let label = positional_label(position, count, &competitors)?;
                let price = parse_price(&document::text_of(button))?;
                RawOutcome::priced(label, price)
            })
            .collect();

        let mut record = RawMatchRecord::new(&self.site);
        record.competition = s.competition.as_ref().and_then(|c| document::first_text(event, c));
        record.date_time = s
            .date
            .as_ref()
            .and_then(|d| document::first_text(event, d))
            .and_then(|t| self.convert_date_time(&t));
        record.external_id = document::attr(event, EVENT_ID_ATTR);
        record.url = url;
        record.competitors = competitors;
        record.outcomes = outcomes;
        Ok(record)
    }
}

/// Keep the first two names; a lone "A - B" or "A vs B" title is split.
fn split_competitors(names: Vec<String>) -> Vec<String> {
    if let [single] = names.as_slice() {
        for separator in NAME_SEPARATORS {
            if let Some((home, away)) = single.split_once(separator) {
                return vec![home.trim().to_string(), away.trim().to_string()];
            }
        }
    }
    names.into_iter().take(2).collect()
}

#[async_trait(?Send)]
impl SourceAdapter for GenericAdapter {
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
            let result = self.extract_event(event, &sink);
            sink.accept(index, result);
        }
        sink.finish()
    }
}
