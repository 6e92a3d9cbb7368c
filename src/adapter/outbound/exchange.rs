//! Betting-exchange layout (PIWIXchange).
//!
//! The host page only carries an embedded frame (`#exchange-section`); the
//! markets live inside it. Content is fetched through a [`FrameBridge`] and
//! parsed as a separate document. Each market row lists one container per
//! selection with optional back and lay cells.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use scraper::{ElementRef, Selector};
use tracing::{debug, warn};

use crate::domain::{parse_price, DateTimeNormalizer, ExchangeQuote, RawMatchRecord, RawOutcome, SiteDefinition};
use crate::error::ExtractError;
use crate::port::outbound::document::{self, compile, compile_opt, Document};
use crate::port::outbound::source::SourceAdapter;

use super::frame::FrameBridge;
use super::{positional_label, EventSkip, RecordSink};

const EVENT_ID_ATTR: &str = "data-event-id";
const MARKET_ID_ATTR: &str = "data-market-id";
const SELECTION_ID_ATTR: &str = "data-selection-id";

struct ExchangeSelectors {
    frame: Selector,
    rows: Selector,
    competitors: Selector,
    selections: Selector,
    wrapper: Selector,
    back: Selector,
    lay: Selector,
    bet_content: Selector,
    odds: Selector,
    amount: Selector,
    competition: Option<Selector>,
    date: Option<Selector>,
}

impl ExchangeSelectors {
    fn new(site: &SiteDefinition) -> Result<Self, ExtractError> {
        let sel = &site.selectors;
        Ok(Self {
            frame: compile("#exchange-section")?,
            rows: compile(&sel.events)?,
            competitors: compile(&sel.event_name)?,
            selections: compile(&sel.odds)?,
            wrapper: compile(sel.odds_container.as_deref().unwrap_or("[class*=\"betContent__wrapper\"]"))?,
            back: compile(".biab_back-cell")?,
            lay: compile(".biab_lay-cell")?,
            bet_content: compile(".biab_bet-content")?,
            odds: compile(".betOdds")?,
            amount: compile(".betAmount")?,
            competition: compile_opt(sel.competition.as_deref())?,
            date: compile_opt(sel.date.as_deref())?,
        })
    }
}

/// Adapter reading back/lay quotes out of an embedded exchange frame.
pub struct ExchangeAdapter {
    site: SiteDefinition,
    dates: DateTimeNormalizer,
    bridge: FrameBridge,
    selectors: ExchangeSelectors,
}

impl ExchangeAdapter {
    pub fn new(site: SiteDefinition, dates: DateTimeNormalizer, bridge: FrameBridge) -> Result<Self, ExtractError> {
        let selectors = ExchangeSelectors::new(&site)?;
        Ok(Self {
            site,
            dates,
            bridge,
            selectors,
        })
    }

    /// Parse frame content into records.
    pub fn parse_frame(&self, html: &str) -> Vec<RawMatchRecord> {
        let frame = Document::parse(html);
        let rows = frame.select_all(&self.selectors.rows);
        debug!(source = %self.site.id, rows = rows.len(), "market rows found");

        let mut sink = RecordSink::new(self.site.id);
        for (index, row) in rows.into_iter().enumerate() {
            sink.accept(index, self.extract_row(row));
        }
        sink.finish()
    }

    fn extract_row(&self, row: ElementRef<'_>) -> Result<RawMatchRecord, EventSkip> {
        let s = &self.selectors;
        let event_id = document::attr(row, EVENT_ID_ATTR).ok_or(EventSkip::Missing("event id"))?;
        let market_id = document::attr(row, MARKET_ID_ATTR).ok_or(EventSkip::Missing("market id"))?;

        let competitors: Vec<String> = document::all_text(row, &s.competitors)
            .into_iter()
            .take(2)
            .collect();
        if competitors.len() < 2 {
            return Err(EventSkip::TooFewCompetitors);
        }

        let wrapper = row
            .select(&s.wrapper)
            .next()
            .ok_or(EventSkip::Missing("bet content wrapper"))?;
        let containers: Vec<ElementRef<'_>> = wrapper.select(&s.selections).collect();
        let count = containers.len();
        let outcomes: Vec<RawOutcome> = containers
            .into_iter()
            .enumerate()
            .filter_map(|(position, container)| self.read_selection(container, position, count, &competitors))
            .collect();

        let mut record = RawMatchRecord::new(&self.site);
        record.competition = s.competition.as_ref().and_then(|c| document::first_text(row, c));
        record.date_time = s
            .date
            .as_ref()
            .and_then(|d| document::first_text(row, d))
            .and_then(|t| self.convert_date_time(&t));
        record.external_id = Some(format!("{event_id}:{market_id}"));
        record.competitors = competitors;
        record.outcomes = outcomes;
        Ok(record)
    }

    fn read_selection(
        &self,
        container: ElementRef<'_>,
        position: usize,
        count: usize,
        competitors: &[String],
    ) -> Option<RawOutcome> {
        let s = &self.selectors;
        let selection_id = document::attr(container, SELECTION_ID_ATTR).unwrap_or_default();
        let back = container.select(&s.back).next().and_then(|cell| self.read_quote(cell));
        let lay = container.select(&s.lay).next().and_then(|cell| self.read_quote(cell));
        let label = positional_label(position, count, competitors)
            .or_else(|| (!selection_id.is_empty()).then(|| selection_id.clone()))
            .unwrap_or_else(|| (position + 1).to_string());
        RawOutcome::exchange(selection_id, label, back, lay)
    }

    fn read_quote(&self, cell: ElementRef<'_>) -> Option<ExchangeQuote> {
        let s = &self.selectors;
        let content = cell.select(&s.bet_content).next()?;
        if document::text_of(content).is_empty() {
            return None;
        }
        let odds = document::first_text(content, &s.odds).and_then(|t| parse_price(&t))?;
        let amount = document::first_text(content, &s.amount).and_then(|t| parse_price(&t));
        Some(ExchangeQuote { odds, amount })
    }
}

#[async_trait(?Send)]
impl SourceAdapter for ExchangeAdapter {
    fn site(&self) -> &SiteDefinition {
        &self.site
    }

    fn convert_date_time(&self, text: &str) -> Option<NaiveDateTime> {
        self.dates.normalize(text)
    }

    async fn extract_odds(&self, document: &Document) -> Vec<RawMatchRecord> {
        if !document.contains(&self.selectors.frame) {
            warn!(source = %self.site.id, "exchange frame not found on page");
            return Vec::new();
        }
        match self.bridge.request().await {
            Ok(Some(html)) => self.parse_frame(&html),
            Ok(None) => Vec::new(),
            Err(err) => {
                warn!(source = %self.site.id, error = %err, "frame request failed");
                Vec::new()
            }
        }
    }
}
