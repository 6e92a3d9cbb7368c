//! Source-agnostic domain types.
//!
//! Nothing in here touches a document or a channel; adapters produce these
//! types and the reconciler consumes them.

pub mod datetime;
pub mod merged;
pub mod price;
pub mod record;
pub mod site;

pub use datetime::DateTimeNormalizer;
pub use merged::{match_key, MergeResult, MergedMatch, PriceCell, WINNER_MARKET};
pub use price::{parse_percentage, parse_price};
pub use record::{
    normalize_outcome_label, ExchangeQuote, RawMatchRecord, RawOutcome, DRAW_LABEL,
};
pub use site::{SiteDefinition, SiteRegistry, Selectors, SourceId};
