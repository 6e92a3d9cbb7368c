//! Outbound adapters (driven side).
//!
//! - [`grouped`] - Three-way grouped-button layout (Betclic)
//! - [`table`] - Market-table layout with labeled-row fallback (PSEL)
//! - [`exchange`] - Back/lay exchange inside an embedded frame (PIWIXchange)
//! - [`generic`] - Selector-driven layout for the remaining sources
//! - [`frame`] - Request/response bridge into an embedded frame

pub mod exchange;
pub mod frame;
pub mod generic;
pub mod grouped;
mod sink;
pub mod table;

pub(crate) use sink::{positional_label, EventSkip, RecordSink};
