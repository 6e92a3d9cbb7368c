//! Source adapter port.
//!
//! One implementation per bookmaker layout. Every variant offers the same
//! capability set: resolve a kickoff phrase, and extract raw match records
//! from a document. Extraction is async because one variant has to wait on
//! an embedded frame; the others complete without suspending.

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::domain::{RawMatchRecord, SiteDefinition, SourceId};

use super::document::Document;

/// Extracts raw match records for one source.
///
/// Documents are single-threaded values, so the returned futures are not
/// `Send`; callers await them on the task that owns the document.
#[async_trait(?Send)]
pub trait SourceAdapter {
    /// Definition this adapter was built from.
    fn site(&self) -> &SiteDefinition;

    /// Source identifier, for logging and routing.
    fn source(&self) -> SourceId {
        self.site().id
    }

    /// Resolve a kickoff phrase as printed by this source.
    fn convert_date_time(&self, text: &str) -> Option<NaiveDateTime>;

    /// Extract every complete event from `document`.
    ///
    /// Never fails as a whole: a malformed event is logged and skipped, and
    /// an unreachable data source yields an empty list.
    async fn extract_odds(&self, document: &Document) -> Vec<RawMatchRecord>;
}
