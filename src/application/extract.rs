//! Extract request handling.
//!
//! Resolves the page to a site, builds its adapter, runs it against the
//! supplied document and reconciles the result. Every negative outcome is
//! reported in the response; nothing here panics or propagates.

use tracing::{info, warn};

use crate::domain::{MergeResult, RawMatchRecord, SiteRegistry};
use crate::error::ExtractError;
use crate::infrastructure::factory::adapter::AdapterFactory;
use crate::port::inbound::extract::{ExtractRequest, ExtractResponse, EXTRACT_ACTION};
use crate::port::outbound::document::Document;

use super::reconcile::MatchReconciler;

/// A page handed to the service: its URL (or bare host) and parsed document.
pub struct Page<'a> {
    pub url: &'a str,
    pub document: &'a Document,
}

/// Entry point for extraction requests.
#[derive(Debug)]
pub struct ExtractService {
    registry: SiteRegistry,
    factory: AdapterFactory,
}

impl ExtractService {
    pub fn new(registry: SiteRegistry, factory: AdapterFactory) -> Self {
        Self { registry, factory }
    }

    #[must_use]
    pub fn registry(&self) -> &SiteRegistry {
        &self.registry
    }

    /// Run the adapter for the page's site.
    ///
    /// # Errors
    ///
    /// [`ExtractError::UnsupportedSite`] when no site matches the page, or any
    /// adapter construction error.
    pub async fn extract_page(&self, page: &Page<'_>) -> Result<Vec<RawMatchRecord>, ExtractError> {
        let site = self
            .registry
            .detect_url(page.url)
            .ok_or_else(|| ExtractError::UnsupportedSite {
                host: page.url.to_string(),
            })?;
        let adapter = self.factory.create_for(site)?;
        let records = adapter.extract_odds(page.document).await;
        info!(source = %site.id, page = %page.url, matches = records.len(), "page extracted");
        Ok(records)
    }

    /// Answer a transport request for a single page.
    pub async fn handle(&self, request: &ExtractRequest, page: &Page<'_>) -> ExtractResponse {
        if request.action != EXTRACT_ACTION {
            let err = ExtractError::UnknownAction {
                action: request.action.clone(),
            };
            warn!(error = %err, "request rejected");
            return ExtractResponse::failed(&err);
        }
        match self.extract_page(page).await {
            Ok(records) => {
                let mut reconciler = MatchReconciler::new();
                reconciler.add_batch(&records);
                ExtractResponse::ok(reconciler.finish())
            }
            Err(err) => {
                warn!(page = %page.url, error = %err, "extraction failed");
                ExtractResponse::failed(&err)
            }
        }
    }

    /// Extract several pages sequentially and merge them in order.
    ///
    /// A page that fails contributes nothing; the others still merge.
    pub async fn extract_all(&self, pages: &[Page<'_>]) -> MergeResult {
        let mut reconciler = MatchReconciler::new();
        for page in pages {
            match self.extract_page(page).await {
                Ok(records) => reconciler.add_batch(&records),
                Err(err) => warn!(page = %page.url, error = %err, "page skipped"),
            }
        }
        reconciler.finish()
    }
}
