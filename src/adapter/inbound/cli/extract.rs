//! Handler for the `extract` command.

use std::fs;
use std::sync::Arc;

use tracing::info;

use super::command::ExtractArgs;
use crate::adapter::outbound::frame::EmbeddedFrame;
use crate::application::{ExtractService, Page};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::factory::adapter::AdapterFactory;
use crate::port::outbound::document::Document;

/// Execute `extract`: run every page through its adapter and print the merge.
pub async fn execute(args: &ExtractArgs, config: &Config) -> Result<()> {
    let mut factory = AdapterFactory::new(config.bridge.clone());
    if let Some(path) = &args.frame {
        let html = fs::read_to_string(path)?;
        factory = factory.with_frame(Arc::new(EmbeddedFrame::with_document(html)));
    }
    let service = ExtractService::new(config.registry(), factory);

    let mut documents = Vec::with_capacity(args.pages.len());
    for page in &args.pages {
        let html = fs::read_to_string(&page.path)?;
        documents.push((page.url.as_str(), Document::parse(&html)));
    }
    let pages: Vec<Page<'_>> = documents
        .iter()
        .map(|(url, document)| Page { url: *url, document })
        .collect();

    let merged = service.extract_all(&pages).await;
    info!(pages = pages.len(), matches = merged.len(), "extract finished");

    let json = if args.compact {
        serde_json::to_string(&merged)?
    } else {
        serde_json::to_string_pretty(&merged)?
    };
    println!("{json}");
    Ok(())
}
