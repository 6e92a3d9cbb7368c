//! Betxtract - bookmaker odds extraction and cross-source reconciliation.
//!
//! Each supported bookmaker renders the same concepts (two competitors, a
//! draw, a price) in a different document shape. This crate turns those
//! documents into a common record shape and merges records describing the
//! same match into one price table keyed by source.
//!
//! # Modules
//!
//! - [`domain`] - Site table, raw records, merged matches, price and date parsing
//! - [`port`] - Trait seams: source adapters, frame channels, the extract contract
//! - [`adapter`] - Source layout variants, frame bridge, CLI
//! - [`application`] - Reconciliation and request handling
//! - [`infrastructure`] - Configuration, logging, adapter factory
//! - [`error`] - Error types for the crate
//!
//! # Example
//!
//! ```no_run
//! use betxtract::application::{ExtractService, Page};
//! use betxtract::domain::SiteRegistry;
//! use betxtract::infrastructure::factory::adapter::AdapterFactory;
//! use betxtract::port::outbound::document::Document;
//!
//! # async fn run(html: &str) {
//! let service = ExtractService::new(SiteRegistry::builtin(), AdapterFactory::default());
//! let document = Document::parse(html);
//! let page = Page { url: "https://www.betclic.fr/football", document: &document };
//! let merged = service.extract_all(&[page]).await;
//! println!("{}", serde_json::to_string_pretty(&merged).unwrap());
//! # }
//! ```

pub mod adapter;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
