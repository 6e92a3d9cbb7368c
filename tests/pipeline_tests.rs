use std::sync::Arc;

use betxtract::application::{ExtractService, Page};
use betxtract::domain::{PriceCell, SiteRegistry};
use betxtract::infrastructure::factory::AdapterFactory;
use betxtract::port::inbound::extract::{ExtractRequest, ExtractResponse};
use betxtract::port::outbound::document::Document;
use betxtract::testkit::domain::normalizer;
use betxtract::testkit::fixtures;
use betxtract::testkit::frame::ScriptedFrame;
use serde_json::json;

const PSG_TONIGHT: &str = "PSG vs Lens - 2024-01-12 21:00 - Ligue 1";
const PSG_UNDATED: &str = "PSG vs Lens - N/A - N/A";

fn service() -> ExtractService {
    let frame = Arc::new(ScriptedFrame::replying(fixtures::EXCHANGE_FRAME));
    let factory = AdapterFactory::default().with_dates(normalizer()).with_frame(frame);
    ExtractService::new(SiteRegistry::builtin(), factory)
}

#[tokio::test]
async fn pages_from_every_source_merge() {
    let psel = Document::parse(fixtures::PSEL_PAGE);
    let betclic = Document::parse(fixtures::BETCLIC_PAGE);
    let unibet = Document::parse(fixtures::UNIBET_PAGE);
    let exchange = Document::parse(fixtures::EXCHANGE_HOST_PAGE);
    let pages = [
        Page { url: "https://www.enligne.parionssport.fdj.fr/paris-football", document: &psel },
        Page { url: "https://www.betclic.fr/football-s1", document: &betclic },
        Page { url: "www.unibet.fr", document: &unibet },
        Page { url: "https://www.piwi247.com/customer/inplay", document: &exchange },
    ];

    let result = service().extract_all(&pages).await;

    let tonight = result.get(PSG_TONIGHT).expect("PSEL and Betclic merged");
    assert_eq!(tonight.outcomes, vec!["PSG", "Draw", "Lens"]);
    assert_eq!(tonight.source_count(), 2);
    assert_eq!(tonight.winner("Draw").unwrap()["Betclic"], PriceCell::Price(4.1));
    assert_eq!(tonight.ids.get("PSEL").map(String::as_str), Some("3300308"));

    let undated = result.get(PSG_UNDATED).expect("Unibet and exchange merged");
    let psg = undated.winner("PSG").unwrap();
    assert_eq!(psg["Unibet"], PriceCell::Price(1.47));
    assert!(psg["PIWIXchange"].is_exchange());
    assert_eq!(undated.ids["PIWIXchange"], "33012345:1.223344");
}

#[tokio::test]
async fn unsupported_page_is_skipped_in_batch() {
    let psel = Document::parse(fixtures::PSEL_PAGE);
    let other = Document::parse("<html></html>");
    let pages = [
        Page { url: "https://www.example.com", document: &other },
        Page { url: "https://www.enligne.parionssport.fdj.fr", document: &psel },
    ];
    let result = service().extract_all(&pages).await;
    assert_eq!(result.len(), 3);
}

#[tokio::test]
async fn handle_returns_success_payload() {
    let document = Document::parse(fixtures::BETCLIC_PAGE);
    let page = Page { url: "https://www.betclic.fr/", document: &document };
    let response = service().handle(&ExtractRequest::extract(), &page).await;

    assert!(response.is_success());
    let value = serde_json::to_value(&response).unwrap();
    assert_eq!(value["success"], true);
    assert_eq!(value["data"][PSG_TONIGHT]["markets"]["Winner"]["Lens"]["Betclic"], 6.25);
}

#[tokio::test]
async fn handle_rejects_unknown_action() {
    let document = Document::parse(fixtures::BETCLIC_PAGE);
    let page = Page { url: "www.betclic.fr", document: &document };
    let request = ExtractRequest { action: "refresh".into() };
    let response = service().handle(&request, &page).await;

    assert_eq!(
        serde_json::to_value(&response).unwrap(),
        json!({"success": false, "error": "unknown action: refresh"})
    );
}

#[tokio::test]
async fn handle_reports_unsupported_site() {
    let document = Document::parse("<html></html>");
    let page = Page { url: "https://www.example.com/sport", document: &document };
    let response = service().handle(&ExtractRequest::extract(), &page).await;

    assert!(!response.is_success());
    assert!(response.data().is_none());
    assert!(matches!(response, ExtractResponse::Failure { success: false, .. }));
}

#[tokio::test]
async fn exchange_without_channel_is_reported() {
    let service = ExtractService::new(SiteRegistry::builtin(), AdapterFactory::default());
    let document = Document::parse(fixtures::EXCHANGE_HOST_PAGE);
    let page = Page { url: "piwi88.com", document: &document };
    let response = service.handle(&ExtractRequest::extract(), &page).await;
    assert!(!response.is_success());
}
