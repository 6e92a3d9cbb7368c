use std::sync::Arc;

use betxtract::domain::{ExchangeQuote, RawMatchRecord, RawOutcome, SourceId, DRAW_LABEL};
use betxtract::infrastructure::factory::AdapterFactory;
use betxtract::port::outbound::document::Document;
use betxtract::testkit::domain::{at, fixed_now, normalizer, site};
use betxtract::testkit::fixtures;
use betxtract::testkit::frame::ScriptedFrame;

async fn extract(source: SourceId, html: &str) -> Vec<RawMatchRecord> {
    let factory = AdapterFactory::default().with_dates(normalizer());
    let adapter = factory.create_for(&site(source)).expect("adapter builds");
    adapter.extract_odds(&Document::parse(html)).await
}

fn prices(record: &RawMatchRecord) -> Vec<(String, f64)> {
    record
        .outcomes
        .iter()
        .filter_map(|o| match o {
            RawOutcome::Priced { label, price, .. } => Some((label.clone(), *price)),
            RawOutcome::Exchange { .. } => None,
        })
        .collect()
}

fn priced(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
    pairs.iter().map(|(l, p)| ((*l).to_string(), *p)).collect()
}

#[tokio::test]
async fn market_table_reads_every_layout() {
    let records = extract(SourceId::ParisSport, fixtures::PSEL_PAGE).await;
    assert_eq!(records.len(), 3);

    let psg = &records[0];
    assert_eq!(psg.competitors, vec!["PSG", "Lens"]);
    assert_eq!(psg.competition.as_deref(), Some("Ligue 1"));
    assert_eq!(psg.date_time, Some(at(2024, 1, 12, 21, 0)));
    assert_eq!(psg.external_id.as_deref(), Some("3300308"));
    assert_eq!(
        psg.url.as_deref(),
        Some("https://www.enligne.parionssport.fdj.fr/paris-football/france/ligue-1/3300308/psg-vs-lens")
    );
    assert_eq!(prices(psg), priced(&[("PSG", 1.45), ("Draw", 4.2), ("Lens", 6.5)]));
    assert_eq!(psg.source, SourceId::ParisSport);
    assert_eq!(psg.source_name, "PSEL");

    let tennis = &records[1];
    assert_eq!(tennis.date_time, Some(at(2024, 1, 13, 14, 30)));
    assert_eq!(prices(tennis), priced(&[("Sinner", 1.8), ("Alcaraz", 2.0)]));
}

#[tokio::test]
async fn explicit_labels_carry_percentages() {
    let records = extract(SourceId::ParisSport, fixtures::PSEL_PAGE).await;
    let live = &records[2];
    assert_eq!(live.competitors, vec!["Arsenal", "Chelsea"]);
    assert_eq!(live.date_time, Some(fixed_now()));

    let percentages: Vec<_> = live
        .outcomes
        .iter()
        .map(|o| match o {
            RawOutcome::Priced { label, percentage, .. } => (label.as_str(), *percentage),
            RawOutcome::Exchange { .. } => panic!("unexpected exchange outcome"),
        })
        .collect();
    assert_eq!(
        percentages,
        vec![("Arsenal", Some(48)), (DRAW_LABEL, Some(27)), ("Chelsea", Some(25))]
    );
}

#[tokio::test]
async fn repeated_link_is_extracted_once() {
    let records = extract(SourceId::ParisSport, fixtures::PSEL_PAGE).await;
    let psg: Vec<_> = records.iter().filter(|r| r.competitors[0] == "PSG").collect();
    assert_eq!(psg.len(), 1);
    assert_eq!(prices(psg[0])[0].1, 1.45);
}

#[tokio::test]
async fn repeated_calls_are_independent() {
    let factory = AdapterFactory::default().with_dates(normalizer());
    let adapter = factory.create_for(&site(SourceId::ParisSport)).unwrap();
    let document = Document::parse(fixtures::PSEL_PAGE);
    let first = adapter.extract_odds(&document).await;
    let second = adapter.extract_odds(&document).await;
    assert_eq!(first, second);
    assert_eq!(second.len(), 3);
}

#[tokio::test]
async fn grouped_buttons_use_labels_then_position() {
    let records = extract(SourceId::Betclic, fixtures::BETCLIC_PAGE).await;
    assert_eq!(records.len(), 2);

    let psg = &records[0];
    assert_eq!(psg.competition.as_deref(), Some("Ligue 1"));
    assert_eq!(psg.date_time, Some(at(2024, 1, 12, 21, 0)));
    assert_eq!(prices(psg), priced(&[("PSG", 1.5), ("Draw", 4.1), ("Lens", 6.25)]));
    assert_eq!(psg.url.as_deref(), Some("/football-s1/ligue-1-uber-eats-c4/psg-lens-m1001"));

    let lyon = &records[1];
    assert_eq!(lyon.date_time, Some(at(2024, 1, 13, 20, 45)));
    assert_eq!(prices(lyon), priced(&[("Lyon", 2.05), ("Draw", 3.4), ("Nice", 3.6)]));
}

#[tokio::test]
async fn generic_splits_combined_titles() {
    let records = extract(SourceId::Unibet, fixtures::UNIBET_PAGE).await;
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].competitors, vec!["PSG", "Lens"]);
    assert_eq!(records[0].external_id.as_deref(), Some("u-1203"));
    assert_eq!(prices(&records[0]), priced(&[("PSG", 1.47), ("Draw", 4.3), ("Lens", 6.0)]));

    let records = extract(SourceId::Pmu, fixtures::PMU_PAGE).await;
    assert_eq!(records.len(), 1);
    assert_eq!(prices(&records[0]), priced(&[("Sinner", 1.85), ("Alcaraz", 1.95)]));
    assert_eq!(records[0].date_time, None);
}

#[tokio::test]
async fn generic_suspended_button_keeps_later_slots() {
    let card = |buttons: &str| {
        format!(
            r#"<div class="event-card" data-event-id="u-1">
                 <span class="event-title">PSG - Lens</span>
                 <div class="odds-container">{buttons}</div>
               </div>"#
        )
    };

    let html = card(r#"<span class="odds-btn">SUSP</span><span class="odds-btn">4,30</span><span class="odds-btn">6,00</span>"#);
    let records = extract(SourceId::Unibet, &html).await;
    assert_eq!(prices(&records[0]), priced(&[("Draw", 4.3), ("Lens", 6.0)]));

    let html = card(r#"<span class="odds-btn">1,47</span><span class="odds-btn">-</span><span class="odds-btn">6,00</span>"#);
    let records = extract(SourceId::Unibet, &html).await;
    assert_eq!(prices(&records[0]), priced(&[("PSG", 1.47), ("Lens", 6.0)]));
}

#[tokio::test]
async fn exchange_reads_back_and_lay_from_frame() {
    let frame = Arc::new(ScriptedFrame::replying(fixtures::EXCHANGE_FRAME));
    let factory = AdapterFactory::default().with_dates(normalizer()).with_frame(frame.clone());
    let adapter = factory.create_for(&site(SourceId::Piwixchange)).unwrap();

    let records = adapter
        .extract_odds(&Document::parse(fixtures::EXCHANGE_HOST_PAGE))
        .await;
    assert_eq!(records.len(), 1);
    assert_eq!(frame.posted().len(), 1);

    let row = &records[0];
    assert_eq!(row.external_id.as_deref(), Some("33012345:1.223344"));
    assert_eq!(row.competitors, vec!["PSG", "Lens"]);
    assert_eq!(row.outcomes.len(), 3);
    assert_eq!(
        row.outcomes[0],
        RawOutcome::Exchange {
            selection_id: "47972".into(),
            label: "PSG".into(),
            back: Some(ExchangeQuote { odds: 1.48, amount: Some(250.0) }),
            lay: Some(ExchangeQuote { odds: 1.5, amount: Some(120.0) }),
        }
    );
    assert_eq!(
        row.outcomes[1],
        RawOutcome::Exchange {
            selection_id: "58805".into(),
            label: DRAW_LABEL.into(),
            back: Some(ExchangeQuote { odds: 4.3, amount: Some(40.0) }),
            lay: None,
        }
    );
    assert!(matches!(
        &row.outcomes[2],
        RawOutcome::Exchange { label, lay: Some(ExchangeQuote { amount: None, .. }), .. } if label == "Lens"
    ));
}

#[tokio::test]
async fn exchange_without_frame_element_returns_nothing() {
    let frame = Arc::new(ScriptedFrame::replying(fixtures::EXCHANGE_FRAME));
    let factory = AdapterFactory::default().with_frame(frame.clone());
    let adapter = factory.create_for(&site(SourceId::Piwixchange)).unwrap();

    let records = adapter.extract_odds(&Document::parse(fixtures::BETCLIC_PAGE)).await;
    assert!(records.is_empty());
    assert!(frame.posted().is_empty());
}

#[tokio::test]
async fn unrelated_page_yields_no_records() {
    for source in [SourceId::ParisSport, SourceId::Betclic, SourceId::Pmu, SourceId::Unibet] {
        let records = extract(source, "<html><body><p>Maintenance</p></body></html>").await;
        assert!(records.is_empty(), "{source} produced records");
    }
}

#[tokio::test]
async fn every_record_is_complete() {
    for (source, html) in [
        (SourceId::ParisSport, fixtures::PSEL_PAGE),
        (SourceId::Betclic, fixtures::BETCLIC_PAGE),
        (SourceId::Unibet, fixtures::UNIBET_PAGE),
        (SourceId::Pmu, fixtures::PMU_PAGE),
    ] {
        for record in extract(source, html).await {
            assert!(record.competitors.len() >= 2);
            assert!(record.outcomes.iter().all(RawOutcome::has_price));
            assert!(record.is_complete());
        }
    }
}
