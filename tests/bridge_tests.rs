use std::sync::Arc;
use std::time::Duration;

use betxtract::adapter::outbound::frame::{EmbeddedFrame, FrameBridge};
use betxtract::error::ExtractError;
use betxtract::port::outbound::frame::FrameChannel;
use betxtract::testkit::frame::{reply, BrokenFrame, ScriptedFrame};
use serde_json::json;

const TIMEOUT: Duration = Duration::from_secs(5);

fn bridge(channel: Arc<dyn FrameChannel>) -> FrameBridge {
    FrameBridge::new(channel, TIMEOUT, "betxtract")
}

#[tokio::test]
async fn request_is_tagged_and_answered() {
    let frame = Arc::new(ScriptedFrame::replying("<p>frame</p>"));
    let content = bridge(frame.clone()).request().await.unwrap();

    assert_eq!(content.as_deref(), Some("<p>frame</p>"));
    assert_eq!(
        frame.posted(),
        vec![json!({"action": "getDomContent", "source": "betxtract"})]
    );
}

#[tokio::test]
async fn unrelated_host_messages_are_ignored() {
    let frame = Arc::new(ScriptedFrame::noisy("<p>frame</p>"));
    let content = bridge(frame).request().await.unwrap();
    assert_eq!(content.as_deref(), Some("<p>frame</p>"));
}

#[tokio::test]
async fn iframe_doc_reply_is_accepted() {
    let frame = Arc::new(EmbeddedFrame::with_document("<div>embedded</div>"));
    let content = bridge(frame).request().await.unwrap();
    assert_eq!(content.as_deref(), Some("<div>embedded</div>"));
}

#[tokio::test(start_paused = true)]
async fn silent_frame_times_out_empty() {
    let frame = Arc::new(ScriptedFrame::silent());
    let started = tokio::time::Instant::now();
    let content = bridge(frame.clone()).request().await.unwrap();

    assert_eq!(content, None);
    assert!(started.elapsed() >= TIMEOUT);
    assert_eq!(frame.host().receiver_count(), 0);
}

#[tokio::test(start_paused = true)]
async fn late_reply_within_deadline_is_used() {
    let frame = Arc::new(ScriptedFrame::silent());
    let host = frame.host();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(4)).await;
        let _ = host.send(reply("<p>late</p>"));
    });

    let content = bridge(frame).request().await.unwrap();
    assert_eq!(content.as_deref(), Some("<p>late</p>"));
}

#[tokio::test(start_paused = true)]
async fn reply_after_deadline_is_lost() {
    let frame = Arc::new(ScriptedFrame::silent());
    let host = frame.host();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(6)).await;
        let _ = host.send(reply("<p>too late</p>"));
    });

    let content = bridge(frame).request().await.unwrap();
    assert_eq!(content, None);
}

#[tokio::test(start_paused = true)]
async fn concurrent_request_is_rejected() {
    let bridge = bridge(Arc::new(ScriptedFrame::silent()));
    let (first, second) = tokio::join!(bridge.request(), bridge.request());

    assert_eq!(first, Ok(None));
    assert_eq!(second, Err(ExtractError::BridgeBusy));

    // The guard is released once the first request settles.
    assert_eq!(bridge.request().await, Ok(None));
}

#[tokio::test]
async fn post_failure_is_reported() {
    let result = bridge(Arc::new(BrokenFrame)).request().await;
    assert!(matches!(result, Err(ExtractError::Channel(_))));
}
