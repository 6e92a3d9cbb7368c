//! In-process frame.
//!
//! Holds the frame's current document and answers `getDomContent` requests
//! by broadcasting a reply to the host. A frame with no document loaded stays
//! silent, which the bridge observes as a timeout.

use parking_lot::Mutex;
use serde_json::Value;
use tokio::sync::broadcast;
use tracing::trace;

use crate::error::ExtractError;
use crate::port::outbound::frame::{FrameChannel, FrameReply, GET_DOM_CONTENT};

const HOST_CAPACITY: usize = 16;

/// A frame living in the same process as the host.
pub struct EmbeddedFrame {
    host: broadcast::Sender<Value>,
    document: Mutex<Option<String>>,
}

impl EmbeddedFrame {
    /// A frame with nothing loaded yet.
    pub fn new() -> Self {
        let (host, _) = broadcast::channel(HOST_CAPACITY);
        Self {
            host,
            document: Mutex::new(None),
        }
    }

    /// A frame already showing `html`.
    pub fn with_document(html: impl Into<String>) -> Self {
        let frame = Self::new();
        frame.load(html);
        frame
    }

    /// Replace the frame's document.
    pub fn load(&self, html: impl Into<String>) {
        *self.document.lock() = Some(html.into());
    }

    /// Sender for messages other scripts on the host page emit.
    pub fn host(&self) -> broadcast::Sender<Value> {
        self.host.clone()
    }

    fn is_content_request(message: &Value) -> bool {
        message.get("action").and_then(Value::as_str) == Some(GET_DOM_CONTENT)
    }
}

impl Default for EmbeddedFrame {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameChannel for EmbeddedFrame {
    fn post(&self, message: Value) -> Result<(), ExtractError> {
        if !Self::is_content_request(&message) {
            trace!(%message, "frame ignored message");
            return Ok(());
        }
        let Some(html) = self.document.lock().clone() else {
            trace!("frame has no document loaded");
            return Ok(());
        };
        let reply = FrameReply {
            action: GET_DOM_CONTENT.to_string(),
            iframe_doc: Some(html),
            html: None,
        };
        let reply = serde_json::to_value(reply).map_err(|e| ExtractError::Channel(e.to_string()))?;
        // No listener means nobody is waiting; not an error for the frame.
        let _ = self.host.send(reply);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Value> {
        self.host.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[tokio::test]
    async fn answers_content_requests() {
        let frame = EmbeddedFrame::with_document("<p>x</p>");
        let mut rx = frame.subscribe();
        frame.post(json!({"action": "getDomContent", "source": "t"})).unwrap();
        let reply = rx.recv().await.unwrap();
        assert_eq!(reply["iframeDoc"], "<p>x</p>");
    }

    #[test]
    fn empty_frame_stays_silent() {
        let frame = EmbeddedFrame::new();
        let mut rx = frame.subscribe();
        frame.post(json!({"action": "getDomContent"})).unwrap();
        frame.post(json!({"action": "other"})).unwrap();
        assert!(rx.try_recv().is_err());
    }
}
