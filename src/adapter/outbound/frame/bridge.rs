//! Request/reply bridge to an embedded frame.
//!
//! A request subscribes to host messages, posts a tagged content request into
//! the frame and waits for the first reply carrying the same action tag.
//! Unrelated messages on the host are skipped. When no reply arrives before
//! the deadline the request resolves to `None` and the listener is released.

use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::error::ExtractError;
use crate::port::outbound::frame::{FrameChannel, FrameReply, FrameRequest};

/// One-shot content requests against a single frame.
pub struct FrameBridge {
    channel: Arc<dyn FrameChannel>,
    timeout: Duration,
    source_tag: String,
    in_flight: Mutex<()>,
}

impl FrameBridge {
    pub fn new(channel: Arc<dyn FrameChannel>, timeout: Duration, source_tag: impl Into<String>) -> Self {
        Self {
            channel,
            timeout,
            source_tag: source_tag.into(),
            in_flight: Mutex::new(()),
        }
    }

    /// Deadline applied to each request.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Ask the frame for its serialized document.
    ///
    /// Returns `Ok(None)` on timeout. Only one request may be outstanding per
    /// bridge; a concurrent call fails with [`ExtractError::BridgeBusy`].
    pub async fn request(&self) -> Result<Option<String>, ExtractError> {
        let _guard = self.in_flight.try_lock().map_err(|_| ExtractError::BridgeBusy)?;

        // Subscribe before posting so a synchronous reply is not missed.
        let mut replies = self.channel.subscribe();
        let request = serde_json::to_value(FrameRequest::get_dom_content(&self.source_tag))
            .map_err(|e| ExtractError::Channel(e.to_string()))?;
        self.channel.post(request)?;
        debug!(source_tag = %self.source_tag, timeout_ms = self.timeout.as_millis() as u64, "frame content requested");

        match tokio::time::timeout(self.timeout, next_reply(&mut replies)).await {
            Ok(reply) => reply,
            Err(_) => {
                warn!(timeout_ms = self.timeout.as_millis() as u64, "frame did not answer in time");
                Ok(None)
            }
        }
    }
}

impl std::fmt::Debug for FrameBridge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameBridge")
            .field("timeout", &self.timeout)
            .field("source_tag", &self.source_tag)
            .finish_non_exhaustive()
    }
}

async fn next_reply(replies: &mut broadcast::Receiver<Value>) -> Result<Option<String>, ExtractError> {
    loop {
        match replies.recv().await {
            Ok(message) => {
                if let Some(reply) = FrameReply::from_message(&message) {
                    debug!(bytes = reply.content().map_or(0, str::len), "frame reply received");
                    return Ok(Some(reply.content().unwrap_or_default().to_string()));
                }
            }
            Err(RecvError::Lagged(skipped)) => {
                debug!(skipped, "host listener lagged");
            }
            Err(RecvError::Closed) => {
                return Err(ExtractError::Channel("host channel closed".into()));
            }
        }
    }
}
