//! Cross-context messaging port.
//!
//! The exchange source renders its markets inside an embedded frame that the
//! host page cannot read directly. Content is obtained by posting a tagged
//! request into the frame and waiting for a tagged reply on the host side.
//! [`FrameChannel`] abstracts the substrate carrying those messages so the
//! bridge can run against an in-process frame or a test double.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tokio::sync::broadcast;

use crate::error::ExtractError;

/// Action tag shared by request and reply.
pub const GET_DOM_CONTENT: &str = "getDomContent";

/// Messaging substrate between the host page and an embedded frame.
pub trait FrameChannel: Send + Sync {
    /// Post a message into the frame.
    fn post(&self, message: Value) -> Result<(), ExtractError>;

    /// Register a listener for messages arriving at the host.
    ///
    /// Dropping the receiver releases the listener.
    fn subscribe(&self) -> broadcast::Receiver<Value>;
}

/// Request posted into the frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameRequest {
    pub action: String,
    pub source: String,
}

impl FrameRequest {
    /// Content request tagged with the requesting extension's name.
    pub fn get_dom_content(source: impl Into<String>) -> Self {
        Self {
            action: GET_DOM_CONTENT.to_string(),
            source: source.into(),
        }
    }
}

/// Reply carrying the frame's serialized document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameReply {
    pub action: String,
    #[serde(default, rename = "iframeDoc", skip_serializing_if = "Option::is_none")]
    pub iframe_doc: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
}

impl FrameReply {
    /// Reply carrying `html` under the `html` key.
    pub fn with_html(html: impl Into<String>) -> Self {
        Self {
            action: GET_DOM_CONTENT.to_string(),
            iframe_doc: None,
            html: Some(html.into()),
        }
    }

    /// Accept `value` only if it is a reply with the expected action tag.
    ///
    /// Any other shape the host page may be emitting is ignored.
    #[must_use]
    pub fn from_message(value: &Value) -> Option<Self> {
        let reply: FrameReply = serde_json::from_value(value.clone()).ok()?;
        (reply.action == GET_DOM_CONTENT).then_some(reply)
    }

    /// Serialized document, preferring `iframeDoc` over `html`.
    #[must_use]
    pub fn content(&self) -> Option<&str> {
        self.iframe_doc.as_deref().or(self.html.as_deref())
    }
}
