//! Scripted [`FrameChannel`] doubles.
//!
//! [`ScriptedFrame`] answers each posted request by broadcasting a fixed
//! list of messages to the host, in order. An empty script makes a frame that
//! never answers; [`ScriptedFrame::host`] lets a test inject messages at any
//! later point.

use parking_lot::Mutex;
use serde_json::{json, Value};
use tokio::sync::broadcast;

use crate::error::ExtractError;
use crate::port::outbound::frame::{FrameChannel, FrameReply};

/// A frame whose replies are fixed up front.
pub struct ScriptedFrame {
    host: broadcast::Sender<Value>,
    script: Vec<Value>,
    posted: Mutex<Vec<Value>>,
}

impl ScriptedFrame {
    pub fn new(script: Vec<Value>) -> Self {
        let (host, _) = broadcast::channel(64);
        Self {
            host,
            script,
            posted: Mutex::new(Vec::new()),
        }
    }

    /// A frame that never answers.
    pub fn silent() -> Self {
        Self::new(Vec::new())
    }

    /// A frame answering with `html` under the `html` key.
    pub fn replying(html: &str) -> Self {
        Self::new(vec![reply(html)])
    }

    /// A frame emitting unrelated host traffic before its reply.
    pub fn noisy(html: &str) -> Self {
        Self::new(vec![
            json!({"type": "resize", "height": 640}),
            json!({"action": "heartbeat"}),
            json!("getDomContent"),
            reply(html),
        ])
    }

    /// Sender for injecting host messages.
    pub fn host(&self) -> broadcast::Sender<Value> {
        self.host.clone()
    }

    /// Every message posted into the frame so far.
    pub fn posted(&self) -> Vec<Value> {
        self.posted.lock().clone()
    }
}

impl FrameChannel for ScriptedFrame {
    fn post(&self, message: Value) -> Result<(), ExtractError> {
        self.posted.lock().push(message);
        for item in &self.script {
            let _ = self.host.send(item.clone());
        }
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<Value> {
        self.host.subscribe()
    }
}

/// A frame whose post always fails.
pub struct BrokenFrame;

impl FrameChannel for BrokenFrame {
    fn post(&self, _message: Value) -> Result<(), ExtractError> {
        Err(ExtractError::Channel("frame detached".into()))
    }

    fn subscribe(&self) -> broadcast::Receiver<Value> {
        broadcast::channel(1).1
    }
}

/// A well-formed content reply carrying `html`.
pub fn reply(html: &str) -> Value {
    serde_json::to_value(FrameReply::with_html(html)).expect("reply serializes")
}
