//! Extract request contract.
//!
//! The transport (extension messaging, CLI, anything else) delivers a single
//! `extract` request and receives either the merged result or a structured
//! error. Both sides are plain serde types so any transport can carry them.

use serde::{Deserialize, Serialize};

use crate::domain::MergeResult;
use crate::error::ExtractError;

/// The only action the pipeline answers.
pub const EXTRACT_ACTION: &str = "extract";

/// Request delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractRequest {
    pub action: String,
}

impl ExtractRequest {
    pub fn extract() -> Self {
        Self {
            action: EXTRACT_ACTION.to_string(),
        }
    }
}

/// Response handed back to the transport.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExtractResponse {
    Success { success: bool, data: MergeResult },
    Failure { success: bool, error: String },
}

impl ExtractResponse {
    pub fn ok(data: MergeResult) -> Self {
        ExtractResponse::Success {
            success: true,
            data,
        }
    }

    pub fn failed(error: &ExtractError) -> Self {
        ExtractResponse::Failure {
            success: false,
            error: error.to_string(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, ExtractResponse::Success { .. })
    }

    /// Merged data, if the request succeeded.
    #[must_use]
    pub fn data(&self) -> Option<&MergeResult> {
        match self {
            ExtractResponse::Success { data, .. } => Some(data),
            ExtractResponse::Failure { .. } => None,
        }
    }
}
