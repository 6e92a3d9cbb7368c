//! Application services (use cases).
//!
//! - [`reconcile`] - Cross-source merge of raw records
//! - [`extract`] - Request handling: detection, adapter, merge

pub mod extract;
pub mod reconcile;

pub use extract::{ExtractService, Page};
pub use reconcile::{reconcile, MatchReconciler};
