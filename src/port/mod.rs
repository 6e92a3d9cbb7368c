//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the seams between the extraction pipeline and everything it
//! does not own: the page document it reads, the messaging substrate that
//! reaches an embedded frame, and the transport that delivers extract
//! requests.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                         ▼                             ▼
//! ┌─────────┐            ┌─────────────┐              ┌───────────┐
//! │ Source  │            │   Frame     │              │    CLI    │
//! │ Adapters│            │   Channel   │              │  (inbound)│
//! └─────────┘            └─────────────┘              └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`outbound::source::SourceAdapter`] - Per-bookmaker extraction
//! - [`outbound::frame::FrameChannel`] - Cross-context messaging substrate
//! - [`outbound::document::Document`] - Queryable page document handle
//! - [`inbound::extract`] - Extract request/response contract

pub mod inbound;
pub mod outbound;
