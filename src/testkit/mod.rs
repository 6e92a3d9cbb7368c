//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`fixtures`] - Saved-page HTML for every source layout
//! - [`domain`] - Builders for records, sites and a pinned clock
//! - [`frame`] - Scripted [`FrameChannel`](crate::port::outbound::frame::FrameChannel) doubles

pub mod domain;
pub mod fixtures;
pub mod frame;
