//! Frame content retrieval.
//!
//! - [`bridge`] - request/reply over any [`FrameChannel`](crate::port::outbound::frame::FrameChannel)
//! - [`embedded`] - in-process frame answering content requests

pub mod bridge;
pub mod embedded;

pub use bridge::FrameBridge;
pub use embedded::EmbeddedFrame;
