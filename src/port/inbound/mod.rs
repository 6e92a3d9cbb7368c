//! Inbound ports (driving side): contracts offered to callers.

pub mod extract;
