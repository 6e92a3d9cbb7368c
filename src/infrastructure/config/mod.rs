//! Infrastructure configuration modules.

pub mod bridge;
pub mod logging;
pub mod settings;
pub mod sites;
