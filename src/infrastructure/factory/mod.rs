//! Factory modules for building infrastructure components.
//!
//! # Submodules
//!
//! - [`adapter`] - Source adapter construction

pub mod adapter;

pub use adapter::AdapterFactory;
