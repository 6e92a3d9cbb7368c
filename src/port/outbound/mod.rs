//! Outbound ports (driven side): interfaces implemented by outbound adapters.
//!
//! These contracts describe the page-side dependencies of the pipeline:
//! the document being read, the source adapters reading it, and the
//! messaging channel into an embedded frame.

pub mod document;
pub mod frame;
pub mod source;
