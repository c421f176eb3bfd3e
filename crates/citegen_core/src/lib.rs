//! Data model for the citegen citation formatter.
//!
//! This crate defines the vocabulary shared by the formatting engine and
//! its callers: the citation [`Style`] tags, the [`SourceType`] tags, the
//! flat [`SourceFields`] mapping carried on the wire, the typed
//! [`SourceRecord`] union the builders consume, and the
//! request/result envelope types.
//!
//! Everything here is plain data. Parsing author names and assembling
//! citation strings is the job of the `citegen_processor` crate.

pub mod author;
pub mod request;
pub mod source;
pub mod style;

pub use author::Author;
pub use request::{CitationRequest, CitationResult};
pub use source::{Book, Journal, SourceFields, SourceRecord, SourceType, Website};
pub use style::Style;
