/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation formatting engine.
//!
//! This crate turns bibliographic field mappings into citation
//! strings across five styles (MLA 9, APA 7, Chicago, Harvard, IEEE)
//! and three source types (book, website, journal), producing both a
//! plain-text and an HTML rendering per request.
//!
//! The engine is a pure, deterministic pipeline: validate the fields,
//! normalize each value, render the author block for the chosen
//! style, and compose the matching builder under each output format.
//! There is no I/O, no shared state, and no clock; identical inputs
//! always produce byte-identical output, so calls may run
//! concurrently without coordination.
//!
//! # Example
//!
//! ```rust
//! use citegen_core::{SourceFields, SourceType, Style};
//! use citegen_processor::generate;
//!
//! let fields = SourceFields {
//!     authors: vec!["Smith, John".to_string()],
//!     title: "The Great Gatsby".to_string(),
//!     publisher: "Scribner".to_string(),
//!     year: "1995".to_string(),
//!     ..Default::default()
//! };
//!
//! let result = generate(Style::Mla9, SourceType::Book, &fields).unwrap();
//! assert_eq!(
//!     result.citation_text,
//!     "Smith, John. The Great Gatsby. Scribner, 1995."
//! );
//! assert_eq!(
//!     result.citation_html,
//!     "Smith, John. <i>The Great Gatsby.</i> Scribner, 1995."
//! );
//! ```

pub mod authors;
pub mod builders;
pub mod error;
pub mod io;
pub mod normalize;
pub mod processor;
pub mod render;
pub mod validate;

pub use error::ProcessorError;
pub use processor::{generate, generate_from_tags, generate_request, render_record};
pub use validate::validate;

// Re-export the data model for convenience.
pub use citegen_core::{
    Author, CitationRequest, CitationResult, SourceFields, SourceRecord, SourceType, Style,
};
