/*
SPDX-License-Identifier: MPL-2.0
*/

//! The `generate` entry points.
//!
//! Control flow: validate the field mapping, narrow it into a typed
//! source record, then run the matching style builder once per output
//! format. Everything downstream of validation is infallible.

use crate::builders;
use crate::error::ProcessorError;
use crate::render::{Html, PlainText};
use crate::validate::validate;
use citegen_core::{CitationRequest, CitationResult, SourceFields, SourceRecord, SourceType, Style};

/// Generate a citation for `fields` in the given style and source
/// type.
///
/// Fails with [`ProcessorError::Validation`] when required fields are
/// missing; otherwise returns both output formats.
pub fn generate(
    style: Style,
    source_type: SourceType,
    fields: &SourceFields,
) -> Result<CitationResult, ProcessorError> {
    let errors = validate(source_type, fields);
    if !errors.is_empty() {
        return Err(ProcessorError::Validation(errors));
    }
    let record = SourceRecord::from_fields(source_type, fields);
    Ok(render_record(style, &record))
}

/// Render an already-validated record in both output formats.
pub fn render_record(style: Style, record: &SourceRecord) -> CitationResult {
    CitationResult {
        citation_text: builders::build(style, record, &PlainText),
        citation_html: builders::build(style, record, &Html),
    }
}

/// Generate from a deserialized request envelope.
pub fn generate_request(request: &CitationRequest) -> Result<CitationResult, ProcessorError> {
    generate(request.style, request.source_type, &request.fields)
}

/// Generate from raw wire tags, mapping unknown tags to the
/// unsupported-style/-type errors.
pub fn generate_from_tags(
    style_tag: &str,
    type_tag: &str,
    fields: &SourceFields,
) -> Result<CitationResult, ProcessorError> {
    let style = Style::from_tag(style_tag)
        .ok_or_else(|| ProcessorError::UnsupportedStyle(style_tag.to_string()))?;
    let source_type = SourceType::from_tag(type_tag)
        .ok_or_else(|| ProcessorError::UnsupportedType(type_tag.to_string()))?;
    generate(style, source_type, fields)
}
