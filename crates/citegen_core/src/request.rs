/*
SPDX-License-Identifier: MPL-2.0
*/

//! Request and result envelope types.

use crate::source::{SourceFields, SourceType};
use crate::style::Style;
#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A citation request as accepted on the wire:
/// `{ "style": "apa7", "sourceType": "journal", "fields": { ... } }`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CitationRequest {
    pub style: Style,
    #[serde(rename = "sourceType")]
    pub source_type: SourceType,
    #[serde(default)]
    pub fields: SourceFields,
}

/// A generated citation in both output formats.
///
/// A fresh value per request; `citation_text` carries no markup, and
/// `citation_html` is safe to embed inside a single block element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct CitationResult {
    #[serde(rename = "citationText")]
    pub citation_text: String,
    #[serde(rename = "citationHTML")]
    pub citation_html: String,
}
