/*
SPDX-License-Identifier: MPL-2.0
*/

//! Required-field validation.
//!
//! Validation gates the style builders: it checks raw presence only
//! and performs no normalization. Unknown source-type tags cannot
//! reach here; they are rejected at the tag-parsing boundary with
//! [`crate::ProcessorError::UnsupportedType`].

use citegen_core::{SourceFields, SourceType};

/// Check that every field required by `source_type` is present.
///
/// Returns one human-readable message per missing field, naming the
/// field by its wire name; an empty list means the request is valid.
pub fn validate(source_type: SourceType, fields: &SourceFields) -> Vec<String> {
    let mut errors = Vec::new();
    let mut require = |value: &str, field: &str| {
        if value.is_empty() {
            errors.push(format!("{} is required", field));
        }
    };

    match source_type {
        SourceType::Book => {
            require(&fields.title, "title");
            require(&fields.publisher, "publisher");
            require(&fields.year, "year");
        }
        SourceType::Website => {
            require(&fields.page_title, "pageTitle");
            require(&fields.website_name, "websiteName");
            require(&fields.url, "url");
            require(&fields.access_date, "accessDate");
        }
        SourceType::Journal => {
            require(&fields.article_title, "articleTitle");
            require(&fields.journal_name, "journalName");
            require(&fields.year, "year");
        }
    }
    errors
}
