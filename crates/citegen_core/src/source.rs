/*
SPDX-License-Identifier: MPL-2.0
*/

//! Source types, the flat field mapping, and typed source records.
//!
//! Callers supply a [`SourceType`] tag plus a flat [`SourceFields`]
//! mapping (the shape of the JSON the embedding server collects from a
//! form). After validation the engine narrows that mapping into a
//! [`SourceRecord`] variant carrying only the fields relevant to the
//! chosen type.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of work being cited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Book,
    Website,
    Journal,
}

impl SourceType {
    /// All supported source types, in display order.
    pub const ALL: [SourceType; 3] = [SourceType::Book, SourceType::Website, SourceType::Journal];

    /// Look up a source type by its wire tag.
    pub fn from_tag(tag: &str) -> Option<SourceType> {
        match tag {
            "book" => Some(SourceType::Book),
            "website" => Some(SourceType::Website),
            "journal" => Some(SourceType::Journal),
            _ => None,
        }
    }

    /// The wire tag for this source type.
    pub fn as_tag(&self) -> &'static str {
        match self {
            SourceType::Book => "book",
            SourceType::Website => "website",
            SourceType::Journal => "journal",
        }
    }
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// The flat field mapping supplied with a request.
///
/// Every member defaults to empty; which ones matter is decided by the
/// [`SourceType`] (and enforced by the processor's validator). Field
/// names follow the wire convention (`pageTitle`, `doiOrUrl`, ...).
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct SourceFields {
    /// Raw author name strings, in citation order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    /// Book title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub title: String,
    /// Book edition, e.g. "2nd ed.".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub edition: String,
    /// Publisher (books, optionally websites).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publisher: String,
    /// Publication year (books, journals).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub year: String,
    /// A DOI (`10.…` or `doi:…`) or an already-complete URL.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub doi_or_url: String,
    /// Title of the cited web page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub page_title: String,
    /// Name of the website the page belongs to.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub website_name: String,
    /// URL of the cited web page.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub url: String,
    /// Publication date of the web page (`YYYY[-MM[-DD]]`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub publish_date: String,
    /// Date the web page was accessed (`YYYY[-MM[-DD]]`).
    #[serde(skip_serializing_if = "String::is_empty")]
    pub access_date: String,
    /// Journal article title.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub article_title: String,
    /// Journal name.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub journal_name: String,
    /// Journal volume.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub volume: String,
    /// Journal issue.
    #[serde(skip_serializing_if = "String::is_empty")]
    pub issue: String,
    /// Page or page range, e.g. "7" or "123-145".
    #[serde(skip_serializing_if = "String::is_empty")]
    pub pages: String,
}

/// A book source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Book {
    pub authors: Vec<String>,
    pub title: String,
    pub edition: String,
    pub publisher: String,
    pub year: String,
    pub doi_or_url: String,
}

/// A website source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Website {
    pub authors: Vec<String>,
    pub page_title: String,
    pub website_name: String,
    pub publisher: String,
    pub url: String,
    pub publish_date: String,
    pub access_date: String,
}

/// A journal article source.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(default, rename_all = "camelCase")]
pub struct Journal {
    pub authors: Vec<String>,
    pub article_title: String,
    pub journal_name: String,
    pub volume: String,
    pub issue: String,
    pub year: String,
    pub pages: String,
    pub doi_or_url: String,
}

/// A tagged source record, narrowed from the flat field mapping.
///
/// Absent optional fields are empty strings and render as omission.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SourceRecord {
    Book(Book),
    Website(Website),
    Journal(Journal),
}

impl SourceRecord {
    /// Narrow a flat field mapping into the record for `source_type`.
    ///
    /// Fields irrelevant to the type are discarded; nothing is
    /// validated or normalized here.
    pub fn from_fields(source_type: SourceType, fields: &SourceFields) -> SourceRecord {
        match source_type {
            SourceType::Book => SourceRecord::Book(Book {
                authors: fields.authors.clone(),
                title: fields.title.clone(),
                edition: fields.edition.clone(),
                publisher: fields.publisher.clone(),
                year: fields.year.clone(),
                doi_or_url: fields.doi_or_url.clone(),
            }),
            SourceType::Website => SourceRecord::Website(Website {
                authors: fields.authors.clone(),
                page_title: fields.page_title.clone(),
                website_name: fields.website_name.clone(),
                publisher: fields.publisher.clone(),
                url: fields.url.clone(),
                publish_date: fields.publish_date.clone(),
                access_date: fields.access_date.clone(),
            }),
            SourceType::Journal => SourceRecord::Journal(Journal {
                authors: fields.authors.clone(),
                article_title: fields.article_title.clone(),
                journal_name: fields.journal_name.clone(),
                volume: fields.volume.clone(),
                issue: fields.issue.clone(),
                year: fields.year.clone(),
                pages: fields.pages.clone(),
                doi_or_url: fields.doi_or_url.clone(),
            }),
        }
    }

    /// The tag this record was narrowed under.
    pub fn source_type(&self) -> SourceType {
        match self {
            SourceRecord::Book(_) => SourceType::Book,
            SourceRecord::Website(_) => SourceType::Website,
            SourceRecord::Journal(_) => SourceType::Journal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_deserialize_with_wire_names() {
        let json = r#"{
            "authors": ["Doe, Jane"],
            "pageTitle": "Understanding Climate Change",
            "websiteName": "NASA",
            "url": "https://example.org/page",
            "accessDate": "2024-03-01"
        }"#;
        let fields: SourceFields = serde_json::from_str(json).unwrap();
        assert_eq!(fields.page_title, "Understanding Climate Change");
        assert_eq!(fields.website_name, "NASA");
        assert!(fields.publisher.is_empty());
    }

    #[test]
    fn narrowing_discards_irrelevant_fields() {
        let fields = SourceFields {
            title: "The Great Gatsby".to_string(),
            publisher: "Scribner".to_string(),
            year: "1995".to_string(),
            journal_name: "Nature Physics".to_string(),
            ..Default::default()
        };
        let record = SourceRecord::from_fields(SourceType::Book, &fields);
        match record {
            SourceRecord::Book(book) => {
                assert_eq!(book.title, "The Great Gatsby");
                assert_eq!(book.year, "1995");
            }
            other => panic!("expected a book record, got {:?}", other),
        }
    }

    #[test]
    fn record_tag_round_trip() {
        let record = SourceRecord::from_fields(SourceType::Journal, &SourceFields::default());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"journal\""));
        let back: SourceRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source_type(), SourceType::Journal);
    }
}
