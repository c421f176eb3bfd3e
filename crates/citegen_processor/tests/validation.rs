/*
SPDX-License-Identifier: MPL-2.0
*/

//! Validator completeness: every required field, for every source
//! type, is reported when missing and accepted when present.

mod common;
use common::*;

use citegen_core::{SourceFields, SourceType, Style};
use citegen_processor::{generate, generate_from_tags, validate, ProcessorError};

#[test]
fn empty_book_reports_every_required_field() {
    let errors = validate(SourceType::Book, &SourceFields::default());
    assert_eq!(
        errors,
        vec![
            "title is required",
            "publisher is required",
            "year is required"
        ]
    );
}

#[test]
fn empty_website_reports_every_required_field() {
    let errors = validate(SourceType::Website, &SourceFields::default());
    assert_eq!(
        errors,
        vec![
            "pageTitle is required",
            "websiteName is required",
            "url is required",
            "accessDate is required"
        ]
    );
}

#[test]
fn empty_journal_reports_every_required_field() {
    let errors = validate(SourceType::Journal, &SourceFields::default());
    assert_eq!(
        errors,
        vec![
            "articleTitle is required",
            "journalName is required",
            "year is required"
        ]
    );
}

#[test]
fn dropping_any_single_required_field_is_reported() {
    let cases: Vec<(SourceType, SourceFields, &str, fn(&mut SourceFields))> = vec![
        (SourceType::Book, gatsby_book(), "title", |f| {
            f.title = String::new()
        }),
        (SourceType::Book, gatsby_book(), "publisher", |f| {
            f.publisher = String::new()
        }),
        (SourceType::Book, gatsby_book(), "year", |f| {
            f.year = String::new()
        }),
        (SourceType::Website, climate_website(), "pageTitle", |f| {
            f.page_title = String::new()
        }),
        (SourceType::Website, climate_website(), "websiteName", |f| {
            f.website_name = String::new()
        }),
        (SourceType::Website, climate_website(), "url", |f| {
            f.url = String::new()
        }),
        (SourceType::Website, climate_website(), "accessDate", |f| {
            f.access_date = String::new()
        }),
        (SourceType::Journal, quantum_journal(), "articleTitle", |f| {
            f.article_title = String::new()
        }),
        (SourceType::Journal, quantum_journal(), "journalName", |f| {
            f.journal_name = String::new()
        }),
        (SourceType::Journal, quantum_journal(), "year", |f| {
            f.year = String::new()
        }),
    ];

    for (source_type, mut fields, name, clear) in cases {
        clear(&mut fields);
        let errors = validate(source_type, &fields);
        assert_eq!(
            errors,
            vec![format!("{} is required", name)],
            "clearing {} on a {} request",
            name,
            source_type
        );
    }
}

#[test]
fn complete_requests_validate_cleanly() {
    assert!(validate(SourceType::Book, &gatsby_book()).is_empty());
    assert!(validate(SourceType::Website, &climate_website()).is_empty());
    assert!(validate(SourceType::Journal, &quantum_journal()).is_empty());
}

#[test]
fn partial_website_example() {
    let fields = SourceFields {
        page_title: "X".to_string(),
        ..Default::default()
    };
    let errors = validate(SourceType::Website, &fields);
    assert_eq!(
        errors,
        vec![
            "websiteName is required",
            "url is required",
            "accessDate is required"
        ]
    );
}

#[test]
fn generate_surfaces_validation_errors() {
    let result = generate(Style::Apa7, SourceType::Journal, &SourceFields::default());
    match result {
        Err(ProcessorError::Validation(errors)) => {
            assert_eq!(errors.len(), 3);
            assert!(errors[0].contains("articleTitle"));
        }
        other => panic!("expected a validation error, got {:?}", other),
    }
}

#[test]
fn unknown_tags_are_unsupported_not_validation_failures() {
    assert!(matches!(
        generate_from_tags("apa6", "book", &gatsby_book()),
        Err(ProcessorError::UnsupportedStyle(_))
    ));
    assert!(matches!(
        generate_from_tags("apa7", "newspaper", &gatsby_book()),
        Err(ProcessorError::UnsupportedType(_))
    ));
}
