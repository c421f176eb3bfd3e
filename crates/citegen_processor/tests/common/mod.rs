/*
SPDX-License-Identifier: MPL-2.0
*/

#![allow(dead_code)]

use citegen_core::SourceFields;

// --- Helper constructors for test field mappings ---

/// A minimal valid book request.
pub fn gatsby_book() -> SourceFields {
    SourceFields {
        authors: vec!["Smith, John".to_string()],
        title: "The Great Gatsby".to_string(),
        publisher: "Scribner".to_string(),
        year: "1995".to_string(),
        ..Default::default()
    }
}

/// The same book with every optional field populated.
pub fn gatsby_book_full() -> SourceFields {
    SourceFields {
        edition: "2nd ed.".to_string(),
        doi_or_url: "10.1234/abcd".to_string(),
        ..gatsby_book()
    }
}

/// A fully-populated website request.
pub fn climate_website() -> SourceFields {
    SourceFields {
        authors: vec!["Doe, Jane".to_string()],
        page_title: "Understanding Climate Change".to_string(),
        website_name: "NASA Climate".to_string(),
        publisher: "NASA Earth Observatory".to_string(),
        url: "https://example.org/climate".to_string(),
        publish_date: "2024-03-05".to_string(),
        access_date: "2024-03-10".to_string(),
        ..Default::default()
    }
}

/// A fully-populated journal request, sans link.
pub fn quantum_journal() -> SourceFields {
    SourceFields {
        authors: vec!["Jane Doe".to_string()],
        article_title: "Quantum Basics".to_string(),
        journal_name: "Nature Physics".to_string(),
        volume: "12".to_string(),
        issue: "3".to_string(),
        year: "2021".to_string(),
        pages: "123-145".to_string(),
        ..Default::default()
    }
}
