/*
SPDX-License-Identifier: MPL-2.0
*/

//! IEEE builder.
//!
//! IEEE only defines its own book layout; websites and journals use
//! the MLA builders via the dispatch table. The quoted title keeps
//! straight quotes in both output formats, and every author is
//! listed.

use super::join_nonempty;
use crate::authors::format_authors;
use crate::normalize::{choose_link, collapse_spaces};
use crate::render::OutputFormat;
use citegen_core::{Book, Style};

/// `Author, "Title," Publisher, Year, DOI.` The comma sits inside
/// the quoted title.
pub fn book<F: OutputFormat>(book: &Book, fmt: &F) -> String {
    let authors = format_authors(&book.authors, Style::Ieee);
    let title = collapse_spaces(&book.title);
    let tail = join_nonempty(
        &[collapse_spaces(&book.publisher), collapse_spaces(&book.year)],
        ", ",
    );
    let link = choose_link(&book.doi_or_url);

    let mut parts: Vec<F::Output> = Vec::new();
    if !authors.is_empty() {
        parts.push(fmt.text(&format!("{},", authors)));
    }
    if !title.is_empty() {
        parts.push(fmt.affix("\"", fmt.text(&format!("{},", title)), "\""));
    }

    let mut trailer: Vec<F::Output> = Vec::new();
    if !tail.is_empty() {
        trailer.push(fmt.text(&tail));
    }
    if !link.is_empty() {
        trailer.push(fmt.link(&link, fmt.text(&link)));
    }
    if !trailer.is_empty() {
        parts.push(fmt.affix("", fmt.join(trailer, ", "), "."));
    }
    fmt.finish(fmt.join(parts, " "))
}
