/*
SPDX-License-Identifier: MPL-2.0
*/

//! Harvard builder.
//!
//! Harvard only defines its own book layout; websites and journals
//! use the MLA builders via the dispatch table.

use super::join_nonempty;
use crate::authors::format_authors;
use crate::normalize::{choose_link, collapse_spaces};
use crate::render::OutputFormat;
use citegen_core::{Book, Style};

/// `Author Year, Title, Edition, Publisher, DOI.` A single comma-joined
/// run with a single terminal period.
pub fn book<F: OutputFormat>(book: &Book, fmt: &F) -> String {
    let authors = format_authors(&book.authors, Style::Harvard);
    let year = collapse_spaces(&book.year);
    let title = collapse_spaces(&book.title);
    let edition = collapse_spaces(&book.edition);
    let publisher = collapse_spaces(&book.publisher);
    let link = choose_link(&book.doi_or_url);

    let head = join_nonempty(&[authors, year], " ");

    let mut parts: Vec<F::Output> = Vec::new();
    if !head.is_empty() {
        parts.push(fmt.text(&head));
    }
    if !title.is_empty() {
        parts.push(fmt.emph(fmt.text(&title)));
    }
    if !edition.is_empty() {
        parts.push(fmt.text(&edition));
    }
    if !publisher.is_empty() {
        parts.push(fmt.text(&publisher));
    }
    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&link)));
    }
    fmt.finish(fmt.affix("", fmt.join(parts, ", "), "."))
}
