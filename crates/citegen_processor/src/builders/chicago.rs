/*
SPDX-License-Identifier: MPL-2.0
*/

//! Chicago builder.
//!
//! Chicago only defines its own book layout; websites and journals
//! use the MLA builders via the dispatch table.

use super::join_nonempty;
use crate::authors::format_authors;
use crate::normalize::{choose_link, collapse_spaces, ensure_period_end};
use crate::render::OutputFormat;
use citegen_core::{Book, Style};

/// `Author. Title, Edition. Publisher, Year. DOI.` Author order is
/// `First Last`, never inverted.
pub fn book<F: OutputFormat>(book: &Book, fmt: &F) -> String {
    let authors = format_authors(&book.authors, Style::Chicago);
    let title = collapse_spaces(&book.title);
    let edition = collapse_spaces(&book.edition);
    let imprint = join_nonempty(
        &[collapse_spaces(&book.publisher), collapse_spaces(&book.year)],
        ", ",
    );
    let link = choose_link(&book.doi_or_url);

    let mut parts: Vec<F::Output> = Vec::new();
    if !authors.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&authors)));
    }
    if !title.is_empty() {
        // Italics cover the title only; the edition and its comma
        // follow outside.
        let mut piece = fmt.emph(fmt.text(&title));
        if !edition.is_empty() {
            piece = fmt.join(vec![piece, fmt.text(&edition)], ", ");
        }
        parts.push(fmt.affix("", piece, "."));
    }
    if !imprint.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&imprint)));
    }
    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&ensure_period_end(&link))));
    }
    fmt.finish(fmt.join(parts, " "))
}
