/*
SPDX-License-Identifier: MPL-2.0
*/

//! APA 7th-edition builders.
//!
//! APA keeps its `(n.d.)` sentinel for an unknown publish date, where
//! MLA drops the segment instead.

use crate::authors::format_authors;
use crate::normalize::{
    choose_link, collapse_spaces, ensure_period_end, format_date, format_pages, DateOrder,
};
use crate::render::OutputFormat;
use citegen_core::{Book, Journal, Style, Website};

/// `Author (Year).`, degrading to `(Year).` with no authors.
fn head<F: OutputFormat>(authors: &str, dated: &str, fmt: &F) -> Option<F::Output> {
    if authors.is_empty() && dated.is_empty() {
        return None;
    }
    let head = if authors.is_empty() {
        format!("({}).", dated)
    } else {
        format!("{} ({}).", authors, dated)
    };
    Some(fmt.text(&head))
}

/// `Author (Year). Title (Edition). Publisher. DOI.`
pub fn book<F: OutputFormat>(book: &Book, fmt: &F) -> String {
    let authors = format_authors(&book.authors, Style::Apa7);
    let title = collapse_spaces(&book.title);
    let edition = collapse_spaces(&book.edition);
    let publisher = collapse_spaces(&book.publisher);
    let year = collapse_spaces(&book.year);
    let link = choose_link(&book.doi_or_url);

    let mut parts: Vec<F::Output> = Vec::new();
    if let Some(lead) = head(&authors, &year, fmt) {
        parts.push(lead);
    }
    if !title.is_empty() {
        // Italics cover the title only; the edition parenthetical and
        // the closing period stay outside.
        let mut piece: Vec<F::Output> = vec![fmt.emph(fmt.text(&title))];
        if !edition.is_empty() {
            piece.push(fmt.text(&format!("({})", edition)));
        }
        parts.push(fmt.affix("", fmt.join(piece, " "), "."));
    }
    if !publisher.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&publisher)));
    }
    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&ensure_period_end(&link))));
    }
    fmt.finish(fmt.join(parts, " "))
}

/// `Author (PublishDate). PageTitle. WebsiteName. Publisher. URL
/// (Accessed AccessDate)`, with no terminal period after the URL block.
pub fn website<F: OutputFormat>(site: &Website, fmt: &F) -> String {
    let authors = format_authors(&site.authors, Style::Apa7);
    let page_title = collapse_spaces(&site.page_title);
    let website_name = collapse_spaces(&site.website_name);
    let publisher = collapse_spaces(&site.publisher);
    let url = collapse_spaces(&site.url);
    let published = format_date(&site.publish_date, DateOrder::MonthDayYear);
    let accessed = format_date(&site.access_date, DateOrder::MonthDayYear);

    let mut parts: Vec<F::Output> = Vec::new();
    if let Some(lead) = head(&authors, &published, fmt) {
        parts.push(lead);
    }
    if !page_title.is_empty() {
        parts.push(fmt.text(&format!("{}.", page_title)));
    }
    if !website_name.is_empty() {
        parts.push(fmt.affix("", fmt.emph(fmt.text(&website_name)), "."));
    }
    if !publisher.is_empty() {
        parts.push(fmt.text(&format!("{}.", publisher)));
    }
    if !url.is_empty() {
        parts.push(fmt.link(&url, fmt.text(&url)));
    }
    parts.push(fmt.text(&format!("(Accessed {})", accessed)));
    fmt.finish(fmt.join(parts, " "))
}

/// `Author (Year). ArticleTitle. JournalName, Volume(Issue), Pages.
/// DOI`. The issue hugs the volume with no space.
pub fn journal<F: OutputFormat>(article: &Journal, fmt: &F) -> String {
    let authors = format_authors(&article.authors, Style::Apa7);
    let article_title = collapse_spaces(&article.article_title);
    let journal_name = collapse_spaces(&article.journal_name);
    let volume = collapse_spaces(&article.volume);
    let issue = collapse_spaces(&article.issue);
    let year = collapse_spaces(&article.year);
    let pages = format_pages(&article.pages);
    let link = choose_link(&article.doi_or_url);

    let mut parts: Vec<F::Output> = Vec::new();
    if let Some(lead) = head(&authors, &year, fmt) {
        parts.push(lead);
    }
    if !article_title.is_empty() {
        parts.push(fmt.text(&format!("{}.", article_title)));
    }

    let vol_issue = if issue.is_empty() {
        volume.clone()
    } else if volume.is_empty() {
        format!("({})", issue)
    } else {
        format!("{}({})", volume, issue)
    };

    let mut segment: Vec<F::Output> = Vec::new();
    if !journal_name.is_empty() {
        segment.push(fmt.emph(fmt.text(&journal_name)));
    }
    if !vol_issue.is_empty() {
        segment.push(fmt.text(&vol_issue));
    }
    if !pages.is_empty() {
        segment.push(fmt.text(&pages));
    }
    if !segment.is_empty() {
        parts.push(fmt.affix("", fmt.join(segment, ", "), "."));
    }

    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&link)));
    }
    fmt.finish(fmt.join(parts, " "))
}
