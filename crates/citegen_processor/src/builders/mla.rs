/*
SPDX-License-Identifier: MPL-2.0
*/

//! MLA 9th-edition builders.
//!
//! These also serve as the website/journal layouts for Chicago,
//! Harvard, and IEEE (see the dispatch table in the parent module).

use super::join_nonempty;
use crate::authors::format_authors;
use crate::normalize::{
    choose_link, collapse_spaces, ensure_period_end, format_date, format_pages, DateOrder, NO_DATE,
};
use crate::render::OutputFormat;
use citegen_core::{Book, Journal, Style, Website};

/// `Author. Title. Edition. Publisher, Year. Link.`
pub fn book<F: OutputFormat>(book: &Book, fmt: &F) -> String {
    let authors = format_authors(&book.authors, Style::Mla9);
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
        // The title's period sits inside the italics.
        parts.push(fmt.emph(fmt.text(&ensure_period_end(&title))));
    }
    if !edition.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&edition)));
    }
    if !imprint.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&imprint)));
    }
    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&ensure_period_end(&link))));
    }
    fmt.finish(fmt.join(parts, " "))
}

/// `Author. "PageTitle." WebsiteName. Publisher. PublishDate. URL.
/// Accessed AccessDate.` The publish date is dropped entirely when
/// it is unknown.
pub fn website<F: OutputFormat>(site: &Website, fmt: &F) -> String {
    let authors = format_authors(&site.authors, Style::Mla9);
    let page_title = collapse_spaces(&site.page_title);
    let website_name = collapse_spaces(&site.website_name);
    let publisher = collapse_spaces(&site.publisher);
    let url = collapse_spaces(&site.url);
    let published = format_date(&site.publish_date, DateOrder::DayMonthYear);
    let accessed = format_date(&site.access_date, DateOrder::DayMonthYear);

    let mut parts: Vec<F::Output> = Vec::new();
    if !authors.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&authors)));
    }
    if !page_title.is_empty() {
        // Period inside the quotation marks.
        parts.push(fmt.quote(fmt.text(&format!("{}.", page_title))));
    }
    if !website_name.is_empty() {
        // Period inside the italics.
        parts.push(fmt.emph(fmt.text(&format!("{}.", website_name))));
    }
    if !publisher.is_empty() {
        parts.push(fmt.text(&format!("{}.", publisher)));
    }
    if published != NO_DATE {
        parts.push(fmt.text(&format!("{}.", published)));
    }
    if !url.is_empty() {
        parts.push(fmt.link(&url, fmt.text(&ensure_period_end(&url))));
    }
    parts.push(fmt.text(&format!("Accessed {}.", accessed)));
    fmt.finish(fmt.join(parts, " "))
}

/// `Author. "ArticleTitle." JournalName, vol. V, no. I, Year,
/// pp. Pages. Link.` The journal segment joins only its non-empty
/// pieces, so a missing page range leaves no trailing comma.
pub fn journal<F: OutputFormat>(article: &Journal, fmt: &F) -> String {
    let authors = format_authors(&article.authors, Style::Mla9);
    let article_title = collapse_spaces(&article.article_title);
    let journal_name = collapse_spaces(&article.journal_name);
    let volume = collapse_spaces(&article.volume);
    let issue = collapse_spaces(&article.issue);
    let year = collapse_spaces(&article.year);
    let pages = format_pages(&article.pages);
    let link = choose_link(&article.doi_or_url);

    let mut parts: Vec<F::Output> = Vec::new();
    if !authors.is_empty() {
        parts.push(fmt.text(&ensure_period_end(&authors)));
    }
    if !article_title.is_empty() {
        parts.push(fmt.quote(fmt.text(&format!("{}.", article_title))));
    }

    let vol_issue = join_nonempty(
        &[
            if volume.is_empty() {
                String::new()
            } else {
                format!("vol. {}", volume)
            },
            if issue.is_empty() {
                String::new()
            } else {
                format!("no. {}", issue)
            },
        ],
        ", ",
    );

    let mut segment: Vec<F::Output> = Vec::new();
    if !journal_name.is_empty() {
        segment.push(fmt.emph(fmt.text(&journal_name)));
    }
    if !vol_issue.is_empty() {
        segment.push(fmt.text(&vol_issue));
    }
    if !year.is_empty() {
        segment.push(fmt.text(&year));
    }
    if !pages.is_empty() {
        segment.push(fmt.text(&pages));
    }
    if !segment.is_empty() {
        parts.push(fmt.affix("", fmt.join(segment, ", "), "."));
    }

    if !link.is_empty() {
        parts.push(fmt.link(&link, fmt.text(&ensure_period_end(&link))));
    }
    fmt.finish(fmt.join(parts, " "))
}
