/*
SPDX-License-Identifier: MPL-2.0
*/

//! Field normalizers.
//!
//! Small pure helpers that massage raw field values before the style
//! builders compose them: whitespace collapsing, date and page-range
//! formatting, DOI/URL canonicalization, and terminal punctuation.

use lazy_static::lazy_static;
use regex::Regex;

/// The sentinel rendered for an absent or unparseable date.
pub const NO_DATE: &str = "n.d.";

lazy_static! {
    /// Two integers around a hyphen, with optional surrounding spaces.
    static ref PAGE_RANGE: Regex = Regex::new(r"\d+\s*-\s*\d+").unwrap();
    /// Any embedded integer.
    static ref PAGE_NUMBER: Regex = Regex::new(r"\d+").unwrap();
}

/// Trim and collapse internal whitespace runs to single spaces.
pub fn collapse_spaces(input: &str) -> String {
    input.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Which way a fully-specified date reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateOrder {
    /// `27 May 2024`, as MLA and the styles reusing its layouts read.
    DayMonthYear,
    /// `May 27, 2024`, as APA reads.
    MonthDayYear,
}

/// English month abbreviation, 1-based.
///
/// May, June, and July are left unabbreviated. Out-of-range months
/// yield an empty string.
pub fn month_abbrev(month: u32) -> &'static str {
    match month {
        1 => "Jan.",
        2 => "Feb.",
        3 => "Mar.",
        4 => "Apr.",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "Aug.",
        9 => "Sept.",
        10 => "Oct.",
        11 => "Nov.",
        12 => "Dec.",
        _ => "",
    }
}

/// Format an ISO-like date string (`YYYY[-MM[-DD]]`) for display.
///
/// Empty or unparseable input renders the [`NO_DATE`] sentinel. Zero
/// or out-of-range components are treated as absent, so `2024-13`
/// falls back to the year alone.
pub fn format_date(value: &str, order: DateOrder) -> String {
    let s = collapse_spaces(value);
    if s.is_empty() {
        return NO_DATE.to_string();
    }

    let mut components = s.split('-').map(|part| part.trim().parse::<u32>().ok());
    let year = match components.next().flatten() {
        Some(y) if y > 0 => y,
        _ => return NO_DATE.to_string(),
    };
    let month = components.next().flatten().filter(|m| (1..=12).contains(m));
    let day = components.next().flatten().filter(|&d| d > 0);

    match (month, day) {
        (Some(m), Some(d)) => match order {
            DateOrder::DayMonthYear => format!("{} {} {}", d, month_abbrev(m), year),
            DateOrder::MonthDayYear => format!("{} {}, {}", month_abbrev(m), d, year),
        },
        (Some(m), None) => format!("{} {}", month_abbrev(m), year),
        _ => year.to_string(),
    }
}

/// Format a page value: a range becomes `pp. 123-145`, a single page
/// `p. 7`, anything without digits passes through collapsed.
pub fn format_pages(pages: &str) -> String {
    let s = collapse_spaces(pages);
    if s.is_empty() {
        return String::new();
    }
    let squeezed: String = s.chars().filter(|c| !c.is_whitespace()).collect();
    if PAGE_RANGE.is_match(&s) {
        format!("pp. {}", squeezed)
    } else if PAGE_NUMBER.is_match(&s) {
        format!("p. {}", squeezed)
    } else {
        s
    }
}

/// Canonicalize a DOI-or-URL field into a linkable value.
///
/// Bare DOIs (`10.…`) and `doi:`-prefixed values become
/// `https://doi.org/…`; anything else is assumed to already be a URL
/// and passes through verbatim.
pub fn choose_link(doi_or_url: &str) -> String {
    let s = collapse_spaces(doi_or_url);
    if s.is_empty() {
        return String::new();
    }
    if s.starts_with("10.") {
        return format!("https://doi.org/{}", s);
    }
    if let Some(prefix) = s.get(..4) {
        if prefix.eq_ignore_ascii_case("doi:") {
            return format!("https://doi.org/{}", &s[4..]);
        }
    }
    s
}

/// Collapse and terminate with a period, unless the value already ends
/// in `.`, `!`, or `?`. Empty stays empty.
pub fn ensure_period_end(input: &str) -> String {
    let s = collapse_spaces(input);
    if s.is_empty() || s.ends_with(['.', '!', '?']) {
        s
    } else {
        format!("{}.", s)
    }
}
