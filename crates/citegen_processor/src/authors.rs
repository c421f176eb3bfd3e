/*
SPDX-License-Identifier: MPL-2.0
*/

//! Name parsing and per-style author-list rendering.
//!
//! A raw name string is split into first/last components; the list
//! renderer then applies each style's 1/2/3+ rules. IEEE is the odd
//! one out: it lists every author and never truncates to "et al.".

use crate::normalize::collapse_spaces;
use citegen_core::{Author, Style};

/// Parse a raw name string into an [`Author`].
///
/// `"Last, First"` splits on the first comma; `"First Middle Last"`
/// takes the final token as the last name. A single-token name is all
/// `first`.
pub fn parse_author(input: &str) -> Author {
    let s = collapse_spaces(input);
    if s.is_empty() {
        return Author::default();
    }
    if let Some((last, rest)) = s.split_once(',') {
        return Author::new(collapse_spaces(rest), collapse_spaces(last));
    }
    match s.rsplit_once(' ') {
        Some((first, last)) => Author::new(first, last),
        None => Author::new(s, ""),
    }
}

/// Render an ordered list of raw author names for `style`.
///
/// Entries that parse to nothing are dropped before counting; an empty
/// list renders as an empty string.
pub fn format_authors(authors: &[String], style: Style) -> String {
    let parsed: Vec<Author> = authors
        .iter()
        .map(|raw| parse_author(raw))
        .filter(|author| !author.is_empty())
        .collect();
    if parsed.is_empty() {
        return String::new();
    }

    match style {
        Style::Mla9 => mla_list(&parsed),
        Style::Apa7 => apa_list(&parsed),
        Style::Chicago => chicago_list(&parsed),
        Style::Harvard => harvard_list(&parsed),
        Style::Ieee => ieee_list(&parsed),
    }
}

/// Uppercased first initial of the first name, or empty.
fn first_initial(author: &Author) -> String {
    author
        .first
        .chars()
        .next()
        .map(|c| c.to_uppercase().to_string())
        .unwrap_or_default()
}

/// `Last, F.`, the inverted-initial form APA and Harvard lead with.
/// Without a first name this degrades to the bare last name.
fn inverted_initialed(author: &Author) -> String {
    let initial = first_initial(author);
    if initial.is_empty() {
        author.last.clone()
    } else if author.last.is_empty() {
        format!("{}.", initial)
    } else {
        format!("{}, {}.", author.last, initial)
    }
}

/// `F. Last`, the natural-order initial form.
fn natural_initialed(author: &Author) -> String {
    let initial = first_initial(author);
    if initial.is_empty() {
        author.last.clone()
    } else if author.last.is_empty() {
        format!("{}.", initial)
    } else {
        format!("{}. {}", initial, author.last)
    }
}

/// `First Last`, omitting whichever component is empty.
fn natural_full(author: &Author) -> String {
    match (author.first.is_empty(), author.last.is_empty()) {
        (false, false) => format!("{} {}", author.first, author.last),
        (false, true) => author.first.clone(),
        (true, _) => author.last.clone(),
    }
}

/// The MLA lead author: `Last, First`, falling back to the first name
/// as head for single-token names, with the trailing comma stripped
/// when there is no first name.
fn mla_lead(author: &Author) -> String {
    let head = if author.last.is_empty() {
        &author.first
    } else {
        &author.last
    };
    if author.first.is_empty() {
        head.clone()
    } else {
        format!("{}, {}", head, author.first)
    }
}

fn mla_list(parsed: &[Author]) -> String {
    let lead = mla_lead(&parsed[0]);
    match parsed.len() {
        1 => lead,
        2 => format!("{}, and {}", lead, natural_full(&parsed[1])),
        _ => format!("{}, et al.", lead),
    }
}

fn apa_list(parsed: &[Author]) -> String {
    let lead = inverted_initialed(&parsed[0]);
    match parsed.len() {
        1 => lead,
        2 => format!("{}, & {}", lead, natural_initialed(&parsed[1])),
        _ => format!("{}, et al.", lead),
    }
}

fn chicago_list(parsed: &[Author]) -> String {
    let lead = natural_full(&parsed[0]);
    match parsed.len() {
        1 => lead,
        2 => format!("{} and {}", lead, natural_full(&parsed[1])),
        _ => format!("{} et al.", lead),
    }
}

fn harvard_list(parsed: &[Author]) -> String {
    let lead = inverted_initialed(&parsed[0]);
    match parsed.len() {
        1 => lead,
        2 => format!("{} and {}", lead, natural_initialed(&parsed[1])),
        _ => format!("{} et al.", lead),
    }
}

fn ieee_list(parsed: &[Author]) -> String {
    parsed
        .iter()
        .map(natural_initialed)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn parse_comma_form() {
        assert_eq!(parse_author("Smith, John"), Author::new("John", "Smith"));
        assert_eq!(
            parse_author("  Smith ,  John  Q. "),
            Author::new("John Q.", "Smith")
        );
    }

    #[test]
    fn parse_space_form() {
        assert_eq!(parse_author("John Smith"), Author::new("John", "Smith"));
        assert_eq!(
            parse_author("John Quincy Smith"),
            Author::new("John Quincy", "Smith")
        );
    }

    #[test]
    fn parse_single_token_and_empty() {
        assert_eq!(parse_author("Plato"), Author::new("Plato", ""));
        assert_eq!(parse_author("   "), Author::default());
        assert_eq!(parse_author(""), Author::default());
    }

    #[test]
    fn mla_counts() {
        assert_eq!(format_authors(&names(&["Smith, John"]), Style::Mla9), "Smith, John");
        assert_eq!(
            format_authors(&names(&["Smith, John", "Jane Doe"]), Style::Mla9),
            "Smith, John, and Jane Doe"
        );
        assert_eq!(
            format_authors(&names(&["Smith, John", "Jane Doe", "Ann Lee"]), Style::Mla9),
            "Smith, John, et al."
        );
    }

    #[test]
    fn mla_single_token_name_doubles_as_head() {
        // The lead slot falls back to the first name as head, so a
        // mononym renders with itself on both sides of the comma.
        assert_eq!(format_authors(&names(&["Plato"]), Style::Mla9), "Plato, Plato");
    }

    #[test]
    fn apa_counts() {
        assert_eq!(format_authors(&names(&["Jane Doe"]), Style::Apa7), "Doe, J.");
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith"]), Style::Apa7),
            "Doe, J., & J. Smith"
        );
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith", "Ann Lee"]), Style::Apa7),
            "Doe, J., et al."
        );
    }

    #[test]
    fn chicago_counts() {
        assert_eq!(
            format_authors(&names(&["Doe, Jane"]), Style::Chicago),
            "Jane Doe"
        );
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith"]), Style::Chicago),
            "Jane Doe and John Smith"
        );
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith", "Ann Lee"]), Style::Chicago),
            "Jane Doe et al."
        );
    }

    #[test]
    fn harvard_counts() {
        assert_eq!(
            format_authors(&names(&["Jane Doe"]), Style::Harvard),
            "Doe, J."
        );
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith"]), Style::Harvard),
            "Doe, J. and J. Smith"
        );
        assert_eq!(
            format_authors(&names(&["Jane Doe", "John Smith", "Ann Lee"]), Style::Harvard),
            "Doe, J. et al."
        );
    }

    #[test]
    fn ieee_lists_every_author() {
        let four = names(&["Jane Doe", "John Smith", "Ann Lee", "Bob Ray"]);
        assert_eq!(
            format_authors(&four, Style::Ieee),
            "J. Doe, J. Smith, A. Lee, B. Ray"
        );
    }

    #[test]
    fn blank_entries_are_dropped_before_counting() {
        assert_eq!(
            format_authors(&names(&["", "   ", "Doe, Jane"]), Style::Mla9),
            "Doe, Jane"
        );
        assert_eq!(format_authors(&names(&["", "  "]), Style::Apa7), "");
        assert_eq!(format_authors(&[], Style::Ieee), "");
    }

    #[test]
    fn initials_are_uppercased() {
        assert_eq!(
            format_authors(&names(&["ada Lovelace"]), Style::Apa7),
            "Lovelace, A."
        );
    }
}
