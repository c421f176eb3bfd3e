/*
SPDX-License-Identifier: MPL-2.0
*/

//! HTML output format.
//!
//! All user content is escaped on the way in via [`escape_html`];
//! quoted segments use curly quotes, and links open in a new tab.

use super::format::OutputFormat;

/// Escape `&`, `<`, `>`, `"`, and `'` for safe HTML interpolation.
///
/// The ampersand is handled first (by matching per character), so
/// already-escaped input never double-escapes.
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Default, Clone)]
pub struct Html;

impl OutputFormat for Html {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        escape_html(s)
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn affix(&self, prefix: &str, content: Self::Output, suffix: &str) -> Self::Output {
        format!("{}{}{}", prefix, content, suffix)
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("<i>{}</i>", content)
    }

    fn quote(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("\u{201C}{}\u{201D}", content)
    }

    fn link(&self, url: &str, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!(
            r#"<a href="{}" target="_blank">{}</a>"#,
            escape_html(url),
            content
        )
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_all_five_characters() {
        assert_eq!(
            escape_html(r#"Tom & Jerry's <"fight">"#),
            "Tom &amp; Jerry&#39;s &lt;&quot;fight&quot;&gt;"
        );
    }

    #[test]
    fn escaping_does_not_double_escape_per_character() {
        assert_eq!(escape_html("&amp;"), "&amp;amp;");
        assert_eq!(escape_html("a & b"), "a &amp; b");
    }

    #[test]
    fn emph_wraps_in_italics() {
        let fmt = Html;
        assert_eq!(fmt.emph(fmt.text("Nature & Co")), "<i>Nature &amp; Co</i>");
        assert_eq!(fmt.emph(String::new()), "");
    }

    #[test]
    fn quotes_are_curly() {
        let fmt = Html;
        assert_eq!(
            fmt.quote(fmt.text("Quantum Basics.")),
            "\u{201C}Quantum Basics.\u{201D}"
        );
    }

    #[test]
    fn links_escape_href_and_open_in_new_tab() {
        let fmt = Html;
        assert_eq!(
            fmt.link("https://example.org/?a=1&b=2", fmt.text("label")),
            r#"<a href="https://example.org/?a=1&amp;b=2" target="_blank">label</a>"#
        );
    }
}
