/*
SPDX-License-Identifier: MPL-2.0
*/

//! Plain text output format.

use super::format::OutputFormat;

#[derive(Default, Clone)]
pub struct PlainText;

impl OutputFormat for PlainText {
    type Output = String;

    fn text(&self, s: &str) -> Self::Output {
        s.to_string()
    }

    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output {
        items.join(delimiter)
    }

    fn affix(&self, prefix: &str, content: Self::Output, suffix: &str) -> Self::Output {
        format!("{}{}{}", prefix, content, suffix)
    }

    fn emph(&self, content: Self::Output) -> Self::Output {
        // Citation text carries no markup; emphasis is a no-op.
        content
    }

    fn quote(&self, content: Self::Output) -> Self::Output {
        if content.is_empty() {
            return content;
        }
        format!("\"{}\"", content)
    }

    fn link(&self, _url: &str, content: Self::Output) -> Self::Output {
        // Plain text renders only the link's text content.
        content
    }

    fn finish(&self, output: Self::Output) -> String {
        output
    }
}
