/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation style tags.

#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A named set of citation formatting rules.
///
/// The wire tags are the lowercase forms: `mla9`, `apa7`, `chicago`,
/// `harvard`, `ieee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum Style {
    /// MLA, 9th edition.
    Mla9,
    /// APA, 7th edition.
    Apa7,
    /// Chicago (author order `First Last`; website and journal sources
    /// fall back to the MLA layouts).
    Chicago,
    /// Harvard (website and journal sources fall back to the MLA layouts).
    Harvard,
    /// IEEE (all authors listed, never truncated to "et al.").
    Ieee,
}

impl Style {
    /// All supported styles, in display order.
    pub const ALL: [Style; 5] = [
        Style::Mla9,
        Style::Apa7,
        Style::Chicago,
        Style::Harvard,
        Style::Ieee,
    ];

    /// Look up a style by its wire tag.
    ///
    /// Returns `None` for unknown tags; the processor maps that to its
    /// unsupported-style error.
    pub fn from_tag(tag: &str) -> Option<Style> {
        match tag {
            "mla9" => Some(Style::Mla9),
            "apa7" => Some(Style::Apa7),
            "chicago" => Some(Style::Chicago),
            "harvard" => Some(Style::Harvard),
            "ieee" => Some(Style::Ieee),
            _ => None,
        }
    }

    /// The wire tag for this style.
    pub fn as_tag(&self) -> &'static str {
        match self {
            Style::Mla9 => "mla9",
            Style::Apa7 => "apa7",
            Style::Chicago => "chicago",
            Style::Harvard => "harvard",
            Style::Ieee => "ieee",
        }
    }
}

impl fmt::Display for Style {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}
