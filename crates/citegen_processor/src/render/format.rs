/*
SPDX-License-Identifier: MPL-2.0
*/

//! Output format trait for pluggable renderers.

/// Trait for defining how to render citation components into a
/// specific format.
///
/// Implementations define how formatting instructions (emphasis,
/// quotation, links) are translated into markup or plain text.
pub trait OutputFormat: Default + Clone {
    /// The type used for intermediate rendered content.
    ///
    /// For text-like formats this is `String`.
    type Output;

    /// Convert a raw string into the format's output type.
    ///
    /// The implementation handles any character escaping the target
    /// format requires, so every piece of user content must pass
    /// through here exactly once.
    fn text(&self, s: &str) -> Self::Output;

    /// Join multiple outputs into a single output using a delimiter.
    ///
    /// The delimiter is structural punctuation, not user content.
    fn join(&self, items: Vec<Self::Output>, delimiter: &str) -> Self::Output;

    /// Apply raw prefix and suffix strings to the content.
    ///
    /// Like `join`'s delimiter, both affixes are structural and are
    /// emitted unescaped.
    fn affix(&self, prefix: &str, content: Self::Output, suffix: &str) -> Self::Output;

    /// Render content with emphasis (typically italics).
    fn emph(&self, content: Self::Output) -> Self::Output;

    /// Render content enclosed in quotation marks.
    fn quote(&self, content: Self::Output) -> Self::Output;

    /// Hyperlink the content to a URL.
    fn link(&self, url: &str, content: Self::Output) -> Self::Output;

    /// Convert the intermediate output into the final result string.
    ///
    /// Called exactly once at the end of rendering a citation.
    fn finish(&self, output: Self::Output) -> String;
}
