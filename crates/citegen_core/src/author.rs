//! Parsed author names.

/// An author name split into first/last components.
///
/// Derived by the processor's name parser from a raw string; never
/// persisted, immutable once parsed. A single-token name ends up in
/// `first` with an empty `last`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub first: String,
    pub last: String,
}

impl Author {
    pub fn new(first: impl Into<String>, last: impl Into<String>) -> Author {
        Author {
            first: first.into(),
            last: last.into(),
        }
    }

    /// True when both components are empty; such entries are dropped
    /// before author-list counting.
    pub fn is_empty(&self) -> bool {
        self.first.is_empty() && self.last.is_empty()
    }
}
