/*
SPDX-License-Identifier: MPL-2.0
*/

use thiserror::Error;

/// Errors produced by the formatting engine and its loading helpers.
///
/// None of these is fatal: every failure is local to one `generate`
/// call and carries no side effects. Validation errors are surfaced
/// verbatim so callers can re-prompt for the missing fields.
#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("validation failed: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("unsupported citation style: {0}")]
    UnsupportedStyle(String),

    #[error("unsupported source type: {0}")]
    UnsupportedType(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    Parse(String, String),
}
