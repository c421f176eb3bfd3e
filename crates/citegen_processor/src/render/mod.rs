/*
SPDX-License-Identifier: MPL-2.0
*/

//! Pluggable output formats.
//!
//! The style builders are written once, generically over
//! [`OutputFormat`], and run under both [`PlainText`] and [`Html`] to
//! produce the two halves of a citation result. This keeps exactly one
//! formatting engine for both outputs.

pub mod format;
pub mod html;
pub mod plain;

pub use format::OutputFormat;
pub use html::Html;
pub use plain::PlainText;
