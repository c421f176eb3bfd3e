/*
SPDX-License-Identifier: MPL-2.0
*/

//! Request loading helpers for the CLI and embedding servers.

use std::fs;
use std::path::Path;

use citegen_core::CitationRequest;

use crate::ProcessorError;

/// Load a citation request from a file.
///
/// Supports JSON and YAML, selected by extension (anything that is
/// not `.json` is treated as YAML).
pub fn load_request(path: &Path) -> Result<CitationRequest, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    match ext {
        "json" => serde_json::from_slice(&bytes)
            .map_err(|e| ProcessorError::Parse("JSON".to_string(), e.to_string())),
        _ => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::Parse("YAML".to_string(), e.to_string()))
        }
    }
}
