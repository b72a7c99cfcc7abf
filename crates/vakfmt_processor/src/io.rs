/*
SPDX-License-Identifier: MPL-2.0
*/

//! Loading and saving citations and corpora.
//!
//! The core pipeline does not own file formats beyond the in-memory
//! shapes; these helpers dispatch on the file extension and check syntax
//! before the typed parse so format errors point at the right layer.

use std::fs;
use std::path::Path;

use vakfmt_core::{Citation, Corpus};

use crate::error::ProcessorError;

/// Load a list of citations from a JSON or YAML file.
///
/// Accepts an array (strings and records may be mixed) or a single
/// citation.
pub fn load_citations(path: &Path) -> Result<Vec<Citation>, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            // Check for syntax errors first
            let _: serde_yaml::Value = serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::Parse("YAML".to_string(), e.to_string()))?;

            if let Ok(citations) = serde_yaml::from_str::<Vec<Citation>>(&content) {
                return Ok(citations);
            }
            match serde_yaml::from_str::<Citation>(&content) {
                Ok(citation) => Ok(vec![citation]),
                Err(e) => Err(ProcessorError::Parse("YAML".to_string(), e.to_string())),
            }
        }
        _ => {
            // Check for syntax errors first
            let _: serde_json::Value = serde_json::from_slice(&bytes)
                .map_err(|e| ProcessorError::Parse("JSON".to_string(), e.to_string()))?;

            if let Ok(citations) = serde_json::from_slice::<Vec<Citation>>(&bytes) {
                return Ok(citations);
            }
            match serde_json::from_slice::<Citation>(&bytes) {
                Ok(citation) => Ok(vec![citation]),
                Err(e) => Err(ProcessorError::Parse("JSON".to_string(), e.to_string())),
            }
        }
    }
}

/// Load a corpus from a JSON or YAML file.
pub fn load_corpus(path: &Path) -> Result<Corpus, ProcessorError> {
    let bytes = fs::read(path)?;
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match ext {
        "yaml" | "yml" => {
            let content = String::from_utf8_lossy(&bytes);
            serde_yaml::from_str(&content)
                .map_err(|e| ProcessorError::Parse("YAML".to_string(), e.to_string()))
        }
        _ => serde_json::from_slice(&bytes)
            .map_err(|e| ProcessorError::Parse("JSON".to_string(), e.to_string())),
    }
}

/// Save a corpus as pretty-printed UTF-8 JSON.
pub fn save_corpus(corpus: &Corpus, path: &Path) -> Result<(), ProcessorError> {
    let json = serde_json::to_string_pretty(corpus)
        .map_err(|e| ProcessorError::Parse("JSON".to_string(), e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
