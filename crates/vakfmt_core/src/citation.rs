/*
SPDX-License-Identifier: MPL-2.0
*/

//! Citation input model.
//!
//! The pipeline accepts either a raw citation string or a structured
//! record. Field absence (`None`) is distinct from an empty string:
//! nothing in the pipeline defaults a missing field to `""`.

use serde::{Deserialize, Serialize};

use crate::category::Category;

/// A citation to process: free text, or an already-structured record.
///
/// Serialized form is untagged, so a JSON array may freely mix plain
/// strings and record objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Citation {
    Text(String),
    Record(SourceRecord),
}

impl Citation {
    pub fn text(s: impl Into<String>) -> Self {
        Citation::Text(s.into())
    }
}

impl From<&str> for Citation {
    fn from(s: &str) -> Self {
        Citation::Text(s.to_string())
    }
}

/// A structured bibliographic source.
///
/// All fields except `authors` are optional; `authors` defaults to empty.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SourceRecord {
    /// Category hint, if the caller already knows it.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub authors: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    /// Page count ("415") or page range ("88–91").
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pages: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub journal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untagged_mix_of_strings_and_records() {
        let json = r#"[
            "Иванов, А. А. Основы экономики / А. А. Иванов. – Минск : БДУ, 2020. – 200 с.",
            { "type": "journal_article", "title": "Анализ данных", "year": 2021 }
        ]"#;
        let citations: Vec<Citation> = serde_json::from_str(json).unwrap();
        assert_eq!(citations.len(), 2);
        assert!(matches!(citations[0], Citation::Text(_)));
        match &citations[1] {
            Citation::Record(r) => {
                assert_eq!(r.category, Some(Category::JournalArticle));
                assert_eq!(r.year, Some(2021));
                assert!(r.publisher.is_none());
            }
            _ => panic!("expected a record"),
        }
    }

    #[test]
    fn test_absent_field_is_none_not_empty() {
        let record: SourceRecord = serde_json::from_str(r#"{ "title": "X" }"#).unwrap();
        assert_eq!(record.title.as_deref(), Some("X"));
        assert_eq!(record.city, None);
        assert!(record.authors.is_empty());
    }
}
