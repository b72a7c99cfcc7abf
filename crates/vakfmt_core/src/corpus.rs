/*
SPDX-License-Identifier: MPL-2.0
*/

//! On-disk corpus format.
//!
//! A corpus is a named collection of `{type, example}` records, as produced
//! by the VAK reference tables and the synthetic generator. The core only
//! owns the in-memory shape; file I/O lives in `vakfmt_processor::io`.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One corpus entry: a category tag and a canonical citation string.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CorpusRecord {
    #[serde(rename = "type")]
    pub category: Category,
    pub example: String,
}

/// A named corpus of citation examples with per-type counts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Corpus {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub total_examples: usize,
    /// Per-type counts, in first-seen order.
    #[serde(default)]
    pub type_distribution: IndexMap<String, usize>,
    #[serde(default)]
    pub examples: Vec<CorpusRecord>,
}

impl Corpus {
    pub fn new(description: impl Into<String>) -> Self {
        Corpus { description: description.into(), ..Default::default() }
    }

    /// Recompute `total_examples` and `type_distribution` from `examples`.
    pub fn tally(&mut self) {
        self.total_examples = self.examples.len();
        let mut distribution: IndexMap<String, usize> = IndexMap::new();
        for record in &self.examples {
            *distribution.entry(record.category.tag().to_string()).or_insert(0) += 1;
        }
        self.type_distribution = distribution;
    }

    /// Counts that disagree between the declared distribution and the
    /// actual examples. Empty means the corpus is consistent.
    pub fn distribution_mismatches(&self) -> Vec<(String, usize, usize)> {
        let mut actual: IndexMap<String, usize> = IndexMap::new();
        for record in &self.examples {
            *actual.entry(record.category.tag().to_string()).or_insert(0) += 1;
        }
        let mut mismatches = Vec::new();
        for (tag, declared) in &self.type_distribution {
            let found = actual.get(tag).copied().unwrap_or(0);
            if found != *declared {
                mismatches.push((tag.clone(), *declared, found));
            }
        }
        for (tag, found) in &actual {
            if !self.type_distribution.contains_key(tag) {
                mismatches.push((tag.clone(), 0, *found));
            }
        }
        mismatches
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tally_and_mismatches() {
        let mut corpus = Corpus::new("test");
        corpus.examples.push(CorpusRecord {
            category: Category::Law,
            example: "О безопасности : Закон Респ. Беларусь".to_string(),
        });
        corpus.examples.push(CorpusRecord {
            category: Category::Law,
            example: "Об образовании : Закон Респ. Беларусь".to_string(),
        });
        corpus.tally();
        assert_eq!(corpus.total_examples, 2);
        assert_eq!(corpus.type_distribution.get("law"), Some(&2));
        assert!(corpus.distribution_mismatches().is_empty());

        corpus.type_distribution.insert("law".to_string(), 3);
        assert_eq!(corpus.distribution_mismatches(), vec![("law".to_string(), 3, 2)]);
    }

    #[test]
    fn test_record_serde_shape() {
        let json = r#"{ "type": "standard", "example": "Общие требования : СТБ 5.1-2017." }"#;
        let record: CorpusRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, Category::Standard);
        let back = serde_json::to_value(&record).unwrap();
        assert_eq!(back["type"], "standard");
    }
}
