/*
SPDX-License-Identifier: MPL-2.0
*/

//! Pipeline orchestrator.
//!
//! Composes classify → extract → render → normalize → validate into the
//! single public entry point. Every component is a pure function over
//! immutable input, so a batch is an embarrassingly parallel map: with the
//! `par` feature, `process_all` fans out over rayon while preserving input
//! order. Batch statistics are an explicit return value, never process
//! globals.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use vakfmt_core::{Category, Citation, ExtractedFields, FieldKind, Issue};

use crate::classify::Classifier;
use crate::extract::Extractor;
use crate::normalize::Normalizer;
use crate::render::render;

/// Confidence floor: no result drops below this.
pub const CONFIDENCE_FLOOR: u8 = 30;
/// Named penalties for the confidence score.
const PENALTY_MISSING_AUTHOR: u8 = 20;
const PENALTY_MISSING_TITLE: u8 = 30;
const PENALTY_MISSING_YEAR: u8 = 10;

/// The result of processing one citation. Always produced; failure modes
/// are `issues`, not errors.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Outcome {
    pub category: Category,
    pub fields: ExtractedFields,
    pub formatted: String,
    pub confidence: u8,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub issues: Vec<Issue>,
}

/// The citation pipeline. Stateless; one instance serves any number of
/// concurrent callers.
#[derive(Default)]
pub struct Pipeline {
    classifier: Classifier,
    extractor: Extractor,
    normalizer: Normalizer,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    pub fn classifier(&self) -> &Classifier {
        &self.classifier
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    /// Process one citation: classify, extract, render the canonical
    /// string, normalize it, and score the result.
    pub fn process(&self, citation: &Citation) -> Outcome {
        let (category, fields) = match citation {
            Citation::Text(text) => {
                let (category, rule) = self.classifier.classify_detailed(text);
                debug!(?rule, %category, "processing free-text citation");
                (category, self.extractor.extract(text))
            }
            Citation::Record(record) => {
                let fields = ExtractedFields::from(record);
                let category = record.category.unwrap_or_else(|| infer_category(&fields));
                (category, fields)
            }
        };

        let mut issues = Vec::new();
        if category == Category::Unknown {
            issues.push(Issue::UnrecognizedType);
        }
        for kind in [FieldKind::Authors, FieldKind::Title, FieldKind::Year] {
            if !fields.found(kind) {
                issues.push(Issue::FieldNotFound { field: kind });
            }
        }

        let draft = render(category, &fields);
        issues.extend(draft.issues);

        // The draft is assembled from canonical joiners, but slot values
        // come straight from arbitrary source text: normalize regardless.
        let normalized = self.normalizer.apply(&draft.text);
        issues.extend(normalized.issues);

        let confidence = confidence(category, &fields);

        Outcome { category, fields, formatted: normalized.text, confidence, issues }
    }

    /// Process a batch. Order-preserving; items are independent.
    #[cfg(feature = "par")]
    pub fn process_all(&self, citations: &[Citation]) -> Vec<Outcome> {
        use rayon::prelude::*;
        citations.par_iter().map(|c| self.process(c)).collect()
    }

    /// Process a batch. Order-preserving; items are independent.
    #[cfg(not(feature = "par"))]
    pub fn process_all(&self, citations: &[Citation]) -> Vec<Outcome> {
        citations.iter().map(|c| self.process(c)).collect()
    }
}

/// Completeness score. `Unknown` means no classification signal at all,
/// which drops straight to the floor; otherwise named penalties apply.
fn confidence(category: Category, fields: &ExtractedFields) -> u8 {
    if category == Category::Unknown {
        return CONFIDENCE_FLOOR;
    }
    let mut penalty = 0u8;
    if !fields.found(FieldKind::Authors) {
        penalty += PENALTY_MISSING_AUTHOR;
    }
    if !fields.found(FieldKind::Title) {
        penalty += PENALTY_MISSING_TITLE;
    }
    if !fields.found(FieldKind::Year) {
        penalty += PENALTY_MISSING_YEAR;
    }
    (100 - penalty).max(CONFIDENCE_FLOOR)
}

/// Category for a structured record that carries no explicit tag.
fn infer_category(fields: &ExtractedFields) -> Category {
    if fields.journal.is_some() {
        Category::JournalArticle
    } else if fields.url.is_some() {
        Category::ElectronicResource
    } else if fields.authors.len() >= 4 {
        Category::BookManyAuthors
    } else if !fields.authors.is_empty() {
        Category::BookFewAuthors
    } else {
        Category::Unknown
    }
}

/// Per-batch statistics, computed from outcomes rather than accumulated
/// in shared state.
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchStats {
    pub total: usize,
    pub by_category: IndexMap<Category, usize>,
    pub mean_confidence: f64,
    pub with_issues: usize,
}

pub fn batch_stats(outcomes: &[Outcome]) -> BatchStats {
    let mut by_category: IndexMap<Category, usize> = IndexMap::new();
    let mut with_issues = 0;
    let mut confidence_sum = 0u64;
    for outcome in outcomes {
        *by_category.entry(outcome.category).or_insert(0) += 1;
        if !outcome.issues.is_empty() {
            with_issues += 1;
        }
        confidence_sum += u64::from(outcome.confidence);
    }
    let mean_confidence = if outcomes.is_empty() {
        0.0
    } else {
        confidence_sum as f64 / outcomes.len() as f64
    };
    BatchStats { total: outcomes.len(), by_category, mean_confidence, with_issues }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vakfmt_core::SourceRecord;

    #[test]
    fn test_confidence_penalties() {
        let full = ExtractedFields {
            authors: vec!["Иванов, А. А.".to_string()],
            title: Some("Название".to_string()),
            year: Some(2020),
            ..Default::default()
        };
        assert_eq!(confidence(Category::BookFewAuthors, &full), 100);

        let mut no_year = full.clone();
        no_year.year = None;
        assert_eq!(confidence(Category::BookFewAuthors, &no_year), 90);

        let mut no_title = full.clone();
        no_title.title = None;
        assert_eq!(confidence(Category::BookFewAuthors, &no_title), 70);

        let bare = ExtractedFields::default();
        assert_eq!(confidence(Category::Law, &bare), 40);
        assert_eq!(confidence(Category::Unknown, &bare), CONFIDENCE_FLOOR);
    }

    #[test]
    fn test_record_with_explicit_category() {
        let pipeline = Pipeline::new();
        let record = SourceRecord {
            category: Some(Category::JournalArticle),
            authors: vec!["Иванов, А. А.".to_string()],
            title: Some("Анализ данных".to_string()),
            journal: Some("Вестник БГУ".to_string()),
            year: Some(2021),
            issue: Some("4".to_string()),
            pages: Some("10–18".to_string()),
            ..Default::default()
        };
        let outcome = pipeline.process(&Citation::Record(record));
        assert_eq!(outcome.category, Category::JournalArticle);
        assert_eq!(
            outcome.formatted,
            "Иванов, А. А. Анализ данных / А. А. Иванов // Вестник БГУ. – 2021. – \
             № 4. – С. 10–18."
        );
        assert_eq!(outcome.confidence, 100);
    }

    #[test]
    fn test_record_infers_category_from_fields() {
        let pipeline = Pipeline::new();
        let record = SourceRecord {
            title: Some("Портал".to_string()),
            url: Some("http://example.by".to_string()),
            ..Default::default()
        };
        let outcome = pipeline.process(&Citation::Record(record));
        assert_eq!(outcome.category, Category::ElectronicResource);
    }

    #[test]
    fn test_record_output_is_normalized() {
        // Collaborator output is never trusted to be normalized already.
        let pipeline = Pipeline::new();
        let record = SourceRecord {
            category: Some(Category::BookFewAuthors),
            authors: vec!["Иванов, А. А.".to_string()],
            title: Some("Основы  экономики".to_string()),
            city: Some("Минск".to_string()),
            publisher: Some("БДУ".to_string()),
            year: Some(2020),
            pages: Some("45 – 52".to_string()),
            ..Default::default()
        };
        let outcome = pipeline.process(&Citation::Record(record));
        assert!(outcome.formatted.contains("Основы экономики"));
        assert!(outcome.formatted.contains("С. 45–52"));
    }

    #[test]
    fn test_batch_preserves_order() {
        let pipeline = Pipeline::new();
        let citations: Vec<Citation> = vec![
            Citation::text("Гражданский кодекс Республики Беларусь."),
            Citation::text("Романсы [Ноты] : для фортепиано."),
        ];
        let outcomes = pipeline.process_all(&citations);
        assert_eq!(outcomes.len(), 2);
        assert_eq!(outcomes[0].category, Category::Law);
        assert_eq!(outcomes[1].category, Category::MusicScore);
    }

    #[test]
    fn test_batch_stats() {
        let pipeline = Pipeline::new();
        let citations: Vec<Citation> = vec![
            Citation::text("Гражданский кодекс Республики Беларусь."),
            Citation::text("Уголовный кодекс Республики Беларусь."),
            Citation::text("просто текст"),
        ];
        let outcomes = pipeline.process_all(&citations);
        let stats = batch_stats(&outcomes);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_category.get(&Category::Law), Some(&2));
        assert_eq!(stats.by_category.get(&Category::Unknown), Some(&1));
        assert!(stats.mean_confidence > 0.0);
    }
}
