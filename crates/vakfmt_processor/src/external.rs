/*
SPDX-License-Identifier: MPL-2.0
*/

//! Seams for external collaborators.
//!
//! Anything that suspends — a generative model parsing free text, a
//! metadata service resolving a DOI or ISBN — lives behind these traits so
//! the deterministic core stays synchronous and trivially testable. The
//! pipeline treats collaborator output exactly like any other input: it is
//! never trusted to have normalized punctuation already.

use vakfmt_core::{Category, Citation, SourceRecord};

use crate::pipeline::{Outcome, Pipeline};

/// Best-effort structured parsing of text too unstructured for the
/// deterministic extractor. Implementations typically call out to a
/// generative model; none ship with this crate.
pub trait FallbackParser {
    fn parse(&self, text: &str) -> Option<SourceRecord>;
}

/// Metadata lookup by persistent identifier. Implementations typically
/// query a registry over the network; none ship with this crate.
pub trait MetadataSource {
    fn by_doi(&self, doi: &str) -> Option<SourceRecord>;
    fn by_isbn(&self, isbn: &str) -> Option<SourceRecord>;
}

impl Pipeline {
    /// Process free text, consulting `fallback` when the deterministic
    /// classifier finds no signal. The fallback's guess re-enters the
    /// ordinary pipeline, so its output is normalized like any other.
    pub fn process_with_fallback(
        &self,
        text: &str,
        fallback: &dyn FallbackParser,
    ) -> Outcome {
        let outcome = self.process(&Citation::text(text));
        if outcome.category != Category::Unknown {
            return outcome;
        }
        match fallback.parse(text) {
            Some(record) => self.process(&Citation::Record(record)),
            None => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct CannedParser(SourceRecord);

    impl FallbackParser for CannedParser {
        fn parse(&self, _text: &str) -> Option<SourceRecord> {
            Some(self.0.clone())
        }
    }

    #[test]
    fn test_fallback_consulted_only_for_unknown() {
        let pipeline = Pipeline::new();
        let parser = CannedParser(SourceRecord {
            category: Some(Category::BookFewAuthors),
            authors: vec!["Козлов, А. Б.".to_string()],
            title: Some("Искусственный интеллект".to_string()),
            city: Some("Минск".to_string()),
            publisher: Some("БГУ".to_string()),
            year: Some(2022),
            pages: Some("400".to_string()),
            ..Default::default()
        });

        // Unstructured input: the deterministic pass yields Unknown, so the
        // fallback's record wins and is rendered through the normal path.
        let outcome =
            pipeline.process_with_fallback("Козлов А.Б. Искусственный интеллект Минск 2022", &parser);
        assert_eq!(outcome.category, Category::BookFewAuthors);
        assert!(outcome.formatted.contains("– Минск : БГУ, 2022. – 400 с."));

        // Recognizable input: the fallback must not be trusted over the
        // deterministic result.
        let outcome = pipeline
            .process_with_fallback("Гражданский кодекс Республики Беларусь.", &parser);
        assert_eq!(outcome.category, Category::Law);
    }
}
