/*
SPDX-License-Identifier: MPL-2.0
*/

//! Field extractor.
//!
//! One targeted pattern per field; extraction failures are independent, so
//! a field the patterns miss stays absent without blocking the others. The
//! source text is never mutated — the extractor only returns values.
//!
//! Character classes include the Belarusian letters І/Ў alongside the
//! Russian ranges; surnames like «Врублеўскі» are first-class in VAK data.

use regex::Regex;
use vakfmt_core::ExtractedFields;

/// Hard cap on extracted authors, to bound pathological input.
const MAX_AUTHORS: usize = 10;

/// The field extractor. Compiles its patterns once; construct via
/// `Default`/`new`.
pub struct Extractor {
    author_inverted: Regex,
    author_direct: Regex,
    year_strict: Regex,
    year_any: Regex,
    title_fallback: Regex,
    pages_count: Regex,
    pages_range: Regex,
    publisher: Regex,
    city: Regex,
    journal: Regex,
    volume: Regex,
    issue: Regex,
    url: Regex,
    access_date: Regex,
    doi: Regex,
}

impl Default for Extractor {
    fn default() -> Self {
        Extractor {
            // «Фамилия, И. О.» — the inverted heading form.
            author_inverted: Regex::new(
                r"([А-ЯЁІЎA-Z][а-яёіўa-z]+),\s*([А-ЯЁІЎA-Z]\.\s*[А-ЯЁІЎA-Z]?\.?)",
            )
            .unwrap(),
            // «И. О. Фамилия» — the direct form after the slash.
            author_direct: Regex::new(
                r"([А-ЯЁІЎA-Z]\.\s*[А-ЯЁІЎA-Z]?\.?)\s+([А-ЯЁІЎA-Z][а-яёіўa-z]+)",
            )
            .unwrap(),
            // A year in imprint position: preceded by a separator, followed
            // by a terminator. Disambiguates the publication year from
            // document numbers.
            year_strict: Regex::new(r"[,–—]\s*(19[5-9]\d|20[0-2]\d)\s*[.–—]").unwrap(),
            year_any: Regex::new(r"\b(19[5-9]\d|20[0-2]\d)\b").unwrap(),
            // For author-less records (laws, standards): title runs up to
            // the first colon.
            title_fallback: Regex::new(r"^([^:]+):").unwrap(),
            pages_count: Regex::new(r"[–—]\s*(\d+)\s*[сcp]\.").unwrap(),
            pages_range: Regex::new(r"[СC]\.\s*(\d+[–—-]\d+)").unwrap(),
            publisher: Regex::new(r"[–—]\s*[А-ЯЁІЎA-Za-zа-яёіў]+\s*:\s*([^,]+?),").unwrap(),
            city: Regex::new(r"[–—]\s*([А-ЯЁІЎ][а-яёіў]+(?:\s*;\s*[А-ЯЁІЎ][а-яёіў]+)?)\s*:")
                .unwrap(),
            // Journal: between «//» and the sentence terminator «. –» (or
            // end of string); abbreviated names keep their inner periods.
            journal: Regex::new(r"//\s*(.+?)\.\s*[–—]").unwrap(),
            volume: Regex::new(r"\b(?:[ТT]|Vol)\.?\s*(\d+)").unwrap(),
            issue: Regex::new(r"(?:№|\bN[оo]?\.)\s*(\d+)").unwrap(),
            url: Regex::new(r#"(https?://[^\s<>"]+)"#).unwrap(),
            access_date: Regex::new(r"(?i)дата\s+(?:обращения|доступа)[:\s]*(\d{2}\.\d{2}\.\d{4})")
                .unwrap(),
            doi: Regex::new(r"\b(10\.\d{4,}/\S+)").unwrap(),
        }
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract every field the patterns can find in `text`.
    pub fn extract(&self, text: &str) -> ExtractedFields {
        ExtractedFields {
            authors: self.extract_authors(text),
            title: self.extract_title(text),
            year: self.extract_year(text),
            publisher: self.capture(&self.publisher, text),
            city: self.capture(&self.city, text),
            pages: self.extract_pages(text),
            journal: self.capture(&self.journal, text),
            volume: self.capture_raw(&self.volume, text),
            issue: self.capture_raw(&self.issue, text),
            url: self
                .capture_raw(&self.url, text)
                .map(|u| u.trim_end_matches('.').to_string()),
            access_date: self.capture_raw(&self.access_date, text),
            doi: self
                .capture_raw(&self.doi, text)
                .map(|d| d.trim_end_matches('.').to_string()),
        }
    }

    /// Authors in canonical «Фамилия, И. О.» form, capped at ten.
    ///
    /// The inverted heading form is preferred; when it finds nothing, the
    /// direct «И. О. Фамилия» form is matched and re-inverted (at most four
    /// names, matching how the direct form appears after the slash).
    fn extract_authors(&self, text: &str) -> Vec<String> {
        let mut authors: Vec<String> = self
            .author_inverted
            .captures_iter(text)
            .map(|caps| format!("{}, {}", &caps[1], caps[2].trim()))
            .take(MAX_AUTHORS)
            .collect();

        if authors.is_empty() {
            authors = self
                .author_direct
                .captures_iter(text)
                .take(4)
                .map(|caps| format!("{}, {}", &caps[2], caps[1].trim()))
                .collect();
        }

        authors
    }

    fn extract_year(&self, text: &str) -> Option<i32> {
        self.year_strict
            .captures(text)
            .or_else(|| self.year_any.captures(text))
            .and_then(|caps| caps[1].parse().ok())
    }

    /// Title: text between the first author block and the following slash;
    /// for author-less records, text before the first colon.
    fn extract_title(&self, text: &str) -> Option<String> {
        if let Some(m) = self.author_inverted.find(text) {
            let rest = &text[m.end()..];
            let slash = rest.find('/')?;
            let title = rest[..slash].trim();
            return if title.is_empty() { None } else { Some(title.to_string()) };
        }
        let caps = self.title_fallback.captures(text)?;
        let mut title = caps[1].trim();
        // Cut at the sentence boundary so imprint tails («. – Режим
        // доступа») never leak into the title.
        if let Some(stop) = title.find(". –") {
            title = title[..stop].trim();
        }
        let title = title.trim_end_matches('.').trim();
        if title.is_empty() {
            None
        } else {
            Some(title.to_string())
        }
    }

    fn extract_pages(&self, text: &str) -> Option<String> {
        self.capture_raw(&self.pages_count, text)
            .or_else(|| self.capture_raw(&self.pages_range, text))
    }

    fn capture(&self, re: &Regex, text: &str) -> Option<String> {
        re.captures(text).map(|caps| caps[1].trim().to_string())
    }

    fn capture_raw(&self, re: &Regex, text: &str) -> Option<String> {
        re.captures(text).map(|caps| caps[1].to_string())
    }
}
