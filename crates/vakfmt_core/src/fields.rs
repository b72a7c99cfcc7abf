/*
SPDX-License-Identifier: MPL-2.0
*/

//! Extracted-field record.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::citation::SourceRecord;

/// Names of the extractable fields, used in issue reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Authors,
    Title,
    Year,
    Publisher,
    City,
    Pages,
    Journal,
    Volume,
    Issue,
    Url,
    AccessDate,
    Doi,
}

impl FieldKind {
    pub const ALL: [FieldKind; 12] = [
        FieldKind::Authors,
        FieldKind::Title,
        FieldKind::Year,
        FieldKind::Publisher,
        FieldKind::City,
        FieldKind::Pages,
        FieldKind::Journal,
        FieldKind::Volume,
        FieldKind::Issue,
        FieldKind::Url,
        FieldKind::AccessDate,
        FieldKind::Doi,
    ];
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FieldKind::Authors => "authors",
            FieldKind::Title => "title",
            FieldKind::Year => "year",
            FieldKind::Publisher => "publisher",
            FieldKind::City => "city",
            FieldKind::Pages => "pages",
            FieldKind::Journal => "journal",
            FieldKind::Volume => "volume",
            FieldKind::Issue => "issue",
            FieldKind::Url => "url",
            FieldKind::AccessDate => "access_date",
            FieldKind::Doi => "doi",
        };
        f.write_str(name)
    }
}

/// Fields pulled out of a citation string.
///
/// A field the extractor could not find stays `None` (or empty for
/// `authors`); there is no "detected but empty" state, so callers can
/// distinguish "absent in source" from "not detected".
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractedFields {
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
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doi: Option<String>,
}

impl ExtractedFields {
    /// Whether the given field was found.
    pub fn found(&self, kind: FieldKind) -> bool {
        match kind {
            FieldKind::Authors => !self.authors.is_empty(),
            FieldKind::Title => self.title.is_some(),
            FieldKind::Year => self.year.is_some(),
            FieldKind::Publisher => self.publisher.is_some(),
            FieldKind::City => self.city.is_some(),
            FieldKind::Pages => self.pages.is_some(),
            FieldKind::Journal => self.journal.is_some(),
            FieldKind::Volume => self.volume.is_some(),
            FieldKind::Issue => self.issue.is_some(),
            FieldKind::Url => self.url.is_some(),
            FieldKind::AccessDate => self.access_date.is_some(),
            FieldKind::Doi => self.doi.is_some(),
        }
    }

    /// Kinds that were found, in declaration order.
    pub fn found_kinds(&self) -> Vec<FieldKind> {
        FieldKind::ALL.iter().copied().filter(|k| self.found(*k)).collect()
    }
}

impl From<&SourceRecord> for ExtractedFields {
    fn from(record: &SourceRecord) -> Self {
        ExtractedFields {
            authors: record.authors.clone(),
            title: record.title.clone(),
            year: record.year,
            publisher: record.publisher.clone(),
            city: record.city.clone(),
            pages: record.pages.clone(),
            journal: record.journal.clone(),
            volume: record.volume.clone(),
            issue: record.issue.clone(),
            url: record.url.clone(),
            access_date: record.access_date.clone(),
            doi: record.doi.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_found_flags() {
        let fields = ExtractedFields {
            title: Some("Ревизия и аудит".to_string()),
            year: Some(2013),
            ..Default::default()
        };
        assert!(fields.found(FieldKind::Title));
        assert!(fields.found(FieldKind::Year));
        assert!(!fields.found(FieldKind::Authors));
        assert_eq!(fields.found_kinds(), vec![FieldKind::Title, FieldKind::Year]);
    }
}
