/*
SPDX-License-Identifier: MPL-2.0
*/

//! The closed set of citation categories.
//!
//! The VAK reference tables use open-ended string tags
//! (`book_1_3_authors`, `journal_article`, ...); here they become a closed
//! enum so the classifier, renderer, and corpus tooling agree on the exact
//! category space. `Unknown` is the explicit fallback, never an error.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A citation category per the VAK RB bibliographic description tables.
///
/// Serialized names match the snake_case tags used in corpus files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Book with one to three authors, led by the inverted author form.
    #[serde(rename = "book_1_3_authors")]
    BookFewAuthors,
    /// Book with four or more authors, led by the title.
    #[serde(rename = "book_4plus_authors")]
    BookManyAuthors,
    JournalArticle,
    CollectionArticle,
    NewspaperArticle,
    Dissertation,
    /// Dissertation abstract (автореферат).
    Abstract,
    Law,
    Standard,
    Patent,
    Conference,
    ElectronicResource,
    Preprint,
    Multimedia,
    Map,
    MusicScore,
    VisualMaterial,
    Archive,
    ResearchReport,
    Deposited,
    Multivolume,
    Review,
    Catalog,
    MethodicalGuide,
    Unknown,
}

impl Category {
    /// Every category, in corpus presentation order.
    pub const ALL: [Category; 25] = [
        Category::BookFewAuthors,
        Category::BookManyAuthors,
        Category::JournalArticle,
        Category::CollectionArticle,
        Category::NewspaperArticle,
        Category::Dissertation,
        Category::Abstract,
        Category::Law,
        Category::Standard,
        Category::Patent,
        Category::Conference,
        Category::ElectronicResource,
        Category::Preprint,
        Category::Multimedia,
        Category::Map,
        Category::MusicScore,
        Category::VisualMaterial,
        Category::Archive,
        Category::ResearchReport,
        Category::Deposited,
        Category::Multivolume,
        Category::Review,
        Category::Catalog,
        Category::MethodicalGuide,
        Category::Unknown,
    ];

    /// The snake_case tag used in corpus files.
    pub fn tag(&self) -> &'static str {
        match self {
            Category::BookFewAuthors => "book_1_3_authors",
            Category::BookManyAuthors => "book_4plus_authors",
            Category::JournalArticle => "journal_article",
            Category::CollectionArticle => "collection_article",
            Category::NewspaperArticle => "newspaper_article",
            Category::Dissertation => "dissertation",
            Category::Abstract => "abstract",
            Category::Law => "law",
            Category::Standard => "standard",
            Category::Patent => "patent",
            Category::Conference => "conference",
            Category::ElectronicResource => "electronic_resource",
            Category::Preprint => "preprint",
            Category::Multimedia => "multimedia",
            Category::Map => "map",
            Category::MusicScore => "music_score",
            Category::VisualMaterial => "visual_material",
            Category::Archive => "archive",
            Category::ResearchReport => "research_report",
            Category::Deposited => "deposited",
            Category::Multivolume => "multivolume",
            Category::Review => "review",
            Category::Catalog => "catalog",
            Category::MethodicalGuide => "methodical_guide",
            Category::Unknown => "unknown",
        }
    }

    /// Map a VAK section heading to a category by keyword.
    ///
    /// The official description page groups examples under Russian headings
    /// («Статьи из журналов», «Материалы конференций», ...); corpus tooling
    /// uses this to tag scraped sections.
    pub fn from_heading(heading: &str) -> Category {
        let lower = heading.to_lowercase();
        for (keyword, category) in HEADING_KEYWORDS {
            if lower.contains(keyword) {
                return *category;
            }
        }
        Category::Unknown
    }
}

/// Keyword → category table for section headings, checked in order.
const HEADING_KEYWORDS: &[(&str, Category)] = &[
    ("одним, двумя", Category::BookFewAuthors),
    ("тремя автор", Category::BookFewAuthors),
    ("четырьмя", Category::BookManyAuthors),
    ("более автор", Category::BookManyAuthors),
    ("многотомн", Category::Multivolume),
    ("отдельные тома", Category::Multivolume),
    ("законодательн", Category::Law),
    ("правовые акты", Category::Law),
    ("стандарт", Category::Standard),
    ("авторефер", Category::Abstract),
    ("диссертаци", Category::Dissertation),
    ("депонирован", Category::Deposited),
    ("архивн", Category::Archive),
    ("электронн", Category::ElectronicResource),
    ("интернет", Category::ElectronicResource),
    ("статьи из журнал", Category::JournalArticle),
    ("газет", Category::NewspaperArticle),
    ("сборник", Category::CollectionArticle),
    ("материалы конференц", Category::Conference),
    ("съезд", Category::Conference),
    ("симпозиум", Category::Conference),
    ("рецензи", Category::Review),
    ("карт", Category::Map),
    ("патент", Category::Patent),
    ("препринт", Category::Preprint),
    ("отчет", Category::ResearchReport),
    ("каталог", Category::Catalog),
    ("методические", Category::MethodicalGuide),
];

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .iter()
            .find(|c| c.tag() == s)
            .copied()
            .ok_or_else(|| format!("unknown category tag: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_uses_corpus_tags() {
        let json = serde_json::to_string(&Category::BookFewAuthors).unwrap();
        assert_eq!(json, "\"book_1_3_authors\"");
        let back: Category = serde_json::from_str("\"journal_article\"").unwrap();
        assert_eq!(back, Category::JournalArticle);
    }

    #[test]
    fn test_tag_matches_serde_for_all_variants() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.tag()));
            assert_eq!(category.tag().parse::<Category>().unwrap(), category);
        }
    }

    #[test]
    fn test_from_heading() {
        assert_eq!(
            Category::from_heading("Статьи из журналов"),
            Category::JournalArticle
        );
        assert_eq!(
            Category::from_heading("Издания одним, двумя или тремя авторами"),
            Category::BookFewAuthors
        );
        assert_eq!(Category::from_heading("Что-то ещё"), Category::Unknown);
    }
}
