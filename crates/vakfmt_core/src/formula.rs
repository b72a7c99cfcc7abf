/*
SPDX-License-Identifier: MPL-2.0
*/

//! Per-category rendering formulas.
//!
//! A formula is an ordered list of pieces, each a field slot with the
//! joiner expected before it. All categories share one slot order; they
//! differ in the head (author-led vs title-led), the et-al. handling, and
//! the electronic-resource title marker. The renderer in
//! `vakfmt_processor` interprets the list; this module only describes it
//! and knows how to fill a single slot from extracted fields.

use crate::category::Category;
use crate::fields::{ExtractedFields, FieldKind};

/// A field slot in a formula. Filling a slot produces the decorated form
/// («Т. 5», «№ 3», «С. 88–91»), not the bare value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// First author in inverted form: «Фамилия, И. О.»
    AuthorHead,
    /// Authors after the slash in direct form: «И. О. Фамилия», with
    /// «[и др.]» when the category or the author count calls for it.
    AuthorsDirect,
    Title,
    Journal,
    City,
    Publisher,
    Year,
    Volume,
    Issue,
    Pages,
    Url,
    AccessDate,
    Doi,
}

impl Slot {
    /// The field this slot reports as missing in issues.
    pub fn field_kind(&self) -> FieldKind {
        match self {
            Slot::AuthorHead | Slot::AuthorsDirect => FieldKind::Authors,
            Slot::Title => FieldKind::Title,
            Slot::Journal => FieldKind::Journal,
            Slot::City => FieldKind::City,
            Slot::Publisher => FieldKind::Publisher,
            Slot::Year => FieldKind::Year,
            Slot::Volume => FieldKind::Volume,
            Slot::Issue => FieldKind::Issue,
            Slot::Pages => FieldKind::Pages,
            Slot::Url => FieldKind::Url,
            Slot::AccessDate => FieldKind::AccessDate,
            Slot::Doi => FieldKind::Doi,
        }
    }
}

/// One slot plus the joiner that precedes it when both neighbors render.
#[derive(Debug, Clone, Copy)]
pub struct Piece {
    pub joiner: &'static str,
    pub slot: Slot,
    pub required: bool,
}

const fn piece(joiner: &'static str, slot: Slot) -> Piece {
    Piece { joiner, slot, required: false }
}

const fn required(joiner: &'static str, slot: Slot) -> Piece {
    Piece { joiner, slot, required: true }
}

/// How a formula starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Head {
    /// «Фамилия, И. О. Название ...»
    AuthorLed,
    /// «Название / И. О. Фамилия ...»
    TitleLed,
}

/// A category's rendering formula.
#[derive(Debug, Clone, Copy)]
pub struct Formula {
    pub head: Head,
    /// Always render the author list as «первый автор [и др.]».
    pub et_al: bool,
    /// Append the «[Электронный ресурс]» marker to the title.
    pub electronic_marker: bool,
    pieces: &'static [Piece],
}

/// Shared tail: imprint, periodical numbering, pages, access info.
/// The strong `. – ` separator survives slot collapse (see the renderer),
/// which is what lets one order serve books, articles, and laws alike.
const AUTHOR_LED: &[Piece] = &[
    piece("", Slot::AuthorHead),
    required(" ", Slot::Title),
    piece(" / ", Slot::AuthorsDirect),
    piece(" // ", Slot::Journal),
    piece(". – ", Slot::City),
    piece(" : ", Slot::Publisher),
    piece(", ", Slot::Year),
    piece(". – ", Slot::Volume),
    piece(", ", Slot::Issue),
    piece(". – ", Slot::Pages),
    piece(". – ", Slot::Url),
    piece(". – ", Slot::AccessDate),
    piece(". – ", Slot::Doi),
];

const TITLE_LED: &[Piece] = &[
    required("", Slot::Title),
    piece(" / ", Slot::AuthorsDirect),
    piece(" // ", Slot::Journal),
    piece(". – ", Slot::City),
    piece(" : ", Slot::Publisher),
    piece(", ", Slot::Year),
    piece(". – ", Slot::Volume),
    piece(", ", Slot::Issue),
    piece(". – ", Slot::Pages),
    piece(". – ", Slot::Url),
    piece(". – ", Slot::AccessDate),
    piece(". – ", Slot::Doi),
];

/// Same as `TITLE_LED` but nothing is mandatory: used for categories whose
/// source strings have no title-shaped prefix.
const FREEFORM: &[Piece] = &[
    piece("", Slot::Title),
    piece(" / ", Slot::AuthorsDirect),
    piece(" // ", Slot::Journal),
    piece(". – ", Slot::City),
    piece(" : ", Slot::Publisher),
    piece(", ", Slot::Year),
    piece(". – ", Slot::Volume),
    piece(", ", Slot::Issue),
    piece(". – ", Slot::Pages),
    piece(". – ", Slot::Url),
    piece(". – ", Slot::AccessDate),
    piece(". – ", Slot::Doi),
];

impl Formula {
    /// The formula for a category.
    pub fn for_category(category: Category) -> Formula {
        use Category::*;
        let (head, et_al, electronic_marker, pieces): (Head, bool, bool, &[Piece]) =
            match category {
                BookFewAuthors | JournalArticle | CollectionArticle | NewspaperArticle
                | Dissertation | Abstract | Preprint | Multimedia | MusicScore | Review
                | Multivolume | Deposited => (Head::AuthorLed, false, false, AUTHOR_LED),
                BookManyAuthors => (Head::TitleLed, true, false, TITLE_LED),
                Law | Standard | Patent | Conference | Map | VisualMaterial
                | ResearchReport | Catalog | MethodicalGuide => {
                    (Head::TitleLed, false, false, TITLE_LED)
                }
                ElectronicResource => (Head::TitleLed, false, true, TITLE_LED),
                Archive | Unknown => (Head::TitleLed, false, false, FREEFORM),
            };
        Formula { head, et_al, electronic_marker, pieces }
    }

    pub fn pieces(&self) -> &'static [Piece] {
        self.pieces
    }

    /// Fill one slot from extracted fields, producing the decorated text,
    /// or `None` when the field is absent.
    pub fn fill(&self, slot: Slot, fields: &ExtractedFields) -> Option<String> {
        match slot {
            Slot::AuthorHead => {
                if self.head == Head::TitleLed {
                    return None;
                }
                fields.authors.first().cloned()
            }
            Slot::AuthorsDirect => {
                let first = fields.authors.first()?;
                if self.et_al || fields.authors.len() >= 4 {
                    Some(format!("{} [и др.]", invert(first)))
                } else {
                    let direct: Vec<String> =
                        fields.authors.iter().map(|a| invert(a)).collect();
                    Some(direct.join(", "))
                }
            }
            Slot::Title => {
                let title = fields.title.as_deref()?;
                if self.electronic_marker && !title.contains("[Электронный ресурс]") {
                    Some(format!("{title} [Электронный ресурс]"))
                } else {
                    Some(title.to_string())
                }
            }
            Slot::Journal => fields.journal.clone(),
            Slot::City => fields.city.clone(),
            Slot::Publisher => fields.publisher.clone(),
            Slot::Year => fields.year.map(|y| y.to_string()),
            Slot::Volume => fields.volume.as_deref().map(|v| format!("Т. {v}")),
            Slot::Issue => fields.issue.as_deref().map(|i| format!("№ {i}")),
            Slot::Pages => fields.pages.as_deref().map(|p| {
                if p.contains('–') || p.contains('-') {
                    format!("С. {p}")
                } else {
                    format!("{p} с.")
                }
            }),
            Slot::Url => fields.url.as_deref().map(|u| format!("Режим доступа: {u}")),
            Slot::AccessDate => {
                fields.access_date.as_deref().map(|d| format!("Дата доступа: {d}"))
            }
            Slot::Doi => fields.doi.as_deref().map(|d| format!("DOI: {d}")),
        }
    }
}

/// «Фамилия, И. О.» → «И. О. Фамилия». Names without a comma pass through.
pub fn invert(author: &str) -> String {
    match author.split_once(", ") {
        Some((family, initials)) => format!("{initials} {family}"),
        None => author.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert() {
        assert_eq!(invert("Дробышевский, Н. П."), "Н. П. Дробышевский");
        assert_eq!(invert("БГУИР"), "БГУИР");
    }

    #[test]
    fn test_fill_decorations() {
        let formula = Formula::for_category(Category::JournalArticle);
        let fields = ExtractedFields {
            volume: Some("5".to_string()),
            issue: Some("3".to_string()),
            pages: Some("88–91".to_string()),
            ..Default::default()
        };
        assert_eq!(formula.fill(Slot::Volume, &fields).as_deref(), Some("Т. 5"));
        assert_eq!(formula.fill(Slot::Issue, &fields).as_deref(), Some("№ 3"));
        assert_eq!(formula.fill(Slot::Pages, &fields).as_deref(), Some("С. 88–91"));
    }

    #[test]
    fn test_pages_count_vs_range() {
        let formula = Formula::for_category(Category::BookFewAuthors);
        let count = ExtractedFields { pages: Some("415".to_string()), ..Default::default() };
        assert_eq!(formula.fill(Slot::Pages, &count).as_deref(), Some("415 с."));
    }

    #[test]
    fn test_et_al_for_many_authors() {
        let formula = Formula::for_category(Category::BookFewAuthors);
        let fields = ExtractedFields {
            authors: vec![
                "Иванов, А. А.".to_string(),
                "Петров, Б. Б.".to_string(),
                "Сидоров, В. В.".to_string(),
                "Козлов, Г. Г.".to_string(),
            ],
            ..Default::default()
        };
        assert_eq!(
            formula.fill(Slot::AuthorsDirect, &fields).as_deref(),
            Some("А. А. Иванов [и др.]")
        );
    }

    #[test]
    fn test_electronic_marker_not_duplicated() {
        let formula = Formula::for_category(Category::ElectronicResource);
        let fields = ExtractedFields {
            title: Some("Портал [Электронный ресурс]".to_string()),
            ..Default::default()
        };
        assert_eq!(
            formula.fill(Slot::Title, &fields).as_deref(),
            Some("Портал [Электронный ресурс]")
        );
    }

    #[test]
    fn test_title_led_head_has_no_author_head() {
        let formula = Formula::for_category(Category::BookManyAuthors);
        let fields = ExtractedFields {
            authors: vec!["Боровая, В. А.".to_string()],
            ..Default::default()
        };
        assert_eq!(formula.fill(Slot::AuthorHead, &fields), None);
        assert_eq!(
            formula.fill(Slot::AuthorsDirect, &fields).as_deref(),
            Some("В. А. Боровая [и др.]")
        );
    }
}
