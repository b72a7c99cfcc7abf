/*
SPDX-License-Identifier: MPL-2.0
*/

//! Type classifier.
//!
//! A deterministic, single-pass, ordered rule list. Order is part of the
//! contract: categories with narrow lexical markers (media brackets,
//! patents, degree markers) must be checked before the broad structural
//! heuristics (periodical separator, author count) that would otherwise
//! misfire on their text. The rules form an explicit table so precedence
//! is an independently verifiable artifact, not the shape of an if-chain.

use std::collections::HashSet;

use regex::Regex;
use tracing::debug;
use vakfmt_core::Category;

/// One classification rule: a name and a matcher. The first rule that
/// returns a category wins.
pub struct ClassifyRule {
    pub name: &'static str,
    run: fn(&Classifier, &str, &str) -> Option<Category>,
}

/// Ordered rule table. Earlier rules take precedence.
static RULES: &[ClassifyRule] = &[
    ClassifyRule { name: "media-marker", run: Classifier::media_marker },
    ClassifyRule { name: "patent-marker", run: Classifier::patent_marker },
    ClassifyRule { name: "degree-marker", run: Classifier::degree_marker },
    ClassifyRule { name: "standard-code", run: Classifier::standard_code },
    ClassifyRule { name: "legal-act", run: Classifier::legal_act },
    ClassifyRule { name: "proceedings", run: Classifier::proceedings },
    ClassifyRule { name: "periodical", run: Classifier::periodical },
    ClassifyRule { name: "et-al-marker", run: Classifier::et_al_marker },
    ClassifyRule { name: "author-count", run: Classifier::author_count },
    ClassifyRule { name: "electronic-marker", run: Classifier::electronic_marker },
];

/// The citation type classifier.
pub struct Classifier {
    patent: Regex,
    dissertation: Regex,
    standard: Regex,
    codex: Regex,
    legal: Regex,
    conference: Regex,
    collection: Regex,
    periodical_numbering: Regex,
    newspaper: Regex,
    surname: Regex,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier {
            patent: Regex::new(r"пат\.\s*[A-Z]{2}|а\.\s*с\.\s*[A-Z]{2}|полез\.\s*модель")
                .unwrap(),
            dissertation: Regex::new(r"дис\.\s*\.{3}|дыс\.\s*\.{3}").unwrap(),
            standard: Regex::new(r"\b(?:гост|стб|ткп|тр\s*тс)(?:\s+(?:р|iso))?\s*\d").unwrap(),
            codex: Regex::new(r"\bкодекс\b").unwrap(),
            legal: Regex::new(r"\bзакон\b|\bуказ\b|\bпостановлени|\bдекрет\b|приказ\s+\w+\.")
                .unwrap(),
            conference: Regex::new(r"матер.*конф|тезис.*докл|чтения\s*:").unwrap(),
            collection: Regex::new(r"сб\.\s*(?:науч\.|ст\.|тр\.)").unwrap(),
            periodical_numbering: Regex::new(r"[ТT]\.\s*\d|№\s*\d").unwrap(),
            newspaper: Regex::new(r"\.by\b|газет").unwrap(),
            surname: Regex::new(r"([А-ЯЁІЎA-Z][а-яёіўa-z]+),\s+[А-ЯЁІЎA-Z]\.").unwrap(),
        }
    }
}

impl Classifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign exactly one category. `Unknown` is the terminal fallback,
    /// never an error.
    pub fn classify(&self, text: &str) -> Category {
        self.classify_detailed(text).0
    }

    /// Like `classify`, but also names the rule that fired.
    pub fn classify_detailed(&self, text: &str) -> (Category, Option<&'static str>) {
        let lower = text.to_lowercase();
        for rule in RULES {
            if let Some(category) = (rule.run)(self, text, &lower) {
                debug!(rule = rule.name, category = %category, "classified");
                return (category, Some(rule.name));
            }
        }
        (Category::Unknown, None)
    }

    /// The ordered rule names, for order-sensitive tests.
    pub fn rule_names() -> Vec<&'static str> {
        RULES.iter().map(|r| r.name).collect()
    }

    // 1. Bracketed medium markers.
    fn media_marker(&self, _text: &str, lower: &str) -> Option<Category> {
        if lower.contains("[звукозапись]") || lower.contains("[видеозапись]") {
            return Some(Category::Multimedia);
        }
        if lower.contains("[изоматериал") || lower.contains("плакат]") {
            return Some(Category::VisualMaterial);
        }
        if lower.contains("[ноты]") {
            return Some(Category::MusicScore);
        }
        if lower.contains("[карт") {
            return Some(Category::Map);
        }
        None
    }

    // 2. Legal-protection markers with a country code.
    fn patent_marker(&self, text: &str, _lower: &str) -> Option<Category> {
        self.patent.is_match(text).then_some(Category::Patent)
    }

    // 3. Degree markers. «автореф» is checked before the dissertation
    // pattern: every autoreferat also contains the literal «дис. ...».
    fn degree_marker(&self, _text: &str, lower: &str) -> Option<Category> {
        if lower.contains("автореф") {
            return Some(Category::Abstract);
        }
        if self.dissertation.is_match(lower) {
            return Some(Category::Dissertation);
        }
        if lower.contains("препринт") {
            return Some(Category::Preprint);
        }
        None
    }

    // 4. Standard codes followed by a number.
    fn standard_code(&self, _text: &str, lower: &str) -> Option<Category> {
        self.standard.is_match(lower).then_some(Category::Standard)
    }

    // 5. Legal-act markers.
    fn legal_act(&self, _text: &str, lower: &str) -> Option<Category> {
        if lower.contains("конституц") || self.codex.is_match(lower) {
            return Some(Category::Law);
        }
        self.legal.is_match(lower).then_some(Category::Law)
    }

    // 6. Proceedings and collection markers.
    fn proceedings(&self, _text: &str, lower: &str) -> Option<Category> {
        if self.conference.is_match(lower) {
            return Some(Category::Conference);
        }
        self.collection.is_match(lower).then_some(Category::CollectionArticle)
    }

    // 7. A «//» separator marks a periodical; volume/issue numbering in
    // the tail means a journal, a newspaper-domain token or «газета»
    // means a newspaper. Neither falls through.
    fn periodical(&self, text: &str, _lower: &str) -> Option<Category> {
        let (_, tail) = text.split_once(" // ")?;
        if self.periodical_numbering.is_match(tail) {
            return Some(Category::JournalArticle);
        }
        if self.newspaper.is_match(&tail.to_lowercase()) {
            return Some(Category::NewspaperArticle);
        }
        None
    }

    // 8. Explicit multi-author marker.
    fn et_al_marker(&self, text: &str, _lower: &str) -> Option<Category> {
        (text.contains("[и др.]") || text.contains("[et al.]"))
            .then_some(Category::BookManyAuthors)
    }

    // 9. Distinct «Фамилия, И.» headings: four or more — many-author
    // book; one to three — few-author book.
    fn author_count(&self, text: &str, _lower: &str) -> Option<Category> {
        let distinct: HashSet<&str> = self
            .surname
            .captures_iter(text)
            .map(|caps| caps.get(1).unwrap().as_str())
            .collect();
        match distinct.len() {
            0 => None,
            1..=3 => Some(Category::BookFewAuthors),
            _ => Some(Category::BookManyAuthors),
        }
    }

    // 10. Electronic-resource marker, after the author heuristics so an
    // authored e-resource keeps its book/article tag.
    fn electronic_marker(&self, _text: &str, lower: &str) -> Option<Category> {
        lower
            .contains("[электронный ресурс]")
            .then_some(Category::ElectronicResource)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> Classifier {
        Classifier::new()
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(
            Classifier::rule_names(),
            vec![
                "media-marker",
                "patent-marker",
                "degree-marker",
                "standard-code",
                "legal-act",
                "proceedings",
                "periodical",
                "et-al-marker",
                "author-count",
                "electronic-marker",
            ]
        );
    }

    #[test]
    fn test_book_few_authors() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Дробышевский, Н. П. Ревизия и аудит : учеб.-метод. пособие / \
                 Н. П. Дробышевский. – Минск : Амалфея, 2013. – 415 с."
            ),
            Category::BookFewAuthors
        );
    }

    #[test]
    fn test_journal_article() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Валатоўская, Н. А. Традыцыйны вясельны абрад / Н. А. Валатоўская \
                 // Нар. асвета. – 2013. – № 5. – С. 88–91."
            ),
            Category::JournalArticle
        );
        // A bare periodical tail is enough.
        assert_eq!(
            c.classify(" // Нар. асвета. – 2013. – № 5. – С. 88–91."),
            Category::JournalArticle
        );
    }

    #[test]
    fn test_newspaper_article() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Берникович, Д. Агрогородок / Д. Берникович // Сельская газета. – \
                 2023. – 3 окт. – С. 1, 8."
            ),
            Category::NewspaperArticle
        );
        assert_eq!(
            c.classify("Иванов, А. Статья / А. Иванов // SB.BY. Беларусь сегодня. – 2024."),
            Category::NewspaperArticle
        );
    }

    #[test]
    fn test_dissertation_marker_beats_author_count() {
        let c = classifier();
        // Looks like a one-author book; the degree marker must win.
        assert_eq!(
            c.classify(
                "Врублеўскі, Ю. У. Гістарыяграфія : дыс. ... канд. гіст. навук : \
                 07.00.09 / Ю. У. Врублеўскі. – Мінск, 2013. – 148 л."
            ),
            Category::Dissertation
        );
    }

    #[test]
    fn test_abstract_not_shadowed_by_dissertation() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Горянов, А. В. Эволюция усадьбы : автореф. дис. ... канд. ист. наук : \
                 07.00.02 / Горянов Алексей Викторович ; МГУ. – М., 2013. – 40 с."
            ),
            Category::Abstract
        );
    }

    #[test]
    fn test_patent_before_author_heuristics() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Аспирационный счетчик ионов : а. с. SU 935780 / Б. Н. Блинов, \
                 А. В. Шолух. – Опубл. 15.06.1982."
            ),
            Category::Patent
        );
    }

    #[test]
    fn test_standard_codes() {
        let c = classifier();
        assert_eq!(
            c.classify("Система стандартов : ГОСТ 7.22-2003. – Минск : БелГИСС, 2004. – 3 с."),
            Category::Standard
        );
        assert_eq!(c.classify("Требования : СТБ 1500-2004."), Category::Standard);
        assert_eq!(c.classify("О безопасности : ТР ТС 004/2011."), Category::Standard);
    }

    #[test]
    fn test_law_markers() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "О государственном регулировании : Закон Респ. Беларусь, 26 лют. 1997 г., \
                 № 22-З // Ведамасцi Нац. сходу. – 1997. – № 16. – Арт. 297."
            ),
            Category::Law
        );
        assert_eq!(c.classify("Гражданский кодекс Республики Беларусь."), Category::Law);
    }

    #[test]
    fn test_law_beats_periodical_split() {
        // The law above contains « // » and «№» — legal-act must fire first.
        let c = classifier();
        let (category, rule) = c.classify_detailed(
            "Об образовании : Закон Респ. Беларусь // Нац. реестр. – 2011. – № 13.",
        );
        assert_eq!(category, Category::Law);
        assert_eq!(rule, Some("legal-act"));
    }

    #[test]
    fn test_conference_and_collection() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Информационные технологии : материалы 49 науч. конф., Минск, \
                 6–10 мая 2013 г. / БГУИР. – Минск : БГУИР, 2013. – 103 с."
            ),
            Category::Conference
        );
        assert_eq!(
            c.classify(
                "Божанов, П. В. Направления развития / П. В. Божанов // Современные \
                 концепции : сб. ст. / БГУ. – Минск, 2014. – С. 56–64."
            ),
            Category::CollectionArticle
        );
    }

    #[test]
    fn test_media_markers() {
        let c = classifier();
        assert_eq!(
            c.classify("Филиппов, А. Белая Русь : [Звукозапись] / А. Филиппов."),
            Category::Multimedia
        );
        assert_eq!(c.classify("Романсы [Ноты] : для фортепиано."), Category::MusicScore);
        assert_eq!(c.classify("Беларусь [Карты] : [физ. карта]."), Category::Map);
        assert_eq!(c.classify("С праздником! : [плакат]."), Category::VisualMaterial);
    }

    #[test]
    fn test_et_al_marker() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Закономерности формирования системы движений / В. А. Боровая [и др.]. – \
                 Гомель : ГГУ, 2013. – 173 с."
            ),
            Category::BookManyAuthors
        );
    }

    #[test]
    fn test_author_count_four_means_many() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Иванов, А. А. Труд / Иванов, А. А., Петров, Б. Б., Сидоров, В. В., \
                 Козлов, Г. Г. – Минск, 2020."
            ),
            Category::BookManyAuthors
        );
    }

    #[test]
    fn test_electronic_resource() {
        let c = classifier();
        assert_eq!(
            c.classify(
                "Национальный правовой Интернет-портал Республики Беларусь \
                 [Электронный ресурс]. – Режим доступа: http://www.pravo.by. – \
                 Дата доступа: 24.06.2024."
            ),
            Category::ElectronicResource
        );
    }

    #[test]
    fn test_unknown_fallback() {
        let c = classifier();
        let (category, rule) = c.classify_detailed("Просто какой-то текст без маркеров");
        assert_eq!(category, Category::Unknown);
        assert_eq!(rule, None);
    }
}
