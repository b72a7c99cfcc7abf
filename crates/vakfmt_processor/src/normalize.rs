/*
SPDX-License-Identifier: MPL-2.0
*/

//! Punctuation normalizer.
//!
//! An ordered pipeline of named rewrite rules bringing a citation string
//! to the canonical VAK spacing/dash form. Rule order is part of the
//! contract: the rules are not commutative (range tightening assumes dash
//! spacing already ran; nothing may touch a dissertation ellipsis until it
//! is restored), so they are kept as an explicit table rather than one
//! monolithic function.
//!
//! `normalize` is idempotent: `normalize(normalize(x)) == normalize(x)`.
//! Rules whose single regex pass can leave adjacent matches unhandled run
//! to a fixpoint internally to keep that guarantee.

use regex::Regex;
use vakfmt_core::Issue;

/// Sentinel standing in for a protected dissertation ellipsis while the
/// other rules run. Private-use codepoint, cannot occur in real input.
const ELLIPSIS_SENTINEL: char = '\u{e000}';

/// Result of normalizing one string.
#[derive(Debug, Clone)]
pub struct Normalized {
    pub text: String,
    pub issues: Vec<Issue>,
}

/// One named rewrite step.
pub struct Rule {
    pub name: &'static str,
    apply: fn(&Normalizer, &str, &mut Vec<Issue>) -> String,
}

/// The ordered rule table. Do not reorder: rule 6 retracts spacing that
/// rule 4 may have introduced, and the sentinel rules must bracket
/// everything else.
static RULES: &[Rule] = &[
    Rule { name: "protect-ellipsis", apply: Normalizer::protect_ellipsis },
    Rule { name: "collapse-double-periods", apply: Normalizer::collapse_double_periods },
    Rule { name: "collapse-spaces", apply: Normalizer::collapse_spaces },
    Rule { name: "space-after-dash", apply: Normalizer::space_after_dash },
    Rule { name: "space-after-colon", apply: Normalizer::space_after_colon },
    Rule { name: "tighten-ranges", apply: Normalizer::tighten_ranges },
    Rule { name: "tighten-page-ranges", apply: Normalizer::tighten_page_ranges },
    Rule { name: "year-range-hyphen", apply: Normalizer::year_range_hyphen },
    Rule { name: "space-after-initials", apply: Normalizer::space_after_initials },
    Rule { name: "space-after-markers", apply: Normalizer::space_after_markers },
    Rule { name: "strip-space-before-punct", apply: Normalizer::strip_space_before_punct },
    Rule { name: "restore-ellipsis", apply: Normalizer::restore_ellipsis },
];

/// The punctuation normalizer. Compiles its patterns once at
/// construction.
pub struct Normalizer {
    ellipsis: Regex,
    double_period: Regex,
    multi_space: Regex,
    sep_dash: Regex,
    range_ahead: Regex,
    colon: Regex,
    range_spaces: Regex,
    page_range: Regex,
    year_hyphen: Regex,
    initials: Regex,
    markers: Regex,
    space_before_punct: Regex,
}

impl Default for Normalizer {
    fn default() -> Self {
        Normalizer {
            ellipsis: Regex::new(r"\. \.\.\.").unwrap(),
            double_period: Regex::new(r"([а-яёіўa-z])\.\.([^.]|$)").unwrap(),
            multi_space: Regex::new(r" {2,}").unwrap(),
            sep_dash: Regex::new(r"\. –[^\s]").unwrap(),
            range_ahead: Regex::new(r"^\d+–\d").unwrap(),
            colon: Regex::new(r":([А-ЯЁІЎа-яёіўA-Za-z])").unwrap(),
            range_spaces: Regex::new(r"(\d) ?– ?(\d)").unwrap(),
            page_range: Regex::new(r"([СC])\. ?(\d+) ?– ?(\d+)").unwrap(),
            year_hyphen: Regex::new(r"\b(\d{4})-(\d{4})\b").unwrap(),
            initials: Regex::new(
                r"([А-ЯЁІЎA-Z]\. [А-ЯЁІЎA-Z]\.)([А-ЯЁІЎA-Z][а-яёіўa-z])",
            )
            .unwrap(),
            markers: Regex::new(r"(Т\.|Вып\.|кн\.|№)(\d)").unwrap(),
            space_before_punct: Regex::new(r" +([.,])").unwrap(),
        }
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalize a citation string to the canonical punctuation form.
    pub fn normalize(&self, text: &str) -> String {
        self.apply(text).text
    }

    /// Normalize and report anything the conservative rules declined to
    /// rewrite (currently: ambiguous hyphenated 4-digit pairs).
    pub fn apply(&self, text: &str) -> Normalized {
        let mut issues = Vec::new();
        let mut current = text.to_string();
        for rule in RULES {
            current = (rule.apply)(self, &current, &mut issues);
        }
        Normalized { text: current, issues }
    }

    /// Names of the rules that would change the given text, in rule order.
    /// The sentinel bracket rules are excluded: they are bookkeeping, not
    /// findings.
    pub fn lint(&self, text: &str) -> Vec<&'static str> {
        let mut findings = Vec::new();
        let mut issues = Vec::new();
        let mut current = text.to_string();
        for rule in RULES {
            let next = (rule.apply)(self, &current, &mut issues);
            if next != current
                && rule.name != "protect-ellipsis"
                && rule.name != "restore-ellipsis"
            {
                findings.push(rule.name);
            }
            current = next;
        }
        findings
    }

    /// The ordered rule names, for order-sensitive tests and docs.
    pub fn rule_names() -> Vec<&'static str> {
        RULES.iter().map(|r| r.name).collect()
    }

    // Rule 1: hide «. ...» (dissertation degree marker) behind a sentinel
    // so the period and space rules cannot merge or strip it.
    fn protect_ellipsis(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.ellipsis
            .replace_all(text, format!(". {ELLIPSIS_SENTINEL}"))
            .into_owned()
    }

    // Rule 2: «журн.. –» → «журн. –»; an abbreviation's period must not
    // double with the sentence terminator.
    fn collapse_double_periods(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.double_period.replace_all(text, "${1}.${2}").into_owned()
    }

    // Rule 3: runs of spaces collapse to one.
    fn collapse_spaces(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.multi_space.replace_all(text, " ").into_owned()
    }

    // Rule 4: «. –X» → «. – X», unless the dash opens a numeric range
    // («. –45–52» stays, the range dash binds tighter).
    fn space_after_dash(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        const SEP_LEN: usize = ". –".len();
        let mut out = String::with_capacity(text.len() + 8);
        let mut last = 0;
        for m in self.sep_dash.find_iter(text) {
            let at = m.start() + SEP_LEN;
            if self.range_ahead.is_match(&text[at..]) {
                continue;
            }
            out.push_str(&text[last..at]);
            out.push(' ');
            last = at;
        }
        out.push_str(&text[last..]);
        out
    }

    // Rule 5: «:X» → «: X» for field-separator colons. URL schemes are
    // untouched because the character after «http:» is a slash.
    fn space_after_colon(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.colon.replace_all(text, ": ${1}").into_owned()
    }

    // Rule 6: «45 – 52», «45– 52», «45 –52» → «45–52». Runs to a fixpoint:
    // a single pass cannot rewrite overlapping ranges like «1 – 2 – 3».
    fn tighten_ranges(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.fixpoint(&self.range_spaces, text, "${1}–${2}")
    }

    // Rule 7: «С. 45 – 52» → «С. 45–52». The page-range marker outranks a
    // bare separator dash, so this runs after rules 4 and 6 and wins.
    fn tighten_page_ranges(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.fixpoint(&self.page_range, text, "${1}. ${2}–${3}")
    }

    // «1995-2020» → «1995–2020», but only when both numbers are plausible
    // years in increasing order; a standard or catalog number that merely
    // looks like a year range is left alone and reported.
    fn year_range_hyphen(&self, text: &str, issues: &mut Vec<Issue>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for caps in self.year_hyphen.captures_iter(text) {
            let m = caps.get(0).unwrap();
            let y1: i32 = caps[1].parse().unwrap();
            let y2: i32 = caps[2].parse().unwrap();
            if (1990..=2030).contains(&y1) && (1990..=2030).contains(&y2) && y1 < y2 {
                out.push_str(&text[last..m.start()]);
                out.push_str(&caps[1]);
                out.push('–');
                out.push_str(&caps[2]);
                last = m.end();
            } else {
                issues.push(Issue::AmbiguousRange {
                    start: caps[1].to_string(),
                    end: caps[2].to_string(),
                });
            }
        }
        out.push_str(&text[last..]);
        out
    }

    // Rule 8: «А. А.Фамилия» → «А. А. Фамилия».
    fn space_after_initials(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.fixpoint(&self.initials, text, "${1} ${2}")
    }

    // Rule 9: «Т.5», «№5», «Вып.2», «кн.1» → marker, space, digit.
    fn space_after_markers(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.markers.replace_all(text, "${1} ${2}").into_owned()
    }

    // Rule 10: no space immediately before a period or comma.
    fn strip_space_before_punct(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        self.space_before_punct.replace_all(text, "${1}").into_owned()
    }

    // Rule 11: bring the protected ellipsis back as literal dots.
    fn restore_ellipsis(&self, text: &str, _issues: &mut Vec<Issue>) -> String {
        text.replace(ELLIPSIS_SENTINEL, "...")
    }

    fn fixpoint(&self, re: &Regex, text: &str, replacement: &str) -> String {
        let mut current = text.to_string();
        loop {
            let next = re.replace_all(&current, replacement).into_owned();
            if next == current {
                return current;
            }
            current = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn normalizer() -> Normalizer {
        Normalizer::new()
    }

    #[test]
    fn test_rule_order_is_fixed() {
        assert_eq!(
            Normalizer::rule_names(),
            vec![
                "protect-ellipsis",
                "collapse-double-periods",
                "collapse-spaces",
                "space-after-dash",
                "space-after-colon",
                "tighten-ranges",
                "tighten-page-ranges",
                "year-range-hyphen",
                "space-after-initials",
                "space-after-markers",
                "strip-space-before-punct",
                "restore-ellipsis",
            ]
        );
    }

    #[test]
    fn test_range_tightening() {
        let n = normalizer();
        assert_eq!(n.normalize("45 – 52"), "45–52");
        assert_eq!(n.normalize("45– 52"), "45–52");
        assert_eq!(n.normalize("45 –52"), "45–52");
    }

    #[test]
    fn test_dash_spacing() {
        let n = normalizer();
        assert!(n.normalize("Минск. –Амалфея").contains(". – Амалфея"));
    }

    #[test]
    fn test_dash_spacing_skips_range_dash() {
        let n = normalizer();
        // The dash right after «. –» opens a range: leave it bound tight.
        assert_eq!(n.normalize("Т. 1. –45–52."), "Т. 1. –45–52.");
    }

    #[test]
    fn test_colon_spacing_leaves_urls_alone() {
        let n = normalizer();
        let text = "Режим доступа: http://www.pravo.by. – Дата доступа: 24.06.2024.";
        assert_eq!(n.normalize(text), text);
        assert_eq!(n.normalize("Минск :Амалфея"), "Минск : Амалфея");
    }

    #[test]
    fn test_ellipsis_preserved() {
        let n = normalizer();
        let text = "... канд. гіст. навук";
        assert_eq!(n.normalize(text), text);

        let dissertation = "дыс. ... канд. гіст. навук : 07.00.09";
        assert_eq!(n.normalize(dissertation), dissertation);
    }

    #[test]
    fn test_double_period_collapse() {
        let n = normalizer();
        assert_eq!(
            n.normalize("Белорус. экон. журн.. – 2013."),
            "Белорус. экон. журн. – 2013."
        );
    }

    #[test]
    fn test_initials_spacing() {
        let n = normalizer();
        assert_eq!(n.normalize("А. А.Фамилия"), "А. А. Фамилия");
    }

    #[test]
    fn test_marker_spacing() {
        let n = normalizer();
        assert_eq!(n.normalize("Т.5, №3"), "Т. 5, № 3");
        assert_eq!(n.normalize("Вып.2, кн.1"), "Вып. 2, кн. 1");
    }

    #[test]
    fn test_page_range_marker_wins() {
        let n = normalizer();
        assert_eq!(n.normalize("С. 88 – 91."), "С. 88–91.");
    }

    #[test]
    fn test_year_hyphen_conservative() {
        let n = normalizer();
        // Plausible increasing year range: rewritten.
        assert_eq!(n.normalize("Мн., 2003-2025."), "Мн., 2003–2025.");
        // A standard designation is not a year range: untouched, reported.
        let result = n.apply("ГОСТ 7022-2003.");
        assert_eq!(result.text, "ГОСТ 7022-2003.");
        assert_eq!(
            result.issues,
            vec![Issue::AmbiguousRange { start: "7022".to_string(), end: "2003".to_string() }]
        );
        // Decreasing pair: untouched.
        assert_eq!(n.apply("2020-1995").text, "2020-1995");
    }

    #[test]
    fn test_idempotent_on_messy_input() {
        let n = normalizer();
        let inputs = [
            "Дробышевский, Н. П.  Ревизия и аудит :учеб.-метод. пособие / Н. П.Дробышевский. –Минск :Амалфея, 2013. – 415 с.",
            "Валатоўская, Н. А. Традыцыйны вясельны абрад / Н. А. Валатоўская // Нар. асвета. – 2013. – №5. – С. 88 – 91.",
            "Врублеўскі, Ю. У. Гістарыяграфія : дыс. ... канд. гіст. навук : 07.00.09 / Ю. У. Врублеўскі. – Мінск, 2013. – 148 л.",
            "1 – 2 – 3 – 4",
            "... канд. гіст. навук",
        ];
        for input in inputs {
            let once = n.normalize(input);
            let twice = n.normalize(&once);
            assert_eq!(once, twice, "not idempotent for {input:?}");
        }
    }

    #[test]
    fn test_overlapping_ranges_all_tighten() {
        let n = normalizer();
        assert_eq!(n.normalize("1 – 2 – 3 – 4"), "1–2–3–4");
    }

    #[test]
    fn test_strip_space_before_punct() {
        let n = normalizer();
        assert_eq!(n.normalize("Минск , 2013 ."), "Минск, 2013.");
    }

    #[test]
    fn test_lint_reports_rule_names() {
        let n = normalizer();
        let findings = n.lint("Минск. –Амалфея, 2013. – С. 45 – 52.");
        assert!(findings.contains(&"space-after-dash"));
        assert!(findings.contains(&"tighten-ranges"));
        assert!(n.lint("Минск : Амалфея, 2013. – 415 с.").is_empty());
    }
}
