/*
SPDX-License-Identifier: MPL-2.0
*/

//! Template renderer.
//!
//! Fills a category's formula with extracted fields. A missing optional
//! field collapses its slot together with its joiner; the strong «. – »
//! separator survives a collapsed run, so «Город : Издательство, Год»
//! degrades to «. – Издательство, Год» or «. – Год» without dangling
//! punctuation. The renderer never invents data: a missing required slot
//! renders an explicit gap marker and reports `MissingRequiredField`.

use vakfmt_core::{Category, ExtractedFields, Formula, Issue};

/// Marker emitted in place of a required field the extractor could not
/// find.
pub const GAP_MARKER: &str = "[?]";

/// A rendered draft plus the problems encountered while rendering.
#[derive(Debug, Clone)]
pub struct Draft {
    pub text: String,
    pub issues: Vec<Issue>,
}

/// Render the canonical citation string for a category from extracted
/// fields. Pure; the pipeline normalizes the draft afterwards.
pub fn render(category: Category, fields: &ExtractedFields) -> Draft {
    let formula = Formula::for_category(category);
    let mut out = String::new();
    let mut issues = Vec::new();
    // Joiners of the slots skipped since the last emitted slot.
    let mut skipped: Vec<&'static str> = Vec::new();

    for piece in formula.pieces() {
        let value = match formula.fill(piece.slot, fields) {
            Some(value) => Some(value),
            None if piece.required => {
                issues.push(Issue::MissingRequiredField { field: piece.slot.field_kind() });
                Some(GAP_MARKER.to_string())
            }
            None => {
                skipped.push(piece.joiner);
                None
            }
        };
        if let Some(value) = value {
            if !out.is_empty() {
                out.push_str(effective_joiner(piece.joiner, &skipped));
            }
            out.push_str(&value);
            skipped.clear();
        }
    }

    if !out.is_empty() && !out.ends_with('.') {
        out.push('.');
    }

    Draft { text: out, issues }
}

/// The joiner to emit before a slot, given the joiners of the slots that
/// collapsed immediately before it. A strong «. – » separator anywhere in
/// the run outranks the slot's own weak joiner («, », « : »), which only
/// makes sense next to its missing neighbor.
fn effective_joiner(own: &'static str, skipped: &[&'static str]) -> &'static str {
    if own.starts_with(". –") || skipped.iter().any(|j| j.starts_with(". –")) {
        ". – "
    } else {
        own
    }
}
