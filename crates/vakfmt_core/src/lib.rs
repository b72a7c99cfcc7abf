/*
SPDX-License-Identifier: MPL-2.0
*/

//! Data model for the VAK RB citation formatter.
//!
//! This crate defines the shared vocabulary of the pipeline: the closed
//! category enumeration, the citation input shapes, the extracted-field
//! record, the per-category rendering formulas, and the on-disk corpus
//! format. The engine that interprets these types lives in
//! `vakfmt_processor`.

pub mod category;
pub mod citation;
pub mod corpus;
pub mod fields;
pub mod formula;
pub mod issue;

pub use category::Category;
pub use citation::{Citation, SourceRecord};
pub use corpus::{Corpus, CorpusRecord};
pub use fields::{ExtractedFields, FieldKind};
pub use formula::{Formula, Head, Piece, Slot};
pub use issue::Issue;
