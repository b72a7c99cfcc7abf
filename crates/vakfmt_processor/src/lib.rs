/*
SPDX-License-Identifier: MPL-2.0
*/

//! VAK RB citation processor.
//!
//! This crate implements the deterministic
//! classification → extraction → normalization pipeline for bibliographic
//! citations following the VAK RB (STB 7.1-2003) rules. All components are
//! pure functions over immutable input; a batch of citations may be
//! processed independently and in any order.
//!
//! # Example
//!
//! ```rust
//! use vakfmt_processor::Pipeline;
//! use vakfmt_core::{Category, Citation};
//!
//! let pipeline = Pipeline::new();
//! let outcome = pipeline.process(&Citation::text(
//!     "Дробышевский, Н. П. Ревизия и аудит : учеб.-метод. пособие / \
//!      Н. П. Дробышевский. – Минск : Амалфея, 2013. – 415 с.",
//! ));
//! assert_eq!(outcome.category, Category::BookFewAuthors);
//! assert_eq!(outcome.fields.year, Some(2013));
//! ```

pub mod classify;
pub mod error;
pub mod external;
pub mod extract;
pub mod io;
pub mod normalize;
pub mod pipeline;
pub mod render;

pub use classify::Classifier;
pub use error::ProcessorError;
pub use external::{FallbackParser, MetadataSource};
pub use extract::Extractor;
pub use normalize::{Normalized, Normalizer};
pub use pipeline::{batch_stats, BatchStats, Outcome, Pipeline};
pub use render::{render, Draft, GAP_MARKER};
