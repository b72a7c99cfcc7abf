/*
SPDX-License-Identifier: MPL-2.0
*/

//! The pipeline's failure taxonomy.
//!
//! None of these are errors: the pipeline always returns a best-effort
//! result for arbitrary input, so every failure mode is a typed value
//! carried alongside the output, not a thrown fault.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::fields::FieldKind;

/// A non-fatal problem observed while processing a citation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Issue {
    /// The classifier found no signal; the citation carries the `Unknown`
    /// tag with the full confidence penalty.
    UnrecognizedType,
    /// A field's pattern did not match. Recorded per field; never blocks
    /// other fields.
    FieldNotFound { field: FieldKind },
    /// The renderer could not fill a mandatory slot; the draft contains an
    /// explicit gap marker instead.
    MissingRequiredField { field: FieldKind },
    /// A hyphen joins two 4-digit numbers that do not form a plausible
    /// year range, so the normalizer left it untouched.
    AmbiguousRange { start: String, end: String },
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Issue::UnrecognizedType => write!(f, "no category signal matched"),
            Issue::FieldNotFound { field } => write!(f, "field not found: {field}"),
            Issue::MissingRequiredField { field } => {
                write!(f, "required field missing: {field}")
            }
            Issue::AmbiguousRange { start, end } => {
                write!(f, "ambiguous hyphenated range left as-is: {start}-{end}")
            }
        }
    }
}
