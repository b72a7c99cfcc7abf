/*
SPDX-License-Identifier: MPL-2.0
*/

//! Error type for I/O-level failures.
//!
//! Only loading and saving can fail; the pipeline itself never errors —
//! its failure modes are `vakfmt_core::Issue` values in the outcome.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProcessorError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0} parse error: {1}")]
    Parse(String, String),
}
