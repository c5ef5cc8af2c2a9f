// SPDX-FileCopyrightText: 2026 Santhosh Shyamsundar, Prabhu S., and Studio Tyto
// SPDX-License-Identifier: MIT

//! Error type for document-level failures.
//!
//! The emissions calculation itself never fails: malformed fields default to
//! zero and unknown reference keys contribute nothing. Errors only arise when
//! a whole document (reference table, input snapshot, coefficient override)
//! cannot be read.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FootprintError {
    /// A reference table is not valid JSON for its row type
    #[error("Failed to parse {table} reference table: {source}")]
    ReferenceParse {
        table: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The input snapshot document is not valid JSON
    #[error("Failed to parse input snapshot: {0}")]
    InputParse(#[source] serde_json::Error),

    /// A greencheck service response is not valid JSON
    #[error("Failed to parse greencheck response: {0}")]
    GreenCheckParse(#[source] serde_json::Error),

    /// The coefficient override document is not valid JSON
    #[error("Failed to parse coefficients: {0}")]
    CoefficientsParse(#[source] serde_json::Error),

    /// The report could not be serialized
    #[error("Failed to serialize report: {0}")]
    ReportSerialize(#[source] serde_json::Error),

    /// A coefficient violates a structural invariant
    #[error("Invalid coefficients: {0}")]
    InvalidCoefficients(String),

    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, FootprintError>;
