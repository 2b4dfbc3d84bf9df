//! Error and warning types reported by the htoprc parser.
//!
//! Parsing is permissive: malformed input degrades to warnings or to silently
//! normalized values. `ParseError` exists so the result shape can carry fatal
//! conditions later; the current parser never constructs one.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Category of a non-fatal parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningKind {
    /// The key is not recognized and was kept in `unknown_options`.
    UnknownOption,
    /// Reserved: the value could not be interpreted for a known key.
    InvalidValue,
    /// Reserved: the key belongs to an older format revision.
    Deprecated,
}

/// Advisory diagnostic attached to a 1-based line number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseWarning {
    pub line: usize,
    pub message: String,
    pub kind: WarningKind,
}

impl ParseWarning {
    pub(crate) fn unknown_option(line: usize, key: &str) -> Self {
        Self {
            line,
            message: format!("Unknown option: {key}"),
            kind: WarningKind::UnknownOption,
        }
    }
}

/// Fatal parse condition. Reserved: `parse` currently always succeeds.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("htoprc parse error at line {line}: {message}")]
pub struct ParseError {
    pub line: usize,
    pub message: String,
}
