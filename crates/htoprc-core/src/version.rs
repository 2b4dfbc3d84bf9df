//! Format revision detection.

use serde::{Deserialize, Serialize};

/// Format revision of an htoprc file, as far as it can be told.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormatVersion {
    V2,
    V3,
    #[default]
    Unknown,
}

impl FormatVersion {
    /// Classify from `config_reader_min_version`. `htop_version` is
    /// free-form and deliberately not consulted.
    pub fn detect(config_reader_min_version: Option<i64>) -> Self {
        match config_reader_min_version {
            Some(v) if v >= 3 => Self::V3,
            Some(2) => Self::V2,
            _ => Self::Unknown,
        }
    }
}
