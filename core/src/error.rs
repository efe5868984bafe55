use std::path::PathBuf;

use thiserror::Error;

use crate::model::selection::{Field, Stage};

/// Failures while reading the prediction table. All of them are fatal at startup.
#[derive(Error, Debug)]
pub enum DataLoadError {
    /// The data file does not exist
    #[error("Prediction data not found at {}", .path.display())]
    SourceMissing { path: PathBuf },

    #[error("I/O error while reading prediction data: {0}")]
    Io(#[from] std::io::Error),

    /// The file could not be parsed as delimited text
    #[error("Malformed prediction data: {0}")]
    Csv(#[from] csv::Error),

    /// A required header column is absent
    #[error("Prediction data is missing required column '{0}'")]
    MissingColumn(&'static str),

    /// A cell failed key normalization or number parsing
    #[error("Invalid {column} value '{value}' on line {line}: {reason}")]
    InvalidValue {
        line: u64,
        column: &'static str,
        value: String,
        reason: String,
    },

    /// An in-memory record failed key normalization
    #[error("Invalid {column} value '{value}' in record {index}: {reason}")]
    InvalidRecord {
        index: usize,
        column: &'static str,
        value: String,
        reason: String,
    },
}

/// Selection contract violations. A presentation layer that only offers the
/// navigator's current options never triggers these.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SelectionError {
    #[error("'{value}' is not a valid {field} for the current selection")]
    InvalidSelection { field: Field, value: String },

    #[error("Cannot choose a {field} before its upstream selection is made")]
    MissingUpstream { field: Field },

    #[error("Cannot commit while selection is at stage {stage}")]
    PrematureCommit { stage: Stage },

    #[error("Year '{year}' and month '{month}' do not form a calendar month")]
    InvalidPeriod { year: String, month: String },
}

/// Failures while expanding an abbreviated name against known candidates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum KeyError {
    #[error("Unknown key: '{0}'")]
    Unknown(String),

    #[error("Ambiguous key: '{key}' matches {matches:?}")]
    Ambiguous { key: String, matches: Vec<String> },
}
