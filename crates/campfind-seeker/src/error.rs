//! Error types for the campfind-seeker crate.
//!
//! The filter engine itself never fails: unparseable free text only makes a
//! predicate reject the record. Errors come from building criteria out of raw
//! input and from the on-disk stores.

use thiserror::Error;

/// Errors that can occur when building criteria or touching the stores.
#[derive(Debug, Error)]
pub enum SeekerError {
    /// Reading or writing a data file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// A data file did not contain valid JSON of the expected shape.
    #[error("invalid json: {0}")]
    Json(#[from] serde_json::Error),

    /// A criterion value could not be parsed (unknown band, non-numeric age).
    #[error("invalid value '{value}' for criterion '{field}'")]
    InvalidCriterion { field: &'static str, value: String },

    /// Star ratings must be between 1 and 5.
    #[error("rating must be between 1 and 5, got {0}")]
    InvalidRating(u8),

    /// Review comments are capped in length.
    #[error("comment is {len} characters, the limit is {max}")]
    CommentTooLong { len: usize, max: usize },

    /// The comparison tray already holds the maximum number of camps.
    #[error("you can compare up to {0} camps at a time")]
    ComparisonFull(usize),

    /// The camp is already part of the comparison.
    #[error("'{0}' is already in the comparison")]
    AlreadyCompared(String),

    /// No record carries the given name.
    #[error("no camp named '{0}'")]
    UnknownCamp(String),

    /// Several records share the name; their favorite ids tell them apart.
    #[error("'{name}' names {} camps, use one of: {}", .ids.len(), .ids.join(", "))]
    AmbiguousCamp { name: String, ids: Vec<String> },
}

/// Result type for campfind-seeker operations.
pub type Result<T> = std::result::Result<T, SeekerError>;
