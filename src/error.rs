//! Error types for loading data and evaluating the classifier.

use std::path::PathBuf;
use std::process::ExitCode;
use thiserror::Error;

/// Result type alias for crate operations
pub type Result<T> = std::result::Result<T, PerceptronError>;

#[derive(Error, Debug)]
pub enum PerceptronError {
    /// The data file could not be opened or read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed delimited text (ragged rows, bad quoting, invalid UTF-8)
    #[error("malformed data: {0}")]
    Csv(#[from] csv::Error),

    /// A field that should hold a number does not
    #[error("line {line}, column '{column}': cannot parse '{value}' as a number")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    /// The source has no header row naming the columns
    #[error("missing header row in {path}")]
    MissingHeader { path: String },

    /// Accuracy was requested on a dataset with no examples
    #[error("data set can't be empty")]
    EmptyDataset,

    /// An example count has no representation in the model's float type
    #[error("count {count} cannot be represented as a float")]
    Unrepresentable { count: usize },

    /// Feature vector width does not match the model
    #[error("dimension mismatch: expected {expected} features, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },
}

impl PerceptronError {
    /// Exit code the CLI terminates with for this error.
    /// Status 2 is left to argument parsing (usage errors).
    pub fn exit_code(&self) -> ExitCode {
        match self {
            Self::Io { .. } => ExitCode::from(3),
            Self::Csv(_) | Self::Parse { .. } | Self::MissingHeader { .. } => ExitCode::from(4),
            Self::EmptyDataset | Self::DimensionMismatch { .. } | Self::Unrepresentable { .. } => {
                ExitCode::from(1)
            }
        }
    }
}
