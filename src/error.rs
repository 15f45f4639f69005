use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Line {line}: malformed record: {source}")]
    MalformedRecord {
        line: usize,
        source: serde_json::Error,
    },

    #[error("Line {line}: missing required field \"{field}\"")]
    MissingField { line: usize, field: &'static str },

    #[error("Line {line}: event time {value} is out of range")]
    InvalidTimestamp { line: usize, value: i64 },

    #[error("no data found")]
    EmptyInput,

    #[error("No input file given (pass --input or set `input` in the config file)")]
    MissingInput,
}
