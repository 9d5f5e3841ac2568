use thiserror::Error;

/// Error type for invalid operations.
#[derive(Error, Debug)]
pub enum ClimatologyError {
    #[error("could not locate the `{0}` object literal in the source file")]
    DataBlockNotFound(&'static str),
    #[error("failed to parse embedded climate dataset: {0}")]
    MalformedDataset(#[from] serde_json::Error),
    #[error("month {0} is outside the calendar range 1-12")]
    MonthOutOfRange(u8),
}

/// Convenience type for `Result<T, ClimatologyError>`.
pub type ClimatologyResult<T> = Result<T, ClimatologyError>;
