use thiserror::Error;

#[derive(Debug, Error, Clone)]
pub enum ExportError {
    /// Export was invoked with no rows. Surfaced to the caller instead of
    /// silently producing an empty file.
    #[error("No data to export")]
    EmptyInput,

    #[error("I/O error: {0}")]
    Io(String),
}
