/// Errors that can occur while loading a rate log
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// I/O error (missing or unreadable file)
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Malformed JSON, or JSON that is not an array of objects
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Arrow error while assembling the table
    #[error("Arrow error: {0}")]
    ArrowError(#[from] arrow::error::ArrowError),

    /// Expected column absent from every record
    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    /// Value present but not a number
    #[error("Non-numeric value {value} in column {column} at row {row}")]
    NonNumeric {
        /// Column holding the offending value
        column: String,
        /// Zero-based record index
        row: usize,
        /// JSON text of the value
        value: String,
    },

    /// Structurally invalid table
    #[error("Invalid format: {0}")]
    InvalidFormat(String),
}
