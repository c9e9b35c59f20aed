use thiserror::Error;

/// Result type alias for dBASE operations
pub type Result<T> = std::result::Result<T, DbfError>;

/// Errors that can occur while building a FritzAdr database
#[derive(Error, Debug)]
pub enum DbfError {
    /// Only the 19 and 21 field table layouts exist
    #[error("FRITZ!Adr table definition must have 19 or 21 fields, got {0}")]
    InvalidSchema(usize),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    CsvError(String),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl From<csv::Error> for DbfError {
    fn from(err: csv::Error) -> Self {
        DbfError::CsvError(err.to_string())
    }
}
