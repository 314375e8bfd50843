//! Error types for table access and upload parsing.

/// Errors raised while reading or extending a [`crate::Table`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum TableError {
    /// A column the caller asked for is not in the table
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A cell that must be numeric holds something else
    #[error("Non-numeric value {value:?} in column '{column}' at row {row}")]
    NonNumeric {
        column: String,
        row: usize,
        value: String,
    },

    /// A data row is wider than the header
    #[error("Row {row} has {found} fields, expected at most {expected}")]
    RowTooWide {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A column being added does not have one value per row
    #[error("Column '{column}' has {found} values, table has {expected} rows")]
    ColumnLength {
        column: String,
        expected: usize,
        found: usize,
    },
}

/// Every way an uploaded file can fail to become a table.
///
/// The UI collapses all of these into one localized message; the variants
/// only matter for logging.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Malformed upload contents: no ',' between header and payload")]
    MalformedContents,

    #[error("Base64 decode error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Unsupported file format: {0}")]
    UnsupportedFormat(String),

    #[error("CSV is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    #[error("Workbook has no worksheets")]
    EmptyWorkbook,

    #[error(transparent)]
    Table(#[from] TableError),
}
