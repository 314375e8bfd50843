use nicu_core::TableError;

/// Errors raised while building a dashboard figure.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FigureError {
    /// The button was clicked before any file was parsed
    #[error("No uploaded table to chart")]
    NoData,

    /// A fixed row index points past the end of the table
    #[error("Row {row} of column '{column}' does not exist (table has {len} rows)")]
    RowOutOfRange {
        column: String,
        row: usize,
        len: usize,
    },

    /// A subplot position outside the grid or on an empty cell
    #[error("No subplot at row {row}, col {col}")]
    NoSubplot { row: usize, col: usize },

    /// The grid specification is inconsistent
    #[error("Invalid subplot grid: {0}")]
    InvalidGrid(String),

    #[error(transparent)]
    Table(#[from] TableError),
}
