use std::fmt::{self, Display};

/// Failures of table model operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableError {
    /// The model does not support the operation (read-only views, shared
    /// handles).
    Unsupported(&'static str),
    RowOutOfBounds { row: usize, row_count: usize },
    ColumnOutOfBounds { column: usize, column_count: usize },
    NotEditable { row: usize, column: usize },
    TypeMismatch { column: usize, expected: String, actual: String },
}

impl Display for TableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableError::Unsupported(op) => {
                write!(f, "operation not supported: {op}")
            }
            TableError::RowOutOfBounds { row, row_count } => {
                write!(f, "row {row} out of range [0, {row_count})")
            }
            TableError::ColumnOutOfBounds {
                column,
                column_count,
            } => write!(f, "column {column} out of range [0, {column_count})"),
            TableError::NotEditable { row, column } => {
                write!(f, "cell ({row}, {column}) is not editable")
            }
            TableError::TypeMismatch {
                column,
                expected,
                actual,
            } => write!(
                f,
                "column {column} expects {expected} values, got {actual}"
            ),
        }
    }
}

impl std::error::Error for TableError {}

/// Failures raised by data factories while producing query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataFactoryError {
    QueryNotFound(String),
    Backend(String),
}

impl Display for DataFactoryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataFactoryError::QueryNotFound(query) => {
                write!(f, "query not found: {query}")
            }
            DataFactoryError::Backend(msg) => write!(f, "backend error: {msg}"),
        }
    }
}

impl std::error::Error for DataFactoryError {}

/// Failure of a report preprocessing step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportProcessingError(pub String);

impl Display for ReportProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "report processing failed: {}", self.0)
    }
}

impl std::error::Error for ReportProcessingError {}
