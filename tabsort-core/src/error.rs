use tabsort_contracts::error::{DataFactoryError, ReportProcessingError, TableError};
use tabsort_model::ModelError;
use thiserror::Error;

/// Errors surfaced by the sort engine.
#[derive(Error, Debug)]
pub enum SortError {
    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("Table error: {0}")]
    Table(#[from] TableError),

    #[error("Data factory error: {0}")]
    DataFactory(#[from] DataFactoryError),

    #[error("Report processing error: {0}")]
    ReportProcessing(#[from] ReportProcessingError),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, SortError>;
