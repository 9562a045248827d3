use std::path::PathBuf;
use tabsort_core::SortError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config from {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {origin}: {message}")]
    Parse { origin: String, message: String },

    #[error("invalid value for {var}: {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] SortError),
}
