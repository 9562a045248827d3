use std::fmt::{self, Display};

/// Errors produced by model constructors and validation routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    InvalidTable(String),
}

impl Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::InvalidTable(msg) => write!(f, "invalid table: {msg}"),
        }
    }
}

impl std::error::Error for ModelError {}

pub type Result<T> = std::result::Result<T, ModelError>;
