//! Core data model definitions shared across tabsort crates.
#![allow(missing_docs)]

pub mod attributes;
pub mod constraint;
pub mod error;
pub mod parameters;
pub mod prelude;
pub mod report;
pub mod value;

// Intentionally curated re-exports for downstream consumers.
pub use attributes::{AttributeKey, CORE_NAMESPACE, DataAttributes};
pub use constraint::SortConstraint;
pub use error::{ModelError, Result as ModelResult};
pub use parameters::{ParameterValue, Parameters};
pub use report::{AUTO_SORT, Group, GroupBody, ItemBand, Report};
pub use value::{ColumnClass, OrderableKind, Value, ValueKind};
