//! Snapshot of the types surface most engine code needs.
//! Prefer importing from this module instead of individual tree nodes when
//! wiring data factories or report preprocessors.

pub use super::attributes::{AttributeKey, CORE_NAMESPACE, DataAttributes};
pub use super::constraint::SortConstraint;
pub use super::parameters::{ParameterValue, Parameters};
pub use super::report::{Group, GroupBody, ItemBand, Report};
pub use super::value::{ColumnClass, Value};
