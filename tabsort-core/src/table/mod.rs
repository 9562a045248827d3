//! Table models and row-remapping decorators
//!
//! [`DefaultTableModel`] is the in-memory source table. The decorators compose
//! into a sorted view without copying cells:
//!
//! ```text
//! SortingTableModel
//!   └─ IndexedMetaTableModel<_, Vec<usize>>   (row remapping)
//!        └─ MetaNormalizedTableModel<_>       (read-only metadata view)
//!             └─ Arc<dyn TableModel>          (shared source)
//! ```

pub mod default;
pub mod indexed;
pub mod meta_normalized;
pub mod sorting;

pub use default::{DefaultTableModel, DefaultTableModelBuilder};
pub use indexed::IndexedMetaTableModel;
pub use meta_normalized::MetaNormalizedTableModel;
pub use sorting::SortingTableModel;
