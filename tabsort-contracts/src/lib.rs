//! Trait surfaces that describe interactions with tabsort data models.

#![allow(missing_docs)]

pub mod data_factory;
pub mod error;
pub mod performance;
pub mod report;
pub mod sorting;
pub mod table;

/// Frequently used trait combinators for engine and harness crates.
pub mod prelude {
    pub use super::data_factory::{DataFactory, DataFactoryCore};
    pub use super::error::{
        DataFactoryError, ReportProcessingError, TableError,
    };
    pub use super::performance::PerformanceMonitor;
    pub use super::report::ReportPreProcessor;
    pub use super::sorting::{RowMapper, TableSorter, ValueComparator};
    pub use super::table::{
        MetaTableModel, TableModel, TableModelEvent, TableModelListener,
    };
}
