//! # tabsort core
//!
//! Constraint-driven sort engine for tabular query results.
//!
//! ## Overview
//!
//! Given an already-fetched table and a list of [`SortConstraint`]s, the
//! engine computes a row permutation and exposes a sorted *view* of the
//! table. Cell data is never copied or mutated.
//!
//! - **Comparison**: [`GenericComparator`] orders heterogeneous runtime values
//!   (numbers numerically, same-kind orderables natively, everything else by
//!   string form) and never fails.
//! - **Resolution**: [`ColumnResolver`] rewrites positional aliases
//!   (`::column::N`) to literal column names and drops what cannot resolve.
//! - **Sorting**: [`DefaultTableSorter`] computes a stable, total-order
//!   permutation over lazily projected row keys.
//! - **Views**: [`MetaNormalizedTableModel`], [`IndexedMetaTableModel`] and
//!   [`SortingTableModel`] compose into a permuted, metadata-capable view.
//! - **Interception**: [`SortingDataFactory`] sorts query results on the way
//!   out of a delegate data factory when the reserved `query-sort` parameter
//!   carries constraints.
//! - **Preprocessing**: [`SortOrderReportPreProcessor`] derives the constraint
//!   list from a report's nested group chain.
//!
//! ## Examples
//!
//! ```
//! use std::sync::Arc;
//! use tabsort_contracts::prelude::*;
//! use tabsort_core::{DefaultTableModel, SortingDataFactory, TableDataFactory, QUERY_SORT};
//! use tabsort_model::{ColumnClass, Parameters, SortConstraint, Value};
//!
//! let table = DefaultTableModel::builder()
//!     .column("Name", ColumnClass::Text)
//!     .column("Age", ColumnClass::Integer)
//!     .row(vec![Value::from("Bob"), Value::from(30)])
//!     .row(vec![Value::from("Al"), Value::from(30)])
//!     .row(vec![Value::from("Cy"), Value::from(20)])
//!     .build()
//!     .unwrap();
//!
//! let factory = SortingDataFactory::new(
//!     TableDataFactory::new().with_table("people", table),
//! );
//! let params = Parameters::new()
//!     .with(QUERY_SORT, vec![SortConstraint::ascending("Age")]);
//!
//! let sorted = factory.query_data("people", &params).unwrap().unwrap();
//! assert_eq!(sorted.value_at(0, 0), Some(&Value::from("Cy")));
//! assert_eq!(sorted.value_at(1, 0), Some(&Value::from("Bob")));
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![allow(missing_docs)]

/// Configuration for the sort engine
pub mod config;

/// Reserved parameter keys, prefixes and stopwatch tags
pub mod constants;

/// Query-result interception and field-dependency metadata
pub mod data_factory;

/// Error types and error handling utilities
pub mod error;

/// Stopwatch scopes and performance monitors
pub mod performance;

/// Comparison, column resolution and permutation sorting
pub mod query;

/// Report preprocessing that derives sort constraints from groups
pub mod report;

/// Table models and row-remapping decorators
pub mod table;

pub use config::SortEngineConfig;
pub use constants::{INDEXED_COLUMN_PREFIX, QUERY_SORT, QUERY_SORT_STOPWATCH};
pub use data_factory::{SortingDataFactory, SortingDataFactoryCore, TableDataFactory};
pub use error::{Result, SortError};
pub use performance::{NoopPerformanceMonitor, RecordingPerformanceMonitor, Stopwatch};
pub use query::sorting::{
    ColumnResolver, DefaultTableSorter, GenericComparator, RowProjections, SortDirection,
};
pub use report::SortOrderReportPreProcessor;
pub use table::{
    DefaultTableModel, DefaultTableModelBuilder, IndexedMetaTableModel, MetaNormalizedTableModel,
    SortingTableModel,
};

pub use tabsort_model::SortConstraint;
