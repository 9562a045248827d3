//! Pluggable sorting strategies.

use crate::table::TableModel;
use std::cmp::Ordering;
use tabsort_model::{SortConstraint, Value};

/// Total ordering over two runtime values.
pub trait ValueComparator: Send + Sync {
    fn compare(&self, a: &Value, b: &Value) -> Ordering;
}

impl<F> ValueComparator for F
where
    F: Fn(&Value, &Value) -> Ordering + Send + Sync,
{
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        self(a, b)
    }
}

/// Computes a row permutation for a table under a list of constraints.
///
/// Implementations must return a bijection over `[0, model.row_count())`
/// where `result[position]` is the source row shown at `position`.
pub trait TableSorter: Send + Sync {
    fn sort(
        &self,
        model: &dyn TableModel,
        constraints: &[SortConstraint],
    ) -> Vec<usize>;
}

/// Maps a logical (view) row to the physical row of a backing model.
pub trait RowMapper: Send + Sync {
    /// `None` when the logical row does not exist.
    fn map_row(&self, row: usize) -> Option<usize>;
}

impl RowMapper for Vec<usize> {
    fn map_row(&self, row: usize) -> Option<usize> {
        self.get(row).copied()
    }
}

impl RowMapper for Box<[usize]> {
    fn map_row(&self, row: usize) -> Option<usize> {
        self.get(row).copied()
    }
}
