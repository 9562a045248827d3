//! The default permutation sorter.

use super::comparator::GenericComparator;
use super::projection::RowProjections;
use super::utils::{identity_permutation, merge_sort_by};
use std::cmp::Ordering;
use std::collections::HashMap;
use tabsort_contracts::sorting::{TableSorter, ValueComparator};
use tabsort_contracts::table::TableModel;
use tabsort_model::SortConstraint;
use tracing::{debug, trace};

/// Sort direction for a single key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    /// Smallest first; nulls lead.
    Ascending,
    /// Largest first; nulls trail.
    Descending,
}

impl SortDirection {
    pub fn of(constraint: &SortConstraint) -> Self {
        if constraint.is_ascending() {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    /// Apply this direction to an ascending comparison result.
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    }
}

/// A constraint bound to a concrete column.
#[derive(Debug, Clone, PartialEq, Eq)]
struct SortKey {
    column: usize,
    name: String,
    direction: SortDirection,
}

/// Stable multi-key sorter.
///
/// Constraints name columns literally; a constraint whose field is not a
/// column of the model is skipped. Rows are compared key by key with the
/// configured [`ValueComparator`], each key in its own direction, and rows
/// equal on every key keep their source order.
#[derive(Debug, Clone, Default)]
pub struct DefaultTableSorter<C = GenericComparator> {
    comparator: C,
}

impl DefaultTableSorter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: ValueComparator> DefaultTableSorter<C> {
    pub fn with_comparator(comparator: C) -> Self {
        Self { comparator }
    }

    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    fn bind_keys(
        model: &dyn TableModel,
        constraints: &[SortConstraint],
    ) -> Vec<SortKey> {
        let mut columns: HashMap<&str, usize> =
            HashMap::with_capacity(model.column_count());
        for column in 0..model.column_count() {
            if let Some(name) = model.column_name(column) {
                // Duplicate names resolve to the leftmost column.
                columns.entry(name).or_insert(column);
            }
        }

        constraints
            .iter()
            .filter_map(|constraint| {
                let field = constraint.field();
                match columns.get(field) {
                    Some(&column) => Some(SortKey {
                        column,
                        name: field.to_string(),
                        direction: SortDirection::of(constraint),
                    }),
                    None => {
                        debug!(field, "skipping sort constraint on unknown column");
                        None
                    }
                }
            })
            .collect()
    }

    fn compare_rows(
        &self,
        keys: &[SortKey],
        projections: &RowProjections<'_>,
        a: usize,
        b: usize,
    ) -> Ordering {
        let left = projections.projection(a);
        let right = projections.projection(b);
        keys.iter()
            .enumerate()
            .map(|(i, key)| {
                let ordering = match (left.get(i), right.get(i)) {
                    (Some(x), Some(y)) => self.comparator.compare(x, y),
                    _ => Ordering::Equal,
                };
                key.direction.apply(ordering)
            })
            .find(|ordering| ordering.is_ne())
            .unwrap_or_else(|| a.cmp(&b))
    }
}

impl<C: ValueComparator> TableSorter for DefaultTableSorter<C> {
    fn sort(
        &self,
        model: &dyn TableModel,
        constraints: &[SortConstraint],
    ) -> Vec<usize> {
        let rows = model.row_count();
        let keys = Self::bind_keys(model, constraints);
        if keys.is_empty() {
            trace!(rows, "no sort keys resolved; identity permutation");
            return identity_permutation(rows);
        }

        let columns: Vec<usize> = keys.iter().map(|key| key.column).collect();
        let projections = RowProjections::new(model, &columns);
        let mut permutation = identity_permutation(rows);
        merge_sort_by(&mut permutation, |&a, &b| {
            self.compare_rows(&keys, &projections, a, b)
        });

        trace!(
            rows,
            keys = ?keys.iter().map(|key| key.name.as_str()).collect::<Vec<_>>(),
            projected = projections.populated(),
            "computed sort permutation"
        );
        permutation
    }
}
