use super::{IndexedMetaTableModel, MetaNormalizedTableModel};
use crate::query::sorting::utils::is_permutation;
use std::sync::Arc;
use tabsort_contracts::error::TableError;
use tabsort_contracts::sorting::TableSorter;
use tabsort_contracts::table::{MetaTableModel, TableModel, TableModelListener};
use tabsort_model::{ColumnClass, DataAttributes, SortConstraint, Value};
use tracing::debug;

type SortedView = IndexedMetaTableModel<
    MetaNormalizedTableModel<Arc<dyn TableModel>>,
    Vec<usize>,
>;

/// Sorted, read-only view of a shared table.
///
/// The permutation is computed once at construction; afterwards
/// `value_at(row, column)` reads `backend.value_at(permutation[row], column)`.
/// Column structure and row count are those of the backend.
#[derive(Debug)]
pub struct SortingTableModel {
    view: SortedView,
    constraints: Vec<SortConstraint>,
}

impl SortingTableModel {
    pub fn new(
        backend: Arc<dyn TableModel>,
        constraints: Vec<SortConstraint>,
        sorter: &dyn TableSorter,
    ) -> Self {
        let permutation = sorter.sort(backend.as_ref(), &constraints);
        debug_assert!(
            permutation.len() == backend.row_count() && is_permutation(&permutation),
            "sorter must return a bijection over the backend rows"
        );
        debug!(
            rows = permutation.len(),
            constraints = constraints.len(),
            "built sorted table view"
        );
        Self {
            view: IndexedMetaTableModel::new(
                MetaNormalizedTableModel::new(backend),
                permutation,
            ),
            constraints,
        }
    }

    /// Source row shown at each position.
    pub fn permutation(&self) -> &[usize] {
        self.view.mapper()
    }

    pub fn constraints(&self) -> &[SortConstraint] {
        &self.constraints
    }

    /// The unsorted table this view reads from.
    pub fn backend(&self) -> &Arc<dyn TableModel> {
        self.view.backend().backend()
    }
}

impl TableModel for SortingTableModel {
    fn row_count(&self) -> usize {
        self.view.row_count()
    }

    fn column_count(&self) -> usize {
        self.view.column_count()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        self.view.column_name(column)
    }

    fn column_class(&self, column: usize) -> ColumnClass {
        self.view.column_class(column)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&Value> {
        self.view.value_at(row, column)
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        self.view.is_cell_editable(row, column)
    }

    fn set_value_at(
        &mut self,
        value: Value,
        row: usize,
        column: usize,
    ) -> Result<(), TableError> {
        self.view.set_value_at(value, row, column)
    }

    fn add_table_model_listener(
        &mut self,
        listener: Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.view.add_table_model_listener(listener)
    }

    fn remove_table_model_listener(
        &mut self,
        listener: &Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.view.remove_table_model_listener(listener)
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        Some(self)
    }
}

impl MetaTableModel for SortingTableModel {
    fn is_cell_data_attributes_supported(&self) -> bool {
        self.view.is_cell_data_attributes_supported()
    }

    fn cell_data_attributes(
        &self,
        row: usize,
        column: usize,
    ) -> Option<&DataAttributes> {
        self.view.cell_data_attributes(row, column)
    }

    fn column_attributes(&self, column: usize) -> Option<&DataAttributes> {
        self.view.column_attributes(column)
    }

    fn table_attributes(&self) -> Option<&DataAttributes> {
        self.view.table_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::sorting::DefaultTableSorter;
    use crate::table::DefaultTableModel;
    use tabsort_model::{AttributeKey, CORE_NAMESPACE};

    fn people() -> Arc<dyn TableModel> {
        Arc::new(
            DefaultTableModel::builder()
                .column("Name", ColumnClass::Text)
                .column("Age", ColumnClass::Integer)
                .row(vec![Value::from("Bob"), Value::from(30)])
                .row(vec![Value::from("Al"), Value::from(30)])
                .row(vec![Value::from("Cy"), Value::from(20)])
                .cell_attributes(
                    2,
                    0,
                    DataAttributes::new().with(AttributeKey::core("youngest"), true),
                )
                .editable(true)
                .build()
                .unwrap(),
        )
    }

    #[test]
    fn test_view_reads_through_permutation() {
        let backend = people();
        let sorted = SortingTableModel::new(
            Arc::clone(&backend),
            vec![SortConstraint::ascending("Age")],
            &DefaultTableSorter::new(),
        );

        assert_eq!(sorted.permutation(), &[2, 0, 1]);
        assert_eq!(sorted.row_count(), backend.row_count());
        assert_eq!(sorted.column_count(), backend.column_count());
        for row in 0..sorted.row_count() {
            for column in 0..sorted.column_count() {
                assert_eq!(
                    sorted.value_at(row, column),
                    backend.value_at(sorted.permutation()[row], column)
                );
            }
        }
        for column in 0..backend.column_count() {
            assert_eq!(sorted.column_name(column), backend.column_name(column));
            assert_eq!(sorted.column_class(column), backend.column_class(column));
        }
        assert!(Arc::ptr_eq(sorted.backend(), &backend));
    }

    #[test]
    fn test_metadata_follows_rows() {
        let sorted = SortingTableModel::new(
            people(),
            vec![SortConstraint::ascending("Age")],
            &DefaultTableSorter::new(),
        );
        assert!(sorted.is_cell_data_attributes_supported());
        assert_eq!(
            sorted
                .cell_data_attributes(0, 0)
                .and_then(|attrs| attrs.get(CORE_NAMESPACE, "youngest")),
            Some(&Value::Bool(true))
        );
    }

    #[test]
    fn test_view_is_read_only() {
        let mut sorted = SortingTableModel::new(
            people(),
            vec![SortConstraint::descending("Name")],
            &DefaultTableSorter::new(),
        );
        assert!(!sorted.is_cell_editable(0, 0));
        assert_eq!(
            sorted.set_value_at(Value::from("X"), 0, 0),
            Err(TableError::Unsupported("set_value_at"))
        );
        assert_eq!(sorted.constraints(), &[SortConstraint::descending("Name")]);
    }
}
