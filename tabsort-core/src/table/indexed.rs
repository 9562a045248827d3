use std::sync::Arc;
use tabsort_contracts::error::TableError;
use tabsort_contracts::sorting::RowMapper;
use tabsort_contracts::table::{MetaTableModel, TableModel, TableModelListener};
use tabsort_model::{ColumnClass, DataAttributes, Value};

/// Row-remapping decorator.
///
/// Column structure and listener registration pass straight through to the
/// backend. Every row-addressed call is translated through the [`RowMapper`]
/// first; a logical row the mapper does not know behaves like a row outside
/// the table.
#[derive(Debug, Clone)]
pub struct IndexedMetaTableModel<M, R> {
    backend: M,
    mapper: R,
}

impl<M: MetaTableModel, R: RowMapper> IndexedMetaTableModel<M, R> {
    pub fn new(backend: M, mapper: R) -> Self {
        Self { backend, mapper }
    }

    pub fn backend(&self) -> &M {
        &self.backend
    }

    pub fn mapper(&self) -> &R {
        &self.mapper
    }

    /// Physical backend row shown at logical `row`.
    pub fn map_row(&self, row: usize) -> Option<usize> {
        self.mapper.map_row(row)
    }

    fn physical(&self, row: usize) -> Result<usize, TableError> {
        self.mapper.map_row(row).ok_or(TableError::RowOutOfBounds {
            row,
            row_count: self.backend.row_count(),
        })
    }
}

impl<M: MetaTableModel, R: RowMapper> TableModel for IndexedMetaTableModel<M, R> {
    fn row_count(&self) -> usize {
        self.backend.row_count()
    }

    fn column_count(&self) -> usize {
        self.backend.column_count()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        self.backend.column_name(column)
    }

    fn column_class(&self, column: usize) -> ColumnClass {
        self.backend.column_class(column)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&Value> {
        let physical = self.mapper.map_row(row)?;
        self.backend.value_at(physical, column)
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        self.mapper
            .map_row(row)
            .is_some_and(|physical| self.backend.is_cell_editable(physical, column))
    }

    fn set_value_at(
        &mut self,
        value: Value,
        row: usize,
        column: usize,
    ) -> Result<(), TableError> {
        let physical = self.physical(row)?;
        self.backend.set_value_at(value, physical, column)
    }

    fn add_table_model_listener(
        &mut self,
        listener: Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.backend.add_table_model_listener(listener)
    }

    fn remove_table_model_listener(
        &mut self,
        listener: &Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.backend.remove_table_model_listener(listener)
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        Some(self)
    }
}

impl<M: MetaTableModel, R: RowMapper> MetaTableModel for IndexedMetaTableModel<M, R> {
    fn is_cell_data_attributes_supported(&self) -> bool {
        self.backend.is_cell_data_attributes_supported()
    }

    fn cell_data_attributes(
        &self,
        row: usize,
        column: usize,
    ) -> Option<&DataAttributes> {
        let physical = self.mapper.map_row(row)?;
        self.backend.cell_data_attributes(physical, column)
    }

    fn column_attributes(&self, column: usize) -> Option<&DataAttributes> {
        self.backend.column_attributes(column)
    }

    fn table_attributes(&self) -> Option<&DataAttributes> {
        self.backend.table_attributes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DefaultTableModel;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tabsort_contracts::table::TableModelEvent;
    use tabsort_model::{AttributeKey, CORE_NAMESPACE};

    fn letters() -> DefaultTableModel {
        DefaultTableModel::builder()
            .column("letter", ColumnClass::Text)
            .rows(["a", "b", "c"].map(|l| vec![Value::from(l)]))
            .cell_attributes(
                2,
                0,
                DataAttributes::new().with(AttributeKey::core("last"), true),
            )
            .editable(true)
            .build()
            .unwrap()
    }

    #[derive(Default)]
    struct Counter(AtomicUsize);

    impl TableModelListener for Counter {
        fn table_changed(&self, _event: &TableModelEvent) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_rows_are_remapped() {
        let model = IndexedMetaTableModel::new(letters(), vec![2, 0, 1]);
        assert_eq!(model.row_count(), 3);
        assert_eq!(model.value_at(0, 0), Some(&Value::from("c")));
        assert_eq!(model.value_at(1, 0), Some(&Value::from("a")));
        assert_eq!(model.value_at(3, 0), None);
        assert_eq!(
            model
                .cell_data_attributes(0, 0)
                .and_then(|attrs| attrs.get(CORE_NAMESPACE, "last")),
            Some(&Value::Bool(true))
        );
        assert!(model.cell_data_attributes(1, 0).is_none());
    }

    #[test]
    fn test_writes_land_on_physical_row() {
        let mut model = IndexedMetaTableModel::new(letters(), vec![2, 0, 1]);
        assert!(model.is_cell_editable(0, 0));
        assert!(!model.is_cell_editable(9, 0));

        model.set_value_at(Value::from("z"), 0, 0).unwrap();
        assert_eq!(model.backend().value_at(2, 0), Some(&Value::from("z")));
        assert_eq!(
            model.set_value_at(Value::from("z"), 7, 0),
            Err(TableError::RowOutOfBounds { row: 7, row_count: 3 })
        );
    }

    #[test]
    fn test_listeners_pass_through() {
        let mut model = IndexedMetaTableModel::new(letters(), vec![1, 2, 0]);
        let counter = Arc::new(Counter::default());
        model.add_table_model_listener(counter.clone()).unwrap();

        model.set_value_at(Value::from("q"), 0, 0).unwrap();
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
        assert_eq!(model.backend().value_at(1, 0), Some(&Value::from("q")));
    }
}
