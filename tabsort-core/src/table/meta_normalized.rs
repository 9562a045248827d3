use std::sync::Arc;
use tabsort_contracts::error::TableError;
use tabsort_contracts::table::{MetaTableModel, TableModel, TableModelListener};
use tabsort_model::{ColumnClass, DataAttributes, Value};

/// Read-only metadata view over an arbitrary table model.
///
/// Structural queries and cell values always come from the wrapped model.
/// Attribute queries delegate to the model's [`TableModel::as_meta`] view when
/// it has one and otherwise answer "unsupported". Writes and listener
/// registration are rejected.
#[derive(Debug, Clone)]
pub struct MetaNormalizedTableModel<T> {
    backend: T,
}

impl<T: TableModel> MetaNormalizedTableModel<T> {
    pub fn new(backend: T) -> Self {
        Self { backend }
    }

    pub fn backend(&self) -> &T {
        &self.backend
    }

    pub fn into_inner(self) -> T {
        self.backend
    }

    fn meta(&self) -> Option<&dyn MetaTableModel> {
        self.backend.as_meta()
    }
}

impl<T: TableModel> TableModel for MetaNormalizedTableModel<T> {
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
        self.backend.value_at(row, column)
    }

    fn is_cell_editable(&self, _row: usize, _column: usize) -> bool {
        false
    }

    fn set_value_at(
        &mut self,
        _value: Value,
        _row: usize,
        _column: usize,
    ) -> Result<(), TableError> {
        Err(TableError::Unsupported("set_value_at"))
    }

    fn add_table_model_listener(
        &mut self,
        _listener: Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        Err(TableError::Unsupported("add_table_model_listener"))
    }

    fn remove_table_model_listener(
        &mut self,
        _listener: &Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        Err(TableError::Unsupported("remove_table_model_listener"))
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        Some(self)
    }
}

impl<T: TableModel> MetaTableModel for MetaNormalizedTableModel<T> {
    fn is_cell_data_attributes_supported(&self) -> bool {
        self.meta()
            .is_some_and(|meta| meta.is_cell_data_attributes_supported())
    }

    fn cell_data_attributes(
        &self,
        row: usize,
        column: usize,
    ) -> Option<&DataAttributes> {
        self.meta()
            .filter(|meta| meta.is_cell_data_attributes_supported())
            .and_then(|meta| meta.cell_data_attributes(row, column))
    }

    fn column_attributes(&self, column: usize) -> Option<&DataAttributes> {
        self.meta().and_then(|meta| meta.column_attributes(column))
    }

    fn table_attributes(&self) -> Option<&DataAttributes> {
        self.meta().and_then(|meta| meta.table_attributes())
    }
}
