//! Tabular data surfaces.
//!
//! A [`TableModel`] is a rectangular grid of [`Value`]s with named, classed
//! columns. Reads borrow from the model; writes and listener registration are
//! optional and rejected by default.

use crate::error::TableError;
use std::fmt;
use std::sync::Arc;
use tabsort_model::{ColumnClass, DataAttributes, Value};

/// Change notification delivered to [`TableModelListener`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableModelEvent {
    pub first_row: usize,
    pub last_row: usize,
    /// `None` when every column of the row range changed.
    pub column: Option<usize>,
}

impl TableModelEvent {
    pub fn cell_updated(row: usize, column: usize) -> Self {
        Self {
            first_row: row,
            last_row: row,
            column: Some(column),
        }
    }
}

pub trait TableModelListener: Send + Sync {
    fn table_changed(&self, event: &TableModelEvent);
}

impl fmt::Debug for dyn TableModelListener {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TableModelListener")
    }
}

pub trait TableModel: Send + Sync {
    fn row_count(&self) -> usize;

    fn column_count(&self) -> usize;

    fn column_name(&self, column: usize) -> Option<&str>;

    fn column_class(&self, column: usize) -> ColumnClass;

    /// `None` when the address is outside the table.
    fn value_at(&self, row: usize, column: usize) -> Option<&Value>;

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

    /// Metadata view of this model, for models that carry per-cell
    /// attributes.
    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        None
    }
}

impl fmt::Debug for dyn TableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableModel")
            .field("rows", &self.row_count())
            .field("columns", &self.column_count())
            .finish()
    }
}

/// A table model augmented with column, table and per-cell attributes.
pub trait MetaTableModel: TableModel {
    fn is_cell_data_attributes_supported(&self) -> bool;

    fn cell_data_attributes(
        &self,
        row: usize,
        column: usize,
    ) -> Option<&DataAttributes>;

    fn column_attributes(&self, column: usize) -> Option<&DataAttributes>;

    fn table_attributes(&self) -> Option<&DataAttributes>;
}

/// Shared handles are read-only: writes and listener registration keep the
/// rejecting defaults.
impl<T: TableModel + ?Sized> TableModel for Arc<T> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        (**self).column_name(column)
    }

    fn column_class(&self, column: usize) -> ColumnClass {
        (**self).column_class(column)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&Value> {
        (**self).value_at(row, column)
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        (**self).is_cell_editable(row, column)
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        (**self).as_meta()
    }
}

impl<T: TableModel + ?Sized> TableModel for Box<T> {
    fn row_count(&self) -> usize {
        (**self).row_count()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        (**self).column_name(column)
    }

    fn column_class(&self, column: usize) -> ColumnClass {
        (**self).column_class(column)
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&Value> {
        (**self).value_at(row, column)
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        (**self).is_cell_editable(row, column)
    }

    fn set_value_at(
        &mut self,
        value: Value,
        row: usize,
        column: usize,
    ) -> Result<(), TableError> {
        (**self).set_value_at(value, row, column)
    }

    fn add_table_model_listener(
        &mut self,
        listener: Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        (**self).add_table_model_listener(listener)
    }

    fn remove_table_model_listener(
        &mut self,
        listener: &Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        (**self).remove_table_model_listener(listener)
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        (**self).as_meta()
    }
}
