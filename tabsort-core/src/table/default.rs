//! In-memory, row-major table model.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tabsort_contracts::error::TableError;
use tabsort_contracts::table::{
    MetaTableModel, TableModel, TableModelEvent, TableModelListener,
};
use tabsort_model::{
    AttributeKey, ColumnClass, DataAttributes, ModelError, ModelResult, Value,
};
use tracing::trace;

#[derive(Debug, Clone, PartialEq)]
struct ColumnSpec {
    name: String,
    class: ColumnClass,
    attributes: DataAttributes,
}

/// Rectangular in-memory table with declared column classes, optional
/// metadata and change listeners.
///
/// Cells are editable only when the model was built with
/// [`DefaultTableModelBuilder::editable`]; writes are checked against the
/// declared column class.
pub struct DefaultTableModel {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Value>>,
    cell_attributes: HashMap<(usize, usize), DataAttributes>,
    table_attributes: DataAttributes,
    editable: bool,
    listeners: Vec<Arc<dyn TableModelListener>>,
}

impl fmt::Debug for DefaultTableModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DefaultTableModel")
            .field(
                "columns",
                &self.columns.iter().map(|c| c.name.as_str()).collect::<Vec<_>>(),
            )
            .field("rows", &self.rows.len())
            .field("editable", &self.editable)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl DefaultTableModel {
    pub fn builder() -> DefaultTableModelBuilder {
        DefaultTableModelBuilder::default()
    }

    /// Row `row` as a slice, in column order.
    pub fn row(&self, row: usize) -> Option<&[Value]> {
        self.rows.get(row).map(Vec::as_slice)
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|column| column.name.as_str())
    }

    fn check_cell(&self, row: usize, column: usize) -> Result<(), TableError> {
        if row >= self.rows.len() {
            return Err(TableError::RowOutOfBounds {
                row,
                row_count: self.rows.len(),
            });
        }
        if column >= self.columns.len() {
            return Err(TableError::ColumnOutOfBounds {
                column,
                column_count: self.columns.len(),
            });
        }
        Ok(())
    }

    fn notify(&self, event: TableModelEvent) {
        trace!(
            row = event.first_row,
            column = ?event.column,
            listeners = self.listeners.len(),
            "table changed"
        );
        for listener in &self.listeners {
            listener.table_changed(&event);
        }
    }
}

impl TableModel for DefaultTableModel {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns.len()
    }

    fn column_name(&self, column: usize) -> Option<&str> {
        self.columns.get(column).map(|c| c.name.as_str())
    }

    fn column_class(&self, column: usize) -> ColumnClass {
        self.columns
            .get(column)
            .map(|c| c.class)
            .unwrap_or_default()
    }

    fn value_at(&self, row: usize, column: usize) -> Option<&Value> {
        self.rows.get(row).and_then(|cells| cells.get(column))
    }

    fn is_cell_editable(&self, row: usize, column: usize) -> bool {
        self.editable && self.check_cell(row, column).is_ok()
    }

    fn set_value_at(
        &mut self,
        value: Value,
        row: usize,
        column: usize,
    ) -> Result<(), TableError> {
        self.check_cell(row, column)?;
        if !self.editable {
            return Err(TableError::NotEditable { row, column });
        }

        let class = self.columns[column].class;
        if !class.accepts(&value) {
            return Err(TableError::TypeMismatch {
                column,
                expected: format!("{class:?}"),
                actual: format!("{:?}", ColumnClass::of(&value)),
            });
        }

        self.rows[row][column] = value;
        self.notify(TableModelEvent::cell_updated(row, column));
        Ok(())
    }

    fn add_table_model_listener(
        &mut self,
        listener: Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.listeners.push(listener);
        Ok(())
    }

    fn remove_table_model_listener(
        &mut self,
        listener: &Arc<dyn TableModelListener>,
    ) -> Result<(), TableError> {
        self.listeners.retain(|l| !Arc::ptr_eq(l, listener));
        Ok(())
    }

    fn as_meta(&self) -> Option<&dyn MetaTableModel> {
        Some(self)
    }
}

impl MetaTableModel for DefaultTableModel {
    fn is_cell_data_attributes_supported(&self) -> bool {
        true
    }

    fn cell_data_attributes(
        &self,
        row: usize,
        column: usize,
    ) -> Option<&DataAttributes> {
        self.cell_attributes.get(&(row, column))
    }

    fn column_attributes(&self, column: usize) -> Option<&DataAttributes> {
        self.columns.get(column).map(|c| &c.attributes)
    }

    fn table_attributes(&self) -> Option<&DataAttributes> {
        Some(&self.table_attributes)
    }
}

/// Builder for [`DefaultTableModel`]
#[derive(Debug, Default)]
pub struct DefaultTableModelBuilder {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<Value>>,
    cell_attributes: HashMap<(usize, usize), DataAttributes>,
    table_attributes: DataAttributes,
    editable: bool,
}

impl DefaultTableModelBuilder {
    pub fn column(mut self, name: impl Into<String>, class: ColumnClass) -> Self {
        self.columns.push(ColumnSpec {
            name: name.into(),
            class,
            attributes: DataAttributes::new(),
        });
        self
    }

    pub fn column_with_attributes(
        mut self,
        name: impl Into<String>,
        class: ColumnClass,
        attributes: DataAttributes,
    ) -> Self {
        self.columns.push(ColumnSpec {
            name: name.into(),
            class,
            attributes,
        });
        self
    }

    pub fn row(mut self, cells: Vec<Value>) -> Self {
        self.rows.push(cells);
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Vec<Value>>) -> Self {
        self.rows.extend(rows);
        self
    }

    pub fn cell_attributes(
        mut self,
        row: usize,
        column: usize,
        attributes: DataAttributes,
    ) -> Self {
        self.cell_attributes.insert((row, column), attributes);
        self
    }

    pub fn table_attribute(
        mut self,
        key: AttributeKey,
        value: impl Into<Value>,
    ) -> Self {
        self.table_attributes.insert(key, value);
        self
    }

    pub fn editable(mut self, editable: bool) -> Self {
        self.editable = editable;
        self
    }

    /// Validate shape and column classes.
    pub fn build(self) -> ModelResult<DefaultTableModel> {
        let width = self.columns.len();
        for (index, cells) in self.rows.iter().enumerate() {
            if cells.len() != width {
                return Err(ModelError::InvalidTable(format!(
                    "row {index} has {} cells, expected {width}",
                    cells.len()
                )));
            }
            for (column, (cell, spec)) in
                cells.iter().zip(&self.columns).enumerate()
            {
                if !spec.class.accepts(cell) {
                    return Err(ModelError::InvalidTable(format!(
                        "cell ({index}, {column}) holds {:?}, column '{}' is {:?}",
                        ColumnClass::of(cell),
                        spec.name,
                        spec.class
                    )));
                }
            }
        }

        if let Some((row, column)) = self
            .cell_attributes
            .keys()
            .find(|(row, column)| *row >= self.rows.len() || *column >= width)
        {
            return Err(ModelError::InvalidTable(format!(
                "cell attributes addressed outside the table at ({row}, {column})"
            )));
        }

        Ok(DefaultTableModel {
            columns: self.columns,
            rows: self.rows,
            cell_attributes: self.cell_attributes,
            table_attributes: self.table_attributes,
            editable: self.editable,
            listeners: Vec::new(),
        })
    }
}
