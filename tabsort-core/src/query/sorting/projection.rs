//! Per-row key projections.
//!
//! A projection is the list of cells a sort compares for one source row, one
//! per resolved sort key. Projections are filled lazily on first access and
//! may be cleared with [`RowProjections::reclaim`] at any time; the next
//! access recomputes them from the (immutable) source row, so reclaiming never
//! changes a comparison result.

use std::cell::OnceCell;
use tabsort_contracts::table::TableModel;
use tabsort_model::Value;

static NULL_CELL: Value = Value::Null;

/// Lazily computed sort-key cells for every row of one model.
pub struct RowProjections<'m> {
    model: &'m dyn TableModel,
    columns: Box<[usize]>,
    slots: Vec<OnceCell<Box<[&'m Value]>>>,
}

impl std::fmt::Debug for RowProjections<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RowProjections")
            .field("rows", &self.slots.len())
            .field("columns", &self.columns)
            .field("populated", &self.populated())
            .finish()
    }
}

impl<'m> RowProjections<'m> {
    pub fn new(model: &'m dyn TableModel, columns: &[usize]) -> Self {
        let rows = model.row_count();
        Self {
            model,
            columns: columns.into(),
            slots: (0..rows).map(|_| OnceCell::new()).collect(),
        }
    }

    pub fn columns(&self) -> &[usize] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Key cells for `row`, in key order. Cells the model cannot supply read
    /// as null. Rows past the end project to an empty key.
    pub fn projection(&self, row: usize) -> &[&'m Value] {
        match self.slots.get(row) {
            Some(slot) => slot.get_or_init(|| self.compute(row)),
            None => &[],
        }
    }

    /// Drop every cached projection.
    pub fn reclaim(&mut self) {
        for slot in &mut self.slots {
            slot.take();
        }
    }

    /// Number of rows whose projection is currently cached.
    pub fn populated(&self) -> usize {
        self.slots.iter().filter(|slot| slot.get().is_some()).count()
    }

    fn compute(&self, row: usize) -> Box<[&'m Value]> {
        let model = self.model;
        self.columns
            .iter()
            .map(|&column| model.value_at(row, column).unwrap_or(&NULL_CELL))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::DefaultTableModel;
    use tabsort_model::ColumnClass;

    fn key<'m>(projections: &RowProjections<'m>, row: usize, key: usize) -> &'m Value {
        projections
            .projection(row)
            .get(key)
            .copied()
            .unwrap_or(&NULL_CELL)
    }

    fn model() -> DefaultTableModel {
        DefaultTableModel::builder()
            .column("a", ColumnClass::Integer)
            .column("b", ColumnClass::Text)
            .row(vec![Value::from(1), Value::from("x")])
            .row(vec![Value::from(2), Value::Null])
            .build()
            .unwrap()
    }

    #[test]
    fn test_projection_is_lazy_and_ordered_by_key() {
        let model = model();
        let projections = RowProjections::new(&model, &[1, 0]);
        assert_eq!(projections.populated(), 0);

        assert_eq!(
            projections.projection(0),
            &[&Value::from("x"), &Value::from(1)]
        );
        assert_eq!(projections.populated(), 1);
        assert_eq!(key(&projections, 1, 0), &Value::Null);
    }

    #[test]
    fn test_reclaim_recomputes_identically() {
        let model = model();
        let mut projections = RowProjections::new(&model, &[0]);
        let before: Vec<Value> = (0..2)
            .map(|row| key(&projections, row, 0).clone())
            .collect();
        assert_eq!(projections.populated(), 2);

        projections.reclaim();
        assert_eq!(projections.populated(), 0);

        let after: Vec<Value> = (0..2)
            .map(|row| key(&projections, row, 0).clone())
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_missing_cells_read_as_null() {
        let model = model();
        let projections = RowProjections::new(&model, &[7]);
        assert_eq!(key(&projections, 0, 0), &Value::Null);
        assert!(projections.projection(5).is_empty());
        assert_eq!(key(&projections, 5, 0), &Value::Null);
    }
}
