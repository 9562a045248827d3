//! Column alias resolution.
//!
//! Constraint fields are either literal column names or positional aliases
//! built from the indexed-column prefix and a column ordinal. Aliases resolve
//! against the column order of the table actually being sorted, not the
//! declared schema of the query that produced it.

use crate::constants::INDEXED_COLUMN_PREFIX;
use tabsort_contracts::table::TableModel;
use tabsort_model::SortConstraint;
use tracing::debug;

/// Rewrites positional aliases (`<prefix>N`) to the name of column `N`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnResolver {
    prefix: String,
}

impl Default for ColumnResolver {
    fn default() -> Self {
        Self::new(INDEXED_COLUMN_PREFIX)
    }
}

impl ColumnResolver {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Rewrite positional aliases to literal column names, dropping every
    /// constraint that cannot resolve. Order of the survivors is preserved.
    ///
    /// Literal fields are kept as they are; whether the column exists is
    /// checked later by the sorter.
    pub fn resolve(
        &self,
        model: &dyn TableModel,
        constraints: &[SortConstraint],
    ) -> Vec<SortConstraint> {
        constraints
            .iter()
            .filter_map(|constraint| self.resolve_one(model, constraint))
            .collect()
    }

    fn resolve_one(
        &self,
        model: &dyn TableModel,
        constraint: &SortConstraint,
    ) -> Option<SortConstraint> {
        let field = constraint.field();
        if field.is_empty() {
            debug!("dropping sort constraint with an empty field");
            return None;
        }

        let Some(suffix) = field.strip_prefix(self.prefix.as_str()) else {
            return Some(constraint.clone());
        };

        let index = match suffix.parse::<i64>() {
            Ok(index) => index,
            Err(_) => {
                debug!(field, "dropping indexed sort constraint: not a number");
                return None;
            }
        };

        let column_count = model.column_count();
        let column = usize::try_from(index)
            .ok()
            .filter(|column| *column < column_count);
        let Some(column) = column else {
            debug!(
                field,
                index, column_count, "dropping indexed sort constraint: out of range"
            );
            return None;
        };

        match model.column_name(column) {
            Some(name) if !name.is_empty() => {
                Some(constraint.with_field(name))
            }
            _ => {
                debug!(
                    field,
                    column, "dropping indexed sort constraint: column has no name"
                );
                None
            }
        }
    }
}
