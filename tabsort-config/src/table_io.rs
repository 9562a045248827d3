//! JSON table documents.
//!
//! ```json
//! {
//!   "columns": ["Name", {"name": "Age", "class": "integer"}],
//!   "rows": [["Bob", 30], ["Al", 30], ["Cy", 20]]
//! }
//! ```
//!
//! Columns are either a bare name (class `any`) or an object with a declared
//! class. Date and timestamp columns take ISO-8601 strings.

use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value as Json};
use tabsort_contracts::table::TableModel;
use tabsort_core::DefaultTableModel;
use tabsort_model::{ColumnClass, ModelError, Value};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TableIoError {
    #[error("invalid table json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("row {row}, column {column}: {message}")]
    Cell {
        row: usize,
        column: usize,
        message: String,
    },

    #[error(transparent)]
    Model(#[from] ModelError),
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum ColumnDecl {
    Name(String),
    Typed {
        name: String,
        #[serde(default)]
        class: ColumnClass,
    },
}

impl ColumnDecl {
    pub fn name(&self) -> &str {
        match self {
            ColumnDecl::Name(name) | ColumnDecl::Typed { name, .. } => name,
        }
    }

    pub fn class(&self) -> ColumnClass {
        match self {
            ColumnDecl::Name(_) => ColumnClass::Any,
            ColumnDecl::Typed { class, .. } => *class,
        }
    }
}

/// Serialized form of a table.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TableDocument {
    pub columns: Vec<ColumnDecl>,
    #[serde(default)]
    pub rows: Vec<Vec<Json>>,
}

impl TableDocument {
    pub fn from_json_str(raw: &str) -> Result<Self, TableIoError> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Snapshot any table model, in its current row order.
    pub fn from_model(model: &dyn TableModel) -> Self {
        let columns = (0..model.column_count())
            .map(|column| ColumnDecl::Typed {
                name: model.column_name(column).unwrap_or_default().to_string(),
                class: model.column_class(column),
            })
            .collect();
        let rows = (0..model.row_count())
            .map(|row| {
                (0..model.column_count())
                    .map(|column| {
                        model
                            .value_at(row, column)
                            .map(value_to_json)
                            .unwrap_or(Json::Null)
                    })
                    .collect()
            })
            .collect();
        Self { columns, rows }
    }

    pub fn into_model(self) -> Result<DefaultTableModel, TableIoError> {
        let classes: Vec<ColumnClass> =
            self.columns.iter().map(ColumnDecl::class).collect();

        let mut rows = Vec::with_capacity(self.rows.len());
        for (row, cells) in self.rows.into_iter().enumerate() {
            let values = cells
                .into_iter()
                .enumerate()
                .map(|(column, cell)| {
                    let class = classes.get(column).copied().unwrap_or_default();
                    json_to_value(cell, class).map_err(|message| TableIoError::Cell {
                        row,
                        column,
                        message,
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            rows.push(values);
        }

        let builder = self
            .columns
            .into_iter()
            .fold(DefaultTableModel::builder(), |builder, decl| {
                let class = decl.class();
                match decl {
                    ColumnDecl::Name(name) | ColumnDecl::Typed { name, .. } => {
                        builder.column(name, class)
                    }
                }
            });
        Ok(builder.rows(rows).build()?)
    }
}

/// Convert a JSON cell to a [`Value`], using the column class to read
/// strings as dates or timestamps.
pub fn json_to_value(json: Json, class: ColumnClass) -> Result<Value, String> {
    Ok(match (json, class) {
        (Json::Null, _) => Value::Null,
        (Json::Bool(b), _) => Value::Bool(b),
        (Json::Number(n), ColumnClass::Float) => {
            Value::Float(n.as_f64().ok_or_else(|| format!("{n} is not a float"))?)
        }
        (Json::Number(n), _) => match n.as_i64() {
            Some(i) => Value::Integer(i),
            None => Value::Float(
                n.as_f64()
                    .ok_or_else(|| format!("{n} is not representable"))?,
            ),
        },
        (Json::String(s), ColumnClass::Date) => Value::Date(
            NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|err| format!("bad date '{s}': {err}"))?,
        ),
        (Json::String(s), ColumnClass::Timestamp) => Value::Timestamp(
            DateTime::parse_from_rfc3339(&s)
                .map_err(|err| format!("bad timestamp '{s}': {err}"))?
                .with_timezone(&Utc),
        ),
        (Json::String(s), _) => Value::Text(s),
        (Json::Array(items), _) => Value::List(
            items
                .into_iter()
                .map(|item| json_to_value(item, ColumnClass::Any))
                .collect::<Result<_, _>>()?,
        ),
        (object @ Json::Object(_), _) => Value::Text(object.to_string()),
    })
}

pub fn value_to_json(value: &Value) -> Json {
    match value {
        Value::Null => Json::Null,
        Value::Integer(i) => Json::from(*i),
        Value::Float(f) => Number::from_f64(*f).map(Json::Number).unwrap_or(Json::Null),
        Value::Bool(b) => Json::Bool(*b),
        Value::Text(s) => Json::String(s.clone()),
        Value::Date(d) => Json::String(d.format("%Y-%m-%d").to_string()),
        Value::Timestamp(ts) => {
            Json::String(ts.to_rfc3339_opts(SecondsFormat::Millis, true))
        }
        Value::Bytes(_) => Json::String(value.to_string()),
        Value::List(items) => Json::Array(items.iter().map(value_to_json).collect()),
    }
}
