//! Query parameters handed to data factories.

use crate::constraint::SortConstraint;
use crate::value::Value;
use std::collections::BTreeMap;

/// A parameter value as supplied by a query caller.
///
/// Callers assemble these dynamically, so a list may hold anything; consumers
/// that expect a specific element shape filter rather than fail.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ParameterValue {
    Scalar(Value),
    Constraint(SortConstraint),
    List(Vec<ParameterValue>),
}

impl ParameterValue {
    pub fn as_list(&self) -> Option<&[ParameterValue]> {
        match self {
            ParameterValue::List(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_constraint(&self) -> Option<&SortConstraint> {
        match self {
            ParameterValue::Constraint(constraint) => Some(constraint),
            _ => None,
        }
    }

    pub fn as_scalar(&self) -> Option<&Value> {
        match self {
            ParameterValue::Scalar(value) => Some(value),
            _ => None,
        }
    }
}

impl From<Value> for ParameterValue {
    fn from(value: Value) -> Self {
        ParameterValue::Scalar(value)
    }
}

impl From<SortConstraint> for ParameterValue {
    fn from(constraint: SortConstraint) -> Self {
        ParameterValue::Constraint(constraint)
    }
}

impl From<Vec<SortConstraint>> for ParameterValue {
    fn from(constraints: Vec<SortConstraint>) -> Self {
        ParameterValue::List(
            constraints
                .into_iter()
                .map(ParameterValue::Constraint)
                .collect(),
        )
    }
}

impl From<Vec<ParameterValue>> for ParameterValue {
    fn from(items: Vec<ParameterValue>) -> Self {
        ParameterValue::List(items)
    }
}

/// Named parameter row passed alongside a query.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Parameters {
    values: BTreeMap<String, ParameterValue>,
}

impl Parameters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(
        mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(
        &mut self,
        name: impl Into<String>,
        value: impl Into<ParameterValue>,
    ) -> Option<ParameterValue> {
        self.values.insert(name.into(), value.into())
    }

    pub fn get(&self, name: &str) -> Option<&ParameterValue> {
        self.values.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<ParameterValue> {
        self.values.remove(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constraint_list_conversion() {
        let value = ParameterValue::from(vec![
            SortConstraint::ascending("a"),
            SortConstraint::descending("b"),
        ]);
        let list = value.as_list().unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(
            list[1].as_constraint(),
            Some(&SortConstraint::descending("b"))
        );
    }

    #[test]
    fn test_parameters_builder() {
        let params = Parameters::new()
            .with("limit", Value::from(10))
            .with("order", SortConstraint::ascending("x"));
        assert_eq!(params.len(), 2);
        assert!(params.get("limit").unwrap().as_scalar().is_some());
        assert!(params.get("order").unwrap().as_list().is_none());
        assert_eq!(params.names().collect::<Vec<_>>(), vec!["limit", "order"]);
    }
}
