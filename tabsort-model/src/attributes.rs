//! Namespaced metadata attributes attached to reports, columns and cells.

use crate::value::Value;
use std::collections::BTreeMap;

/// Namespace for attributes the engine itself defines.
pub const CORE_NAMESPACE: &str = "tabsort/core";

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttributeKey {
    pub namespace: String,
    pub name: String,
}

impl AttributeKey {
    pub fn new(namespace: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
            name: name.into(),
        }
    }

    pub fn core(name: impl Into<String>) -> Self {
        Self::new(CORE_NAMESPACE, name)
    }
}

/// An ordered bag of namespaced attribute values, keyed by namespace and
/// then by name.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DataAttributes {
    entries: BTreeMap<String, BTreeMap<String, Value>>,
}

impl DataAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: AttributeKey, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: AttributeKey,
        value: impl Into<Value>,
    ) -> Option<Value> {
        self.entries
            .entry(key.namespace)
            .or_default()
            .insert(key.name, value.into())
    }

    pub fn get(&self, namespace: &str, name: &str) -> Option<&Value> {
        self.entries.get(namespace)?.get(name)
    }

    /// `(namespace, name)` pairs in order.
    pub fn keys(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().flat_map(|(namespace, names)| {
            names
                .keys()
                .map(move |name| (namespace.as_str(), name.as_str()))
        })
    }

    pub fn len(&self) -> usize {
        self.entries.values().map(BTreeMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_namespaced_lookup() {
        let attrs = DataAttributes::new()
            .with(AttributeKey::core("label"), "Age")
            .with(AttributeKey::new("ui", "label"), "Years");
        assert_eq!(attrs.get(CORE_NAMESPACE, "label"), Some(&Value::from("Age")));
        assert_eq!(attrs.get("ui", "label"), Some(&Value::from("Years")));
        assert_eq!(attrs.get("ui", "missing"), None);
        assert_eq!(attrs.len(), 2);
        assert_eq!(
            attrs.keys().collect::<Vec<_>>(),
            vec![(CORE_NAMESPACE, "label"), ("ui", "label")]
        );
    }

    #[test]
    fn test_insert_replaces_within_namespace() {
        let mut attrs = DataAttributes::new();
        assert_eq!(attrs.insert(AttributeKey::core("auto-sort"), false), None);
        assert_eq!(
            attrs.insert(AttributeKey::core("auto-sort"), true),
            Some(Value::Bool(false))
        );
        assert_eq!(attrs.get(CORE_NAMESPACE, "auto-sort"), Some(&Value::Bool(true)));
        assert_eq!(attrs.get("other", "auto-sort"), None);
        assert_eq!(attrs.len(), 1);
        assert!(!attrs.is_empty());
    }
}
