use std::collections::BTreeMap;
use std::sync::Arc;
use tabsort_contracts::data_factory::{DataFactory, DataFactoryCore};
use tabsort_contracts::error::DataFactoryError;
use tabsort_contracts::table::TableModel;
use tabsort_model::Parameters;

/// Serves fixed, in-memory tables by query name.
#[derive(Debug, Clone, Default)]
pub struct TableDataFactory {
    tables: BTreeMap<String, Arc<dyn TableModel>>,
}

impl TableDataFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_table(
        self,
        query: impl Into<String>,
        table: impl TableModel + 'static,
    ) -> Self {
        self.with_shared_table(query, Arc::new(table))
    }

    pub fn with_shared_table(
        mut self,
        query: impl Into<String>,
        table: Arc<dyn TableModel>,
    ) -> Self {
        self.tables.insert(query.into(), table);
        self
    }

    pub fn table(&self, query: &str) -> Option<&Arc<dyn TableModel>> {
        self.tables.get(query)
    }
}

impl DataFactory for TableDataFactory {
    fn query_data(
        &self,
        query: &str,
        _parameters: &Parameters,
    ) -> Result<Option<Arc<dyn TableModel>>, DataFactoryError> {
        self.tables
            .get(query)
            .map(|table| Some(Arc::clone(table)))
            .ok_or_else(|| DataFactoryError::QueryNotFound(query.to_string()))
    }

    fn is_query_executable(&self, query: &str, _parameters: &Parameters) -> bool {
        self.tables.contains_key(query)
    }

    fn query_names(&self) -> Vec<String> {
        self.tables.keys().cloned().collect()
    }
}

/// Fixed tables ignore parameters: known queries depend on nothing, unknown
/// queries have unknown dependencies.
impl DataFactoryCore for TableDataFactory {
    fn referenced_fields(
        &self,
        query: &str,
        _parameters: &Parameters,
    ) -> Option<Vec<String>> {
        self.tables.contains_key(query).then(Vec::new)
    }
}
