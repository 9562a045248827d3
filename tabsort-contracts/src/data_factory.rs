//! Query-result producers.

use crate::error::DataFactoryError;
use crate::table::TableModel;
use std::sync::Arc;
use tabsort_model::Parameters;

/// Produces tabular results for named queries.
///
/// `Ok(None)` means the query ran but produced no table.
pub trait DataFactory: Send + Sync {
    fn query_data(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Result<Option<Arc<dyn TableModel>>, DataFactoryError>;

    fn is_query_executable(&self, query: &str, parameters: &Parameters) -> bool;

    fn query_names(&self) -> Vec<String>;
}

/// Design-time metadata of a data factory.
pub trait DataFactoryCore: Send + Sync {
    /// Parameter fields whose values influence the result of `query`.
    ///
    /// `None` means the dependencies are unknown and every change must be
    /// treated as relevant.
    fn referenced_fields(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Option<Vec<String>>;
}

impl<T: DataFactory + ?Sized> DataFactory for Arc<T> {
    fn query_data(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Result<Option<Arc<dyn TableModel>>, DataFactoryError> {
        (**self).query_data(query, parameters)
    }

    fn is_query_executable(&self, query: &str, parameters: &Parameters) -> bool {
        (**self).is_query_executable(query, parameters)
    }

    fn query_names(&self) -> Vec<String> {
        (**self).query_names()
    }
}

impl<T: DataFactoryCore + ?Sized> DataFactoryCore for Arc<T> {
    fn referenced_fields(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Option<Vec<String>> {
        (**self).referenced_fields(query, parameters)
    }
}
