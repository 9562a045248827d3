use crate::{
    SortError,
    constants::{INDEXED_COLUMN_PREFIX, QUERY_SORT, QUERY_SORT_STOPWATCH},
};
use serde::{Deserialize, Serialize};

/// Runtime settings of the sort engine.
///
/// The defaults reproduce the reserved names every report author relies on;
/// override them only when embedding the engine next to another engine that
/// already claims those names.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SortEngineConfig {
    /// Master switch for query-result sorting. When off, the sorting data
    /// factory hands every result through untouched.
    pub enabled: bool,
    /// Parameter key under which callers pass their constraint list.
    pub query_sort_parameter: String,
    /// Prefix that marks a constraint field as a positional column alias.
    pub indexed_column_prefix: String,
    /// Tag of the stopwatch scope reported around each sort.
    pub stopwatch_tag: String,
}

impl Default for SortEngineConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            query_sort_parameter: QUERY_SORT.to_string(),
            indexed_column_prefix: INDEXED_COLUMN_PREFIX.to_string(),
            stopwatch_tag: QUERY_SORT_STOPWATCH.to_string(),
        }
    }
}

impl SortEngineConfig {
    /// Reject settings that would make every constraint unreachable.
    pub fn validate(&self) -> crate::Result<()> {
        if self.query_sort_parameter.trim().is_empty() {
            return Err(SortError::InvalidConfig(
                "query_sort_parameter must not be empty".to_string(),
            ));
        }
        if self.indexed_column_prefix.is_empty() {
            return Err(SortError::InvalidConfig(
                "indexed_column_prefix must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
