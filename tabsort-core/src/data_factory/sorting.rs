use super::core::append_sort_field;
use crate::config::SortEngineConfig;
use crate::performance::{NoopPerformanceMonitor, Stopwatch};
use crate::query::sorting::{ColumnResolver, DefaultTableSorter};
use crate::table::SortingTableModel;
use std::fmt;
use std::sync::Arc;
use tabsort_contracts::data_factory::{DataFactory, DataFactoryCore};
use tabsort_contracts::error::DataFactoryError;
use tabsort_contracts::performance::PerformanceMonitor;
use tabsort_contracts::sorting::TableSorter;
use tabsort_contracts::table::TableModel;
use tabsort_model::{Parameters, SortConstraint};
use tracing::{debug, trace};

/// Sorts query results on their way out of a delegate data factory.
///
/// A result is sorted only when the reserved sort parameter holds a list with
/// at least one constraint that resolves against the result's columns. In
/// every other case the delegate's table is handed back as the same `Arc`.
pub struct SortingDataFactory<D> {
    delegate: D,
    config: SortEngineConfig,
    resolver: ColumnResolver,
    sorter: Arc<dyn TableSorter>,
    monitor: Arc<dyn PerformanceMonitor>,
}

impl<D: fmt::Debug> fmt::Debug for SortingDataFactory<D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortingDataFactory")
            .field("delegate", &self.delegate)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl<D: DataFactory> SortingDataFactory<D> {
    pub fn new(delegate: D) -> Self {
        let config = SortEngineConfig::default();
        Self {
            delegate,
            resolver: ColumnResolver::new(config.indexed_column_prefix.as_str()),
            config,
            sorter: Arc::new(DefaultTableSorter::new()),
            monitor: Arc::new(NoopPerformanceMonitor),
        }
    }

    /// Replace the engine settings after validating them.
    pub fn with_config(mut self, config: SortEngineConfig) -> crate::Result<Self> {
        config.validate()?;
        self.resolver = ColumnResolver::new(config.indexed_column_prefix.as_str());
        self.config = config;
        Ok(self)
    }

    pub fn with_sorter(mut self, sorter: Arc<dyn TableSorter>) -> Self {
        self.sorter = sorter;
        self
    }

    pub fn with_performance_monitor(
        mut self,
        monitor: Arc<dyn PerformanceMonitor>,
    ) -> Self {
        self.monitor = monitor;
        self
    }

    pub fn delegate(&self) -> &D {
        &self.delegate
    }

    pub fn config(&self) -> &SortEngineConfig {
        &self.config
    }

    /// Well-formed constraints carried by the reserved sort parameter.
    ///
    /// `None` when the parameter is absent or not a list. Elements that are
    /// not constraints are skipped.
    pub fn requested_constraints(
        &self,
        parameters: &Parameters,
    ) -> Option<Vec<SortConstraint>> {
        let items = parameters
            .get(&self.config.query_sort_parameter)?
            .as_list()?;
        Some(
            items
                .iter()
                .filter_map(|item| item.as_constraint())
                .cloned()
                .collect(),
        )
    }

    /// Sort `table` according to `parameters`, or return it unchanged.
    pub fn post_process(
        &self,
        query: &str,
        parameters: &Parameters,
        table: Option<Arc<dyn TableModel>>,
    ) -> Option<Arc<dyn TableModel>> {
        let table = table?;
        if !self.config.enabled {
            return Some(table);
        }

        // Empty tables still go through resolution and produce an empty
        // permutation.
        if table.row_count() == 1 || table.column_count() == 0 {
            trace!(query, "result too small to sort");
            return Some(table);
        }

        let Some(requested) = self.requested_constraints(parameters) else {
            return Some(table);
        };

        let resolved = self.resolver.resolve(table.as_ref(), &requested);
        if resolved.is_empty() {
            trace!(
                query,
                requested = requested.len(),
                "no sort constraint resolved"
            );
            return Some(table);
        }

        debug!(
            query,
            rows = table.row_count(),
            constraints = ?resolved.iter().map(ToString::to_string).collect::<Vec<_>>(),
            "sorting query result"
        );
        let watch = Stopwatch::start(self.monitor.as_ref(), &self.config.stopwatch_tag);
        let sorted = SortingTableModel::new(table, resolved, self.sorter.as_ref());
        watch.stop();

        Some(Arc::new(sorted))
    }
}

impl<D: DataFactory> DataFactory for SortingDataFactory<D> {
    fn query_data(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Result<Option<Arc<dyn TableModel>>, DataFactoryError> {
        let table = self.delegate.query_data(query, parameters)?;
        Ok(self.post_process(query, parameters, table))
    }

    fn is_query_executable(&self, query: &str, parameters: &Parameters) -> bool {
        self.delegate.is_query_executable(query, parameters)
    }

    fn query_names(&self) -> Vec<String> {
        self.delegate.query_names()
    }
}

impl<D: DataFactory + DataFactoryCore> DataFactoryCore for SortingDataFactory<D> {
    fn referenced_fields(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Option<Vec<String>> {
        self.delegate
            .referenced_fields(query, parameters)
            .map(|fields| append_sort_field(fields, &self.config.query_sort_parameter))
    }
}
