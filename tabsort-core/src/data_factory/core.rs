use crate::constants::QUERY_SORT;
use tabsort_contracts::data_factory::DataFactoryCore;
use tabsort_model::Parameters;

/// Adds the sort parameter to a delegate's field dependencies, so a change of
/// sort constraints counts as a change of the query's inputs.
#[derive(Debug, Clone)]
pub struct SortingDataFactoryCore<C> {
    delegate: C,
    sort_parameter: String,
}

impl<C: DataFactoryCore> SortingDataFactoryCore<C> {
    pub fn new(delegate: C) -> Self {
        Self {
            delegate,
            sort_parameter: QUERY_SORT.to_string(),
        }
    }

    pub fn with_sort_parameter(mut self, name: impl Into<String>) -> Self {
        self.sort_parameter = name.into();
        self
    }

    pub fn delegate(&self) -> &C {
        &self.delegate
    }
}

impl<C: DataFactoryCore> DataFactoryCore for SortingDataFactoryCore<C> {
    fn referenced_fields(
        &self,
        query: &str,
        parameters: &Parameters,
    ) -> Option<Vec<String>> {
        self.delegate
            .referenced_fields(query, parameters)
            .map(|fields| append_sort_field(fields, &self.sort_parameter))
    }
}

pub(crate) fn append_sort_field(mut fields: Vec<String>, sort_parameter: &str) -> Vec<String> {
    if !fields.iter().any(|field| field == sort_parameter) {
        fields.push(sort_parameter.to_string());
    }
    fields
}
