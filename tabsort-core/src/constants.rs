/// Reserved query parameter carrying the list of sort constraints.
pub const QUERY_SORT: &str = "query-sort";

/// Prefix of positional column aliases: `::column::2` names the third column
/// of the result being sorted.
pub const INDEXED_COLUMN_PREFIX: &str = "::column::";

/// Stopwatch scope reported around every query-result sort.
pub const QUERY_SORT_STOPWATCH: &str = "ReportProcessing(Query-Sort)";
