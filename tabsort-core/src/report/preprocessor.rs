use tabsort_contracts::error::ReportProcessingError;
use tabsort_contracts::report::ReportPreProcessor;
use tabsort_model::{Group, Report, SortConstraint, Value};
use tracing::debug;

/// Derives a report's sort order from its group chain.
///
/// Runs only when the report's `auto-sort` attribute is exactly `true`. The
/// sort constraints of every group from the root group inward are
/// concatenated, outermost first, and stored as the report's computed sort
/// constraints. The item band below the innermost group is never consulted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SortOrderReportPreProcessor;

impl SortOrderReportPreProcessor {
    pub fn new() -> Self {
        Self
    }

    /// Constraints of `root` and its nested groups, outer to inner.
    pub fn collect_group_constraints(root: &Group) -> Vec<SortConstraint> {
        std::iter::successors(Some(root), |group| group.sub_group())
            .flat_map(|group| group.sort_constraints().iter().cloned())
            .collect()
    }

    /// Process `report` and, recursively, all of its subreports.
    pub fn process_tree(
        &self,
        report: Report,
    ) -> Result<Report, ReportProcessingError> {
        let report = self.process_report(report)?;
        self.process_subreports_of(report)
    }

    fn process_subreports_of(
        &self,
        mut report: Report,
    ) -> Result<Report, ReportProcessingError> {
        let subreports = report
            .take_subreports()
            .into_iter()
            .map(|sub| {
                let sub = self.process_subreport(sub)?;
                self.process_subreports_of(sub)
            })
            .collect::<Result<Vec<_>, _>>()?;
        report.set_subreports(subreports);
        Ok(report)
    }

    fn apply(&self, mut report: Report) -> Report {
        if report.auto_sort() != Some(&Value::Bool(true)) {
            return report;
        }

        let constraints = Self::collect_group_constraints(report.root_group());
        debug!(
            report = report.name(),
            constraints = constraints.len(),
            "derived sort order from groups"
        );
        report.set_computed_sort_constraints(constraints);
        report
    }
}

impl ReportPreProcessor for SortOrderReportPreProcessor {
    fn process_report(
        &self,
        report: Report,
    ) -> Result<Report, ReportProcessingError> {
        Ok(self.apply(report))
    }

    fn process_subreport(
        &self,
        report: Report,
    ) -> Result<Report, ReportProcessingError> {
        Ok(self.apply(report))
    }
}
