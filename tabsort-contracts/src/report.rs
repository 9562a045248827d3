use crate::error::ReportProcessingError;
use tabsort_model::Report;

/// A step run over a report definition before any data is fetched.
pub trait ReportPreProcessor: Send + Sync {
    fn process_report(
        &self,
        report: Report,
    ) -> Result<Report, ReportProcessingError>;

    fn process_subreport(
        &self,
        report: Report,
    ) -> Result<Report, ReportProcessingError> {
        self.process_report(report)
    }
}
