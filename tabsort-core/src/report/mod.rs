//! Report preprocessing that derives sort constraints from groups

pub mod preprocessor;

pub use preprocessor::SortOrderReportPreProcessor;
