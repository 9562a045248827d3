//! End-to-end: report preprocessing, query-time sorting and dependency
//! metadata working together.

use std::sync::Arc;
use tabsort_contracts::prelude::*;
use tabsort_core::{
    DefaultTableModel, QUERY_SORT, QUERY_SORT_STOPWATCH, RecordingPerformanceMonitor,
    SortOrderReportPreProcessor, SortingDataFactory, SortingDataFactoryCore, TableDataFactory,
};
use tabsort_model::{ColumnClass, Group, Parameters, Report, SortConstraint, Value};

fn people() -> DefaultTableModel {
    DefaultTableModel::builder()
        .column("Name", ColumnClass::Text)
        .column("Age", ColumnClass::Integer)
        .row(vec![Value::from("Bob"), Value::from(30)])
        .row(vec![Value::from("Al"), Value::from(30)])
        .row(vec![Value::from("Cy"), Value::from(20)])
        .build()
        .expect("valid table")
}

fn rows(table: &dyn TableModel) -> Vec<(String, String)> {
    (0..table.row_count())
        .map(|row| {
            (
                table.value_at(row, 0).unwrap().to_string(),
                table.value_at(row, 1).unwrap().to_string(),
            )
        })
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(a, b)| (a.to_string(), b.to_string()))
        .collect()
}

#[test]
fn test_age_ascending_keeps_equal_ages_in_source_order() {
    let factory = SortingDataFactory::new(TableDataFactory::new().with_table("people", people()));
    let params = Parameters::new().with(QUERY_SORT, vec![SortConstraint::ascending("Age")]);

    let sorted = factory.query_data("people", &params).unwrap().unwrap();
    assert_eq!(
        rows(sorted.as_ref()),
        pairs(&[("Cy", "20"), ("Bob", "30"), ("Al", "30")])
    );
}

#[test]
fn test_age_descending_then_name_ascending() {
    let factory = SortingDataFactory::new(TableDataFactory::new().with_table("people", people()));
    let params = Parameters::new().with(
        QUERY_SORT,
        vec![
            SortConstraint::descending("Age"),
            SortConstraint::ascending("Name"),
        ],
    );

    let sorted = factory.query_data("people", &params).unwrap().unwrap();
    assert_eq!(
        rows(sorted.as_ref()),
        pairs(&[("Al", "30"), ("Bob", "30"), ("Cy", "20")])
    );
}

#[test]
fn test_preprocessed_report_drives_query_sort() {
    let report = Report::new(
        "people",
        Group::new("by-age")
            .with_sort_constraint(SortConstraint::descending("::column::1"))
            .with_sub_group(
                Group::new("by-name").with_sort_constraint(SortConstraint::ascending("Name")),
            ),
    )
    .with_auto_sort(true);

    let report = SortOrderReportPreProcessor::new()
        .process_report(report)
        .unwrap();
    let constraints = report
        .computed_sort_constraints()
        .expect("auto-sort report has computed constraints")
        .to_vec();

    let monitor = Arc::new(RecordingPerformanceMonitor::new());
    let factory = SortingDataFactory::new(TableDataFactory::new().with_table("people", people()))
        .with_performance_monitor(monitor.clone());
    let params = Parameters::new().with(QUERY_SORT, constraints);

    let sorted = factory.query_data("people", &params).unwrap().unwrap();
    assert_eq!(
        rows(sorted.as_ref()),
        pairs(&[("Al", "30"), ("Bob", "30"), ("Cy", "20")])
    );
    assert_eq!(monitor.count(QUERY_SORT_STOPWATCH), 1);
}

#[test]
fn test_sorted_result_exposes_metadata_view() {
    let factory = SortingDataFactory::new(TableDataFactory::new().with_table("people", people()));
    let params = Parameters::new().with(QUERY_SORT, vec![SortConstraint::ascending("Name")]);

    let sorted = factory.query_data("people", &params).unwrap().unwrap();
    let meta = sorted.as_meta().expect("sorted views are meta models");
    assert!(meta.is_cell_data_attributes_supported());
    assert_eq!(meta.column_name(1), Some("Age"));
}

#[test]
fn test_referenced_fields_track_sort_parameter() {
    let core = SortingDataFactoryCore::new(TableDataFactory::new().with_table("people", people()));
    let params = Parameters::new();

    assert_eq!(
        core.referenced_fields("people", &params),
        Some(vec![QUERY_SORT.to_string()])
    );
    assert_eq!(core.referenced_fields("unknown", &params), None);
}
