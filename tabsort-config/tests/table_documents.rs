use std::sync::Arc;

use serde_json::json;
use tabsort_config::TableDocument;
use tabsort_contracts::{data_factory::DataFactory, table::TableModel};
use tabsort_core::{QUERY_SORT, SortingDataFactory, TableDataFactory};
use tabsort_model::{Parameters, SortConstraint};

const PEOPLE: &str = r#"{
    "columns": ["Name", {"name": "Age", "class": "integer"}],
    "rows": [["Bob", 30], ["Al", 30], ["Cy", 20], ["Dee", null]]
}"#;

fn sort_document(raw: &str, constraints: Vec<SortConstraint>) -> serde_json::Value {
    let table = TableDocument::from_json_str(raw)
        .and_then(TableDocument::into_model)
        .expect("valid document");
    let factory = SortingDataFactory::new(TableDataFactory::new().with_table("t", table));
    let params = Parameters::new().with(QUERY_SORT, constraints);

    let sorted: Arc<dyn TableModel> = factory.query_data("t", &params).unwrap().unwrap();
    serde_json::to_value(TableDocument::from_model(sorted.as_ref())).unwrap()
}

#[test]
fn sorted_document_lists_rows_in_view_order() {
    let output = sort_document(PEOPLE, vec!["Age:desc".parse().unwrap()]);

    assert_eq!(
        output["rows"],
        json!([["Bob", 30], ["Al", 30], ["Cy", 20], ["Dee", null]])
    );
    assert_eq!(output["columns"][1], json!({"name": "Age", "class": "integer"}));
}

#[test]
fn nulls_lead_ascending_and_aliases_resolve() {
    let output = sort_document(
        PEOPLE,
        vec!["::column::1".parse().unwrap(), "Name".parse().unwrap()],
    );

    assert_eq!(
        output["rows"],
        json!([["Dee", null], ["Cy", 20], ["Al", 30], ["Bob", 30]])
    );
}

#[test]
fn unknown_keys_leave_document_order() {
    let output = sort_document(PEOPLE, vec![SortConstraint::ascending("Height")]);

    assert_eq!(output["rows"][0], json!(["Bob", 30]));
    assert_eq!(output["rows"][3], json!(["Dee", null]));
}

#[test]
fn sort_arguments_with_colons_degrade_instead_of_failing() {
    let raw = r#"{
        "columns": ["Name", "Time:UTC"],
        "rows": [["late", "2024-01-02"], ["early", "2024-01-01"]]
    }"#;

    let by_name_with_colon = sort_document(raw, vec!["Time:UTC".parse().unwrap()]);
    assert_eq!(by_name_with_colon["rows"][0], json!(["early", "2024-01-01"]));

    let malformed_alias = sort_document(raw, vec!["::column::x".parse().unwrap()]);
    assert_eq!(malformed_alias["rows"][0], json!(["late", "2024-01-02"]));
}
