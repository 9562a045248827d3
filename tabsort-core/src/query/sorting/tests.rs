//! Tests for the permutation sorter

#[cfg(test)]
mod tests {
    use crate::query::sorting::{ColumnResolver, DefaultTableSorter};
    use crate::table::DefaultTableModel;
    use tabsort_contracts::sorting::TableSorter;
    use tabsort_contracts::table::TableModel;
    use tabsort_model::{ColumnClass, SortConstraint, Value};

    fn people() -> DefaultTableModel {
        DefaultTableModel::builder()
            .column("Name", ColumnClass::Text)
            .column("Age", ColumnClass::Integer)
            .row(vec![Value::from("Bob"), Value::from(30)])
            .row(vec![Value::from("Al"), Value::from(30)])
            .row(vec![Value::from("Cy"), Value::from(20)])
            .build()
            .unwrap()
    }

    fn single_column(values: Vec<Value>) -> DefaultTableModel {
        values
            .into_iter()
            .fold(
                DefaultTableModel::builder().column("v", ColumnClass::Any),
                |builder, value| builder.row(vec![value]),
            )
            .build()
            .unwrap()
    }

    fn names(model: &dyn TableModel, permutation: &[usize]) -> Vec<String> {
        permutation
            .iter()
            .map(|&row| model.value_at(row, 0).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_single_key_keeps_ties_in_source_order() {
        let model = people();
        let permutation = DefaultTableSorter::new()
            .sort(&model, &[SortConstraint::ascending("Age")]);

        assert_eq!(permutation, vec![2, 0, 1]);
        assert_eq!(names(&model, &permutation), ["Cy", "Bob", "Al"]);
    }

    #[test]
    fn test_mixed_directions_apply_per_key() {
        let model = people();
        let permutation = DefaultTableSorter::new().sort(
            &model,
            &[
                SortConstraint::descending("Age"),
                SortConstraint::ascending("Name"),
            ],
        );

        assert_eq!(names(&model, &permutation), ["Al", "Bob", "Cy"]);
    }

    #[test]
    fn test_numbers_sort_numerically() {
        let model =
            single_column(vec![Value::from(10), Value::from(2), Value::from(1)]);
        let permutation =
            DefaultTableSorter::new().sort(&model, &[SortConstraint::ascending("v")]);

        assert_eq!(names(&model, &permutation), ["1", "2", "10"]);
    }

    #[test]
    fn test_nulls_first_ascending_last_descending() {
        let model = single_column(vec![
            Value::from("b"),
            Value::Null,
            Value::from("a"),
        ]);
        let sorter = DefaultTableSorter::new();

        let ascending = sorter.sort(&model, &[SortConstraint::ascending("v")]);
        assert_eq!(ascending, vec![1, 2, 0]);

        let descending = sorter.sort(&model, &[SortConstraint::descending("v")]);
        assert_eq!(descending, vec![0, 2, 1]);
    }

    #[test]
    fn test_unknown_columns_are_ignored() {
        let model = people();
        let permutation = DefaultTableSorter::new().sort(
            &model,
            &[
                SortConstraint::ascending("Missing"),
                SortConstraint::ascending("Name"),
            ],
        );

        assert_eq!(names(&model, &permutation), ["Al", "Bob", "Cy"]);
    }

    #[test]
    fn test_no_resolvable_keys_is_identity() {
        let model = people();
        let sorter = DefaultTableSorter::new();

        assert_eq!(sorter.sort(&model, &[]), vec![0, 1, 2]);
        assert_eq!(
            sorter.sort(&model, &[SortConstraint::descending("Nope")]),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn test_empty_table_yields_empty_permutation() {
        let model = DefaultTableModel::builder()
            .column("v", ColumnClass::Any)
            .build()
            .unwrap();
        let permutation =
            DefaultTableSorter::new().sort(&model, &[SortConstraint::ascending("v")]);
        assert!(permutation.is_empty());
    }

    #[test]
    fn test_heterogeneous_column_sorts_without_panicking() {
        let model = single_column(vec![
            Value::from("10"),
            Value::from(9),
            Value::from(true),
            Value::Null,
            Value::from(2.5),
            Value::from("apple"),
            Value::Bytes(vec![0xAB]),
        ]);
        let permutation =
            DefaultTableSorter::new().sort(&model, &[SortConstraint::ascending("v")]);

        assert_eq!(permutation.len(), 7);
        assert_eq!(permutation[0], 3);
        let mut sorted = permutation.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..7).collect::<Vec<_>>());
    }

    #[test]
    fn test_resolved_alias_sorts_like_literal_name() {
        let model = people();
        let resolved = ColumnResolver::default()
            .resolve(&model, &[SortConstraint::descending("::column::1")]);
        let via_alias = DefaultTableSorter::new().sort(&model, &resolved);
        let via_name = DefaultTableSorter::new()
            .sort(&model, &[SortConstraint::descending("Age")]);

        assert_eq!(via_alias, via_name);
        assert_eq!(via_alias, vec![0, 1, 2]);
    }

    #[test]
    fn test_large_input_exercises_merge_path() {
        let values: Vec<Value> =
            (0..500).map(|i| Value::from((i * 37 % 101) as i64)).collect();
        let model = single_column(values);
        let permutation =
            DefaultTableSorter::new().sort(&model, &[SortConstraint::ascending("v")]);

        for pair in permutation.windows(2) {
            let a = model.value_at(pair[0], 0).unwrap().as_f64().unwrap();
            let b = model.value_at(pair[1], 0).unwrap().as_f64().unwrap();
            assert!(a < b || (a == b && pair[0] < pair[1]));
        }
    }
}
