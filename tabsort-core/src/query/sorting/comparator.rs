//! Total ordering over runtime values.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use ordered_float::OrderedFloat;
use std::borrow::Cow;
use std::cmp::Ordering;
use tabsort_contracts::sorting::ValueComparator;
use tabsort_model::{Value, ValueKind};

/// Orders values in three tiers:
///
/// 1. `Null` sorts before everything else; two nulls are equal.
/// 2. Two numbers compare as `f64` (NaN above every number, equal to itself).
/// 3. Two natively orderable values of the same kind compare directly. Dates
///    and timestamps share one timeline, a date standing for its UTC midnight.
///
/// Anything else (different orderable kinds, opaque values, a number against
/// text) compares by string form. The comparator never panics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GenericComparator;

impl GenericComparator {
    pub fn new() -> Self {
        Self
    }

    /// Compare two cells in ascending order.
    pub fn compare_values(a: &Value, b: &Value) -> Ordering {
        match (a.kind(), b.kind()) {
            (ValueKind::Null, ValueKind::Null) => return Ordering::Equal,
            (ValueKind::Null, _) => return Ordering::Less,
            (_, ValueKind::Null) => return Ordering::Greater,
            _ => {}
        }

        if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
            return OrderedFloat(x).cmp(&OrderedFloat(y));
        }

        if let Some(ordering) = compare_native(a, b) {
            return ordering;
        }

        string_form(a).cmp(&string_form(b))
    }
}

impl ValueComparator for GenericComparator {
    fn compare(&self, a: &Value, b: &Value) -> Ordering {
        Self::compare_values(a, b)
    }
}

/// `None` when the pair has no native order.
fn compare_native(a: &Value, b: &Value) -> Option<Ordering> {
    match (a, b) {
        (Value::Bool(x), Value::Bool(y)) => Some(x.cmp(y)),
        (Value::Text(x), Value::Text(y)) => Some(x.cmp(y)),
        (Value::Date(x), Value::Date(y)) => Some(x.cmp(y)),
        (Value::Timestamp(x), Value::Timestamp(y)) => Some(x.cmp(y)),
        // A date is the instant its day starts, in UTC.
        (Value::Date(x), Value::Timestamp(y)) => Some(start_of_day(x).cmp(y)),
        (Value::Timestamp(x), Value::Date(y)) => Some(x.cmp(&start_of_day(y))),
        _ => None,
    }
}

fn start_of_day(date: &NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

fn string_form(value: &Value) -> Cow<'_, str> {
    match value {
        Value::Text(text) => Cow::Borrowed(text.as_str()),
        other => Cow::Owned(other.to_string()),
    }
}
