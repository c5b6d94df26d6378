//! Multi-field sort instructions and the record comparator
//!
//! Sort fields are evaluated in sequence order; the first field whose
//! resolved values differ decides the relative order. A full tie keeps the
//! original relative order; callers use a stable sort, so re-sorting an
//! already-sorted sequence is the identity.

use crate::core::entity::FieldAccess;
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Ordering direction for a sort field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Where absent values land on a sort field.
///
/// Applied regardless of direction: nulls-first means first under both
/// ascending and descending order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum NullOrder {
    NullsFirst,
    #[default]
    NullsLast,
}

/// One sort instruction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortField {
    pub field: String,
    #[serde(default)]
    pub direction: SortDirection,
    #[serde(default)]
    pub null_order: NullOrder,
}

impl SortField {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Asc,
            null_order: NullOrder::default(),
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            direction: SortDirection::Desc,
            null_order: NullOrder::default(),
        }
    }

    pub fn with_null_order(mut self, null_order: NullOrder) -> Self {
        self.null_order = null_order;
        self
    }
}

/// An ordered sequence of sort instructions; earlier fields take
/// precedence, later fields break ties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortRequest {
    pub fields: Vec<SortField>,
}

impl SortRequest {
    pub fn new(fields: Vec<SortField>) -> Self {
        Self { fields }
    }

    /// Single-field shorthand
    pub fn by(field: SortField) -> Self {
        Self {
            fields: vec![field],
        }
    }
}

/// Compare two records under a sort request.
///
/// Natural comparison is numeric when both sides coerce to numbers and
/// lexical over rendered text otherwise. Direction inverts the natural
/// comparison; null placement does not.
pub fn compare<R: FieldAccess + ?Sized>(a: &R, b: &R, request: &SortRequest) -> Ordering {
    for sort_field in &request.fields {
        let va = resolved(a, &sort_field.field);
        let vb = resolved(b, &sort_field.field);

        let ordering = match (va, vb) {
            // Both null on this field: next field decides
            (None, None) => continue,
            (None, Some(_)) => null_ordering(sort_field.null_order),
            (Some(_), None) => null_ordering(sort_field.null_order).reverse(),
            (Some(va), Some(vb)) => {
                let natural = natural_compare(&va, &vb);
                match sort_field.direction {
                    SortDirection::Asc => natural,
                    SortDirection::Desc => natural.reverse(),
                }
            }
        };

        if ordering != Ordering::Equal {
            return ordering;
        }
    }
    Ordering::Equal
}

/// Stable in-place sort of records by a sort request
pub fn sort_records<R: FieldAccess>(records: &mut [R], request: &SortRequest) {
    records.sort_by(|a, b| compare(a, b, request));
}

fn resolved<R: FieldAccess + ?Sized>(record: &R, field: &str) -> Option<FieldValue> {
    record.field_value(field).filter(|v| !v.is_null())
}

/// Ordering of a null left-hand side against a present right-hand side
fn null_ordering(null_order: NullOrder) -> Ordering {
    match null_order {
        NullOrder::NullsFirst => Ordering::Less,
        NullOrder::NullsLast => Ordering::Greater,
    }
}

fn natural_compare(a: &FieldValue, b: &FieldValue) -> Ordering {
    if let (Some(x), Some(y)) = (a.as_f64(), b.as_f64()) {
        x.partial_cmp(&y).unwrap_or(Ordering::Equal)
    } else {
        a.as_text().cmp(&b.as_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn amounts(records: &[Value]) -> Vec<f64> {
        records
            .iter()
            .map(|r| r["amount"].as_f64().unwrap_or(f64::NAN))
            .collect()
    }

    #[test]
    fn test_numeric_sort_descending() {
        let mut records = vec![
            json!({"amount": 150.75}),
            json!({"amount": -75.25}),
            json!({"amount": 250.00}),
        ];
        sort_records(&mut records, &SortRequest::by(SortField::desc("amount")));
        assert_eq!(amounts(&records), vec![250.00, 150.75, -75.25]);
    }

    #[test]
    fn test_numeric_sort_ascending() {
        let mut records = vec![
            json!({"amount": 150.75}),
            json!({"amount": -75.25}),
            json!({"amount": 250.00}),
        ];
        sort_records(&mut records, &SortRequest::by(SortField::asc("amount")));
        assert_eq!(amounts(&records), vec![-75.25, 150.75, 250.00]);
    }

    #[test]
    fn test_lexical_sort_when_not_numeric() {
        let mut records = vec![
            json!({"name": "banana"}),
            json!({"name": "apple"}),
            json!({"name": "cherry"}),
        ];
        sort_records(&mut records, &SortRequest::by(SortField::asc("name")));
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["apple", "banana", "cherry"]);
    }

    #[test]
    fn test_numeric_strings_compare_numerically() {
        // Lexically "9" > "10"; numeric coercion must win.
        let mut records = vec![json!({"amount": "9"}), json!({"amount": "10"})];
        sort_records(&mut records, &SortRequest::by(SortField::asc("amount")));
        assert_eq!(records[0]["amount"], "9");
        assert_eq!(records[1]["amount"], "10");
    }

    #[test]
    fn test_tie_break_on_second_field() {
        let mut records = vec![
            json!({"category": "b", "name": "x"}),
            json!({"category": "a", "name": "z"}),
            json!({"category": "a", "name": "y"}),
        ];
        let request = SortRequest::new(vec![SortField::asc("category"), SortField::asc("name")]);
        sort_records(&mut records, &request);
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["y", "z", "x"]);
    }

    #[test]
    fn test_nulls_last_regardless_of_direction() {
        let mut records = vec![
            json!({"amount": null, "name": "n1"}),
            json!({"amount": 5, "name": "a"}),
            json!({"name": "n2"}),
            json!({"amount": 1, "name": "b"}),
        ];
        let request = SortRequest::by(
            SortField::desc("amount").with_null_order(NullOrder::NullsLast),
        );
        sort_records(&mut records, &request);
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["a", "b", "n1", "n2"]);
    }

    #[test]
    fn test_nulls_first() {
        let mut records = vec![
            json!({"amount": 5, "name": "a"}),
            json!({"name": "n"}),
            json!({"amount": 1, "name": "b"}),
        ];
        let request =
            SortRequest::by(SortField::asc("amount").with_null_order(NullOrder::NullsFirst));
        sort_records(&mut records, &request);
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["n", "b", "a"]);
    }

    #[test]
    fn test_both_null_falls_through_to_next_field() {
        let mut records = vec![
            json!({"name": "z"}),
            json!({"name": "a"}),
        ];
        let request = SortRequest::new(vec![SortField::asc("amount"), SortField::asc("name")]);
        sort_records(&mut records, &request);
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["a", "z"]);
    }

    #[test]
    fn test_sort_is_idempotent() {
        let mut records = vec![
            json!({"amount": 3, "name": "c"}),
            json!({"amount": 1, "name": "a"}),
            json!({"amount": 1, "name": "b"}),
            json!({"amount": 2, "name": "d"}),
        ];
        let request = SortRequest::by(SortField::asc("amount"));
        sort_records(&mut records, &request);
        let first_pass = records.clone();
        sort_records(&mut records, &request);
        assert_eq!(records, first_pass);
    }

    #[test]
    fn test_full_tie_preserves_input_order() {
        let mut records = vec![
            json!({"amount": 1, "name": "first"}),
            json!({"amount": 1, "name": "second"}),
            json!({"amount": 1, "name": "third"}),
        ];
        sort_records(&mut records, &SortRequest::by(SortField::desc("amount")));
        let names: Vec<&str> = records.iter().map(|r| r["name"].as_str().unwrap()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_dot_path_sort_field() {
        let mut records = vec![
            json!({"location": {"name": "West"}}),
            json!({"location": {"name": "East"}}),
        ];
        sort_records(&mut records, &SortRequest::by(SortField::asc("location.name")));
        assert_eq!(records[0]["location"]["name"], "East");
    }
}
