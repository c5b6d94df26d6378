//! Typed filter requests and the clause evaluator
//!
//! A filter request is a boolean combination (And/Or) of typed clauses,
//! each pairing a field path with exactly one predicate variant. The sum
//! type makes "exactly one variant per clause" a structural guarantee
//! rather than a runtime check.
//!
//! Absence semantics: a clause whose field does not resolve is false for
//! every operator, except `List`/`NotIn` which is true: absence satisfies
//! exclusion. Type mismatches (a number predicate against a non-numeric
//! field) resolve to "no match" for that record rather than failing the
//! whole call.

use crate::core::entity::FieldAccess;
use crate::core::error::FilterError;
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};

/// How clauses combine into the overall verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Logic {
    /// Every clause must match. Vacuously true for an empty clause list.
    #[default]
    And,
    /// At least one clause must match. Vacuously false for an empty
    /// clause list.
    Or,
}

/// Operators for string predicates. All comparisons are case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringOperator {
    Equals,
    Contains,
    StartsWith,
    EndsWith,
}

/// Operators for numeric predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberOperator {
    Equals,
    GreaterThan,
    LessThan,
    /// Inclusive range; requires `range_end`
    Between,
}

/// Operators for date predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateOperator {
    Equals,
    Before,
    After,
    /// Inclusive range; requires `range_end`
    Between,
}

/// Operators for list-membership predicates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListOperator {
    In,
    NotIn,
}

/// A typed predicate. Exactly one variant per clause, by construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Predicate {
    String {
        operator: StringOperator,
        value: String,
    },
    Number {
        operator: NumberOperator,
        value: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range_end: Option<f64>,
    },
    Boolean {
        value: bool,
    },
    Date {
        operator: DateOperator,
        value: FieldValue,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        range_end: Option<FieldValue>,
    },
    List {
        operator: ListOperator,
        values: Vec<String>,
    },
}

/// One filter clause: a field path plus its predicate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypedFilter {
    pub field: String,
    pub predicate: Predicate,
}

impl TypedFilter {
    pub fn new(field: impl Into<String>, predicate: Predicate) -> Self {
        Self {
            field: field.into(),
            predicate,
        }
    }
}

/// A boolean combination of typed filter clauses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterRequest {
    #[serde(default)]
    pub logic: Logic,
    pub filters: Vec<TypedFilter>,
}

impl FilterRequest {
    /// All clauses must match
    pub fn all(filters: Vec<TypedFilter>) -> Self {
        Self {
            logic: Logic::And,
            filters,
        }
    }

    /// At least one clause must match
    pub fn any(filters: Vec<TypedFilter>) -> Self {
        Self {
            logic: Logic::Or,
            filters,
        }
    }

    /// Reject structurally invalid requests.
    ///
    /// Run before evaluation: a `Between` without its range end, or a date
    /// predicate whose own value never parses, aborts the whole list call
    /// instead of silently matching nothing.
    pub fn validate(&self) -> Result<(), FilterError> {
        for clause in &self.filters {
            match &clause.predicate {
                Predicate::Number {
                    operator: NumberOperator::Between,
                    range_end: None,
                    ..
                } => {
                    return Err(FilterError::MissingRangeEnd {
                        field: clause.field.clone(),
                    });
                }
                Predicate::Date {
                    operator,
                    value,
                    range_end,
                } => {
                    if value.as_datetime().is_none() {
                        return Err(FilterError::UnparseableDate {
                            field: clause.field.clone(),
                            value: value.as_text(),
                        });
                    }
                    if *operator == DateOperator::Between {
                        match range_end {
                            None => {
                                return Err(FilterError::MissingRangeEnd {
                                    field: clause.field.clone(),
                                });
                            }
                            Some(end) if end.as_datetime().is_none() => {
                                return Err(FilterError::UnparseableDate {
                                    field: clause.field.clone(),
                                    value: end.as_text(),
                                });
                            }
                            Some(_) => {}
                        }
                    }
                }
                _ => {}
            }
        }
        Ok(())
    }
}

/// Evaluate a filter request against a single record.
///
/// Combines clause verdicts per the request's logic. An empty clause list
/// is vacuously true under And and vacuously false under Or.
pub fn evaluate<R: FieldAccess + ?Sized>(record: &R, request: &FilterRequest) -> bool {
    match request.logic {
        Logic::And => request
            .filters
            .iter()
            .all(|clause| clause_matches(record, clause)),
        Logic::Or => request
            .filters
            .iter()
            .any(|clause| clause_matches(record, clause)),
    }
}

fn clause_matches<R: FieldAccess + ?Sized>(record: &R, clause: &TypedFilter) -> bool {
    let value = match record.field_value(&clause.field) {
        // Null counts as absent for predicate purposes
        Some(v) if !v.is_null() => v,
        _ => {
            return matches!(
                clause.predicate,
                Predicate::List {
                    operator: ListOperator::NotIn,
                    ..
                }
            );
        }
    };

    match &clause.predicate {
        Predicate::String { operator, value: expected } => {
            let Some(actual) = value.as_str() else {
                return false;
            };
            match operator {
                StringOperator::Equals => actual == expected,
                StringOperator::Contains => actual.contains(expected.as_str()),
                StringOperator::StartsWith => actual.starts_with(expected.as_str()),
                StringOperator::EndsWith => actual.ends_with(expected.as_str()),
            }
        }

        Predicate::Number {
            operator,
            value: expected,
            range_end,
        } => {
            let Some(actual) = value.as_f64() else {
                return false;
            };
            match operator {
                NumberOperator::Equals => actual == *expected,
                NumberOperator::GreaterThan => actual > *expected,
                NumberOperator::LessThan => actual < *expected,
                // validate() rejects a missing range end before evaluation
                NumberOperator::Between => match range_end {
                    Some(end) => actual >= *expected && actual <= *end,
                    None => false,
                },
            }
        }

        Predicate::Boolean { value: expected } => match value.as_bool() {
            Some(actual) => actual == *expected,
            None => false,
        },

        Predicate::Date {
            operator,
            value: expected,
            range_end,
        } => {
            let (Some(actual), Some(expected)) = (value.as_datetime(), expected.as_datetime())
            else {
                return false;
            };
            match operator {
                DateOperator::Equals => actual == expected,
                DateOperator::Before => actual < expected,
                DateOperator::After => actual > expected,
                DateOperator::Between => match range_end.as_ref().and_then(|v| v.as_datetime()) {
                    Some(end) => actual >= expected && actual <= end,
                    None => false,
                },
            }
        }

        Predicate::List { operator, values } => {
            let text = value.as_text();
            match operator {
                ListOperator::In => values.iter().any(|v| *v == text),
                ListOperator::NotIn => !values.iter().any(|v| *v == text),
            }
        }
    }
}
