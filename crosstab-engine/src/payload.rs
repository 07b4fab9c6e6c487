//! FILENAME: crosstab-engine/src/payload.rs
//! Crosstab Payload - The validated input model.
//!
//! This module contains the types that DESCRIBE a crosstab result as
//! produced by the aggregation backend. These structures are designed to be:
//! - Serializable (camelCase on the wire, matching the API response body)
//! - Immutable snapshots of a single analysis response
//! - Trusted but not arithmetically verified (see `engine::validate`)

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A row of counts: column-key to raw cell value.
///
/// Cell values stay as raw JSON values. The backend is trusted to send
/// non-negative integers, but a missing or non-numeric cell must read as
/// zero downstream rather than abort the whole table.
pub type CrosstabRow = BTreeMap<String, Value>;

/// The complete two-dimensional frequency table, as received from the
/// "generate crosstab" endpoint.
///
/// `BTreeMap` keys are distinct and lexicographically ordered by
/// construction, which fixes the display order independent of insertion
/// order in the source JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosstabPayload {
    /// Row-key to row-of-counts mapping. A column key absent from a row's
    /// inner map is an implicit zero.
    pub crosstab: BTreeMap<String, CrosstabRow>,

    /// Per-row totals, keyed by row key.
    pub row_totals: BTreeMap<String, Value>,

    /// Per-column totals, keyed by column key. These keys define the
    /// column axis of the table.
    pub column_totals: BTreeMap<String, Value>,

    /// Sum of all counts. Validated to be a non-negative number; its
    /// consistency with `row_totals`/`column_totals` is NOT verified.
    pub grand_total: f64,
}

impl CrosstabPayload {
    /// Looks up a single cell, treating absence as zero and anything
    /// non-numeric as zero.
    pub fn cell(&self, row_key: &str, column_key: &str) -> Option<f64> {
        self.crosstab
            .get(row_key)
            .and_then(|row| row.get(column_key))
            .and_then(Value::as_f64)
    }

    /// The total for one row, if present and numeric.
    pub fn row_total(&self, row_key: &str) -> Option<f64> {
        self.row_totals.get(row_key).and_then(Value::as_f64)
    }

    /// The total for one column, if present and numeric.
    pub fn column_total(&self, column_key: &str) -> Option<f64> {
        self.column_totals.get(column_key).and_then(Value::as_f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> CrosstabPayload {
        CrosstabPayload {
            crosstab: BTreeMap::from([(
                "north".to_string(),
                BTreeMap::from([
                    ("red".to_string(), json!(3)),
                    ("blue".to_string(), json!("oops")),
                ]),
            )]),
            row_totals: BTreeMap::from([("north".to_string(), json!(3))]),
            column_totals: BTreeMap::from([
                ("red".to_string(), json!(3)),
                ("blue".to_string(), json!(0)),
            ]),
            grand_total: 3.0,
        }
    }

    #[test]
    fn cell_lookup_treats_missing_as_none() {
        let payload = sample();
        assert_eq!(payload.cell("north", "red"), Some(3.0));
        assert_eq!(payload.cell("north", "green"), None);
        assert_eq!(payload.cell("south", "red"), None);
    }

    #[test]
    fn cell_lookup_treats_non_numeric_as_none() {
        let payload = sample();
        assert_eq!(payload.cell("north", "blue"), None);
    }

    #[test]
    fn serializes_with_camel_case_field_names() {
        let payload = sample();
        let value = serde_json::to_value(&payload).unwrap();
        assert!(value.get("rowTotals").is_some());
        assert!(value.get("columnTotals").is_some());
        assert_eq!(value.get("grandTotal"), Some(&json!(3.0)));
    }
}
