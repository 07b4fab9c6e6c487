//! FILENAME: crosstab-engine/src/engine.rs
//! Crosstab Engine - Validation and classification of a raw crosstab payload.
//!
//! This module takes the untyped response body of the "generate crosstab"
//! endpoint and produces a ClassifiedTable (statistics plus a size tier that
//! drives formatting and rendering density).
//!
//! Algorithm:
//! 1. Validate structural well-formedness (ordered checks, typed errors)
//! 2. Derive the sorted row/column key axes
//! 3. Scan every (row, column) intersection for non-zero cells
//! 4. Derive sparsity and the size tier from the thresholds below

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

use crate::error::ValidationError;
use crate::payload::{CrosstabPayload, CrosstabRow};

// ============================================================================
// SIZE TIER
// ============================================================================

/// Cell-count threshold above which a table is tiered `Large`.
pub const LARGE_CELL_THRESHOLD: usize = 5_000;

/// Cell-count threshold above which a table is tiered `VeryLarge`.
pub const VERY_LARGE_CELL_THRESHOLD: usize = 20_000;

/// Sparsity percentage below which a table is flagged sparse.
pub const SPARSE_PERCENT_THRESHOLD: f64 = 15.0;

/// Size classification of a table by total cell count.
///
/// A table over the `VeryLarge` threshold necessarily also satisfies the
/// `Large` condition but is reported only as `VeryLarge`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SizeTier {
    Normal,
    Large,
    VeryLarge,
}

impl SizeTier {
    /// Tier for a given total cell count.
    pub fn for_cell_count(total_cells: usize) -> Self {
        if total_cells > VERY_LARGE_CELL_THRESHOLD {
            SizeTier::VeryLarge
        } else if total_cells > LARGE_CELL_THRESHOLD {
            SizeTier::Large
        } else {
            SizeTier::Normal
        }
    }

    /// Whether this tier opts into thousands-grouped cell formatting.
    pub fn groups_thousands(&self) -> bool {
        matches!(self, SizeTier::Large | SizeTier::VeryLarge)
    }
}

// ============================================================================
// CLASSIFIED TABLE
// ============================================================================

/// Summary statistics and display classification for a validated table.
///
/// Immutable, request-scoped: one value per validate/classify call, with no
/// identity beyond it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedTable {
    /// Distinct row keys, lexicographically sorted.
    pub row_keys: Vec<String>,

    /// Distinct column keys, lexicographically sorted.
    pub column_keys: Vec<String>,

    /// `row_keys.len() * column_keys.len()`.
    pub total_cells: usize,

    /// Number of (row, column) pairs holding a strictly positive count.
    pub non_zero_cells: usize,

    /// `non_zero_cells / total_cells * 100`, in `[0, 100]`.
    pub sparsity: f64,

    /// Size tier driving the formatting strategy (and, for the renderer,
    /// visual density).
    pub size_tier: SizeTier,

    /// Whether sparsity fell below the sparse threshold.
    pub is_sparse: bool,
}

/// Outcome of classifying a well-formed payload.
///
/// `Empty` is a terminal, non-error state: the payload validated but has no
/// rows or no columns to show. It is distinct from every `ValidationError`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Classification {
    Table(ClassifiedTable),
    Empty,
}

// ============================================================================
// VALIDATOR
// ============================================================================

/// Validates the raw response body and extracts a typed payload.
///
/// Checks run in order and the first failure wins:
/// 1. payload present and non-null
/// 2. `crosstab` exists and is an object
/// 3. `rowTotals` and `columnTotals` both exist
/// 4. `grandTotal` is a number >= 0
///
/// No cross-field arithmetic is verified; the aggregation backend is
/// trusted to have summed correctly. Check 3 is existence-only: a totals
/// field of the wrong shape validates and simply contributes no keys.
pub fn validate(payload: Option<&Value>) -> Result<CrosstabPayload, ValidationError> {
    let body = match payload {
        Some(value) if !value.is_null() => value,
        _ => return Err(ValidationError::MissingPayload),
    };

    let crosstab = match body.get("crosstab") {
        Some(Value::Object(rows)) => rows,
        _ => return Err(ValidationError::InvalidCrosstabFormat),
    };

    let row_totals = body.get("rowTotals");
    let column_totals = body.get("columnTotals");
    if row_totals.is_none() || column_totals.is_none() {
        return Err(ValidationError::MissingTotals);
    }

    let grand_total = match body.get("grandTotal").and_then(Value::as_f64) {
        Some(n) if n >= 0.0 => n,
        _ => return Err(ValidationError::InvalidGrandTotal),
    };

    Ok(CrosstabPayload {
        crosstab: crosstab
            .iter()
            .map(|(key, row)| (key.clone(), extract_row(row)))
            .collect(),
        row_totals: extract_totals(row_totals),
        column_totals: extract_totals(column_totals),
        grand_total,
    })
}

/// A non-object row reads as a row of all-zero cells.
fn extract_row(row: &Value) -> CrosstabRow {
    match row {
        Value::Object(cells) => cells
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => BTreeMap::new(),
    }
}

fn extract_totals(totals: Option<&Value>) -> BTreeMap<String, Value> {
    match totals {
        Some(Value::Object(entries)) => entries
            .iter()
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect(),
        _ => BTreeMap::new(),
    }
}

// ============================================================================
// CLASSIFIER
// ============================================================================

/// Classifies a validated payload by size and density.
///
/// Row keys come from `crosstab`; column keys come from `columnTotals`
/// (the canonical column axis — individual rows may omit columns). Both
/// axes are already sorted and distinct by construction.
pub fn classify(payload: &CrosstabPayload) -> Classification {
    let row_keys: Vec<String> = payload.crosstab.keys().cloned().collect();
    let column_keys: Vec<String> = payload.column_totals.keys().cloned().collect();

    if row_keys.is_empty() || column_keys.is_empty() {
        return Classification::Empty;
    }

    let total_cells = row_keys.len() * column_keys.len();

    let mut non_zero_cells = 0usize;
    for row in payload.crosstab.values() {
        for column_key in &column_keys {
            // Missing or non-numeric cells read as zero, not as errors.
            let count = row.get(column_key).and_then(Value::as_f64).unwrap_or(0.0);
            if count > 0.0 {
                non_zero_cells += 1;
            }
        }
    }

    // total_cells >= 1 here; the emptiness check above excluded zero.
    let sparsity = non_zero_cells as f64 / total_cells as f64 * 100.0;

    Classification::Table(ClassifiedTable {
        size_tier: SizeTier::for_cell_count(total_cells),
        is_sparse: sparsity < SPARSE_PERCENT_THRESHOLD,
        row_keys,
        column_keys,
        total_cells,
        non_zero_cells,
        sparsity,
    })
}

/// Runs the full validate-then-classify pipeline on a raw response body.
///
/// Every outcome is a value: a typed error, `Empty`, or a classified table.
/// Deterministic and free of side effects, so re-invoking with the same
/// payload always yields the same result.
pub fn analyze(payload: Option<&Value>) -> Result<Classification, ValidationError> {
    let payload = validate(payload)?;
    Ok(classify(&payload))
}
