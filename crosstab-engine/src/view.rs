//! FILENAME: crosstab-engine/src/view.rs
//! Crosstab View - Renderable output for the frontend.
//!
//! This module transforms a validated, classified payload into a 2D grid
//! structure that the frontend can render. It includes metadata for:
//! - Cell types (header, data, totals, grand total)
//! - Pre-formatted display strings (see `format::format_cell`)
//! - Visual hints (bold, background style)
//!
//! Visual density (row height, font size) is the renderer's decision, made
//! from the echoed `size_tier`; this module only fixes content and layout.

use serde::{Deserialize, Serialize};

use crate::engine::{ClassifiedTable, SizeTier};
use crate::format::format_cell;
use crate::payload::CrosstabPayload;

/// Label of the synthetic totals column.
const TOTAL_LABEL: &str = "Total";

/// Label of the synthetic grand-total row.
const GRAND_TOTAL_LABEL: &str = "Grand Total";

// ============================================================================
// CELL TYPES AND METADATA
// ============================================================================

/// The type of a cell in the crosstab view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrosstabCellType {
    /// Empty corner cell (top-left).
    Corner,
    /// Row header label.
    RowHeader,
    /// Column header label.
    ColumnHeader,
    /// Body cell (raw count).
    Data,
    /// Total of one row (rightmost column).
    RowTotal,
    /// Total of one column (bottom row).
    ColumnTotal,
    /// Grand total (bottom-right intersection).
    GrandTotal,
}

/// Display value for a crosstab cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum CrosstabCellValue {
    Empty,
    Number(f64),
    Text(String),
}

impl CrosstabCellValue {
    pub fn text(s: impl Into<String>) -> Self {
        CrosstabCellValue::Text(s.into())
    }
}

impl From<f64> for CrosstabCellValue {
    fn from(value: f64) -> Self {
        CrosstabCellValue::Number(value)
    }
}

/// Background style hints for rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackgroundStyle {
    Normal,
    Header,
    Total,
    GrandTotal,
}

// ============================================================================
// VIEW CELL
// ============================================================================

/// A single cell in the crosstab view.
/// Contains both the value and rendering metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosstabViewCell {
    /// The underlying value.
    pub value: CrosstabCellValue,

    /// The type of this cell.
    pub cell_type: CrosstabCellType,

    /// Pre-formatted display string.
    pub formatted_value: String,

    /// Whether this cell should be visually emphasized.
    pub is_bold: bool,

    /// Background style hint.
    pub background_style: BackgroundStyle,
}

impl CrosstabViewCell {
    /// Creates a body data cell with its tier-formatted display string.
    pub fn data(value: Option<f64>, tier: SizeTier) -> Self {
        CrosstabViewCell {
            formatted_value: format_cell(value, tier),
            value: match value {
                Some(n) => CrosstabCellValue::Number(n),
                None => CrosstabCellValue::Empty,
            },
            cell_type: CrosstabCellType::Data,
            is_bold: false,
            background_style: BackgroundStyle::Normal,
        }
    }

    /// Creates a total cell (row total, column total, or grand total).
    pub fn total(value: Option<f64>, tier: SizeTier, cell_type: CrosstabCellType) -> Self {
        let background_style = if cell_type == CrosstabCellType::GrandTotal {
            BackgroundStyle::GrandTotal
        } else {
            BackgroundStyle::Total
        };
        CrosstabViewCell {
            formatted_value: format_cell(value, tier),
            value: match value {
                Some(n) => CrosstabCellValue::Number(n),
                None => CrosstabCellValue::Empty,
            },
            cell_type,
            is_bold: true,
            background_style,
        }
    }

    /// Creates a row header cell.
    pub fn row_header(label: impl Into<String>) -> Self {
        let label = label.into();
        CrosstabViewCell {
            value: CrosstabCellValue::Text(label.clone()),
            formatted_value: label,
            cell_type: CrosstabCellType::RowHeader,
            is_bold: false,
            background_style: BackgroundStyle::Header,
        }
    }

    /// Creates a column header cell.
    pub fn column_header(label: impl Into<String>) -> Self {
        let label = label.into();
        CrosstabViewCell {
            value: CrosstabCellValue::Text(label.clone()),
            formatted_value: label,
            cell_type: CrosstabCellType::ColumnHeader,
            is_bold: true,
            background_style: BackgroundStyle::Header,
        }
    }

    /// Creates the corner cell.
    pub fn corner() -> Self {
        CrosstabViewCell {
            value: CrosstabCellValue::Empty,
            formatted_value: String::new(),
            cell_type: CrosstabCellType::Corner,
            is_bold: false,
            background_style: BackgroundStyle::Header,
        }
    }
}

// ============================================================================
// VIEW
// ============================================================================

/// The complete renderable grid for one classified crosstab.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CrosstabView {
    /// The grid, row-major: `(row_keys + 2) x (column_keys + 2)` cells
    /// (header row and grand-total row; header column and totals column).
    pub rows: Vec<Vec<CrosstabViewCell>>,

    /// Number of grid rows, including header and grand-total rows.
    pub row_count: usize,

    /// Number of grid columns, including header and totals columns.
    pub column_count: usize,

    /// Echoed classification, so the renderer picks density without a
    /// second classification pass.
    pub size_tier: SizeTier,
    pub is_sparse: bool,
    pub sparsity: f64,
}

impl CrosstabView {
    /// Builds the display grid for a validated, classified payload.
    ///
    /// All numeric cells, totals included, are formatted with the table's
    /// tier through the one shared formatting rule.
    pub fn build(payload: &CrosstabPayload, table: &ClassifiedTable) -> Self {
        let tier = table.size_tier;
        let column_count = table.column_keys.len() + 2;
        let mut rows = Vec::with_capacity(table.row_keys.len() + 2);

        // Header row: corner, one header per column, totals column header.
        let mut header = Vec::with_capacity(column_count);
        header.push(CrosstabViewCell::corner());
        for column_key in &table.column_keys {
            header.push(CrosstabViewCell::column_header(column_key.clone()));
        }
        header.push(CrosstabViewCell::column_header(TOTAL_LABEL));
        rows.push(header);

        // Body rows: header, one data cell per column, row total.
        for row_key in &table.row_keys {
            let mut cells = Vec::with_capacity(column_count);
            cells.push(CrosstabViewCell::row_header(row_key.clone()));
            for column_key in &table.column_keys {
                cells.push(CrosstabViewCell::data(
                    payload.cell(row_key, column_key),
                    tier,
                ));
            }
            cells.push(CrosstabViewCell::total(
                payload.row_total(row_key),
                tier,
                CrosstabCellType::RowTotal,
            ));
            rows.push(cells);
        }

        // Grand-total row: label, column totals, grand total.
        let mut footer = Vec::with_capacity(column_count);
        footer.push(CrosstabViewCell::row_header(GRAND_TOTAL_LABEL));
        for column_key in &table.column_keys {
            footer.push(CrosstabViewCell::total(
                payload.column_total(column_key),
                tier,
                CrosstabCellType::ColumnTotal,
            ));
        }
        footer.push(CrosstabViewCell::total(
            Some(payload.grand_total),
            tier,
            CrosstabCellType::GrandTotal,
        ));
        rows.push(footer);

        CrosstabView {
            row_count: rows.len(),
            column_count,
            rows,
            size_tier: tier,
            is_sparse: table.is_sparse,
            sparsity: table.sparsity,
        }
    }
}
