//! FILENAME: crosstab-engine/src/lib.rs
//! Crosstab presentation engine.
//!
//! This crate sits between a raw contingency-table payload (the JSON body
//! of a remote "generate crosstab" endpoint) and a rendering surface. It
//! owns validation, classification, and display formatting; transport,
//! routing, and visual styling belong to the surrounding application.
//!
//! Layers:
//! - `payload`: Serializable input model (what the table IS)
//! - `engine`: Validation and classification (HOW we interpret)
//! - `format`: Cell formatting rules (HOW we display numbers)
//! - `view`: Renderable output for the frontend (WHAT we display)

pub mod engine;
pub mod error;
pub mod format;
pub mod payload;
pub mod view;

pub use engine::{
    analyze, classify, validate, Classification, ClassifiedTable, SizeTier,
    LARGE_CELL_THRESHOLD, SPARSE_PERCENT_THRESHOLD, VERY_LARGE_CELL_THRESHOLD,
};
pub use error::ValidationError;
pub use format::format_cell;
pub use payload::{CrosstabPayload, CrosstabRow};
pub use view::{
    BackgroundStyle, CrosstabCellType, CrosstabCellValue, CrosstabView, CrosstabViewCell,
};

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn integration_test_full_presentation_workflow() {
        let body = json!({
            "crosstab": {
                "south": {"cat": 12, "dog": 3},
                "north": {"dog": 7}
            },
            "rowTotals": {"north": 7, "south": 15},
            "columnTotals": {"cat": 12, "dog": 10},
            "grandTotal": 22
        });

        let payload = validate(Some(&body)).unwrap();
        let table = match classify(&payload) {
            Classification::Table(table) => table,
            Classification::Empty => panic!("expected a table"),
        };

        assert_eq!(table.row_keys, vec!["north", "south"]);
        assert_eq!(table.column_keys, vec!["cat", "dog"]);
        assert_eq!(table.total_cells, 4);
        assert_eq!(table.non_zero_cells, 3);
        assert_eq!(table.size_tier, SizeTier::Normal);

        let view = CrosstabView::build(&payload, &table);
        assert_eq!(view.row_count, 4);
        assert_eq!(view.column_count, 4);
        // north/cat is absent from the payload and renders as zero.
        assert_eq!(view.rows[1][1].formatted_value, "0");
        assert_eq!(view.rows[3][3].formatted_value, "22");
    }

    #[test]
    fn integration_test_error_short_circuits_pipeline() {
        let body = json!({
            "crosstab": {"a": {"x": 1}},
            "columnTotals": {"x": 1},
            "grandTotal": 1
        });
        assert_eq!(analyze(Some(&body)), Err(ValidationError::MissingTotals));
    }
}
