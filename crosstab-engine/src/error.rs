//! FILENAME: crosstab-engine/src/error.rs

use thiserror::Error;

/// Structural validation failures for an incoming crosstab payload.
///
/// Each variant maps to exactly one of the ordered checks in
/// `engine::validate`; the first failing check wins and no partial payload
/// is produced. Arithmetic inconsistency between `crosstab`, the totals
/// maps, and `grandTotal` is deliberately NOT a variant here (the producer
/// is trusted on arithmetic).
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("no crosstab payload was provided")]
    MissingPayload,

    #[error("crosstab field is missing or is not a key-value mapping")]
    InvalidCrosstabFormat,

    #[error("rowTotals or columnTotals field is missing")]
    MissingTotals,

    #[error("grandTotal is missing, non-numeric, or negative")]
    InvalidGrandTotal,
}
