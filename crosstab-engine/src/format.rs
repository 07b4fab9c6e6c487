//! FILENAME: crosstab-engine/src/format.rs
//! PURPOSE: Cell formatting for crosstab display values.
//! CONTEXT: Converts raw counts to display strings. Large-tier tables get
//! thousands separators on big values so dense grids stay scannable.

use crate::engine::SizeTier;

/// Values above this get thousands grouping in `Large`/`VeryLarge` tables.
const GROUPING_THRESHOLD: f64 = 999.0;

/// Formats one cell value for display.
///
/// A missing value (`None`) reads as zero. The same rule applies uniformly
/// to body cells, row totals, column totals, and the grand total; there is
/// no special-case path for totals.
pub fn format_cell(value: Option<f64>, tier: SizeTier) -> String {
    let value = value.unwrap_or(0.0);
    let plain = format!("{:.0}", value);

    if tier.groups_thousands() && value > GROUPING_THRESHOLD {
        add_thousands_separator(&plain)
    } else {
        plain
    }
}

/// Inserts `,` separators into an integer string, preserving any sign.
fn add_thousands_separator(s: &str) -> String {
    let negative = s.starts_with('-');
    let digits: String = s.chars().filter(|c| c.is_ascii_digit()).collect();

    let mut result = String::new();
    let len = digits.len();

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }

    if negative {
        result = format!("-{}", result);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_tier_never_groups() {
        assert_eq!(format_cell(Some(12345.0), SizeTier::Normal), "12345");
        assert_eq!(format_cell(Some(999.0), SizeTier::Normal), "999");
    }

    #[test]
    fn test_large_tier_groups_above_threshold() {
        assert_eq!(format_cell(Some(500.0), SizeTier::Large), "500");
        assert_eq!(format_cell(Some(999.0), SizeTier::Large), "999");
        assert_eq!(format_cell(Some(1000.0), SizeTier::Large), "1,000");
        assert_eq!(format_cell(Some(12345.0), SizeTier::Large), "12,345");
        assert_eq!(format_cell(Some(1234567.0), SizeTier::VeryLarge), "1,234,567");
    }

    #[test]
    fn test_missing_value_reads_as_zero() {
        assert_eq!(format_cell(None, SizeTier::VeryLarge), "0");
        assert_eq!(format_cell(None, SizeTier::Normal), "0");
    }

    #[test]
    fn test_thousands_separator() {
        assert_eq!(add_thousands_separator("1234567"), "1,234,567");
        assert_eq!(add_thousands_separator("123"), "123");
        assert_eq!(add_thousands_separator("-1234"), "-1,234");
    }
}
