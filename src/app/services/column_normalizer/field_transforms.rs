//! Lenient per-field transforms
//!
//! Logger dumps are frequently slightly off: a truncated row, a timestamp in
//! an unexpected notation. Field transforms here return `Option` and are
//! applied through [`lenient`], which keeps the raw value whenever the
//! transform declines. Nothing in this module raises.

use super::super::record_table::SourceRecordTable;
use crate::constants::HEX_TIMESTAMP_SCALE;

/// Result of applying a lenient transform to one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lenient {
    /// The transform produced a new value
    Converted(String),
    /// The transform declined; the raw value is kept as-is
    Unchanged(String),
}

impl Lenient {
    pub fn into_value(self) -> String {
        match self {
            Self::Converted(v) | Self::Unchanged(v) => v,
        }
    }

    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged(_))
    }
}

/// Apply `transform` to `raw`, falling back to `raw` when it returns `None`
pub fn lenient(raw: &str, transform: impl FnOnce(&str) -> Option<String>) -> Lenient {
    match transform(raw) {
        Some(value) => Lenient::Converted(value),
        None => Lenient::Unchanged(raw.to_string()),
    }
}

/// Apply a lenient transform to every value of a column
///
/// Returns the number of values kept unchanged, or `None` if the column is
/// absent (in which case the table is not touched).
pub fn lenient_column(
    table: &mut SourceRecordTable,
    column: &str,
    transform: impl Fn(&str) -> Option<String>,
) -> Option<usize> {
    let mut unchanged = 0;
    let present = table.map_column(column, |raw| {
        let outcome = lenient(raw, &transform);
        if outcome.is_unchanged() {
            unchanged += 1;
        }
        outcome.into_value()
    });
    present.then_some(unchanged)
}

/// Hexadecimal tick count scaled by 100, as a decimal string
///
/// Accepts surrounding whitespace and an optional `0x` prefix.
pub fn hex_timestamp(raw: &str) -> Option<String> {
    let digits = raw.trim();
    let digits = digits
        .strip_prefix("0x")
        .or_else(|| digits.strip_prefix("0X"))
        .unwrap_or(digits);
    if digits.is_empty() {
        return None;
    }
    let ticks = u128::from_str_radix(digits, 16).ok()?;
    ticks.checked_mul(HEX_TIMESTAMP_SCALE).map(|v| v.to_string())
}

/// Seconds value scaled by `scale` and truncated toward zero
pub fn scaled_decimal_timestamp(raw: &str, scale: f64) -> Option<String> {
    let seconds: f64 = raw.trim().parse().ok()?;
    let scaled = (seconds * scale).trunc();
    if !scaled.is_finite() || scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return None;
    }
    Some((scaled as i64).to_string())
}

/// Whether every non-whitespace character is a hex digit
///
/// An empty or blank value counts as hex; the hex parse then declines it.
pub fn is_hex_digits(raw: &str) -> bool {
    raw.trim().chars().all(|c| c.is_ascii_hexdigit())
}

/// Remove the first `count` characters, declining if the value is shorter
pub fn drop_prefix(raw: &str, count: usize) -> Option<String> {
    if raw.chars().count() < count {
        return None;
    }
    Some(raw.chars().skip(count).collect())
}

/// Microsecond offset from `origin`, rounded half-to-even, zero-padded to `width`
pub fn microsecond_delta(seconds: f64, origin: f64, width: usize) -> String {
    let micros = ((seconds - origin) * 1_000_000.0).round_ties_even() as i64;
    format!("{:0width$}", micros, width = width)
}

/// Parse a seconds value the way the analyst export writes it
pub fn parse_seconds(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lenient_keeps_raw_on_decline() {
        assert_eq!(
            lenient("zz", hex_timestamp),
            Lenient::Unchanged("zz".to_string())
        );
        assert_eq!(
            lenient("1A", hex_timestamp),
            Lenient::Converted("2600".to_string())
        );
    }

    #[test]
    fn test_hex_timestamp() {
        assert_eq!(hex_timestamp("1A").as_deref(), Some("2600"));
        assert_eq!(hex_timestamp(" 0x1a ").as_deref(), Some("2600"));
        assert_eq!(hex_timestamp("0").as_deref(), Some("0"));
        assert_eq!(hex_timestamp(""), None);
        assert_eq!(hex_timestamp("0x"), None);
        assert_eq!(hex_timestamp("12.5"), None);
    }

    #[test]
    fn test_scaled_decimal_timestamp() {
        assert_eq!(
            scaled_decimal_timestamp("0.0005", 10_000_000.0).as_deref(),
            Some("5000")
        );
        assert_eq!(
            scaled_decimal_timestamp("1.5", 10_000_000.0).as_deref(),
            Some("15000000")
        );
        assert_eq!(scaled_decimal_timestamp("abc", 10_000_000.0), None);
        assert_eq!(scaled_decimal_timestamp("inf", 10_000_000.0), None);
        assert_eq!(scaled_decimal_timestamp("NaN", 10_000_000.0), None);
    }

    #[test]
    fn test_is_hex_digits() {
        assert!(is_hex_digits("1A"));
        assert!(is_hex_digits("0012"));
        assert!(is_hex_digits(" ff "));
        assert!(!is_hex_digits("0.0005"));
        assert!(!is_hex_digits("0x1A"));
    }

    #[test]
    fn test_drop_prefix() {
        assert_eq!(drop_prefix("0x18FF", 2).as_deref(), Some("18FF"));
        assert_eq!(drop_prefix("DL=8", 3).as_deref(), Some("8"));
        assert_eq!(drop_prefix("ab", 2).as_deref(), Some(""));
        assert_eq!(drop_prefix("a", 2), None);
        assert_eq!(drop_prefix("", 3), None);
    }

    #[test]
    fn test_microsecond_delta() {
        assert_eq!(microsecond_delta(10.0, 10.0, 7), "0000000");
        assert_eq!(microsecond_delta(10.0005, 10.0, 7), "0000500");
        assert_eq!(microsecond_delta(10.0012, 10.0, 7), "0001200");
        assert_eq!(microsecond_delta(9.9999, 10.0, 7), "-000100");
        assert_eq!(microsecond_delta(12.3456789, 0.0, 7), "12345679");
    }

    #[test]
    fn test_lenient_column_counts_unchanged() {
        let mut table = SourceRecordTable::new(
            vec!["ts".into()],
            vec![vec!["1A".into()], vec!["oops".into()], vec!["2".into()]],
        );
        assert_eq!(lenient_column(&mut table, "ts", hex_timestamp), Some(1));
        assert_eq!(
            table.column_values("ts").unwrap(),
            vec!["2600", "oops", "200"]
        );
        assert_eq!(lenient_column(&mut table, "absent", hex_timestamp), None);
    }
}
