//! Identifier Matching Module
//!
//! Path identifiers arrive as raw strings. They address a record when their
//! numeric value equals the record's integer id, whatever their spelling
//! (`"1"`, `"001"`, `"1.0"`, `"0x1"`).

/// U+FEFF, which numeric coercion treats as whitespace but `char::is_whitespace` does not.
const BYTE_ORDER_MARK: char = '\u{feff}';

// == Parse Identifier ==
/// Parses a raw path identifier into a record id.
///
/// Returns `None` for anything that can never match a record: non-numeric
/// text, fractional or non-finite values, zero and negatives.
pub fn parse_identifier(raw: &str) -> Option<u64> {
    let trimmed = raw.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK);

    let value = parse_prefixed(trimmed)
        .or_else(|| trimmed.parse::<u64>().ok())
        .or_else(|| parse_integral_float(trimmed))?;

    (value > 0).then_some(value)
}

/// Parses `0x`, `0o` and `0b` prefixed integers.
fn parse_prefixed(s: &str) -> Option<u64> {
    let radix = match s.get(..2)? {
        "0x" | "0X" => 16,
        "0o" | "0O" => 8,
        "0b" | "0B" => 2,
        _ => return None,
    };
    let digits = &s[2..];

    // from_str_radix tolerates a sign after the prefix
    if digits.starts_with(['+', '-']) {
        return None;
    }

    u64::from_str_radix(digits, radix).ok()
}

/// Parses decimal and exponent notation with an integral value (`"1.0"`, `"1e2"`).
fn parse_integral_float(s: &str) -> Option<u64> {
    let value: f64 = s.parse().ok()?;

    if !value.is_finite() || value.fract() != 0.0 || value < 1.0 || value > u64::MAX as f64 {
        return None;
    }

    Some(value as u64)
}
