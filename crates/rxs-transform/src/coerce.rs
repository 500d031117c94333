//! Cell coercion.
//!
//! Source tables mix numbers, numeric text with thousands separators, blanks
//! and suppression markers (`*`, `NA`) in the same column. Every coercer is
//! total: anything that cannot be read yields `None`, never an error.

use rxs_model::CellValue;

/// Parses numeric text, dropping thousands-separator commas.
///
/// Returns `None` for blank, unparsable or non-finite input.
pub fn parse_numeric(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    let cleaned = trimmed.replace(',', "");
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Reads a cell as a float.
///
/// Text goes through [`parse_numeric`]; numeric cells cast directly; booleans
/// are not numbers.
pub fn to_float(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Empty | CellValue::Bool(_) => None,
        CellValue::Text(s) => parse_numeric(s),
        CellValue::Number(v) => Some(*v).filter(|v| v.is_finite()),
        CellValue::Int(v) => Some(*v as f64),
    }
}

/// Reads a cell as an integer, rounding half away from zero.
///
/// `2.5` becomes `3` and `-2.5` becomes `-3`. Values outside `i64` yield `None`.
pub fn to_int(cell: &CellValue) -> Option<i64> {
    if let CellValue::Int(v) = cell {
        return Some(*v);
    }
    round_to_i64(to_float(cell)?)
}

fn round_to_i64(value: f64) -> Option<i64> {
    // 2^63 is exactly representable; i64::MAX is not.
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    let rounded = value.round();
    if rounded.is_finite() && (-LIMIT..LIMIT).contains(&rounded) {
        Some(rounded as i64)
    } else {
        None
    }
}

/// Reads a cell as display text with whitespace runs collapsed.
///
/// Numeric cells render without a trailing `.0`.
pub fn normalize_text(cell: &CellValue) -> Option<String> {
    if cell.is_blank() {
        return None;
    }
    let text = cell.display_text();
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.is_empty() {
        None
    } else {
        Some(collapsed)
    }
}
