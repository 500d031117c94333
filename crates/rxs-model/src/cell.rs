//! Raw cell values as handed over by the workbook and CSV readers.

/// A single spreadsheet cell.
///
/// Readers map every source cell onto one of these variants. Error cells and
/// blanks both become [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
}

impl CellValue {
    /// Builds a text cell, mapping whitespace-only input to `Empty`.
    pub fn text(value: impl Into<String>) -> Self {
        let value = value.into();
        if value.trim().is_empty() {
            Self::Empty
        } else {
            Self::Text(value)
        }
    }

    /// True for `Empty` and for text that is only whitespace.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    /// Renders the cell as text. Blank cells render as an empty string.
    pub fn display_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Text(s) => s.clone(),
            Self::Number(v) => format_numeric(*v),
            Self::Int(v) => v.to_string(),
            Self::Bool(b) => if *b { "true" } else { "false" }.to_string(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(value: &str) -> Self {
        Self::text(value)
    }
}

impl From<f64> for CellValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for CellValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

/// Formats a floating-point number without a trailing fractional zero.
///
/// `2023.0` becomes `"2023"`, `12.50` becomes `"12.5"`.
pub fn format_numeric(v: f64) -> String {
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_numeric_drops_integral_fraction() {
        assert_eq!(format_numeric(2023.0), "2023");
        assert_eq!(format_numeric(12.5), "12.5");
        assert_eq!(format_numeric(100.0), "100");
        assert_eq!(format_numeric(-0.25), "-0.25");
    }

    #[test]
    fn whitespace_text_is_empty() {
        assert_eq!(CellValue::text("   "), CellValue::Empty);
        assert!(CellValue::Text("\t".to_string()).is_blank());
        assert!(!CellValue::Int(0).is_blank());
    }

    #[test]
    fn display_text_per_variant() {
        assert_eq!(CellValue::Empty.display_text(), "");
        assert_eq!(CellValue::Number(42.0).display_text(), "42");
        assert_eq!(CellValue::Int(-7).display_text(), "-7");
        assert_eq!(CellValue::Bool(true).display_text(), "true");
        assert_eq!(CellValue::from("Ozempic").display_text(), "Ozempic");
    }
}
