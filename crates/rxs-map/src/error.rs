//! Error types for column resolution and year detection.

use thiserror::Error;

/// Errors raised while locating columns in a table's headers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    /// More than one header matched a stem (and year). Never auto-resolved.
    #[error("multiple columns matched '{stem}'{}: {}", for_year(.year), quoted_list(.candidates))]
    AmbiguousColumn {
        stem: String,
        year: Option<i32>,
        candidates: Vec<String>,
    },

    /// A required column is absent.
    #[error(
        "{dataset}: unable to locate column matching '{stem}{}' ({})",
        year_suffix(.year),
        similar_columns(.suggestions)
    )]
    MissingColumn {
        dataset: String,
        stem: String,
        year: Option<i32>,
        suggestions: Vec<String>,
    },

    /// Neither table carries a year-suffixed column for the stem.
    #[error("unable to detect a year suffix from '{stem}' columns in either table")]
    NoYearDetected { stem: String },

    /// The requested year has no column for the stem in this table.
    #[error(
        "{dataset}: column for '{stem}_{year}' not found. Available years: {}",
        year_list(.available)
    )]
    YearNotAvailable {
        dataset: String,
        stem: String,
        year: i32,
        available: Vec<i32>,
    },
}

/// Result type for mapping operations.
pub type Result<T> = std::result::Result<T, MapError>;

fn for_year(year: &Option<i32>) -> String {
    year.map(|y| format!(" for {y}")).unwrap_or_default()
}

fn year_suffix(year: &Option<i32>) -> String {
    year.map(|y| format!("_{y}")).unwrap_or_default()
}

fn quoted_list(items: &[String]) -> String {
    items
        .iter()
        .map(|item| format!("'{item}'"))
        .collect::<Vec<_>>()
        .join(", ")
}

fn similar_columns(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        "no similar columns".to_string()
    } else {
        format!("similar columns: {}", suggestions.join(", "))
    }
}

fn year_list(years: &[i32]) -> String {
    if years.is_empty() {
        "none".to_string()
    } else {
        years
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    }
}
