//! Stem/year column resolution.
//!
//! Source tables carry year-suffixed headers whose spelling drifts between
//! releases (`Tot_Spndng_2022`, `Tot Spndng 2022`, `TotSpndng2022_rev`). A
//! column is located by comparing normalized keys, never raw header text.

use tracing::debug;

use crate::error::{MapError, Result};
use crate::normalize::normalize_key;

/// A header located by the resolver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedColumn {
    /// Position in the header list the resolver was given.
    pub index: usize,
    pub name: String,
}

/// Outcome of resolving a stem against a header set.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnMatch {
    /// The single matching header, if any.
    pub column: Option<ResolvedColumn>,
    /// Headers whose key starts with the stem key, in header order.
    pub suggestions: Vec<String>,
}

impl ColumnMatch {
    /// Name of the matched header.
    pub fn name(&self) -> Option<&str> {
        self.column.as_ref().map(|column| column.name.as_str())
    }
}

/// Finds the header matching `stem` and, when given, `year`.
///
/// Without a year the key must equal the stem key. With a year the key must
/// equal or start with `<stem key><year>`, which admits trailing revision
/// markers after the year.
///
/// # Errors
///
/// Returns [`MapError::AmbiguousColumn`] when more than one header matches.
pub fn find_column<S: AsRef<str>>(
    headers: &[S],
    stem: &str,
    year: Option<i32>,
) -> Result<ColumnMatch> {
    let base_key = normalize_key(stem);
    let target = match year {
        Some(y) => format!("{base_key}{y}"),
        None => base_key.clone(),
    };

    let mut suggestions = Vec::new();
    let mut matches = Vec::new();
    for (index, header) in headers.iter().enumerate() {
        let header = header.as_ref();
        let key = normalize_key(header);
        if key.starts_with(&base_key) {
            suggestions.push(header.to_string());
        }
        let is_match = match year {
            Some(_) => key.starts_with(&target),
            None => key == target,
        };
        if is_match {
            matches.push(ResolvedColumn {
                index,
                name: header.to_string(),
            });
        }
    }

    if matches.len() > 1 {
        return Err(MapError::AmbiguousColumn {
            stem: stem.to_string(),
            year,
            candidates: matches.into_iter().map(|column| column.name).collect(),
        });
    }

    Ok(ColumnMatch {
        column: matches.pop(),
        suggestions,
    })
}

/// Like [`find_column`], but absence is an error.
///
/// # Errors
///
/// Returns [`MapError::MissingColumn`] when nothing matches, carrying the
/// suggestions for the diagnostic, or [`MapError::AmbiguousColumn`].
pub fn require_column<S: AsRef<str>>(
    headers: &[S],
    stem: &str,
    dataset: &str,
    year: Option<i32>,
) -> Result<ResolvedColumn> {
    let ColumnMatch {
        column,
        suggestions,
    } = find_column(headers, stem, year)?;
    match column {
        Some(column) => {
            debug!(
                dataset,
                stem,
                ?year,
                column = %column.name,
                index = column.index,
                "resolved column"
            );
            Ok(column)
        }
        None => Err(MapError::MissingColumn {
            dataset: dataset.to_string(),
            stem: stem.to_string(),
            year,
            suggestions,
        }),
    }
}
