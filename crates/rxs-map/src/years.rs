//! Reporting-year detection from year-suffixed headers.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, info};

use crate::error::{MapError, Result};
use crate::normalize::normalize_key;
use crate::resolve::find_column;

/// Four-digit years in 1900-2099.
static YEAR_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:19|20)\d{2}").expect("Invalid year regex"));

/// Every year found in headers whose key contains the stem key.
///
/// Years are deduplicated and kept in discovery order.
pub fn available_years<S: AsRef<str>>(headers: &[S], stem: &str) -> Vec<i32> {
    let base_key = normalize_key(stem);
    let mut years = Vec::new();
    for header in headers {
        let key = normalize_key(header.as_ref());
        if !key.contains(&base_key) {
            continue;
        }
        for found in YEAR_REGEX.find_iter(&key) {
            if let Ok(year) = found.as_str().parse::<i32>()
                && !years.contains(&year)
            {
                years.push(year);
            }
        }
    }
    years
}

/// First 1900-2099 year appearing anywhere in `text`.
pub fn first_year_in(text: &str) -> Option<i32> {
    YEAR_REGEX
        .find(text)
        .and_then(|found| found.as_str().parse().ok())
}

/// Picks the reporting year for a run.
///
/// An explicit year is returned unchecked; availability is validated per table
/// by [`ensure_year_available`]. Otherwise the most recent year found for
/// `stem` across both header sets wins.
///
/// # Errors
///
/// Returns [`MapError::NoYearDetected`] when neither table has a year for `stem`.
pub fn detect_year<A: AsRef<str>, B: AsRef<str>>(
    first: &[A],
    second: &[B],
    stem: &str,
    explicit: Option<i32>,
) -> Result<i32> {
    if let Some(year) = explicit {
        debug!(year, "using explicit reporting year");
        return Ok(year);
    }
    let mut years = available_years(first, stem);
    for year in available_years(second, stem) {
        if !years.contains(&year) {
            years.push(year);
        }
    }
    let year = years
        .iter()
        .copied()
        .max()
        .ok_or_else(|| MapError::NoYearDetected {
            stem: stem.to_string(),
        })?;
    info!(year, candidates = ?years, "detected reporting year");
    Ok(year)
}

/// Checks that `headers` carry a `stem` column for `year`.
///
/// # Errors
///
/// Returns [`MapError::YearNotAvailable`] listing the sorted years that are
/// present, or [`MapError::AmbiguousColumn`] if the year column is ambiguous.
pub fn ensure_year_available<S: AsRef<str>>(
    dataset: &str,
    headers: &[S],
    stem: &str,
    year: i32,
) -> Result<()> {
    let found = find_column(headers, stem, Some(year))?;
    if found.column.is_some() {
        return Ok(());
    }
    let mut available = available_years(headers, stem);
    available.sort_unstable();
    Err(MapError::YearNotAvailable {
        dataset: dataset.to_string(),
        stem: stem.to_string(),
        year,
        available,
    })
}
