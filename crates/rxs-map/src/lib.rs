//! Column lookup for drifting, year-suffixed spreadsheet headers.
//!
//! - [`normalize_key`]: separator- and case-insensitive header keys
//! - [`find_column`] / [`require_column`]: unique stem(+year) resolution with
//!   ambiguity detection and suggestions
//! - [`detect_year`] / [`ensure_year_available`]: reporting-year inference and
//!   per-table validation

mod error;
mod normalize;
mod resolve;
mod years;

pub use error::{MapError, Result};
pub use normalize::normalize_key;
pub use resolve::{ColumnMatch, ResolvedColumn, find_column, require_column};
pub use years::{available_years, detect_year, ensure_year_available, first_year_in};
