//! Record normalization for drug spending and national expenditure tables.
//!
//! This crate provides:
//! - **Coercion**: total float/integer/text readers over raw cells
//! - **Record building**: per-part drug spend records with GLP-1 flags
//! - **Aggregate extraction**: latest value plus trailing series from the
//!   national expenditure table

mod aggregate;
mod classify;
mod coerce;
mod error;
mod records;

pub use aggregate::{extract_aggregate, find_label_row};
pub use classify::Glp1Classifier;
pub use coerce::{normalize_text, parse_numeric, to_float, to_int};
pub use error::{Result, TransformError};
pub use records::{PartColumns, build_records};
