//! Data model for Medicare drug spending extracts.
//!
//! Shared by the ingest, mapping, transform and output crates:
//! - [`Table`] and [`CellValue`]: what the readers produce
//! - [`DrugSpendRecord`] and [`MacroAggregate`]: what the extractors emit
//! - [`ExtractOptions`]: named defaults passed into the extractors

pub mod cell;
pub mod options;
pub mod record;
pub mod table;

pub use cell::{CellValue, format_numeric};
pub use options::{ColumnStems, DEFAULT_OUTPUT_DIR, ExtractOptions, MacroRowOptions};
pub use record::{DrugSpendRecord, MacroAggregate, MacroSeriesPoint, Part};
pub use table::Table;
