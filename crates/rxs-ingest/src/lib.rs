//! Source table loading.
//!
//! Turns drug-spending and national-expenditure files into in-memory
//! [`Table`]s. The format is chosen by file extension:
//!
//! - `csv`: first non-blank record is the header row
//! - `xlsx`, `xlsm`, `xlsb`, `xls`, `ods`: first worksheet, first non-blank
//!   row is the header row
//!
//! Header text is trimmed; numeric header cells lose their `.0`.

mod csv_table;
mod error;
mod workbook;

use std::path::Path;

use rxs_model::Table;
use tracing::info;

pub use csv_table::read_csv_table;
pub use error::{IngestError, Result};
pub use workbook::{data_to_cell, read_workbook_table};

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "xla", "ods"];

/// Loads a table, picking the reader from the file extension.
pub fn load_table(path: &Path) -> Result<Table> {
    if !path.is_file() {
        return Err(IngestError::FileNotFound {
            path: path.to_path_buf(),
        });
    }
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    let table = if extension == "csv" {
        read_csv_table(path)?
    } else if WORKBOOK_EXTENSIONS.contains(&extension.as_str()) {
        read_workbook_table(path)?
    } else {
        return Err(IngestError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension,
        });
    };
    info!(
        table = %table.name,
        columns = table.headers.len(),
        rows = table.row_count(),
        "table loaded"
    );
    Ok(table)
}

/// Trims header text, including a leading byte-order mark.
pub(crate) fn clean_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').trim().to_string()
}

pub(crate) fn table_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
