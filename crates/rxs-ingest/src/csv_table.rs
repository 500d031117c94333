//! CSV loading.

use std::path::Path;

use csv::ReaderBuilder;
use rxs_model::{CellValue, Table};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::{clean_header, table_name};

fn normalize_cell(raw: &str) -> CellValue {
    CellValue::text(raw.trim().trim_matches('\u{feff}'))
}

/// Reads a CSV file whose first non-blank record is the header row.
///
/// Cells load as text; numeric coercion happens downstream. Blank records
/// are dropped.
pub fn read_csv_table(path: &Path) -> Result<Table> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = Table::new(table_name(path), Vec::new());
    let mut header_seen = false;
    for record in reader.records() {
        let record = record.map_err(|source| IngestError::CsvParse {
            path: path.to_path_buf(),
            source,
        })?;
        if record.iter().all(|value| value.trim().is_empty()) {
            continue;
        }
        if header_seen {
            table.push_row(record.iter().map(normalize_cell).collect());
        } else {
            table.headers = record.iter().map(clean_header).collect();
            header_seen = true;
        }
    }

    debug!(
        path = %path.display(),
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded csv table"
    );
    Ok(table)
}
