//! Workbook loading through calamine.
//!
//! Only the first worksheet is read, and its first row is the header row.

use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use rxs_model::{CellValue, Table, format_numeric};
use tracing::debug;

use crate::error::{IngestError, Result};
use crate::{clean_header, table_name};

/// Maps a calamine cell onto the model's cell type.
///
/// Error cells (`#N/A`, `#DIV/0!`) are treated as blanks.
pub fn data_to_cell(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::String(s) => CellValue::text(s.as_str()),
        Data::Float(f) => CellValue::Number(*f),
        Data::Int(i) => CellValue::Int(*i),
        Data::Bool(b) => CellValue::Bool(*b),
        other => CellValue::text(other.to_string()),
    }
}

fn header_text(data: &Data) -> String {
    match data {
        Data::Float(f) => format_numeric(*f),
        Data::Empty | Data::Error(_) => String::new(),
        other => clean_header(&other.to_string()),
    }
}

/// Reads the first worksheet of any workbook format calamine detects.
pub fn read_workbook_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(|source| IngestError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = workbook.sheet_names();
    let Some(sheet_name) = sheet_names.first() else {
        return Err(IngestError::NoSheets {
            path: path.to_path_buf(),
        });
    };

    let range = workbook
        .worksheet_range(sheet_name)
        .map_err(|source| IngestError::Workbook {
            path: path.to_path_buf(),
            source,
        })?;

    let mut table = Table::new(table_name(path), Vec::new());
    let mut rows = range
        .rows()
        .filter(|row| !row.iter().all(|cell| data_to_cell(cell).is_blank()));
    if let Some(header_row) = rows.next() {
        table.headers = header_row.iter().map(header_text).collect();
    }
    for row in rows {
        table.push_row(row.iter().map(data_to_cell).collect());
    }

    debug!(
        path = %path.display(),
        sheet = %sheet_name,
        columns = table.headers.len(),
        rows = table.row_count(),
        "loaded workbook table"
    );
    Ok(table)
}
