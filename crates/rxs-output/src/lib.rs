//! JSON output files.
//!
//! Two files are produced per run, both pretty-printed UTF-8 JSON:
//! - `medicare_drugs_<year>.json`: array of drug spend records
//! - `nhe_retail_rx.json`: the national retail prescription aggregate

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rxs_model::{DrugSpendRecord, MacroAggregate};
use serde::Serialize;
use thiserror::Error;
use tracing::info;

/// File name of the national retail prescription aggregate.
pub const MACRO_OUTPUT_FILE: &str = "nhe_retail_rx.json";

/// Errors raised while writing output files.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("failed to create output directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize {path}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, OutputError>;

/// File name of the drug records output for `year`.
pub fn drug_records_file_name(year: i32) -> String {
    format!("medicare_drugs_{year}.json")
}

/// Creates `dir` and any missing parents.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Writes `value` to `path` as pretty-printed JSON.
pub fn write_json_pretty<T: Serialize + ?Sized>(path: &Path, value: &T) -> Result<()> {
    let write_err = |source| OutputError::Write {
        path: path.to_path_buf(),
        source,
    };
    let file = File::create(path).map_err(write_err)?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, value).map_err(|source| {
        OutputError::Serialize {
            path: path.to_path_buf(),
            source,
        }
    })?;
    writer.flush().map_err(write_err)
}

/// Writes the drug records for `year` into `dir`, returning the file path.
pub fn write_drug_records(dir: &Path, year: i32, records: &[DrugSpendRecord]) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(drug_records_file_name(year));
    write_json_pretty(&path, records)?;
    info!(path = %path.display(), records = records.len(), "wrote drug records");
    Ok(path)
}

/// Writes the macro aggregate into `dir`, returning the file path.
pub fn write_macro_aggregate(dir: &Path, aggregate: &MacroAggregate) -> Result<PathBuf> {
    ensure_output_dir(dir)?;
    let path = dir.join(MACRO_OUTPUT_FILE);
    write_json_pretty(&path, aggregate)?;
    info!(path = %path.display(), latest_year = aggregate.latest_year, "wrote macro aggregate");
    Ok(path)
}
