//! Extraction pipeline.
//!
//! Stages run strictly in order and stop at the first fatal error:
//! 1. Load both drug tables
//! 2. Detect the reporting year and check both tables carry it
//! 3. Build Part D and Part B records, write them
//! 4. Load the NHE table, extract the aggregate, write it
//!
//! Drug records are written before the NHE table is read, so an NHE failure
//! leaves the drug records file in place.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use rxs_ingest::load_table;
use rxs_map::{detect_year, ensure_year_available};
use rxs_model::{DrugSpendRecord, ExtractOptions, MacroAggregate, Part, Table};
use rxs_output::{write_drug_records, write_macro_aggregate};
use rxs_transform::{TransformError, build_records, extract_aggregate};
use tracing::{debug, info, info_span};

/// Inputs and switches for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub partd: PathBuf,
    pub partb: PathBuf,
    pub nhe: PathBuf,
    pub output_dir: PathBuf,
    /// Explicit reporting year; detected from the headers when `None`.
    pub year: Option<i32>,
    /// Extract everything but write nothing.
    pub dry_run: bool,
    pub options: ExtractOptions,
}

/// Records extracted from both drug tables.
#[derive(Debug, Clone)]
pub struct DrugExtract {
    pub year: i32,
    /// Part D records followed by Part B records.
    pub records: Vec<DrugSpendRecord>,
    pub part_d_count: usize,
    pub part_b_count: usize,
}

/// Outcome of a full run.
#[derive(Debug, Clone)]
pub struct RunResult {
    pub year: i32,
    pub record_count: usize,
    pub aggregate: MacroAggregate,
    /// Written file paths; `None` on a dry run.
    pub drug_output: Option<PathBuf>,
    pub macro_output: Option<PathBuf>,
}

/// Resolves the year and builds both parts' records.
///
/// # Errors
///
/// Propagates column resolution and year errors, and fails with
/// [`TransformError::NoRecordsExtracted`] when neither table yields a record.
pub fn extract_drug_records(
    part_d: &Table,
    part_b: &Table,
    explicit_year: Option<i32>,
    options: &ExtractOptions,
) -> std::result::Result<DrugExtract, TransformError> {
    let spend_stem = options.stems.total_spending.as_str();
    let year = detect_year(&part_d.headers, &part_b.headers, spend_stem, explicit_year)?;

    ensure_year_available(Part::D.dataset_name(), &part_d.headers, spend_stem, year)?;
    ensure_year_available(Part::B.dataset_name(), &part_b.headers, spend_stem, year)?;

    let mut records = build_records(part_d, year, Part::D, Part::D.dataset_name(), options)?;
    let part_b_records = build_records(part_b, year, Part::B, Part::B.dataset_name(), options)?;
    let part_d_count = records.len();
    let part_b_count = part_b_records.len();

    if records.is_empty() && part_b_records.is_empty() {
        return Err(TransformError::NoRecordsExtracted { year });
    }
    for (part, count) in [(Part::D, part_d_count), (Part::B, part_b_count)] {
        if count == 0 {
            info!(part = %part, year, "no usable rows for this part");
        }
    }

    records.extend(part_b_records);
    Ok(DrugExtract {
        year,
        records,
        part_d_count,
        part_b_count,
    })
}

fn load(path: &Path, role: &str) -> Result<Table> {
    load_table(path).with_context(|| format!("load {role} table"))
}

/// Runs the whole extraction.
pub fn run(config: &RunConfig) -> Result<RunResult> {
    let run_span = info_span!("run", dry_run = config.dry_run);
    let _run_guard = run_span.enter();
    debug!(options = ?config.options, output_dir = %config.output_dir.display(), "run options");

    let ingest_start = Instant::now();
    let part_d = info_span!("ingest", part = "D").in_scope(|| load(&config.partd, "Part D"))?;
    let part_b = info_span!("ingest", part = "B").in_scope(|| load(&config.partb, "Part B"))?;
    info!(
        duration_ms = ingest_start.elapsed().as_millis(),
        "drug tables loaded"
    );

    let extract = info_span!("records").in_scope(|| {
        extract_drug_records(&part_d, &part_b, config.year, &config.options)
    })?;
    info!(
        year = extract.year,
        part_d = extract.part_d_count,
        part_b = extract.part_b_count,
        "drug records extracted"
    );

    let drug_output = if config.dry_run {
        None
    } else {
        Some(write_drug_records(
            &config.output_dir,
            extract.year,
            &extract.records,
        )?)
    };

    let nhe = info_span!("ingest", table = "NHE").in_scope(|| load(&config.nhe, "NHE"))?;
    let aggregate = extract_aggregate(&nhe, &config.options.macro_row)?;
    let macro_output = if config.dry_run {
        None
    } else {
        Some(write_macro_aggregate(&config.output_dir, &aggregate)?)
    };

    Ok(RunResult {
        year: extract.year,
        record_count: extract.records.len(),
        aggregate,
        drug_output,
        macro_output,
    })
}

/// Human-readable lines describing what a run produced.
pub fn summary_lines(result: &RunResult) -> Vec<String> {
    let drugs = match &result.drug_output {
        Some(path) => format!(
            "Wrote {} Medicare drug rows for {} to {}",
            result.record_count,
            result.year,
            path.display()
        ),
        None => format!(
            "Extracted {} Medicare drug rows for {} (dry run, nothing written)",
            result.record_count, result.year
        ),
    };
    let nhe = match &result.macro_output {
        Some(path) => format!(
            "Wrote NHE retail prescription series ({}) to {}",
            result.aggregate.latest_year,
            path.display()
        ),
        None => format!(
            "Extracted NHE retail prescription series ({}) (dry run, nothing written)",
            result.aggregate.latest_year
        ),
    };
    vec![drugs, nhe]
}
