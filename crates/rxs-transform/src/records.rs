//! Drug spend record building.
//!
//! One table per program part. Required columns are resolved up front so a
//! schema problem fails the run before any row is read; row-level problems
//! (no usable name, no positive spend) only drop the row.

use rxs_map::{find_column, require_column};
use rxs_model::{ColumnStems, DrugSpendRecord, ExtractOptions, Part, Table};
use tracing::{debug, info};

use crate::classify::Glp1Classifier;
use crate::coerce::{normalize_text, to_float, to_int};
use crate::error::Result;

/// Column positions used to build one part's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartColumns {
    /// Display name candidates in priority order.
    pub display_name: Vec<usize>,
    pub spend: usize,
    pub claims: usize,
    pub beneficiaries: usize,
    /// Previous-year spending, when the table carries it unambiguously.
    pub prev_spend: Option<usize>,
}

impl PartColumns {
    /// Resolves every column the record builder reads.
    ///
    /// Part B additionally requires the procedure description, which is the
    /// last display-name fallback.
    pub fn resolve(
        table: &Table,
        year: i32,
        part: Part,
        dataset: &str,
        stems: &ColumnStems,
    ) -> Result<Self> {
        let headers = &table.headers;
        let mut display_name = vec![
            require_column(headers, &stems.brand_name, dataset, None)?.index,
            require_column(headers, &stems.generic_name, dataset, None)?.index,
        ];
        if part == Part::B {
            display_name.push(require_column(headers, &stems.procedure_desc, dataset, None)?.index);
        }
        let spend = require_column(headers, &stems.total_spending, dataset, Some(year))?;
        let claims = require_column(headers, &stems.total_claims, dataset, Some(year))?;
        let beneficiaries =
            require_column(headers, &stems.total_beneficiaries, dataset, Some(year))?;

        let prev_spend = match find_column(headers, &stems.total_spending, Some(year - 1)) {
            Ok(found) => found.column.map(|column| column.index),
            Err(error) => {
                debug!(dataset, %error, "ignoring ambiguous previous-year spending column");
                None
            }
        };

        Ok(Self {
            display_name,
            spend: spend.index,
            claims: claims.index,
            beneficiaries: beneficiaries.index,
            prev_spend,
        })
    }
}

/// Builds the spend records for one part's table.
///
/// Rows without a display name or without positive spending are skipped.
/// Output keeps input row order.
///
/// # Errors
///
/// Fails when a required column is missing or ambiguous, or when the GLP-1
/// pattern in `options` does not compile.
pub fn build_records(
    table: &Table,
    year: i32,
    part: Part,
    dataset: &str,
    options: &ExtractOptions,
) -> Result<Vec<DrugSpendRecord>> {
    let columns = PartColumns::resolve(table, year, part, dataset, &options.stems)?;
    let classifier = Glp1Classifier::new(&options.glp1_pattern)?;
    debug!(dataset, ?columns, "resolved part columns");

    let mut records = Vec::new();
    let mut missing_name = 0usize;
    let mut non_positive_spend = 0usize;
    for row in 0..table.row_count() {
        let Some(display_name) = columns
            .display_name
            .iter()
            .find_map(|&column| normalize_text(table.cell(row, column)))
        else {
            missing_name += 1;
            continue;
        };

        let spend = match to_float(table.cell(row, columns.spend)) {
            Some(spend) if spend > 0.0 => spend,
            _ => {
                non_positive_spend += 1;
                continue;
            }
        };

        let prev_spend = columns
            .prev_spend
            .and_then(|column| to_float(table.cell(row, column)));

        records.push(DrugSpendRecord {
            year,
            part,
            is_glp1: classifier.is_glp1(&display_name),
            display_name,
            spend_total_usd: spend,
            claims: to_int(table.cell(row, columns.claims)),
            beneficiaries: to_int(table.cell(row, columns.beneficiaries)),
            prev_year: prev_spend.map(|_| year - 1),
            prev_spend_total_usd: prev_spend,
        });
    }

    info!(
        dataset,
        year,
        rows = table.row_count(),
        records = records.len(),
        missing_name,
        non_positive_spend,
        "built drug spend records"
    );
    Ok(records)
}
