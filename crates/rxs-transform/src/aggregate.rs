//! National expenditure series extraction.
//!
//! The macro table has one category per row and one year per column. The
//! first column holds the category label.

use std::collections::BTreeMap;

use rxs_map::first_year_in;
use rxs_model::{MacroAggregate, MacroRowOptions, MacroSeriesPoint, Table};
use tracing::{debug, info};

use crate::coerce::to_float;
use crate::error::{Result, TransformError};

/// Index of the first row whose label contains both search terms.
pub fn find_label_row(table: &Table, options: &MacroRowOptions) -> Option<usize> {
    let primary = options.primary_term.to_lowercase();
    let secondary = options.secondary_term.to_lowercase();
    (0..table.row_count()).find(|&row| {
        let label = table.cell(row, 0).display_text().to_lowercase();
        label.contains(&primary) && label.contains(&secondary)
    })
}

/// Extracts the latest value and trailing series for the labeled row.
///
/// # Errors
///
/// [`TransformError::EmptyTable`] when there are no rows,
/// [`TransformError::RowNotFound`] when no label matches, and
/// [`TransformError::NoUsableYears`] when the row has no numeric year cells.
pub fn extract_aggregate(table: &Table, options: &MacroRowOptions) -> Result<MacroAggregate> {
    if table.is_empty() {
        return Err(TransformError::EmptyTable {
            table: table.name.clone(),
        });
    }

    let row = find_label_row(table, options).ok_or_else(|| TransformError::RowNotFound {
        table: table.name.clone(),
        primary: options.primary_term.clone(),
        secondary: options.secondary_term.clone(),
    })?;
    debug!(
        row,
        label = %table.cell(row, 0).display_text(),
        "matched macro row"
    );

    let mut by_year: BTreeMap<i32, f64> = BTreeMap::new();
    for (column, header) in table.headers.iter().enumerate().skip(1) {
        let Some(year) = first_year_in(header) else {
            continue;
        };
        if let Some(value) = to_float(table.cell(row, column)) {
            by_year.insert(year, value);
        }
    }

    let Some((&latest_year, &value_usd)) = by_year.last_key_value() else {
        return Err(TransformError::NoUsableYears {
            table: table.name.clone(),
        });
    };

    let mut series: Vec<MacroSeriesPoint> = by_year
        .iter()
        .rev()
        .take(options.series_window)
        .map(|(&year, &value_usd)| MacroSeriesPoint { year, value_usd })
        .collect();
    series.reverse();

    info!(
        table = %table.name,
        latest_year,
        value_usd,
        years = by_year.len(),
        series_len = series.len(),
        "extracted macro aggregate"
    );
    Ok(MacroAggregate {
        latest_year,
        value_usd,
        series,
    })
}

#[cfg(test)]
mod tests {
    use rxs_model::CellValue;

    use super::*;

    fn nhe_table(headers: &[&str], rows: Vec<Vec<CellValue>>) -> Table {
        let mut table = Table::new("nhe", headers.iter().map(ToString::to_string).collect());
        for row in rows {
            table.push_row(row);
        }
        table
    }

    #[test]
    fn keeps_five_most_recent_years() {
        let table = nhe_table(
            &["Expenditure", "2018", "2019", "2020", "2021", "2022", "2023"],
            vec![vec![
                "Retail Prescription Drugs".into(),
                CellValue::Number(335.0),
                CellValue::Number(348.4),
                "358.7".into(),
                CellValue::Int(378),
                "405.9".into(),
                "449.7".into(),
            ]],
        );

        let aggregate = extract_aggregate(&table, &MacroRowOptions::default()).unwrap();
        assert_eq!(aggregate.latest_year, 2023);
        assert_eq!(aggregate.value_usd, 449.7);
        let years: Vec<i32> = aggregate.series.iter().map(|p| p.year).collect();
        assert_eq!(years, vec![2019, 2020, 2021, 2022, 2023]);
        assert_eq!(aggregate.series[2].value_usd, 378.0);
    }

    #[test]
    fn first_matching_row_wins() {
        let table = nhe_table(
            &["Label", "2022"],
            vec![
                vec!["Hospital Care".into(), "1".into()],
                vec!["Retail prescription drugs".into(), "2".into()],
                vec!["RETAIL PRESCRIPTION (alt)".into(), "3".into()],
            ],
        );
        assert_eq!(find_label_row(&table, &MacroRowOptions::default()), Some(1));
        let aggregate = extract_aggregate(&table, &MacroRowOptions::default()).unwrap();
        assert_eq!(aggregate.value_usd, 2.0);
    }

    #[test]
    fn skips_non_year_and_blank_columns() {
        let table = nhe_table(
            &["Label", "Notes", "2021", "CY2022", "2023"],
            vec![vec![
                "Retail Prescription Drugs".into(),
                "10".into(),
                "5".into(),
                "6".into(),
                CellValue::Empty,
            ]],
        );
        let aggregate = extract_aggregate(&table, &MacroRowOptions::default()).unwrap();
        assert_eq!(aggregate.latest_year, 2022);
        assert_eq!(aggregate.series.len(), 2);
    }

    #[test]
    fn empty_table_fails() {
        let table = nhe_table(&["Label", "2022"], vec![]);
        let err = extract_aggregate(&table, &MacroRowOptions::default()).unwrap_err();
        assert!(matches!(err, TransformError::EmptyTable { .. }));
    }

    #[test]
    fn missing_row_fails() {
        let table = nhe_table(&["Label", "2022"], vec![vec!["Hospital Care".into(), "1".into()]]);
        let err = extract_aggregate(&table, &MacroRowOptions::default()).unwrap_err();
        insta::assert_snapshot!(
            err.to_string(),
            @"unable to locate a row containing both 'retail' and 'prescription' in nhe"
        );
    }

    #[test]
    fn row_without_values_fails() {
        let table = nhe_table(
            &["Label", "2022", "2023"],
            vec![vec!["Retail Prescription Drugs".into(), "-".into(), CellValue::Empty]],
        );
        let err = extract_aggregate(&table, &MacroRowOptions::default()).unwrap_err();
        assert!(matches!(err, TransformError::NoUsableYears { .. }));
    }
}
