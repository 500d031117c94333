use rxs_map::MapError;
use thiserror::Error;

/// Errors that abort record building or aggregate extraction.
#[derive(Debug, Error)]
pub enum TransformError {
    /// Column resolution failed.
    #[error(transparent)]
    Map(#[from] MapError),

    /// The macro table has no data rows.
    #[error("{table} appears to be empty")]
    EmptyTable { table: String },

    /// No row label contains both search terms.
    #[error("unable to locate a row containing both '{primary}' and '{secondary}' in {table}")]
    RowNotFound {
        table: String,
        primary: String,
        secondary: String,
    },

    /// The target row has no year column with a numeric value.
    #[error("no usable year columns were found in {table}")]
    NoUsableYears { table: String },

    /// Every drug table came back empty after filtering.
    #[error(
        "no spending rows were extracted for year {year}; check that the tables contain data for this year"
    )]
    NoRecordsExtracted { year: i32 },

    /// The GLP-1 vocabulary is not a valid regular expression.
    #[error("invalid GLP-1 pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Result type for transform operations.
pub type Result<T> = std::result::Result<T, TransformError>;
