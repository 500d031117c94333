//! Extraction defaults.
//!
//! Every knob the extractors read lives here and is passed in explicitly.

use serde::{Deserialize, Serialize};

/// Brand name column stem.
pub const BRAND_NAME_STEM: &str = "Brnd_Name";
/// Generic name column stem.
pub const GENERIC_NAME_STEM: &str = "Gnrc_Name";
/// Part B procedure (HCPCS) description column stem.
pub const PROCEDURE_DESC_STEM: &str = "HCPCS_Desc";
/// Year-suffixed total spending column stem. Also drives year detection.
pub const TOTAL_SPENDING_STEM: &str = "Tot_Spndng";
/// Year-suffixed total claims column stem.
pub const TOTAL_CLAIMS_STEM: &str = "Tot_Clms";
/// Year-suffixed total beneficiaries column stem.
pub const TOTAL_BENEFICIARIES_STEM: &str = "Tot_Benes";

/// Drug names and classes counted as GLP-1 therapies (matched case-insensitively).
pub const GLP1_PATTERN: &str =
    r"semaglutide|tirzepatide|liraglutide|dulaglutide|exenatide|glp\s*-?\s*1|incretin";

pub const MACRO_PRIMARY_TERM: &str = "retail";
pub const MACRO_SECONDARY_TERM: &str = "prescription";
pub const MACRO_SERIES_WINDOW: usize = 5;

/// Output directory used when none is given on the command line.
pub const DEFAULT_OUTPUT_DIR: &str = "data";

/// Column stems looked up in the per-drug tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnStems {
    pub brand_name: String,
    pub generic_name: String,
    pub procedure_desc: String,
    pub total_spending: String,
    pub total_claims: String,
    pub total_beneficiaries: String,
}

impl Default for ColumnStems {
    fn default() -> Self {
        Self {
            brand_name: BRAND_NAME_STEM.to_string(),
            generic_name: GENERIC_NAME_STEM.to_string(),
            procedure_desc: PROCEDURE_DESC_STEM.to_string(),
            total_spending: TOTAL_SPENDING_STEM.to_string(),
            total_claims: TOTAL_CLAIMS_STEM.to_string(),
            total_beneficiaries: TOTAL_BENEFICIARIES_STEM.to_string(),
        }
    }
}

/// How the macro table's target row is located and summarized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroRowOptions {
    /// Both terms must appear (case-insensitively) in the row label.
    pub primary_term: String,
    pub secondary_term: String,
    /// Number of most recent years kept in the series.
    pub series_window: usize,
}

impl Default for MacroRowOptions {
    fn default() -> Self {
        Self {
            primary_term: MACRO_PRIMARY_TERM.to_string(),
            secondary_term: MACRO_SECONDARY_TERM.to_string(),
            series_window: MACRO_SERIES_WINDOW,
        }
    }
}

/// Options controlling a full extraction run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractOptions {
    pub stems: ColumnStems,
    /// Regular expression source for GLP-1 classification.
    pub glp1_pattern: String,
    pub macro_row: MacroRowOptions,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            stems: ColumnStems::default(),
            glp1_pattern: GLP1_PATTERN.to_string(),
            macro_row: MacroRowOptions::default(),
        }
    }
}

impl ExtractOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_glp1_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.glp1_pattern = pattern.into();
        self
    }

    #[must_use]
    pub fn with_series_window(mut self, window: usize) -> Self {
        self.macro_row.series_window = window;
        self
    }
}
