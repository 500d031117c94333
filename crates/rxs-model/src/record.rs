//! Output records.
//!
//! Field names match the published JSON layout, so these types serialize
//! directly into the output files.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Medicare program part a drug table belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Part {
    /// Part D: retail prescription drugs.
    D,
    /// Part B: physician-administered drugs. Carries a procedure description.
    B,
}

impl Part {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::D => "D",
            Self::B => "B",
        }
    }

    /// Dataset label used in diagnostics, e.g. `"Part D"`.
    pub fn dataset_name(self) -> &'static str {
        match self {
            Self::D => "Part D",
            Self::B => "Part B",
        }
    }
}

impl fmt::Display for Part {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One drug row for the reporting year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugSpendRecord {
    pub year: i32,
    pub part: Part,
    pub display_name: String,
    pub spend_total_usd: f64,
    pub claims: Option<i64>,
    pub beneficiaries: Option<i64>,
    /// Set only when `prev_spend_total_usd` is present.
    pub prev_year: Option<i32>,
    pub prev_spend_total_usd: Option<f64>,
    pub is_glp1: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MacroSeriesPoint {
    pub year: i32,
    pub value_usd: f64,
}

/// Latest value and trailing series for the national retail prescription row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MacroAggregate {
    pub latest_year: i32,
    pub value_usd: f64,
    pub series: Vec<MacroSeriesPoint>,
}
