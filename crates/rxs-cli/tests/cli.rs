//! End-to-end runs of the `rx-scoreboard` binary over CSV fixtures.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use serde_json::Value;
use tempfile::TempDir;

const PART_D: &str = "\
Brnd_Name,Gnrc_Name,Tot_Spndng_2021,Tot_Spndng_2022,Tot_Clms_2022,Tot_Benes_2022
Ozempic,semaglutide,\"1,000\",\"2,500.5\",10,4
,,,300,1,1
";

const PART_B: &str = "\
Brnd_Name,Gnrc_Name,HCPCS_Desc,Tot_Spndng_2022,Tot_Clms_2022,Tot_Benes_2022
,,Injection pembrolizumab,900,3,2
Keytruda,pembrolizumab,,0,1,1
";

const NHE: &str = "\
Expenditure,2018,2019,2020,2021,2022,2023
Hospital Care,1,2,3,4,5,6
Retail Prescription Drugs,335.0,348.4,358.7,378.0,405.9,449.7
";

struct Fixture {
    dir: TempDir,
}

impl Fixture {
    fn new(part_d: &str, part_b: &str, nhe: &str) -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("partd.csv"), part_d).unwrap();
        fs::write(dir.path().join("partb.csv"), part_b).unwrap();
        fs::write(dir.path().join("nhe.csv"), nhe).unwrap();
        Self { dir }
    }

    fn outdir(&self) -> PathBuf {
        self.dir.path().join("out")
    }

    fn run(&self, extra: &[&str]) -> Output {
        let path = |name: &str| self.dir.path().join(name);
        Command::new(env!("CARGO_BIN_EXE_rx-scoreboard"))
            .env_remove("RUST_LOG")
            .arg("--partd")
            .arg(path("partd.csv"))
            .arg("--partb")
            .arg(path("partb.csv"))
            .arg("--nhe")
            .arg(path("nhe.csv"))
            .arg("--outdir")
            .arg(self.outdir())
            .arg("--color=never")
            .args(extra)
            .output()
            .unwrap()
    }
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn writes_drug_records_and_macro_series() {
    let fixture = Fixture::new(PART_D, PART_B, NHE);
    let output = fixture.run(&[]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Wrote 2 Medicare drug rows for 2022"), "{stdout}");
    assert!(stdout.contains("Wrote NHE retail prescription series (2023)"), "{stdout}");

    let drugs = read_json(&fixture.outdir().join("medicare_drugs_2022.json"));
    let drugs = drugs.as_array().unwrap();
    assert_eq!(drugs.len(), 2);

    assert_eq!(drugs[0]["part"], "D");
    assert_eq!(drugs[0]["display_name"], "Ozempic");
    assert_eq!(drugs[0]["spend_total_usd"], 2500.5);
    assert_eq!(drugs[0]["claims"], 10);
    assert_eq!(drugs[0]["prev_year"], 2021);
    assert_eq!(drugs[0]["prev_spend_total_usd"], 1000.0);

    assert_eq!(drugs[1]["part"], "B");
    assert_eq!(drugs[1]["display_name"], "Injection pembrolizumab");
    assert_eq!(drugs[1]["prev_year"], Value::Null);
    assert_eq!(drugs[1]["is_glp1"], false);

    let nhe = read_json(&fixture.outdir().join("nhe_retail_rx.json"));
    assert_eq!(nhe["latest_year"], 2023);
    assert_eq!(nhe["value_usd"], 449.7);
    let years: Vec<i64> = nhe["series"]
        .as_array()
        .unwrap()
        .iter()
        .map(|point| point["year"].as_i64().unwrap())
        .collect();
    assert_eq!(years, [2019, 2020, 2021, 2022, 2023]);
}

#[test]
fn missing_column_fails_with_one_error_line() {
    let part_b = "\
Brnd_Name,Gnrc_Name,Tot_Spndng_2022,Tot_Clms_2022,Tot_Benes_2022
Keytruda,pembrolizumab,900,3,2
";
    let fixture = Fixture::new(PART_D, part_b, NHE);
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    insta::assert_snapshot!(
        stderr.trim_end(),
        @"ERROR: Part B: unable to locate column matching 'HCPCS_Desc' (no similar columns)"
    );
    assert!(!fixture.outdir().join("medicare_drugs_2022.json").exists());
}

#[test]
fn nhe_failure_keeps_drug_records() {
    let nhe = "\
Expenditure,2021,2022
Hospital Care,4,5
";
    let fixture = Fixture::new(PART_D, PART_B, nhe);
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.starts_with("ERROR:"), "{stderr}");
    assert!(stderr.contains("'retail' and 'prescription'"), "{stderr}");
    assert!(fixture.outdir().join("medicare_drugs_2022.json").exists());
    assert!(!fixture.outdir().join("nhe_retail_rx.json").exists());
}

#[test]
fn empty_part_then_nhe_failure_prints_only_the_error() {
    let part_d = "\
Brnd_Name,Gnrc_Name,Tot_Spndng_2022,Tot_Clms_2022,Tot_Benes_2022
Eliquis,apixaban,0,1,1
";
    let nhe = "\
Expenditure,2021,2022
Hospital Care,4,5
";
    let fixture = Fixture::new(part_d, PART_B, nhe);
    let output = fixture.run(&[]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert_eq!(stderr.lines().count(), 1, "{stderr}");
    insta::assert_snapshot!(
        stderr.trim_end(),
        @"ERROR: unable to locate a row containing both 'retail' and 'prescription' in nhe.csv"
    );
}

#[test]
fn empty_part_is_silent_on_success() {
    let part_d = "\
Brnd_Name,Gnrc_Name,Tot_Spndng_2022,Tot_Clms_2022,Tot_Benes_2022
Eliquis,apixaban,0,1,1
";
    let fixture = Fixture::new(part_d, PART_B, NHE);
    let output = fixture.run(&[]);
    assert!(output.status.success(), "{output:?}");
    assert!(output.stderr.is_empty(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Wrote 1 Medicare drug rows for 2022"), "{stdout}");
}

#[test]
fn explicit_year_must_be_present() {
    let fixture = Fixture::new(PART_D, PART_B, NHE);
    let output = fixture.run(&["--year", "2021"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Available years: 2022"), "{stderr}");
}

#[test]
fn dry_run_writes_nothing() {
    let fixture = Fixture::new(PART_D, PART_B, NHE);
    let output = fixture.run(&["--dry-run"]);
    assert!(output.status.success(), "{output:?}");

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("dry run, nothing written"), "{stdout}");
    assert!(!fixture.outdir().exists());
}
