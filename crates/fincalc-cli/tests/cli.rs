//! End-to-end tests for the `fincalc` binary.
//!
//! Every test points `FINCALC_CONFIG` at a private temp file so the user's
//! real settings are never read or written.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fincalc(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fincalc").unwrap();
    cmd.env("FINCALC_CONFIG", config_dir.path().join("config.json"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// CALCULATORS
// ============================================================================

#[test]
fn test_emi_minimal() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["emi", "--principal", "100000", "--rate", "10", "--time", "1", "--format", "minimal"])
        .assert()
        .success()
        .stdout("8791.59\n");
}

#[test]
fn test_emi_table_uses_rupees() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["emi", "-p", "1,00,000", "-r", "10", "-t", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹8,791.59"))
        .stdout(predicate::str::contains("₹1,05,499.08"))
        .stdout(predicate::str::contains("₹5,499.08"));
}

#[test]
fn test_gst_json() {
    let dir = TempDir::new().unwrap();
    let output = fincalc(&dir)
        .args(["--format", "json", "gst", "--amount", "1000", "--rate", "18"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let doc: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(doc["calculator"], "gst");
    assert_eq!(doc["result"]["gst_amount"], 180.0);
    assert_eq!(doc["result"]["total"], 1180.0);
    assert_eq!(doc["params"]["amount"], 1000.0);
}

#[test]
fn test_aliases() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["si", "-p", "10000", "-r", "5", "-t", "2", "-f", "minimal"])
        .assert()
        .success()
        .stdout("11000.00\n");

    fincalc(&dir)
        .args(["fd", "-p", "100000", "-r", "0", "-t", "3", "-f", "minimal"])
        .assert()
        .success()
        .stdout("100000.00\n");
}

#[test]
fn test_compound_interest_csv() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["ci", "-p", "1000", "-r", "10", "-t", "1", "--format", "csv"])
        .assert()
        .success()
        .stdout("interest,amount\n100,1100\n");
}

#[test]
fn test_cagr_percent() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["cagr", "--initial-value", "1000", "--final-value", "2000", "--time", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("14.87%"));
}

#[test]
fn test_salary_defaults_components() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["salary", "--basic", "10000", "--deductions", "12000", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"net\": -2000.0"));
}

#[test]
fn test_emi_schedule_csv() {
    let dir = TempDir::new().unwrap();
    let output = fincalc(&dir)
        .args(["emi", "-p", "100000", "-r", "10", "-t", "1", "--schedule", "-f", "csv"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 13);
    assert!(lines[0].starts_with("month,opening_balance,installment"));
    assert!(lines[12].starts_with("12,"));
    let closing: f64 = lines[12].rsplit(',').next().unwrap().parse().unwrap();
    assert_eq!(closing, 0.0);
}

// ============================================================================
// ERRORS
// ============================================================================

#[test]
fn test_invalid_input_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["cagr", "--initial-value", "0", "--final-value", "100", "--time", "5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("initial_value"));
}

#[test]
fn test_negative_amount_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["simple-interest", "--principal=-500", "--rate", "5", "--time", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("principal"));
}

#[test]
fn test_non_numeric_argument_fails() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["gst", "--amount", "lots", "--rate", "18"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a number"));
}

// ============================================================================
// CATALOGUE AND CONFIG
// ============================================================================

#[test]
fn test_list_calculators() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("compound-interest"))
        .stdout(predicate::str::contains("--frequency [1]"));
}

#[test]
fn test_list_json_has_every_calculator() {
    let dir = TempDir::new().unwrap();
    let output = fincalc(&dir).args(["list", "-f", "json"]).output().unwrap();
    let catalogue: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(catalogue.len(), 16);
    assert_eq!(catalogue[0]["name"], "simple_interest");
}

#[test]
fn test_config_precision_applies() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "set", "precision", "0"])
        .assert()
        .success();

    fincalc(&dir)
        .args(["config", "get", "decimal_precision", "-f", "minimal"])
        .assert()
        .success()
        .stdout("0\n");

    fincalc(&dir)
        .args(["emi", "-p", "100000", "-r", "10", "-t", "1", "-f", "minimal"])
        .assert()
        .success()
        .stdout("8792\n");
}

#[test]
fn test_config_default_format() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "set", "default_format", "minimal"])
        .assert()
        .success();

    fincalc(&dir)
        .args(["gst", "-a", "1000", "-r", "18"])
        .assert()
        .success()
        .stdout("1180.00\n");
}

#[test]
fn test_config_rejects_bad_value() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir)
        .args(["config", "set", "grouping", "chinese"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("indian or international"));

    fincalc(&dir)
        .args(["config", "set", "daycount", "act360"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key"));
}

#[test]
fn test_config_reset() {
    let dir = TempDir::new().unwrap();
    fincalc(&dir).args(["config", "set", "grouping", "international"]).assert().success();
    fincalc(&dir).args(["-q", "config", "reset", "--all"]).assert().success();

    fincalc(&dir)
        .args(["config", "get", "grouping", "-f", "minimal"])
        .assert()
        .success()
        .stdout("indian\n");
}
