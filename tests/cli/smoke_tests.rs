use predicates::prelude::*;

use crate::common::bbcheck;

#[test]
fn shows_help() {
    bbcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("classify").and(predicate::str::contains("run")));
}

#[test]
fn classifies_documented_examples() {
    for (value, label) in [("0", "Child"), ("12", "Child"), ("13", "Teenager"), ("121", "Invalid")] {
        bbcheck()
            .args(["classify", value])
            .assert()
            .success()
            .stdout(predicate::eq(format!("{label}\n")));
    }
}

#[test]
fn negative_values_are_invalid() {
    bbcheck()
        .args(["classify", "-1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid"));
    bbcheck()
        .args(["classify", "--", "-9223372036854775808"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid"));
}

#[test]
fn gate_is_strictly_above_threshold() {
    bbcheck().args(["gate", "30"]).assert().success().stdout(predicate::eq("off\n"));
    bbcheck().args(["gate", "31"]).assert().success().stdout(predicate::eq("on\n"));
    bbcheck()
        .args(["gate", "5", "--threshold", "-2"])
        .assert()
        .success()
        .stdout(predicate::eq("on\n"));
}

#[test]
fn gate_logs_driver_switch_when_verbose() {
    bbcheck()
        .args(["gate", "31", "-v"])
        .assert()
        .success()
        .stderr(predicate::str::contains("led: on"));
}

#[test]
fn classify_as_json() {
    let output = bbcheck().args(["classify", "65", "--format", "json"]).output().expect("runs");
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(json["input"], 65);
    assert_eq!(json["output"], "Senior");
}

#[test]
fn run_age_suite_succeeds() {
    bbcheck()
        .arg("run")
        .assert()
        .success()
        .stdout(predicate::str::contains("0 failed"));
}

#[test]
fn run_report_as_json() {
    let output = bbcheck().args(["run", "--format", "json"]).output().expect("runs");
    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(report["suite"], "age");
    assert_eq!(report["failed"], 0);
    assert!(report["outcomes"].as_array().is_some_and(|o| !o.is_empty()));
}

#[test]
fn cases_for_threshold() {
    let output = bbcheck()
        .args(["cases", "--threshold", "30", "--format", "json"])
        .output()
        .expect("runs");
    assert!(output.status.success());
    let cases: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    let inputs: Vec<i64> = cases
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|c| c["input"].as_i64())
        .collect();
    assert!(inputs.contains(&29) && inputs.contains(&30) && inputs.contains(&31));
}

#[test]
fn max_cases_truncates() {
    let output = bbcheck()
        .args(["cases", "--max-cases", "3", "--format", "json"])
        .output()
        .expect("runs");
    let cases: serde_json::Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(cases.as_array().map(Vec::len), Some(3));
}

#[test]
fn rejects_conflicting_sources() {
    bbcheck()
        .args(["run", "--table", "a.json", "--threshold", "3"])
        .assert()
        .failure();
}

#[test]
fn rejects_non_numeric_value() {
    bbcheck().args(["classify", "ten"]).assert().failure();
}
