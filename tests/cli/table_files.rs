use predicates::prelude::*;

use crate::common::{GRADE_JSON, TableFile, bbcheck};

#[test]
fn classify_with_table_file() {
    let table = TableFile::new("grade.json", GRADE_JSON);
    bbcheck()
        .args(["classify", "50", "--table"])
        .arg(&table.path)
        .assert()
        .success()
        .stdout(predicate::eq("Pass\n"));
    bbcheck()
        .args(["classify", "101", "--table"])
        .arg(&table.path)
        .assert()
        .success()
        .stdout(predicate::eq("Out of range\n"));
}

#[test]
fn run_suite_from_table_file() {
    let table = TableFile::new("grade.json", GRADE_JSON);
    bbcheck()
        .args(["run", "--table"])
        .arg(&table.path)
        .assert()
        .success()
        .stdout(predicate::str::contains("grade__lower_0").and(predicate::str::contains("0 failed")));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_table_file() {
    let yaml = "name: sign\nranges:\n  - { lower: -10, upper: -1, label: Negative }\n  - { lower: 1, upper: 10, label: Positive }\n";
    let table = TableFile::new("sign.yml", yaml);
    bbcheck()
        .args(["classify", "0", "--table"])
        .arg(&table.path)
        .assert()
        .success()
        .stdout(predicate::eq("Invalid\n"));
}

#[test]
fn overlapping_table_is_rejected() {
    let table = TableFile::new(
        "broken.json",
        r#"{ "name": "broken", "ranges": [
            { "lower": 0, "upper": 10, "label": "A" },
            { "lower": 10, "upper": 20, "label": "B" } ] }"#,
    );
    bbcheck()
        .args(["run", "--table"])
        .arg(&table.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Application Error").and(predicate::str::contains("overlap")));
}

#[test]
fn unsupported_extension_is_rejected() {
    let table = TableFile::new("grade.toml", GRADE_JSON);
    bbcheck()
        .args(["classify", "1", "--table"])
        .arg(&table.path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported table format"));
}

#[test]
fn report_written_to_output_file() {
    let table = TableFile::new("grade.json", GRADE_JSON);
    let report = table.path.with_file_name("report.json");
    bbcheck()
        .args(["run", "--format", "json", "--table"])
        .arg(&table.path)
        .arg("--output")
        .arg(&report)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    let json: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&report).expect("report exists")).expect("valid json");
    assert_eq!(json["suite"], "grade");
}
