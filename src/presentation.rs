// src/presentation.rs
use bbcheck_shared_kernel::{PresentationError, Result};
use bbcheck_usecase::{BlackBoxSuite, SuiteReport};
use comfy_table::{Table, presets::UTF8_FULL};
use serde::Serialize;

use crate::options::OutputFormat;

/// Single `input -> output` answer from `classify` or `gate`.
#[derive(Debug, Serialize)]
pub struct Answer<'a> {
    pub input: i64,
    pub output: &'a str,
}

pub fn render_answer(answer: &Answer<'_>, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Table => Ok(answer.output.to_string()),
        _ => render_structured(answer, format),
    }
}

pub fn render_cases(suite: &BlackBoxSuite, format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Table {
        return render_structured(suite.cases(), format);
    }
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(vec!["CASE", "INPUT", "EXPECTED", "TECHNIQUE"]);
    for case in suite.cases() {
        table.add_row(vec![
            case.name.clone(),
            case.input.to_string(),
            case.expected.clone(),
            case.technique.to_string(),
        ]);
    }
    Ok(format!("{}: {} cases\n{table}", suite.name(), suite.len()))
}

pub fn render_report(report: &SuiteReport, format: OutputFormat) -> Result<String> {
    if format != OutputFormat::Table {
        return render_structured(report, format);
    }
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_header(vec!["VERDICT", "CASE", "INPUT", "EXPECTED", "ACTUAL"]);
    for outcome in &report.outcomes {
        table.add_row(vec![
            outcome.verdict.to_string(),
            outcome.name.clone(),
            outcome.input.to_string(),
            outcome.expected.clone(),
            outcome.actual.clone(),
        ]);
    }
    Ok(format!(
        "bbcheck v{} · suite {} · {}\n{table}\n{} passed, {} failed, {} total",
        crate::VERSION,
        report.suite,
        report.generated_at.format("%Y-%m-%d %H:%M:%S"),
        report.passed,
        report.failed,
        report.total,
    ))
}

fn render_structured<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        #[cfg(not(feature = "yaml"))]
        OutputFormat::Yaml => Err(PresentationError::InvalidValue {
            flag: "--format".to_string(),
            value: "yaml".to_string(),
            reason: "built without the `yaml` feature".to_string(),
        }
        .into()),
        OutputFormat::Table => Err(PresentationError::InvalidValue {
            flag: "--format".to_string(),
            value: "table".to_string(),
            reason: "not a structured format".to_string(),
        }
        .into()),
    }
}
