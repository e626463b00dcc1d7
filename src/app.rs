// src/app.rs
use std::path::Path;
use std::process::ExitCode;

use bbcheck_domain::classification::age_table;
use bbcheck_domain::{RangeTable, ThresholdGate, classify};
use bbcheck_infra::{FileTableSource, FileWriter, LogObserver, LoggingDriver};
use bbcheck_shared_kernel::{ErrorContext, Label, Result};
use bbcheck_usecase::{BlackBoxSuite, GateController, LoadTable};
use log::info;

use crate::config::{Config, SuiteSource, Task};
use crate::presentation::{self, Answer};

/// Documented examples of the age classifier, checked on top of the designed cases.
const AGE_EXAMPLES: [(i64, &str); 4] = [(0, "Child"), (12, "Child"), (13, "Teenager"), (121, "Invalid")];

type Subject = Box<dyn Fn(i64) -> String>;

/// Execute the configured task.
///
/// # Errors
/// Table loading, driver, rendering and output-file failures.
pub fn run(config: &Config) -> Result<ExitCode> {
    match &config.task {
        Task::Classify { value, table } => {
            let label = match table {
                Some(path) => load_table(path)?.label_for(*value),
                None => classify(*value).to_string(),
            };
            let answer = Answer { input: *value, output: &label };
            emit(&presentation::render_answer(&answer, config.format)?, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Gate { reading, threshold } => {
            let driver = LoggingDriver::new("led");
            let state = GateController::new(ThresholdGate::new(*threshold), &driver).apply(*reading)?;
            let answer = Answer { input: *reading, output: state.as_str() };
            emit(&presentation::render_answer(&answer, config.format)?, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Cases(source) => {
            let (suite, _) = build_suite(source, config.max_cases)?;
            emit(&presentation::render_cases(&suite, config.format)?, config)?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Run(source) => {
            let (suite, subject) = build_suite(source, config.max_cases)?;
            let report = suite.run(subject, Some(&LogObserver))?;
            emit(&presentation::render_report(&report, config.format)?, config)?;
            Ok(if report.is_success() { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
    }
}

fn load_table(path: &Path) -> Result<RangeTable<Label>> {
    LoadTable::new(&FileTableSource).run(path)
}

/// The suite for `source` and the built-in subject it is checked against.
fn build_suite(source: &SuiteSource, max_cases: Option<usize>) -> Result<(BlackBoxSuite, Subject)> {
    let (mut suite, subject): (BlackBoxSuite, Subject) = match source {
        SuiteSource::Age => (
            BlackBoxSuite::for_table(&age_table()).with_examples(&AGE_EXAMPLES),
            Box::new(|v: i64| classify(v).to_string()),
        ),
        SuiteSource::Table(path) => {
            let table = load_table(path)?;
            let suite = BlackBoxSuite::for_table(&table);
            (suite, Box::new(move |v: i64| table.label_for(v)))
        }
        SuiteSource::Threshold(threshold) => {
            let gate = ThresholdGate::new(*threshold);
            (BlackBoxSuite::for_threshold(&gate), Box::new(move |v: i64| gate.state(v).to_string()))
        }
    };
    if let Some(max) = max_cases {
        suite.truncate(max);
    }
    info!("suite '{}' with {} cases", suite.name(), suite.len());
    Ok((suite, subject))
}

fn emit(rendered: &str, config: &Config) -> Result<()> {
    match &config.output_path {
        Some(path) => {
            let mut data = rendered.as_bytes().to_vec();
            data.push(b'\n');
            FileWriter::write(path, &data).with_context(|| format!("writing '{}'", path.display()))
        }
        None => {
            println!("{rendered}");
            Ok(())
        }
    }
}
