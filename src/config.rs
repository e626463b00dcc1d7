// src/config.rs
use std::path::PathBuf;

use bbcheck_shared_kernel::{PresentationError, PresentationResult};
use derive_builder::Builder;

use crate::args::{Args, Command, SuiteOptions};
use crate::options::OutputFormat;

/// What a suite is designed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuiteSource {
    /// The built-in age table, plus its documented examples.
    Age,
    Table(PathBuf),
    Threshold(i64),
}

impl From<&SuiteOptions> for SuiteSource {
    fn from(opts: &SuiteOptions) -> Self {
        match (&opts.table, opts.threshold) {
            (Some(path), _) => Self::Table(path.clone()),
            (None, Some(threshold)) => Self::Threshold(threshold),
            (None, None) => Self::Age,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    Classify { value: i64, table: Option<PathBuf> },
    Gate { reading: i64, threshold: i64 },
    Cases(SuiteSource),
    Run(SuiteSource),
}

/// Resolved run configuration.
#[derive(Debug, Clone, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub task: Task,
    #[builder(default)]
    pub format: OutputFormat,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
    #[builder(default)]
    pub max_cases: Option<usize>,
    #[builder(default)]
    pub verbosity: u8,
}

impl TryFrom<Args> for Config {
    type Error = PresentationError;

    fn try_from(args: Args) -> PresentationResult<Self> {
        let (task, max_cases) = match args.command {
            Command::Classify { value, table } => (Task::Classify { value, table }, None),
            Command::Gate { reading, threshold } => (Task::Gate { reading, threshold }, None),
            Command::Cases(opts) => (Task::Cases(SuiteSource::from(&opts)), opts.max_cases),
            Command::Run(opts) => (Task::Run(SuiteSource::from(&opts)), opts.max_cases),
        };

        ConfigBuilder::default()
            .task(task)
            .format(args.output.format)
            .output_path(args.output.output)
            .max_cases(max_cases)
            .verbosity(args.output.verbose)
            .build()
            .map_err(|e| PresentationError::ConfigBuildFailed(e.to_string()))
    }
}
