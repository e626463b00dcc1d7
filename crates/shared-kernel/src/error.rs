// crates/shared-kernel/src/error.rs
use std::path::PathBuf;

use thiserror::Error;

/// Root error type shared across the workspace.
#[derive(Debug, Error)]
pub enum BbcheckError {
    /// Adds human context while preserving original error as the source.
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<BbcheckError>,
    },

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Infrastructure error: {0}")]
    Infrastructure(#[from] InfrastructureError),

    #[error("Application error: {0}")]
    Application(#[from] ApplicationError),

    #[error("Presentation error: {0}")]
    Presentation(#[from] PresentationError),
}

pub type Result<T> = std::result::Result<T, BbcheckError>;

/// Domain-layer specific errors.
///
/// Classifying an out-of-range value is never an error; these only arise while
/// building bounds and tables.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("Invalid bound: lower {lower} is greater than upper {upper}")]
    InvalidBound { lower: i64, upper: i64 },

    #[error("Range table '{table}' has no entries")]
    EmptyTable { table: String },

    #[error("Range table '{table}': [{previous_lower}, {previous_upper}] and [{lower}, {upper}] overlap")]
    OverlappingRanges {
        table: String,
        previous_lower: i64,
        previous_upper: i64,
        lower: i64,
        upper: i64,
    },

    #[error("Range table '{table}': [{lower}, {upper}] comes after [{previous_lower}, {previous_upper}]; ranges must ascend")]
    UnorderedRanges {
        table: String,
        previous_lower: i64,
        previous_upper: i64,
        lower: i64,
        upper: i64,
    },

    #[error("Invalid label '{label}': {reason}")]
    InvalidLabel { label: String, reason: String },
}

pub type DomainResult<T> = std::result::Result<T, DomainError>;

/// Application-layer errors.
#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Suite '{suite}' has no cases to run")]
    EmptySuite { suite: String },

    #[error("Output driver failed while switching {state}: {reason}")]
    DriverFailed {
        state: String,
        reason: String,
        #[source]
        source: Option<Box<BbcheckError>>,
    },
}

pub type ApplicationResult<T> = std::result::Result<T, ApplicationError>;

/// Infrastructure-layer errors.
#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("Failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {format} input: {details}")]
    SerializationError { format: String, details: String },

    #[error("Unsupported table format for '{path}'")]
    UnsupportedFormat { path: PathBuf },

    #[error("Output device error: {message}")]
    DeviceError { message: String },

    #[error("Output error: {message}")]
    OutputError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

pub type InfraResult<T> = std::result::Result<T, InfrastructureError>;

/// Presentation-layer errors.
#[derive(Debug, Error)]
pub enum PresentationError {
    #[error("Invalid CLI value: {flag} = {value} - {reason}")]
    InvalidValue {
        flag: String,
        value: String,
        reason: String,
    },

    #[error("Configuration building failed: {0}")]
    ConfigBuildFailed(String),
}

pub type PresentationResult<T> = std::result::Result<T, PresentationError>;

impl From<std::io::Error> for InfrastructureError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputError { message: err.to_string(), source: Some(Box::new(err)) }
    }
}

impl From<std::io::Error> for BbcheckError {
    fn from(err: std::io::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

impl From<serde_json::Error> for InfrastructureError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError {
            format: "JSON".to_string(),
            details: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for BbcheckError {
    fn from(err: serde_json::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InfrastructureError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::SerializationError {
            format: "YAML".to_string(),
            details: err.to_string(),
        }
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for BbcheckError {
    fn from(err: serde_yaml::Error) -> Self {
        InfrastructureError::from(err).into()
    }
}

/// Extension trait to add additional context to results.
pub trait ErrorContext<T> {
    fn context(self, context: impl Into<String>) -> Result<T>;
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<BbcheckError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| BbcheckError::Context {
            context: context.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| BbcheckError::Context {
            context: f(),
            source: Box::new(e.into()),
        })
    }
}
