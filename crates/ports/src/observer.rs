// crates/ports/src/observer.rs
use std::fmt;

use bbcheck_shared_kernel::Result;
use serde::{Deserialize, Serialize};

/// How a test case was derived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technique {
    Boundary,
    Partition,
    Example,
}

impl fmt::Display for Technique {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Boundary => "boundary",
            Self::Partition => "partition",
            Self::Example => "example",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Passed,
    Failed,
    /// Two calls with the same input disagreed.
    NonDeterministic,
}

impl Verdict {
    #[inline]
    pub const fn is_pass(self) -> bool {
        matches!(self, Self::Passed)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Passed => "PASS",
            Self::Failed => "FAIL",
            Self::NonDeterministic => "FLAKY",
        })
    }
}

/// DTO describing one executed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CaseOutcome {
    pub name: String,
    pub input: i64,
    pub expected: String,
    pub actual: String,
    pub technique: Technique,
    pub verdict: Verdict,
}

/// Port notified as a suite progresses.
pub trait CaseObserver: Send + Sync {
    fn on_case(&self, outcome: &CaseOutcome) -> Result<()>;
    fn on_complete(&self, passed: usize, failed: usize) -> Result<()>;
}
