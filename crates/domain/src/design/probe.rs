use std::fmt;

use serde::{Deserialize, Serialize};

/// Where a probe sits relative to the range or threshold that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProbeKind {
    JustBelow,
    Lower,
    Nominal,
    Upper,
    JustAbove,
    Threshold,
    Extreme,
}

impl ProbeKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::JustBelow => "just_below",
            Self::Lower => "lower",
            Self::Nominal => "nominal",
            Self::Upper => "upper",
            Self::JustAbove => "just_above",
            Self::Threshold => "threshold",
            Self::Extreme => "extreme",
        }
    }
}

impl fmt::Display for ProbeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single input value with the output the subject is expected to produce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Probe<E> {
    pub value: i64,
    pub kind: ProbeKind,
    pub expected: E,
}

impl<E> Probe<E> {
    pub const fn new(value: i64, kind: ProbeKind, expected: E) -> Self {
        Self { value, kind, expected }
    }
}

/// Sort by value and drop duplicates. The sort is stable, so the kind pushed first wins.
pub(crate) fn normalize(candidates: &mut Vec<(i64, ProbeKind)>) {
    candidates.sort_by_key(|(value, _)| *value);
    candidates.dedup_by_key(|(value, _)| *value);
}
