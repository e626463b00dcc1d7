// crates/shared-kernel/src/value_objects/bound.rs
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Inclusive integer interval `[lower, upper]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBound")]
pub struct Bound {
    lower: i64,
    upper: i64,
}

#[derive(Deserialize)]
struct RawBound {
    lower: i64,
    upper: i64,
}

impl TryFrom<RawBound> for Bound {
    type Error = DomainError;

    fn try_from(raw: RawBound) -> DomainResult<Self> {
        Self::new(raw.lower, raw.upper)
    }
}

impl Bound {
    /// Validating constructor for bounds that come from user input.
    ///
    /// # Errors
    /// Returns [`DomainError::InvalidBound`] when `lower > upper`.
    pub const fn new(lower: i64, upper: i64) -> DomainResult<Self> {
        if lower > upper {
            return Err(DomainError::InvalidBound { lower, upper });
        }
        Ok(Self { lower, upper })
    }

    /// Constructor for compile-time tables. An inverted bound fails const evaluation.
    ///
    /// # Panics
    /// Panics when `lower > upper`.
    pub const fn from_const(lower: i64, upper: i64) -> Self {
        assert!(lower <= upper, "bound lower must not exceed upper");
        Self { lower, upper }
    }

    #[inline]
    pub const fn lower(self) -> i64 {
        self.lower
    }

    #[inline]
    pub const fn upper(self) -> i64 {
        self.upper
    }

    #[inline]
    pub const fn contains(self, value: i64) -> bool {
        value >= self.lower && value <= self.upper
    }

    #[inline]
    pub const fn overlaps(self, other: Self) -> bool {
        self.lower <= other.upper && other.lower <= self.upper
    }

    /// Midpoint rounded toward zero, computed without overflow.
    #[allow(clippy::cast_possible_truncation)]
    pub const fn midpoint(self) -> i64 {
        ((self.lower as i128 + self.upper as i128) / 2) as i64
    }

    /// The value just below the interval, if representable.
    #[inline]
    pub const fn below(self) -> Option<i64> {
        self.lower.checked_sub(1)
    }

    /// The value just above the interval, if representable.
    #[inline]
    pub const fn above(self) -> Option<i64> {
        self.upper.checked_add(1)
    }
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
