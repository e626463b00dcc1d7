use std::fmt;

use bbcheck_shared_kernel::Bound;
use serde::{Deserialize, Serialize};

use super::table::{RangeEntry, RangeTable};

/// Age buckets, in ascending order, plus the `Invalid` sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AgeCategory {
    Child,
    Teenager,
    Adult,
    Senior,
    Invalid,
}

impl AgeCategory {
    /// Valid categories in table order.
    pub const VALID: [Self; 4] = [Self::Child, Self::Teenager, Self::Adult, Self::Senior];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Child => "Child",
            Self::Teenager => "Teenager",
            Self::Adult => "Adult",
            Self::Senior => "Senior",
            Self::Invalid => "Invalid",
        }
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl fmt::Display for AgeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive age ranges. Anything outside `[0, 120]` is `Invalid`.
pub const AGE_RANGES: [RangeEntry<AgeCategory>; 4] = [
    RangeEntry::new(Bound::from_const(0, 12), AgeCategory::Child),
    RangeEntry::new(Bound::from_const(13, 19), AgeCategory::Teenager),
    RangeEntry::new(Bound::from_const(20, 64), AgeCategory::Adult),
    RangeEntry::new(Bound::from_const(65, 120), AgeCategory::Senior),
];

/// Classify an age. Total over `i64`; never panics.
pub const fn classify(value: i64) -> AgeCategory {
    let mut i = 0;
    while i < AGE_RANGES.len() {
        if AGE_RANGES[i].bound.contains(value) {
            return AGE_RANGES[i].category;
        }
        i += 1;
    }
    AgeCategory::Invalid
}

/// The age ranges as a [`RangeTable`], for case design and the harness.
pub fn age_table() -> RangeTable<AgeCategory> {
    RangeTable::from_trusted("age", AGE_RANGES.to_vec(), AgeCategory::Invalid)
}
