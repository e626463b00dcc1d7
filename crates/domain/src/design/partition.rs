use std::fmt;

use bbcheck_shared_kernel::Bound;
use serde::{Deserialize, Serialize};

use crate::classification::RangeTable;

/// An equivalence class of inputs: every value in `span` yields `expected`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Partition<C> {
    pub span: Bound,
    pub representative: i64,
    pub expected: C,
    pub valid: bool,
}

/// One partition per table entry plus every invalid partition: below the
/// first range, each gap between ranges, and above the last range.
///
/// Representatives are span midpoints. Output is ordered by span.
pub fn partitions<C>(table: &RangeTable<C>) -> Vec<Partition<C>>
where
    C: Clone + PartialEq + fmt::Display,
{
    let mut out = Vec::with_capacity(table.entries().len() * 2 + 1);
    let mut next_free = Some(i64::MIN);

    for entry in table.entries() {
        if let Some(start) = next_free
            && let Some(end) = entry.bound.below()
            && start <= end
        {
            out.push(invalid_partition(table, start, end));
        }
        out.push(Partition {
            span: entry.bound,
            representative: entry.bound.midpoint(),
            expected: entry.category.clone(),
            valid: true,
        });
        next_free = entry.bound.above();
    }
    if let Some(start) = next_free {
        out.push(invalid_partition(table, start, i64::MAX));
    }
    out
}

fn invalid_partition<C>(table: &RangeTable<C>, start: i64, end: i64) -> Partition<C>
where
    C: Clone + PartialEq + fmt::Display,
{
    let span = Bound::from_const(start, end);
    Partition {
        span,
        representative: span.midpoint(),
        expected: table.invalid().clone(),
        valid: false,
    }
}
