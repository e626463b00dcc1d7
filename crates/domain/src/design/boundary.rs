use std::fmt;

use log::debug;

use super::probe::{Probe, ProbeKind, normalize};
use crate::classification::RangeTable;
use crate::threshold::{GateState, ThresholdGate};

/// Boundary-value probes for every range in `table`.
///
/// Each range contributes `lower - 1`, `lower`, the midpoint, `upper` and
/// `upper + 1` where representable. The type limits `i64::MIN`, `i64::MIN + 1`,
/// `i64::MAX - 1` and `i64::MAX` are always included. Probes come back sorted
/// by value with duplicates removed; when two candidates share a value the
/// one pushed first keeps its kind.
pub fn boundary_values<C>(table: &RangeTable<C>) -> Vec<Probe<C>>
where
    C: Clone + PartialEq + fmt::Display,
{
    let mut candidates = vec![(i64::MIN, ProbeKind::Extreme), (i64::MIN + 1, ProbeKind::Extreme)];
    for entry in table.entries() {
        let bound = entry.bound;
        if let Some(below) = bound.below() {
            candidates.push((below, ProbeKind::JustBelow));
        }
        candidates.push((bound.lower(), ProbeKind::Lower));
        candidates.push((bound.midpoint(), ProbeKind::Nominal));
        candidates.push((bound.upper(), ProbeKind::Upper));
        if let Some(above) = bound.above() {
            candidates.push((above, ProbeKind::JustAbove));
        }
    }
    candidates.push((i64::MAX - 1, ProbeKind::Extreme));
    candidates.push((i64::MAX, ProbeKind::Extreme));
    normalize(&mut candidates);

    debug!("table '{}': {} boundary probes", table.name(), candidates.len());
    candidates
        .into_iter()
        .map(|(value, kind)| Probe::new(value, kind, table.category_for(value).clone()))
        .collect()
}

/// Probes around a gate: one below, at, and one above the threshold, plus both extremes.
pub fn threshold_probes(gate: &ThresholdGate<i64>) -> Vec<Probe<GateState>> {
    let threshold = gate.threshold();
    let mut candidates = vec![(i64::MIN, ProbeKind::Extreme)];
    if let Some(below) = threshold.checked_sub(1) {
        candidates.push((below, ProbeKind::JustBelow));
    }
    candidates.push((threshold, ProbeKind::Threshold));
    if let Some(above) = threshold.checked_add(1) {
        candidates.push((above, ProbeKind::JustAbove));
    }
    candidates.push((i64::MAX, ProbeKind::Extreme));
    normalize(&mut candidates);

    candidates
        .into_iter()
        .map(|(value, kind)| Probe::new(value, kind, gate.state(value)))
        .collect()
}
