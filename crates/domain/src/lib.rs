//! # Domain
//!
//! Pure decision logic and black-box case design:
//!
//! - [`classification`]: integer range tables and the age classifier
//! - [`threshold`]: the threshold gate behind the LED example
//! - [`arithmetic`]: small integer helpers with C `int` semantics
//! - [`design`]: boundary-value and equivalence-partition probes
//!
//! Nothing here performs I/O. Out-of-range input is an ordinary output value.

#![allow(clippy::multiple_crate_versions)]

pub mod arithmetic;
pub mod classification;
pub mod design;
pub mod threshold;

pub use classification::{AgeCategory, RangeEntry, RangeTable, TableSpec, classify};
pub use threshold::{GateState, LED_THRESHOLD, ThresholdGate, threshold_state};
