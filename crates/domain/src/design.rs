//! Black-box case design over range tables and threshold gates.

pub mod boundary;
pub mod partition;
pub mod probe;

pub use boundary::{boundary_values, threshold_probes};
pub use partition::{Partition, partitions};
pub use probe::{Probe, ProbeKind};
