// crates/ports/src/output.rs
use bbcheck_shared_kernel::Result;

/// Side-effecting output driven by a gate decision (an LED, a relay, a log line).
pub trait OutputDriver: Send + Sync {
    fn switch_on(&self) -> Result<()>;
    fn switch_off(&self) -> Result<()>;
}
