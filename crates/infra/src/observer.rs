// crates/infra/src/observer.rs
use bbcheck_ports::observer::{CaseObserver, CaseOutcome};
use bbcheck_shared_kernel::Result;
use log::{info, warn};

/// Logs failing cases at `warn` and the final tally at `info`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl CaseObserver for LogObserver {
    fn on_case(&self, outcome: &CaseOutcome) -> Result<()> {
        if !outcome.verdict.is_pass() {
            warn!(
                "{} [{}] input={} expected={} actual={}",
                outcome.name, outcome.verdict, outcome.input, outcome.expected, outcome.actual
            );
        }
        Ok(())
    }

    fn on_complete(&self, passed: usize, failed: usize) -> Result<()> {
        info!("{passed} passed, {failed} failed");
        Ok(())
    }
}
