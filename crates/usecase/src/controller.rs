use std::fmt;

use bbcheck_domain::{GateState, ThresholdGate};
use bbcheck_ports::output::OutputDriver;
use bbcheck_shared_kernel::{ApplicationError, Result};
use log::debug;

/// Applies a gate decision to an injected output driver.
pub struct GateController<'a, T> {
    gate: ThresholdGate<T>,
    driver: &'a dyn OutputDriver,
}

impl<'a, T> GateController<'a, T>
where
    T: PartialOrd + Copy + fmt::Debug,
{
    pub fn new(gate: ThresholdGate<T>, driver: &'a dyn OutputDriver) -> Self {
        Self { gate, driver }
    }

    pub fn gate(&self) -> &ThresholdGate<T> {
        &self.gate
    }

    /// Decide, then switch the driver exactly once.
    ///
    /// # Errors
    /// Returns [`ApplicationError::DriverFailed`] when the driver reports an error.
    pub fn apply(&self, reading: T) -> Result<GateState> {
        let state = self.gate.state(reading);
        debug!("reading {reading:?} against {:?} -> {state}", self.gate.threshold());
        let switched = match state {
            GateState::On => self.driver.switch_on(),
            GateState::Off => self.driver.switch_off(),
        };
        switched.map_err(|err| ApplicationError::DriverFailed {
            state: state.to_string(),
            reason: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(state)
    }
}
