// crates/infra/src/drivers.rs
//! Output driver adapters.
//!
//! [`LoggingDriver`] stands in for real hardware on the command line.
//! [`NullDriver`] and [`RecordingDriver`] are substitutes for tests.

use std::sync::{Mutex, PoisonError};

use bbcheck_ports::output::OutputDriver;
use bbcheck_shared_kernel::{InfrastructureError, Result};
use log::info;
use serde::{Deserialize, Serialize};

/// Reports every switch through the `log` facade.
#[derive(Debug, Clone)]
pub struct LoggingDriver {
    name: String,
}

impl LoggingDriver {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl OutputDriver for LoggingDriver {
    fn switch_on(&self) -> Result<()> {
        info!("{}: on", self.name);
        Ok(())
    }

    fn switch_off(&self) -> Result<()> {
        info!("{}: off", self.name);
        Ok(())
    }
}

/// Accepts every call and does nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullDriver;

impl OutputDriver for NullDriver {
    fn switch_on(&self) -> Result<()> {
        Ok(())
    }

    fn switch_off(&self) -> Result<()> {
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriverEvent {
    On,
    Off,
}

/// Records calls in order; optionally fails every call after recording it.
#[derive(Debug, Default)]
pub struct RecordingDriver {
    events: Mutex<Vec<DriverEvent>>,
    failure: Option<String>,
}

impl RecordingDriver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: impl Into<String>) -> Self {
        Self { events: Mutex::default(), failure: Some(message.into()) }
    }

    pub fn events(&self) -> Vec<DriverEvent> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn count(&self, event: DriverEvent) -> usize {
        self.events().iter().filter(|e| **e == event).count()
    }

    fn record(&self, event: DriverEvent) -> Result<()> {
        self.events.lock().unwrap_or_else(PoisonError::into_inner).push(event);
        match &self.failure {
            Some(message) => Err(InfrastructureError::DeviceError { message: message.clone() }.into()),
            None => Ok(()),
        }
    }
}

impl OutputDriver for RecordingDriver {
    fn switch_on(&self) -> Result<()> {
        self.record(DriverEvent::On)
    }

    fn switch_off(&self) -> Result<()> {
        self.record(DriverEvent::Off)
    }
}
