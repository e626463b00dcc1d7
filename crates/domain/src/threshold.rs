use std::fmt;

use serde::{Deserialize, Serialize};

/// Reading above which the LED turns on.
pub const LED_THRESHOLD: i64 = 30;

const LED_GATE: ThresholdGate<i64> = ThresholdGate::new(LED_THRESHOLD);

/// Binary output of a [`ThresholdGate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GateState {
    On,
    Off,
}

impl GateState {
    #[inline]
    pub const fn is_on(self) -> bool {
        matches!(self, Self::On)
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::On => "on",
            Self::Off => "off",
        }
    }
}

impl From<bool> for GateState {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl fmt::Display for GateState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pure on/off decision against a fixed threshold.
///
/// `On` only when the reading strictly exceeds the threshold. Equality, and
/// readings that do not compare (NaN), are `Off`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ThresholdGate<T> {
    threshold: T,
}

impl<T: PartialOrd + Copy> ThresholdGate<T> {
    pub const fn new(threshold: T) -> Self {
        Self { threshold }
    }

    #[inline]
    pub const fn threshold(&self) -> T {
        self.threshold
    }

    #[inline]
    pub fn is_on(&self, reading: T) -> bool {
        reading > self.threshold
    }

    #[inline]
    pub fn state(&self, reading: T) -> GateState {
        GateState::from(self.is_on(reading))
    }
}

/// LED decision for a temperature reading in degrees Celsius.
pub fn threshold_state(value: i64) -> bool {
    LED_GATE.is_on(value)
}
