//! `GateController` driving the shipped output adapters.

use bbcheck_domain::{GateState, LED_THRESHOLD, ThresholdGate};
use bbcheck_infra::{DriverEvent, NullDriver, RecordingDriver};
use bbcheck_shared_kernel::{ApplicationError, BbcheckError};
use bbcheck_usecase::GateController;

#[test]
fn at_threshold_switches_off_exactly_once() {
    let driver = RecordingDriver::new();
    let controller = GateController::new(ThresholdGate::new(LED_THRESHOLD), &driver);
    assert_eq!(controller.apply(30).unwrap(), GateState::Off);
    assert_eq!(driver.count(DriverEvent::Off), 1);
    assert_eq!(driver.count(DriverEvent::On), 0);
}

#[test]
fn above_threshold_switches_on_exactly_once() {
    let driver = RecordingDriver::new();
    let controller = GateController::new(ThresholdGate::new(LED_THRESHOLD), &driver);
    assert_eq!(controller.apply(31).unwrap(), GateState::On);
    assert_eq!(driver.count(DriverEvent::On), 1);
    assert_eq!(driver.count(DriverEvent::Off), 0);
}

#[test]
fn calls_follow_readings_in_order() {
    let driver = RecordingDriver::new();
    let controller = GateController::new(ThresholdGate::new(LED_THRESHOLD), &driver);
    for reading in [i64::MIN, 29, 30, 31, i64::MAX] {
        controller.apply(reading).unwrap();
    }
    assert_eq!(
        driver.events(),
        vec![DriverEvent::Off, DriverEvent::Off, DriverEvent::Off, DriverEvent::On, DriverEvent::On]
    );
}

#[test]
fn failing_driver_surfaces_driver_failed() {
    let driver = RecordingDriver::failing("bus fault");
    let controller = GateController::new(ThresholdGate::new(LED_THRESHOLD), &driver);
    let err = controller.apply(100).unwrap_err();
    assert!(matches!(err, BbcheckError::Application(ApplicationError::DriverFailed { ref state, .. }) if state == "on"));
    assert!(err.to_string().contains("bus fault"));
    assert_eq!(driver.events(), vec![DriverEvent::On]);
}

#[test]
fn null_driver_accepts_both_states() {
    let controller = GateController::new(ThresholdGate::new(LED_THRESHOLD), &NullDriver);
    assert_eq!(controller.apply(-40).unwrap(), GateState::Off);
    assert_eq!(controller.apply(45).unwrap(), GateState::On);
}
