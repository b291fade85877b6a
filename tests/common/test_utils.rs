//! Shared helpers for driver tests

use crate::common::mock_interface::{MockError, MockInterface};
use lsm303c::{Config, Error, Lsm303cDriver};

/// Create a driver over a fresh mock with the default configuration
///
/// Clears the operations log afterwards so tests see only their own
/// transactions.
#[allow(dead_code)]
pub fn create_mock_driver() -> (Lsm303cDriver<MockInterface>, MockInterface) {
    create_mock_driver_with(Config::default())
}

/// Create a driver over a fresh mock with a specific configuration
#[allow(dead_code)]
pub fn create_mock_driver_with(
    config: Config,
) -> (Lsm303cDriver<MockInterface>, MockInterface) {
    let mock = MockInterface::new();
    let driver = Lsm303cDriver::new(mock.clone(), config)
        .expect("driver creation against a healthy mock must succeed");
    mock.clear_operations();
    (driver, mock)
}

/// Assert two floats agree to within a tolerance
#[allow(dead_code)]
pub fn assert_float_eq(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual} (tolerance {tolerance})"
    );
}

/// Assert an error is a bus error
#[allow(dead_code)]
pub fn assert_bus_error<T: core::fmt::Debug>(result: Result<T, Error<MockError>>) {
    match result {
        Err(Error::Bus(MockError::Communication)) => {}
        other => panic!("expected Error::Bus, got {other:?}"),
    }
}
