//! Common test utilities and mock implementations

pub mod test_utils;

#[allow(unused_imports)]
pub use mock_interface::{MockError, MockInterface, Operation};
#[allow(unused_imports)]
pub use test_utils::{assert_bus_error, assert_float_eq, create_mock_driver, create_mock_driver_with};
