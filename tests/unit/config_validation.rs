//! Configuration validation tests
//!
//! Unsupported numeric selections must be rejected before any bus
//! transaction, and a rejected reconfiguration must leave the previous
//! configuration active.

use crate::common::mock_interface::MockInterface;
use crate::common::test_utils::{create_mock_driver, create_mock_driver_with};
use lsm303c::{AccelConfig, Config, Error, Lsm303cDriver, MagConfig};

#[test]
fn test_default_config_is_valid() {
    let (driver, _mock) = create_mock_driver();
    let config = driver.config();
    assert_eq!(config.accel.full_scale_g, 2);
    assert_eq!(config.accel.odr_hz, 119);
    assert_eq!(config.magn.full_scale_gauss, 245);
    assert_eq!(config.magn.odr_hz, 119);
    assert!(config.temp_enable);
}

#[test]
fn test_all_supported_accel_full_scales() {
    for g in [2, 4, 8, 16] {
        let config = Config {
            accel: AccelConfig {
                full_scale_g: g,
                ..AccelConfig::default()
            },
            ..Config::default()
        };
        let (driver, _mock) = create_mock_driver_with(config);
        assert_eq!(driver.config().accel.full_scale_g, g);
    }
}

#[test]
fn test_all_supported_magn_full_scales() {
    for gauss in [245, 500, 2000] {
        let config = Config {
            magn: MagConfig {
                full_scale_gauss: gauss,
                ..MagConfig::default()
            },
            ..Config::default()
        };
        let (driver, _mock) = create_mock_driver_with(config);
        assert_eq!(driver.config().magn.full_scale_gauss, gauss);
    }
}

#[test]
fn test_invalid_accel_full_scale_is_rejected_without_bus_activity() {
    let mock = MockInterface::new();
    let config = Config {
        accel: AccelConfig {
            full_scale_g: 6,
            ..AccelConfig::default()
        },
        ..Config::default()
    };

    let result = Lsm303cDriver::new(mock.clone(), config);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert!(mock.operations().is_empty());
}

#[test]
fn test_invalid_accel_odr_is_rejected() {
    let mock = MockInterface::new();
    let config = Config {
        accel: AccelConfig {
            odr_hz: 100,
            ..AccelConfig::default()
        },
        ..Config::default()
    };

    let result = Lsm303cDriver::new(mock.clone(), config);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert!(mock.operations().is_empty());
}

#[test]
fn test_invalid_magn_full_scale_is_rejected() {
    let mock = MockInterface::new();
    let config = Config {
        magn: MagConfig {
            full_scale_gauss: 1000,
            ..MagConfig::default()
        },
        ..Config::default()
    };

    let result = Lsm303cDriver::new(mock.clone(), config);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert!(mock.operations().is_empty());
}

#[test]
fn test_invalid_magn_odr_is_rejected() {
    let mock = MockInterface::new();
    let config = Config {
        magn: MagConfig {
            odr_hz: 50,
            ..MagConfig::default()
        },
        ..Config::default()
    };

    let result = Lsm303cDriver::new(mock.clone(), config);
    assert!(matches!(result, Err(Error::InvalidConfig)));
    assert!(mock.operations().is_empty());
}

#[test]
fn test_accel_odr_fifteen_is_magn_only() {
    // 15 Hz exists on the magnetometer table but not the accelerometer one
    let mock = MockInterface::new();
    let config = Config {
        accel: AccelConfig {
            odr_hz: 15,
            ..AccelConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        Lsm303cDriver::new(mock, config),
        Err(Error::InvalidConfig)
    ));
}

#[test]
fn test_rejected_reconfigure_keeps_previous_config() {
    let (mut driver, mock) = create_mock_driver();

    let bad = Config {
        accel: AccelConfig {
            full_scale_g: 3,
            ..AccelConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(driver.reconfigure(bad), Err(Error::InvalidConfig)));

    // Previous configuration stays active and nothing touched the bus
    assert_eq!(driver.config().accel.full_scale_g, 2);
    assert!(mock.operations().is_empty());

    // The driver still samples with the old configuration
    mock.set_accel_data(100, 0, 0);
    assert!(driver.sample().is_ok());
}

#[test]
fn test_failed_reconfigure_does_not_commit_new_config() {
    // A bus failure before any write leaves the device on the old
    // configuration; the driver must keep scaling with it
    let (mut driver, mock) = create_mock_driver();

    let new = Config {
        accel: AccelConfig {
            full_scale_g: 8,
            ..AccelConfig::default()
        },
        ..Config::default()
    };

    mock.fail_next_read();
    assert!(matches!(driver.reconfigure(new), Err(Error::Bus(_))));
    assert_eq!(driver.config().accel.full_scale_g, 2);
    assert_eq!(mock.write_count(), 0);

    // Samples still use the 2g scale factor
    mock.set_accel_data(16384, 0, 0);
    let value = driver.sample().unwrap().accel_x.unwrap().value.to_f32();
    assert!((value - 9.80665).abs() < 0.01);
}

#[test]
fn test_identity_mismatch_during_reconfigure_keeps_previous_config() {
    let (mut driver, mock) = create_mock_driver();
    mock.set_who_am_i(lsm303c::SubDevice::Accel, 0x00);

    let new = Config {
        accel: AccelConfig {
            full_scale_g: 16,
            ..AccelConfig::default()
        },
        ..Config::default()
    };
    assert!(matches!(
        driver.reconfigure(new),
        Err(Error::InvalidDevice(0x00))
    ));
    assert_eq!(driver.config().accel.full_scale_g, 2);
}

#[test]
fn test_reconfigure_applies_new_settings() {
    let (mut driver, mock) = create_mock_driver();

    let new = Config {
        accel: AccelConfig {
            full_scale_g: 8,
            odr_hz: 476,
            ..AccelConfig::default()
        },
        ..Config::default()
    };
    driver.reconfigure(new).unwrap();

    assert_eq!(driver.config().accel.full_scale_g, 8);
    assert_eq!(driver.config().accel.odr_hz, 476);

    // Full-scale 8g is encoding 0b11 in CTRL_REG4_A bits 5:4
    let writes = mock.writes();
    assert!(writes
        .iter()
        .any(|&(dev, addr, value)| dev == lsm303c::SubDevice::Accel
            && addr == 0x23
            && value & 0b0011_0000 == 0b0011_0000));
}

#[test]
fn test_zero_odr_selects_power_down() {
    let config = Config {
        accel: AccelConfig {
            odr_hz: 0,
            ..AccelConfig::default()
        },
        magn: MagConfig {
            odr_hz: 0,
            ..MagConfig::default()
        },
        ..Config::default()
    };
    let mock = MockInterface::new();
    Lsm303cDriver::new(mock.clone(), config).unwrap();

    // ODR bits 6:4 of CTRL_REG1_A and DO bits 4:2 of CTRL_REG1_M are zero
    assert_eq!(
        mock.get_register(lsm303c::SubDevice::Accel, 0x20) & 0b0111_0000,
        0
    );
    assert_eq!(
        mock.get_register(lsm303c::SubDevice::Magn, 0x20) & 0b0001_1100,
        0
    );
}
