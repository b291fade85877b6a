#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use device::{ChannelSample, Lsm303cDriver, Sample};
pub use interface::I2cInterface;
pub use sensors::{
    AccelConfig, AccelFullScale, AccelOdr, Config, MagConfig, MagFullScale, MagOdr, Precision,
    Value, STANDARD_GRAVITY,
};

/// I2C address of the accelerometer sub-device (default: 0x1D)
///
/// This is the address used when the SA0 pads follow the ST reference
/// design. Use [`I2cInterface::with_addresses()`] if your board straps them
/// differently.
pub const I2C_ADDRESS_ACCEL: u8 = 0x1D;

/// I2C address of the magnetometer/temperature sub-device (default: 0x1E)
pub const I2C_ADDRESS_MAGN: u8 = 0x1E;

/// Expected value of `WHO_AM_I_A` (accelerometer bank)
pub const WHO_AM_I_ACCEL: u8 = 0x41;

/// Expected value of `WHO_AM_I_M` (magnetometer bank)
pub const WHO_AM_I_MAGN: u8 = 0x3D;

/// Logical sub-device selector
///
/// The LSM303C exposes two register banks that reuse the same numeric
/// addresses (both have an identity register at 0x0F and control registers
/// at 0x20..=0x27). Every register access is therefore keyed by sub-device,
/// never by the 8-bit address alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SubDevice {
    /// Accelerometer bank (slave address 0x1D)
    Accel = 0x00,
    /// Magnetometer and temperature bank (slave address 0x1E)
    Magn = 0x01,
}

impl SubDevice {
    /// Compose the full register address for this sub-device
    ///
    /// The selector occupies the high byte, the hardware register address
    /// the low byte.
    #[must_use]
    pub const fn register_address(self, register: u8) -> u16 {
        ((self as u16) << 8) | register as u16
    }
}

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// Configuration value outside the representable range
    InvalidConfig,
    /// A configuration write failed after earlier writes already succeeded.
    ///
    /// The device is left in an indeterminate, partially-programmed state;
    /// the caller must re-open (or soft-reset) rather than assume any part
    /// of the configuration took effect.
    ConfigInterrupted(E),
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
