//! Bus interface implementation for the LSM303C
//!
//! This module provides the `device-driver` transport for I2C communication
//! with the LSM303C. The two register banks live behind two distinct I2C
//! slave addresses, so the interface routes each access by the sub-device
//! selector carried in the high byte of the register address.

use crate::{SubDevice, I2C_ADDRESS_ACCEL, I2C_ADDRESS_MAGN};

use device_driver::RegisterInterface;

/// I2C interface for the LSM303C
pub struct I2cInterface<I2C> {
    i2c: I2C,
    accel_address: u8,
    magn_address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default slave addresses
    /// (accelerometer 0x1D, magnetometer 0x1E)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::new(i2c);
    /// let mut compass = Lsm303cDriver::new(interface, Config::default())?;
    /// ```
    pub const fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            accel_address: I2C_ADDRESS_ACCEL,
            magn_address: I2C_ADDRESS_MAGN,
        }
    }

    /// Create a new I2C interface with custom slave addresses
    ///
    /// Use this when the address-select pads are strapped differently from
    /// the ST reference design.
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `accel_address` - Slave address of the accelerometer bank
    /// * `magn_address` - Slave address of the magnetometer bank
    pub const fn with_addresses(i2c: I2C, accel_address: u8, magn_address: u8) -> Self {
        Self {
            i2c,
            accel_address,
            magn_address,
        }
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }

    fn slave_address(&self, address: u16) -> u8 {
        if (address >> 8) as u8 == SubDevice::Magn as u8 {
            self.magn_address
        } else {
            self.accel_address
        }
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u16;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        let slave = self.slave_address(address);
        self.i2c.write_read(slave, &[address as u8], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        // Create a buffer with register address + data
        let mut buffer = [0u8; 9]; // Max: 1 register address + 8 data bytes
        buffer[0] = address as u8;
        let len = write_data.len().min(8);
        buffer[1..=len].copy_from_slice(&write_data[..len]);

        let slave = self.slave_address(address);
        self.i2c.write(slave, &buffer[..=len])
    }
}
