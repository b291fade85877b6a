//! High-level driver API for the LSM303C
//!
//! This module holds the two halves with real behavior: the configuration
//! encoder (user settings to an ordered sequence of control-register
//! writes) and the sample decoder (raw output registers to scaled physical
//! values).

use crate::registers::Lsm303c as RegisterDevice;
use crate::sensors::{convert_temperature, Config, ResolvedConfig};
use crate::{Error, SubDevice, Value, WHO_AM_I_ACCEL, WHO_AM_I_MAGN};

use device_driver::RegisterInterface;

// Output register addresses (low byte of each little-endian pair),
// matching the Out*/Temp entries in the register map. High byte of the
// address is the sub-device selector.
const OUT_X_L_A: u16 = 0x0028;
const OUT_Y_L_A: u16 = 0x002A;
const OUT_Z_L_A: u16 = 0x002C;
const OUT_X_L_M: u16 = 0x0128;
const OUT_Y_L_M: u16 = 0x012A;
const OUT_Z_L_M: u16 = 0x012C;
const TEMP_L: u16 = 0x012E;

// CTRL_REG1_M OM / CTRL_REG4_M OMZ operative-mode encoding
const MAG_HIGH_PERFORMANCE: u8 = 0b10;
const MAG_LOW_POWER: u8 = 0b00;

// CTRL_REG3_M MD system operating mode
const MAG_MODE_CONTINUOUS: u8 = 0b00;
const MAG_MODE_POWER_DOWN: u8 = 0b11;

/// One acquired channel: the raw register value and its scaled physical value
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ChannelSample {
    /// Raw 16-bit register value (little-endian pair, sign-extended)
    pub raw: i16,
    /// Scaled physical value in the configured precision mode
    pub value: Value,
}

/// One acquisition of every enabled channel
///
/// Disabled channels are `None`, distinguishing "not measured" from
/// "measured as zero". Created fresh on every [`Lsm303cDriver::sample()`]
/// call; nothing is cached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Sample {
    /// Accelerometer X-axis (m/s² or µm/s²)
    pub accel_x: Option<ChannelSample>,
    /// Accelerometer Y-axis
    pub accel_y: Option<ChannelSample>,
    /// Accelerometer Z-axis
    pub accel_z: Option<ChannelSample>,
    /// Magnetometer X-axis (gauss or µgauss)
    pub magn_x: Option<ChannelSample>,
    /// Magnetometer Y-axis
    pub magn_y: Option<ChannelSample>,
    /// Magnetometer Z-axis
    pub magn_z: Option<ChannelSample>,
    /// Temperature (°C or µ°C)
    pub temp: Option<ChannelSample>,
}

/// Main driver for the LSM303C
pub struct Lsm303cDriver<I> {
    device: RegisterDevice<I>,
    config: Config,
}

impl<I> Lsm303cDriver<I>
where
    I: RegisterInterface<AddressType = u16>,
{
    /// Open the device: verify both identity registers, then program the
    /// given configuration
    ///
    /// The configuration is validated before any bus transaction; both
    /// `WHO_AM_I` registers are read and compared before any write.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidConfig`] if a numeric selection is unsupported
    ///   (no bus activity has happened)
    /// - [`Error::InvalidDevice`] if either identity byte mismatches
    ///   (no write has been issued)
    /// - [`Error::Bus`] if the identity read or the first configuration
    ///   write fails
    /// - [`Error::ConfigInterrupted`] if a later configuration write fails;
    ///   the device is left partially programmed
    pub fn new(interface: I, config: Config) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            device: RegisterDevice::new(interface),
            config,
        };
        driver.apply_config()?;
        Ok(driver)
    }

    /// Program a new configuration, re-running the whole encoder
    ///
    /// Repeats the identity check and the full write sequence. On
    /// [`Error::InvalidConfig`], [`Error::InvalidDevice`] or [`Error::Bus`]
    /// nothing was written and the previous configuration stays active, on
    /// the driver and on the device. Only [`Error::ConfigInterrupted`]
    /// leaves the two diverged; recover with [`Lsm303cDriver::reset()`].
    ///
    /// # Errors
    ///
    /// Same as [`Lsm303cDriver::new()`].
    pub fn reconfigure(&mut self, config: Config) -> Result<(), Error<I::Error>> {
        if config.resolve().is_none() {
            return Err(Error::InvalidConfig);
        }
        let previous = self.config;
        self.config = config;
        match self.apply_config() {
            Ok(()) => Ok(()),
            error @ Err(Error::ConfigInterrupted(_)) => error,
            error => {
                // Nothing reached the device; keep scaling with the
                // configuration it still runs
                self.config = previous;
                error
            }
        }
    }

    /// Get the active configuration
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Read an identity register
    ///
    /// Should return 0x41 for the accelerometer bank and 0x3D for the
    /// magnetometer bank.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn who_am_i(&mut self, sub_device: SubDevice) -> Result<u8, Error<I::Error>> {
        let id = match sub_device {
            SubDevice::Accel => self.device.who_am_ia().read()?.who_am_i(),
            SubDevice::Magn => self.device.who_am_im().read()?.who_am_i(),
        };
        Ok(id)
    }

    /// Whether the accelerometer has a full new data set available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn accel_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_a().read()?.zyxda())
    }

    /// Whether the magnetometer has a full new data set available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn magn_data_ready(&mut self) -> Result<bool, Error<I::Error>> {
        Ok(self.device.status_m().read()?.zyxda())
    }

    /// Soft-reset both sub-devices
    ///
    /// Clears the control registers to their power-on defaults. The
    /// recovery path after [`Error::ConfigInterrupted`]; follow with
    /// [`Lsm303cDriver::reconfigure()`].
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset(&mut self) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_five_a().write(|w| {
            w.set_soft_reset(true);
        })?;
        self.device.ctrl_reg_two_m().write(|w| {
            w.set_soft_rst(true);
        })?;
        Ok(())
    }

    /// Acquire one sample of every enabled channel
    ///
    /// Each enabled channel is read as a 2-byte burst (low byte first) and
    /// scaled with the factor derived from the live configuration. Any
    /// failed read aborts the whole call; no partial sample is returned.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Bus`] if any burst read fails.
    pub fn sample(&mut self) -> Result<Sample, Error<I::Error>> {
        // Scale factors are re-derived from the live configuration on every
        // call; nothing is cached across reconfiguration.
        let resolved = self.config.resolve().ok_or(Error::InvalidConfig)?;
        let precision = self.config.precision;
        let accel = self.config.accel;
        let magn = self.config.magn;

        let mut sample = Sample::default();

        if accel.enable_x {
            let raw = self.read_output(OUT_X_L_A)?;
            sample.accel_x = Some(ChannelSample {
                raw,
                value: resolved.accel_fs.convert(raw, precision),
            });
        }
        if accel.enable_y {
            let raw = self.read_output(OUT_Y_L_A)?;
            sample.accel_y = Some(ChannelSample {
                raw,
                value: resolved.accel_fs.convert(raw, precision),
            });
        }
        if accel.enable_z {
            let raw = self.read_output(OUT_Z_L_A)?;
            sample.accel_z = Some(ChannelSample {
                raw,
                value: resolved.accel_fs.convert(raw, precision),
            });
        }

        if magn.enable_x {
            let raw = self.read_output(OUT_X_L_M)?;
            sample.magn_x = Some(ChannelSample {
                raw,
                value: resolved.mag_fs.convert(raw, precision),
            });
        }
        if magn.enable_y {
            let raw = self.read_output(OUT_Y_L_M)?;
            sample.magn_y = Some(ChannelSample {
                raw,
                value: resolved.mag_fs.convert(raw, precision),
            });
        }
        if magn.enable_z {
            let raw = self.read_output(OUT_Z_L_M)?;
            sample.magn_z = Some(ChannelSample {
                raw,
                value: resolved.mag_fs.convert(raw, precision),
            });
        }

        if self.config.temp_enable {
            let raw = self.read_output(TEMP_L)?;
            sample.temp = Some(ChannelSample {
                raw,
                value: convert_temperature(raw, precision),
            });
        }

        Ok(sample)
    }

    fn apply_config(&mut self) -> Result<(), Error<I::Error>> {
        let resolved = self.config.resolve().ok_or(Error::InvalidConfig)?;
        self.check_identity()?;
        self.write_control_registers(&resolved)
    }

    fn check_identity(&mut self) -> Result<(), Error<I::Error>> {
        let id = self.device.who_am_ia().read()?.who_am_i();
        if id != WHO_AM_I_ACCEL {
            return Err(Error::InvalidDevice(id));
        }
        let id = self.device.who_am_im().read()?.who_am_i();
        if id != WHO_AM_I_MAGN {
            return Err(Error::InvalidDevice(id));
        }
        Ok(())
    }

    /// Program the control registers in the documented hardware order
    ///
    /// Every control register is composed as one direct full-byte write
    /// from its power-on default; all fields sharing a register go out in
    /// its single write. Per bank, the data-rate/enable register is written
    /// strictly before the full-scale register.
    fn write_control_registers(
        &mut self,
        resolved: &ResolvedConfig,
    ) -> Result<(), Error<I::Error>> {
        let accel = self.config.accel;
        let magn = self.config.magn;
        let temp_enable = self.config.temp_enable;

        let mag_mode = if magn.any_axis_enabled() {
            MAG_HIGH_PERFORMANCE
        } else {
            MAG_LOW_POWER
        };
        let mag_active = magn.any_axis_enabled() || temp_enable;

        self.device.ctrl_reg_one_a().write(|w| {
            w.set_xen(accel.enable_x);
            w.set_yen(accel.enable_y);
            w.set_zen(accel.enable_z);
            w.set_bdu(true);
            w.set_odr(resolved.accel_odr as u8);
        })?;

        // A failure from here on leaves the device part-programmed.
        self.device
            .ctrl_reg_four_a()
            .write(|w| {
                // IF_ADD_INC powers on set; the 2-byte output bursts
                // depend on it, so the full-byte write must keep it.
                w.set_if_add_inc(true);
                w.set_fs(resolved.accel_fs as u8);
            })
            .map_err(Error::ConfigInterrupted)?;

        self.device
            .ctrl_reg_five_m()
            .write(|w| {
                w.set_bdu(true);
            })
            .map_err(Error::ConfigInterrupted)?;

        self.device
            .ctrl_reg_one_m()
            .write(|w| {
                w.set_temp_en(temp_enable);
                w.set_do_rate(resolved.mag_odr as u8);
                w.set_om(mag_mode);
            })
            .map_err(Error::ConfigInterrupted)?;

        self.device
            .ctrl_reg_two_m()
            .write(|w| {
                w.set_fs(resolved.mag_fs as u8);
            })
            .map_err(Error::ConfigInterrupted)?;

        self.device
            .ctrl_reg_four_m()
            .write(|w| {
                w.set_omz(mag_mode);
            })
            .map_err(Error::ConfigInterrupted)?;

        self.device
            .ctrl_reg_three_m()
            .write(|w| {
                w.set_md(if mag_active {
                    MAG_MODE_CONTINUOUS
                } else {
                    MAG_MODE_POWER_DOWN
                });
            })
            .map_err(Error::ConfigInterrupted)?;

        Ok(())
    }

    /// Burst-read one low/high output pair and assemble the signed value
    fn read_output(&mut self, address: u16) -> Result<i16, Error<I::Error>> {
        // One 2-byte burst so both halves belong to the same conversion
        let mut buffer = [0u8; 2];
        self.device.interface.read_register(address, 16, &mut buffer)?;
        Ok(i16::from_le_bytes(buffer))
    }
}
