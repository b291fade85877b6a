//! Sensor types, configuration, and scale-factor tables for the LSM303C
//!
//! One module per channel group:
//! - Accelerometer (3-axis)
//! - Magnetometer (3-axis)
//! - Temperature (on-die sensor, shares the magnetometer bank)
//!
//! All bus operations are performed through methods on `Lsm303cDriver`;
//! these modules hold the pure data side: register encodings, scale
//! factors, and the user-facing configuration values.

pub mod accelerometer;
pub mod magnetometer;
pub mod temperature;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelFullScale, AccelOdr, STANDARD_GRAVITY};
pub use magnetometer::{MagConfig, MagFullScale, MagOdr};
pub use temperature::convert_temperature;

/// Numeric-precision mode for sample conversion
///
/// Selected once in [`Config`]; every conversion of a sample uses the same
/// mode. `Integer` avoids floating-point arithmetic entirely, for targets
/// without an FPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Precision {
    /// `f32` values in base units (m/s², gauss, °C)
    Float,
    /// `i64` values in micro-units (µm/s², µgauss, µ°C), integer arithmetic only
    Integer,
}

/// A scaled physical value in the representation selected by [`Precision`]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Value {
    /// Base units: m/s² for acceleration, gauss for magnetic field, °C for temperature
    Float(f32),
    /// Micro-units of the same quantities (µm/s², µgauss, µ°C)
    Micro(i64),
}

impl Value {
    /// Collapse to an `f32` in base units, whichever mode produced the value
    #[must_use]
    pub fn to_f32(self) -> f32 {
        match self {
            Self::Float(value) => value,
            #[allow(clippy::cast_precision_loss)]
            Self::Micro(value) => value as f32 / 1_000_000.0,
        }
    }
}

/// Complete device configuration
///
/// Constructed once and handed to `Lsm303cDriver::new()`; immutable
/// thereafter. Re-configuration means building a new `Config` and calling
/// `reconfigure()`, which re-runs the whole encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// Accelerometer settings
    pub accel: AccelConfig,
    /// Magnetometer settings
    pub magn: MagConfig,
    /// Temperature sensor enable
    pub temp_enable: bool,
    /// Numeric-precision mode used for every conversion
    pub precision: Precision,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            accel: AccelConfig::default(),
            magn: MagConfig::default(),
            temp_enable: true,
            precision: Precision::Float,
        }
    }
}

impl Config {
    /// Resolve the numeric selections into register encodings
    ///
    /// Fails (returns `None`) for any value outside the supported tables,
    /// before a single bus transaction is issued.
    pub(crate) fn resolve(&self) -> Option<ResolvedConfig> {
        Some(ResolvedConfig {
            accel_fs: AccelFullScale::from_g(self.accel.full_scale_g)?,
            accel_odr: AccelOdr::from_hz(self.accel.odr_hz)?,
            mag_fs: MagFullScale::from_gauss(self.magn.full_scale_gauss)?,
            mag_odr: MagOdr::from_hz(self.magn.odr_hz)?,
        })
    }
}

/// Register encodings resolved from a [`Config`]
#[derive(Debug, Clone, Copy)]
pub(crate) struct ResolvedConfig {
    pub accel_fs: AccelFullScale,
    pub accel_odr: AccelOdr,
    pub mag_fs: MagFullScale,
    pub mag_odr: MagOdr,
}
