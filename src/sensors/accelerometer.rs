//! Accelerometer types, register encodings, and scale factors
//!
//! Provides the full-scale and output-data-rate tables for the LSM303C's
//! 3-axis accelerometer, plus the raw-to-physical conversion for both
//! precision modes.

use super::{Precision, Value};

/// Standard gravity in m/s², the reference for all acceleration scale factors
pub const STANDARD_GRAVITY: f32 = 9.80665;

/// Standard gravity in µm/s², for integer-only conversion
const STANDARD_GRAVITY_MICRO: i64 = 9_806_650;

/// Accelerometer full-scale range
///
/// Discriminants are the `CTRL_REG4_A` FS\[1:0\] encodings. Note the
/// non-monotonic ordering on this part: ±16g is 0b01, between ±2g and ±4g.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelFullScale {
    /// ±2g range (most sensitive, least range)
    G2 = 0b00,
    /// ±16g range (least sensitive, most range)
    G16 = 0b01,
    /// ±4g range
    G4 = 0b10,
    /// ±8g range
    G8 = 0b11,
}

impl AccelFullScale {
    /// Look up the encoding for a numeric full-scale selection in g
    ///
    /// Returns `None` for anything outside {2, 4, 8, 16}.
    #[must_use]
    pub const fn from_g(full_scale_g: u8) -> Option<Self> {
        match full_scale_g {
            2 => Some(Self::G2),
            4 => Some(Self::G4),
            8 => Some(Self::G8),
            16 => Some(Self::G16),
            _ => None,
        }
    }

    /// Get the measurement range in g
    #[must_use]
    pub const fn range_g(self) -> u8 {
        match self {
            Self::G2 => 2,
            Self::G4 => 4,
            Self::G8 => 8,
            Self::G16 => 16,
        }
    }

    /// Get the scale factor in m/s² per LSB
    ///
    /// The full 16-bit signed range maps onto ±`range_g`, so doubling the
    /// range doubles the per-LSB weight.
    #[must_use]
    pub fn factor(self) -> f32 {
        f32::from(self.range_g()) * STANDARD_GRAVITY / 32768.0
    }

    /// Convert a raw reading to acceleration in the selected precision mode
    ///
    /// Float mode yields m/s²; integer mode yields µm/s² computed without
    /// fractional arithmetic. The product is taken before the division so
    /// both modes agree to within one micro-unit.
    #[must_use]
    pub fn convert(self, raw: i16, precision: Precision) -> Value {
        match precision {
            Precision::Float => Value::Float(f32::from(raw) * self.factor()),
            Precision::Integer => Value::Micro(
                i64::from(raw) * i64::from(self.range_g()) * STANDARD_GRAVITY_MICRO / 32768,
            ),
        }
    }
}

/// Accelerometer output data rate
///
/// Discriminants are the `CTRL_REG1_A` ODR\[2:0\] encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AccelOdr {
    /// Power-down (no output refresh)
    PowerDown = 0,
    /// 10 Hz
    Hz10 = 1,
    /// 50 Hz
    Hz50 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl AccelOdr {
    /// Look up the encoding for a numeric rate selection in Hz
    ///
    /// Returns `None` for anything outside {0, 10, 50, 119, 238, 476, 952}.
    #[must_use]
    pub const fn from_hz(odr_hz: u16) -> Option<Self> {
        match odr_hz {
            0 => Some(Self::PowerDown),
            10 => Some(Self::Hz10),
            50 => Some(Self::Hz50),
            119 => Some(Self::Hz119),
            238 => Some(Self::Hz238),
            476 => Some(Self::Hz476),
            952 => Some(Self::Hz952),
            _ => None,
        }
    }

    /// Get the output refresh rate in Hz
    #[must_use]
    pub const fn output_rate_hz(self) -> u16 {
        match self {
            Self::PowerDown => 0,
            Self::Hz10 => 10,
            Self::Hz50 => 50,
            Self::Hz119 => 119,
            Self::Hz238 => 238,
            Self::Hz476 => 476,
            Self::Hz952 => 952,
        }
    }
}

/// Accelerometer configuration
///
/// `full_scale_g` and `odr_hz` carry the user-facing numeric selections;
/// they are resolved to register encodings at encode time and rejected as
/// `InvalidConfig` if unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelConfig {
    /// X-axis enable
    pub enable_x: bool,
    /// Y-axis enable
    pub enable_y: bool,
    /// Z-axis enable
    pub enable_z: bool,
    /// Full-scale range in g: one of {2, 4, 8, 16}
    pub full_scale_g: u8,
    /// Output data rate in Hz: one of {0, 10, 50, 119, 238, 476, 952}
    pub odr_hz: u16,
}

impl Default for AccelConfig {
    fn default() -> Self {
        Self {
            enable_x: true,
            enable_y: true,
            enable_z: true,
            full_scale_g: 2,
            odr_hz: 119,
        }
    }
}

impl AccelConfig {
    /// Whether any axis is enabled
    #[must_use]
    pub fn any_axis_enabled(&self) -> bool {
        self.enable_x || self.enable_y || self.enable_z
    }
}
