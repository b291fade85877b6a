//! Magnetometer types, register encodings, and scale factors
//!
//! Provides the full-scale and output-data-rate tables for the LSM303C's
//! 3-axis magnetometer. The part has no per-axis enable bits; the enable
//! flags in [`MagConfig`] gate acquisition and reporting only.

use super::{Precision, Value};

/// Magnetometer full-scale range
///
/// Discriminants are the `CTRL_REG2_M` FS\[1:0\] encodings; 0b10 is not a
/// defined selection on this part.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagFullScale {
    /// 245 range (most sensitive)
    Gauss245 = 0b00,
    /// 500 range
    Gauss500 = 0b01,
    /// 2000 range (least sensitive)
    Gauss2000 = 0b11,
}

impl MagFullScale {
    /// Look up the encoding for a numeric full-scale selection
    ///
    /// Returns `None` for anything outside {245, 500, 2000}.
    #[must_use]
    pub const fn from_gauss(full_scale_gauss: u16) -> Option<Self> {
        match full_scale_gauss {
            245 => Some(Self::Gauss245),
            500 => Some(Self::Gauss500),
            2000 => Some(Self::Gauss2000),
            _ => None,
        }
    }

    /// Get the numeric full-scale selection this encoding stands for
    #[must_use]
    pub const fn range_gauss(self) -> u16 {
        match self {
            Self::Gauss245 => 245,
            Self::Gauss500 => 500,
            Self::Gauss2000 => 2000,
        }
    }

    /// Get the scale factor in µgauss per LSB
    #[must_use]
    pub fn factor(self) -> f32 {
        match self {
            Self::Gauss245 => 8.75,
            Self::Gauss500 => 17.5,
            Self::Gauss2000 => 70.0,
        }
    }

    /// Scale factor in centi-µgauss per LSB, exact in integer arithmetic
    const fn factor_centi_micro(self) -> i64 {
        match self {
            Self::Gauss245 => 875,
            Self::Gauss500 => 1750,
            Self::Gauss2000 => 7000,
        }
    }

    /// Convert a raw reading to magnetic field in the selected precision mode
    ///
    /// Float mode yields gauss; integer mode yields µgauss. The integer
    /// table carries the per-LSB ratio pre-scaled by 100, so both modes use
    /// the same ratios exactly.
    #[must_use]
    pub fn convert(self, raw: i16, precision: Precision) -> Value {
        match precision {
            Precision::Float => Value::Float(f32::from(raw) * self.factor() / 1_000_000.0),
            Precision::Integer => Value::Micro(i64::from(raw) * self.factor_centi_micro() / 100),
        }
    }
}

/// Magnetometer output data rate
///
/// Discriminants are the `CTRL_REG1_M` DO\[2:0\] encodings. The nominal
/// selections follow the configuration system's integer values; the two
/// lowest real rates are 14.9 Hz and 59.5 Hz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MagOdr {
    /// Output registers not refreshed
    PowerDown = 0,
    /// 14.9 Hz (selected as 15)
    Hz15 = 1,
    /// 59.5 Hz (selected as 60)
    Hz60 = 2,
    /// 119 Hz
    Hz119 = 3,
    /// 238 Hz
    Hz238 = 4,
    /// 476 Hz
    Hz476 = 5,
    /// 952 Hz
    Hz952 = 6,
}

impl MagOdr {
    /// Look up the encoding for a numeric rate selection in Hz
    ///
    /// Returns `None` for anything outside {0, 15, 60, 119, 238, 476, 952}.
    #[must_use]
    pub const fn from_hz(odr_hz: u16) -> Option<Self> {
        match odr_hz {
            0 => Some(Self::PowerDown),
            15 => Some(Self::Hz15),
            60 => Some(Self::Hz60),
            119 => Some(Self::Hz119),
            238 => Some(Self::Hz238),
            476 => Some(Self::Hz476),
            952 => Some(Self::Hz952),
            _ => None,
        }
    }

    /// Get the nominal selection value in Hz
    #[must_use]
    pub const fn output_rate_hz(self) -> u16 {
        match self {
            Self::PowerDown => 0,
            Self::Hz15 => 15,
            Self::Hz60 => 60,
            Self::Hz119 => 119,
            Self::Hz238 => 238,
            Self::Hz476 => 476,
            Self::Hz952 => 952,
        }
    }
}

/// Magnetometer configuration
///
/// `full_scale_gauss` and `odr_hz` carry the user-facing numeric
/// selections; they are resolved to register encodings at encode time and
/// rejected as `InvalidConfig` if unsupported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct MagConfig {
    /// X-axis enable (gates acquisition; no hardware bit on this part)
    pub enable_x: bool,
    /// Y-axis enable (gates acquisition; no hardware bit on this part)
    pub enable_y: bool,
    /// Z-axis enable (gates acquisition; no hardware bit on this part)
    pub enable_z: bool,
    /// Full-scale selection: one of {245, 500, 2000}
    pub full_scale_gauss: u16,
    /// Output data rate in Hz: one of {0, 15, 60, 119, 238, 476, 952}
    pub odr_hz: u16,
}

impl Default for MagConfig {
    fn default() -> Self {
        Self {
            enable_x: true,
            enable_y: true,
            enable_z: true,
            full_scale_gauss: 245,
            odr_hz: 119,
        }
    }
}

impl MagConfig {
    /// Whether any axis is enabled
    #[must_use]
    pub fn any_axis_enabled(&self) -> bool {
        self.enable_x || self.enable_y || self.enable_z
    }
}
