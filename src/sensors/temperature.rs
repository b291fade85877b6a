//! Temperature channel conversion
//!
//! The on-die sensor shares the magnetometer bank and outputs a signed
//! 16-bit value with a fixed offset/slope relationship: 8 LSB per °C,
//! 0 LSB at 25 °C.

use super::{Precision, Value};

const OFFSET_CELSIUS: f32 = 25.0;
const LSB_PER_CELSIUS: f32 = 8.0;

const OFFSET_MICRO: i64 = 25_000_000;
const MICRO_PER_LSB: i64 = 125_000; // 1/8 °C in µ°C

/// Convert a raw temperature reading in the selected precision mode
///
/// Float mode yields °C; integer mode yields µ°C. One LSB is exactly
/// 125000 µ°C, so integer mode is lossless.
#[must_use]
pub fn convert_temperature(raw: i16, precision: Precision) -> Value {
    match precision {
        Precision::Float => Value::Float(OFFSET_CELSIUS + f32::from(raw) / LSB_PER_CELSIUS),
        Precision::Integer => Value::Micro(OFFSET_MICRO + i64::from(raw) * MICRO_PER_LSB),
    }
}
