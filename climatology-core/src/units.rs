//! Unit conversions applied when emitting output statistics.
//!
//! Source records arrive in climate-model native units (K, Pa, m/s); the
//! output consumer expects everyday units (degrees Fahrenheit, hPa, mph).

use crate::observation::FloatValue;

/// Offset between the Kelvin and Celsius scales.
const KELVIN_OFFSET: FloatValue = 273.15;
/// Pascals per hectopascal.
const PA_PER_HPA: FloatValue = 100.0;
/// Miles per hour in one metre per second.
const MPH_PER_MPS: FloatValue = 2.23694;
/// Percentage points in one unit fraction.
const PERCENT_PER_FRACTION: FloatValue = 100.0;

pub fn kelvin_to_fahrenheit(kelvin: FloatValue) -> FloatValue {
    (kelvin - KELVIN_OFFSET) * 9.0 / 5.0 + 32.0
}

pub fn pascals_to_hectopascals(pascals: FloatValue) -> FloatValue {
    pascals / PA_PER_HPA
}

pub fn metres_per_second_to_mph(speed: FloatValue) -> FloatValue {
    speed * MPH_PER_MPS
}

pub fn percent_to_fraction(percent: FloatValue) -> FloatValue {
    percent / PERCENT_PER_FRACTION
}
