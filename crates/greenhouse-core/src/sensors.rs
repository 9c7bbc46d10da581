//! Sensor ports and on-demand snapshot
//!
//! Drivers are never retried or validated. A driver that failed to initialize
//! keeps returning whatever it returns (usually NaN) and the value is passed
//! through to the client unchanged.

use serde::{Serialize, Serializer};

/// Temperature, humidity and pressure sensor
pub trait ClimateSensor {
    /// Temperature in degrees Celsius
    fn read_temperature(&mut self) -> f32;
    /// Relative humidity in percent
    fn read_humidity(&mut self) -> f32;
    /// Absolute pressure in pascals
    fn read_pressure(&mut self) -> f32;
}

/// Ambient light sensor
pub trait LightSensor {
    /// Illuminance in lux
    fn read_lux(&mut self) -> f32;
}

/// One set of readings taken for a single request
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SensorReading {
    #[serde(rename = "temperature", serialize_with = "one_decimal")]
    pub temperature_c: f32,
    #[serde(rename = "humidity", serialize_with = "one_decimal")]
    pub humidity_pct: f32,
    #[serde(rename = "pressure", serialize_with = "one_decimal")]
    pub pressure_hpa: f32,
    #[serde(rename = "lux", serialize_with = "one_decimal")]
    pub illuminance_lux: f32,
}

/// Reads every sensor each time it is asked; nothing is cached.
pub struct SensorSnapshot<C: ClimateSensor, L: LightSensor> {
    climate: C,
    light: L,
}

impl<C: ClimateSensor, L: LightSensor> SensorSnapshot<C, L> {
    pub const fn new(climate: C, light: L) -> Self {
        Self { climate, light }
    }

    /// Read all four values synchronously.
    pub fn read_all(&mut self) -> SensorReading {
        let reading = SensorReading {
            temperature_c: self.climate.read_temperature(),
            humidity_pct: self.climate.read_humidity(),
            pressure_hpa: self.climate.read_pressure() / 100.0,
            illuminance_lux: self.light.read_lux(),
        };
        log::debug!("sensors: {:?}", reading);
        reading
    }
}

/// Round half away from zero to one decimal place.
///
/// Non-finite values are returned unchanged.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn round_one_decimal(value: f32) -> f32 {
    if !value.is_finite() {
        return value;
    }
    let scaled = value * 10.0;
    // Beyond this magnitude f32 has no fractional digits left.
    if scaled.abs() >= 8_388_608.0 {
        return value;
    }
    let half = if scaled < 0.0 { -0.5 } else { 0.5 };
    ((scaled + half) as i32) as f32 / 10.0
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn one_decimal<S: Serializer>(value: &f32, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f32(round_one_decimal(*value))
}
