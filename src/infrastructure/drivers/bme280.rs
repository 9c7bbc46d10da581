use bme280::{Measurements, i2c::BME280};
use embassy_time::Delay;
use embedded_hal::i2c::I2c;
use greenhouse_core::ClimateSensor;
use log::{info, warn};

use super::SensorError;

/// BME280 on the secondary address (0x77)
///
/// Every read triggers a fresh forced measurement. Until [`Bme280Sensor::init`]
/// succeeds all reads are NaN.
pub(crate) struct Bme280Sensor<I2C> {
    sensor: BME280<I2C>,
    delay: Delay,
    ready: bool,
}

impl<I2C: I2c> Bme280Sensor<I2C> {
    pub(crate) fn new(i2c: I2C) -> Self {
        Self {
            sensor: BME280::new_secondary(i2c),
            delay: Delay,
            ready: false,
        }
    }

    pub(crate) fn init(&mut self) -> Result<(), SensorError> {
        match self.sensor.init(&mut self.delay) {
            Ok(()) => {
                self.ready = true;
                info!("bme280: initialized");
                Ok(())
            }
            Err(e) => {
                warn!("bme280: init failed: {:?}", e);
                Err(SensorError::Init)
            }
        }
    }

    fn measure(&mut self) -> Option<Measurements<I2C::Error>> {
        if !self.ready {
            return None;
        }
        self.sensor
            .measure(&mut self.delay)
            .inspect_err(|e| warn!("bme280: measure failed: {:?}", e))
            .ok()
    }
}

impl<I2C: I2c> ClimateSensor for Bme280Sensor<I2C> {
    fn read_temperature(&mut self) -> f32 {
        self.measure().map_or(f32::NAN, |m| m.temperature)
    }

    fn read_humidity(&mut self) -> f32 {
        self.measure().map_or(f32::NAN, |m| m.humidity)
    }

    fn read_pressure(&mut self) -> f32 {
        self.measure().map_or(f32::NAN, |m| m.pressure)
    }
}
