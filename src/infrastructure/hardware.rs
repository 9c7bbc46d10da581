use esp_hal::{
    gpio::{AnyPin, Level, Output, OutputConfig},
    peripherals::{I2C0, LEDC, RMT},
};
use greenhouse_core::{ActuatorControl, Greenhouse, SensorSnapshot, actuators::ActuatorPins};
use log::warn;

use super::{
    config,
    drivers::{Bh1750, Bme280Sensor, EspLedDriver, init_i2c_bus, init_window_servo},
    types::{ActuatorControlImpl, GreenhouseImpl},
};
use crate::core::sync::SharedI2c;

/// Peripherals the greenhouse takes over at boot
pub struct GreenhouseHardware {
    pub pump: AnyPin<'static>,
    pub fan: AnyPin<'static>,
    pub light: AnyPin<'static>,
    pub servo: AnyPin<'static>,
    pub strip: AnyPin<'static>,
    pub sda: AnyPin<'static>,
    pub scl: AnyPin<'static>,
    pub ledc: LEDC<'static>,
    pub rmt: RMT<'static>,
    pub i2c: I2C0<'static>,
}

impl GreenhouseHardware {
    /// Drive every actuator to its boot state and bring up the sensors.
    ///
    /// A sensor that fails here is logged and left unready; its readings are
    /// NaN from then on.
    pub(crate) fn init(self) -> GreenhouseImpl {
        let pins = ActuatorPins {
            pump: low_output(self.pump),
            fan: low_output(self.fan),
            light: low_output(self.light),
        };
        let window = init_window_servo(self.ledc, self.servo);
        let strip = EspLedDriver::new(self.rmt, self.strip);
        let actuators: ActuatorControlImpl = ActuatorControl::new(pins, window, strip);

        let bus = init_i2c_bus(self.i2c, self.sda, self.scl);
        let mut climate = Bme280Sensor::new(SharedI2c::new(bus));
        if let Err(e) = climate.init() {
            warn!("hardware: climate sensor unavailable: {:?}", e);
        }
        let mut light = Bh1750::new(SharedI2c::new(bus), config::I2C_BUS.bh1750_address);
        if let Err(e) = light.init() {
            warn!("hardware: light sensor unavailable: {:?}", e);
        }

        Greenhouse::new(actuators, SensorSnapshot::new(climate, light))
    }
}

fn low_output(pin: AnyPin<'static>) -> Output<'static> {
    Output::new(pin, Level::Low, OutputConfig::default())
}
