use esp_hal::gpio::Output;
use greenhouse_core::{ActuatorControl, Greenhouse};

use crate::{
    config::LED_COUNT,
    core::sync::SharedI2c,
    infrastructure::drivers::{Bh1750, Bme280Sensor, EspI2c, EspLedDriver, ServoChannel},
};

pub(crate) type SensorBus = SharedI2c<'static, EspI2c>;
pub(crate) type ClimateSensorImpl = Bme280Sensor<SensorBus>;
pub(crate) type LightSensorImpl = Bh1750<SensorBus>;
pub(crate) type StripDriver = EspLedDriver<'static>;

pub(crate) type ActuatorControlImpl =
    ActuatorControl<Output<'static>, ServoChannel, StripDriver, LED_COUNT>;
pub(crate) type GreenhouseImpl = Greenhouse<
    Output<'static>,
    ServoChannel,
    StripDriver,
    ClimateSensorImpl,
    LightSensorImpl,
    LED_COUNT,
>;
