use core::cell::RefCell;

use esp_hal::{
    Blocking,
    gpio::interconnect::PeripheralOutput,
    i2c::master::{Config, I2c},
    peripherals::I2C0,
    time::Rate,
};

use crate::{core::sync::I2cBusMutex, infrastructure::config, mk_static};

pub(crate) type EspI2c = I2c<'static, Blocking>;

/// Bring up I2C0 and park it in a static mutex for the sensors to share.
pub(crate) fn init_i2c_bus<SDA, SCL>(
    i2c: I2C0<'static>,
    sda: SDA,
    scl: SCL,
) -> &'static I2cBusMutex<EspI2c>
where
    SDA: PeripheralOutput<'static>,
    SCL: PeripheralOutput<'static>,
{
    let config =
        Config::default().with_frequency(Rate::from_khz(config::I2C_BUS.frequency_khz));
    let bus = I2c::new(i2c, config).unwrap().with_sda(sda).with_scl(scl);
    mk_static!(I2cBusMutex<EspI2c>, I2cBusMutex::new(RefCell::new(bus)))
}
