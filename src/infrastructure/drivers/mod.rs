mod bh1750;
mod bme280;
mod i2c_bus;
mod led_ws2812;
mod random;
mod servo;
mod wifi_ap;

pub(crate) use bh1750::Bh1750;
pub(crate) use bme280::Bme280Sensor;
pub(crate) use i2c_bus::{EspI2c, init_i2c_bus};
pub(crate) use led_ws2812::EspLedDriver;
pub(crate) use servo::{ServoChannel, init_window_servo};
pub use wifi_ap::{NetworkError, start_wifi_ap};

/// Sensor bring-up failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SensorError {
    /// The driver rejected the chip (wrong ID or calibration read failed)
    Init,
    /// The chip did not acknowledge on the bus
    Bus,
}
