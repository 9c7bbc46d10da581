use embassy_time::{Delay, Duration};
use embedded_hal::{delay::DelayNs as _, i2c::I2c};
use greenhouse_core::LightSensor;
use log::{info, warn};

use super::SensorError;

const POWER_ON: u8 = 0x01;
const CONTINUOUS_HIGH_RES_MODE: u8 = 0x10;
/// Worst-case conversion time in high resolution mode
const MEASUREMENT_TIME: Duration = Duration::from_millis(180);
/// Counts per lux at the default measurement time
const COUNTS_PER_LUX: f32 = 1.2;

/// BH1750 ambient light sensor in continuous high resolution mode
pub(crate) struct Bh1750<I2C> {
    i2c: I2C,
    address: u8,
    ready: bool,
}

impl<I2C: I2c> Bh1750<I2C> {
    pub(crate) const fn new(i2c: I2C, address: u8) -> Self {
        Self {
            i2c,
            address,
            ready: false,
        }
    }

    /// Power the sensor up and start continuous conversions.
    pub(crate) fn init(&mut self) -> Result<(), SensorError> {
        let result = self
            .i2c
            .write(self.address, &[POWER_ON])
            .and_then(|()| self.i2c.write(self.address, &[CONTINUOUS_HIGH_RES_MODE]));
        if let Err(e) = result {
            warn!("bh1750: init failed: {:?}", e);
            return Err(SensorError::Bus);
        }

        #[allow(clippy::cast_possible_truncation)]
        Delay.delay_ms(MEASUREMENT_TIME.as_millis() as u32);
        self.ready = true;
        info!("bh1750: initialized");
        Ok(())
    }
}

impl<I2C: I2c> LightSensor for Bh1750<I2C> {
    fn read_lux(&mut self) -> f32 {
        if !self.ready {
            return f32::NAN;
        }
        let mut raw = [0u8; 2];
        match self.i2c.read(self.address, &mut raw) {
            Ok(()) => f32::from(u16::from_be_bytes(raw)) / COUNTS_PER_LUX,
            Err(e) => {
                warn!("bh1750: read failed: {:?}", e);
                f32::NAN
            }
        }
    }
}
