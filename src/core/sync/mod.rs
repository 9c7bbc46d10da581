mod shared_i2c;

pub(crate) use shared_i2c::{I2cBusMutex, SharedI2c};
