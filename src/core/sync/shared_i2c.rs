use core::cell::RefCell;

use embassy_sync::blocking_mutex::{Mutex, raw::CriticalSectionRawMutex};
use embedded_hal::i2c::{ErrorType, I2c, Operation};

/// Blocking bus shared by every device on it
pub(crate) type I2cBusMutex<T> = Mutex<CriticalSectionRawMutex, RefCell<T>>;

/// Per-device handle onto a shared I2C bus.
///
/// Each transaction runs inside a critical section, so transactions from
/// different devices never interleave.
pub(crate) struct SharedI2c<'a, T> {
    bus: &'a I2cBusMutex<T>,
}

impl<'a, T> SharedI2c<'a, T> {
    pub(crate) const fn new(bus: &'a I2cBusMutex<T>) -> Self {
        Self { bus }
    }
}

impl<T: ErrorType> ErrorType for SharedI2c<'_, T> {
    type Error = T::Error;
}

impl<T: I2c> I2c for SharedI2c<'_, T> {
    fn transaction(
        &mut self,
        address: u8,
        operations: &mut [Operation<'_>],
    ) -> Result<(), Self::Error> {
        self.bus
            .lock(|bus| bus.borrow_mut().transaction(address, operations))
    }
}
