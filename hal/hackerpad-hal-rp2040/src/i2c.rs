//! Blocking I2C adapter
//!
//! Bridges any `embedded-hal` 1.0 blocking bus (such as
//! `embassy_rp::i2c::I2c<'_, _, Blocking>`) to [`hackerpad_hal::I2cBus`].

use embedded_hal::i2c::I2c;

/// `embedded-hal` bus wrapped as an [`hackerpad_hal::I2cBus`]
pub struct BlockingI2c<T> {
    bus: T,
}

impl<T: I2c> BlockingI2c<T> {
    /// Wrap a configured bus
    pub fn new(bus: T) -> Self {
        Self { bus }
    }

    /// Release the underlying bus
    pub fn free(self) -> T {
        self.bus
    }
}

impl<T: I2c> hackerpad_hal::I2cBus for BlockingI2c<T> {
    type Error = T::Error;

    fn write(&mut self, address: u8, data: &[u8]) -> Result<(), Self::Error> {
        self.bus.write(address, data)
    }

    fn read(&mut self, address: u8, buf: &mut [u8]) -> Result<(), Self::Error> {
        self.bus.read(address, buf)
    }
}
