//! SPI bus abstractions
//!
//! The Sharp Memory LCD is write-only, so the bus only needs to push bytes.
//! Chip-select is not part of the bus: the panel's select line is active
//! high and is driven as a plain [`OutputPin`](crate::OutputPin) by the
//! refresh transmitter, which owns the setup/hold timing around it.

/// SPI bus master (transmit only)
pub trait SpiBus {
    /// Error type for SPI operations
    type Error;

    /// Write data, blocking until every byte has been shifted out
    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Wait until the bus is idle
    fn flush(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }
}

impl<S: SpiBus + ?Sized> SpiBus for &mut S {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write(data)
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        (**self).flush()
    }
}
