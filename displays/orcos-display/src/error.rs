//! Display errors

/// Display link errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// SPI transfer to the panel failed
    Communication,
    /// Transfer does not fit the chunk buffer
    BufferOverflow,
}
