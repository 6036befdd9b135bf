//! Periodic wake source
//!
//! While the display is on, a real-time wake-up timer fires once per period
//! to drive EXTCOMIN, the idle timeout and live screen updates. The MCU
//! sleeps in STOP mode between events.

/// Wake source errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WakeError {
    /// Callback or interrupt registration failed
    Registration,
    /// Requested period cannot be produced by the timer
    InvalidPeriod,
}

/// Periodic real-time wake-up timer
pub trait WakeSource {
    /// Start generating wake events every `period_ms` milliseconds
    fn arm(&mut self, period_ms: u32) -> Result<(), WakeError>;

    /// Stop generating wake events
    fn disarm(&mut self);

    /// Check if wake events are currently generated
    fn is_armed(&self) -> bool;
}
