//! Real-time clock
//!
//! Read-only calendar access; setting the clock belongs to the application.

/// Time of day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Time {
    pub hour: u8,
    pub min: u8,
    pub sec: u8,
}

/// Calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Date {
    /// Full year (e.g. 2025)
    pub year: u16,
    /// Month, 1-12
    pub month: u8,
    /// Day of month, 1-31
    pub day: u8,
}

impl Default for Date {
    fn default() -> Self {
        Self {
            year: 2000,
            month: 1,
            day: 1,
        }
    }
}

/// Calendar clock
pub trait RealTimeClock {
    /// Read the current time and date
    ///
    /// Implementations must read the date after the time so the shadow
    /// registers are unlocked for the next read.
    fn read(&mut self) -> (Time, Date);
}
