//! Timing configuration
//!
//! Values come from the LS027B7DH01 datasheet and the OpenRPNCalc board:
//! chip-select setup/hold around every SPI transfer, settling time between
//! power rail transitions, and the wake/idle cadence.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chip-select setup time before the first clock edge (µs)
pub const CS_SETUP_US: u32 = 12;

/// Chip-select hold time after the last clock edge (µs)
pub const CS_HOLD_US: u32 = 4;

/// Minimum chip-select low time between transfers (µs)
pub const CS_RELEASE_US: u32 = 4;

/// Settling time between power rail transitions (µs)
pub const RAIL_SETTLE_US: u32 = 30;

/// Wake-up period while the display is on (ms)
pub const WAKE_PERIOD_MS: u32 = 1000;

/// Wake ticks without key activity before the display switches off (5 min)
pub const OFF_TIMEOUT_TICKS: u16 = 5 * 60;

/// Chip-select timing for the panel link
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LinkTiming {
    /// Delay between asserting chip-select and the transfer
    pub setup_us: u32,
    /// Delay between the transfer and deasserting chip-select
    pub hold_us: u32,
    /// Delay after deasserting chip-select
    pub release_us: u32,
}

impl LinkTiming {
    /// Datasheet timing
    pub const DEFAULT: Self = Self {
        setup_us: CS_SETUP_US,
        hold_us: CS_HOLD_US,
        release_us: CS_RELEASE_US,
    };
}

impl Default for LinkTiming {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Power controller configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PowerConfig {
    /// Idle wake ticks before automatic power-off (minimum 1)
    pub off_timeout_ticks: u16,
    /// Wake source period in milliseconds
    pub wake_period_ms: u32,
    /// Settling delay between rail transitions in microseconds
    pub rail_settle_us: u32,
}

impl PowerConfig {
    /// Board defaults
    pub const DEFAULT: Self = Self {
        off_timeout_ticks: OFF_TIMEOUT_TICKS,
        wake_period_ms: WAKE_PERIOD_MS,
        rail_settle_us: RAIL_SETTLE_US,
    };

    /// Override the idle timeout
    pub const fn with_off_timeout(mut self, ticks: u16) -> Self {
        self.off_timeout_ticks = ticks;
        self
    }

    /// Idle timeout with the zero case mapped to a single tick
    pub const fn effective_timeout(&self) -> u16 {
        if self.off_timeout_ticks == 0 {
            1
        } else {
            self.off_timeout_ticks
        }
    }

    /// Idle timeout expressed in milliseconds
    pub const fn idle_timeout_ms(&self) -> u32 {
        self.effective_timeout() as u32 * self.wake_period_ms
    }
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_board() {
        let config = PowerConfig::default();
        assert_eq!(config.off_timeout_ticks, 300);
        assert_eq!(config.wake_period_ms, 1000);
        assert_eq!(config.rail_settle_us, 30);
        // Five minutes at 1 Hz
        assert_eq!(config.idle_timeout_ms(), 5 * 60 * 1000);

        let timing = LinkTiming::default();
        assert_eq!(timing.setup_us, 12);
        assert_eq!(timing.hold_us, 4);
    }

    #[test]
    fn test_zero_timeout_is_one_tick() {
        let config = PowerConfig::DEFAULT.with_off_timeout(0);
        assert_eq!(config.effective_timeout(), 1);
    }
}
