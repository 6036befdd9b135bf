//! Screen tags
//!
//! The power state remembers what kind of screen is showing so the wake
//! tick can tell a live screen (which must be redrawn every tick) from a
//! static one (housekeeping only).

/// Number of diagnostic test screens
pub const TEST_SCREEN_COUNT: u8 = 9;

/// Index of the test screen that shows the running clock
pub const LIVE_CLOCK_SCREEN: u8 = 5;

/// What is currently on the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenTag {
    /// Content drawn by the application
    #[default]
    Application,
    /// Static diagnostic screen
    Test(u8),
    /// Clock screen, redrawn on every wake tick
    LiveClock,
}

impl ScreenTag {
    /// Tag for test screen `index` (taken modulo [`TEST_SCREEN_COUNT`])
    pub const fn for_test_screen(index: u8) -> Self {
        let index = index % TEST_SCREEN_COUNT;
        if index == LIVE_CLOCK_SCREEN {
            ScreenTag::LiveClock
        } else {
            ScreenTag::Test(index)
        }
    }

    /// Check if this screen must be redrawn on every wake tick
    pub const fn is_live(&self) -> bool {
        matches!(self, ScreenTag::LiveClock)
    }

    /// Encode for atomic storage
    pub const fn to_raw(self) -> u8 {
        match self {
            ScreenTag::Application => 0,
            ScreenTag::LiveClock => 1,
            ScreenTag::Test(index) => 2 + index % TEST_SCREEN_COUNT,
        }
    }

    /// Decode from atomic storage; unknown values read as the application
    pub const fn from_raw(raw: u8) -> Self {
        match raw {
            1 => ScreenTag::LiveClock,
            2..=10 => ScreenTag::Test(raw - 2),
            _ => ScreenTag::Application,
        }
    }
}
