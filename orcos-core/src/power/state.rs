//! Shared power state

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::signal::Signal;
use portable_atomic::{AtomicBool, AtomicU16, AtomicU8, Ordering};

use crate::screen::ScreenTag;

/// Notification for the foreground loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerEvent {
    /// A live screen is showing and its content is stale
    Redraw,
    /// The idle timeout expired and the display was switched off
    AutoOff,
}

/// Result of counting one wake tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// Display is off; the tick was not counted
    Ignored,
    /// Tick counted, display stays on
    Counted {
        /// Idle ticks after this one
        idle_ticks: u16,
        /// A redraw was requested
        redraw: bool,
    },
    /// Idle timeout reached
    TimedOut,
}

/// Power state shared between the foreground, the wake interrupt and the
/// input layer
///
/// Every field is an atomic (or a critical-section signal), so a `static`
/// instance can be read and updated from any context.
pub struct PowerState {
    on: AtomicBool,
    idle_ticks: AtomicU16,
    screen: AtomicU8,
    events: Signal<CriticalSectionRawMutex, PowerEvent>,
}

impl Default for PowerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PowerState {
    /// Create a new state: display off, no screen
    pub const fn new() -> Self {
        Self {
            on: AtomicBool::new(false),
            idle_ticks: AtomicU16::new(0),
            screen: AtomicU8::new(0),
            events: Signal::new(),
        }
    }

    /// Check if the display is energized
    pub fn is_on(&self) -> bool {
        self.on.load(Ordering::Acquire)
    }

    /// Record key activity, restarting the idle timeout
    pub fn keep_alive(&self) {
        self.idle_ticks.store(0, Ordering::Relaxed);
    }

    /// Wake ticks since the last activity
    pub fn idle_ticks(&self) -> u16 {
        self.idle_ticks.load(Ordering::Relaxed)
    }

    /// Screen currently on the panel
    pub fn screen(&self) -> ScreenTag {
        ScreenTag::from_raw(self.screen.load(Ordering::Relaxed))
    }

    /// Record which screen is on the panel
    pub fn set_screen(&self, screen: ScreenTag) {
        self.screen.store(screen.to_raw(), Ordering::Relaxed);
    }

    /// Take the pending notification, if any
    pub fn take_event(&self) -> Option<PowerEvent> {
        self.events.try_take()
    }

    /// Wait for the next notification
    pub async fn wait_event(&self) -> PowerEvent {
        self.events.wait().await
    }

    /// Post a notification, replacing an unconsumed one
    pub(crate) fn notify(&self, event: PowerEvent) {
        self.events.signal(event);
    }

    pub(crate) fn mark_on(&self) {
        self.idle_ticks.store(0, Ordering::Relaxed);
        self.on.store(true, Ordering::Release);
    }

    pub(crate) fn mark_off(&self) {
        self.on.store(false, Ordering::Release);
    }

    /// Count one wake tick against the idle timeout
    ///
    /// Requests a redraw when a live screen is showing. Returns
    /// [`TickOutcome::TimedOut`] on the tick that brings the idle counter to
    /// `timeout`; the caller is responsible for the actual power-down.
    pub fn count_tick(&self, timeout: u16) -> TickOutcome {
        if !self.is_on() {
            return TickOutcome::Ignored;
        }

        let redraw = self.screen().is_live();
        if redraw {
            self.notify(PowerEvent::Redraw);
        }

        let previous = self
            .idle_ticks
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |ticks| {
                Some(ticks.saturating_add(1))
            })
            .unwrap_or_else(|ticks| ticks);
        let idle_ticks = previous.saturating_add(1);

        if idle_ticks >= timeout {
            TickOutcome::TimedOut
        } else {
            TickOutcome::Counted { idle_ticks, redraw }
        }
    }
}
