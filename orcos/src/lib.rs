//! OpenRPNCalc display
//!
//! [`Display`] is the single entry point the calculator uses to draw on the
//! Sharp Memory LCD, push frames to the panel and manage panel power. It
//! also carries the diagnostic test screens.
//!
//! # Wiring
//!
//! ```text
//! key scan ──keep_alive()──▶ PowerState ◀──on_wake_tick()── wake ISR
//!                               │
//!                          PowerEvent
//!                               ▼
//! application ──draw──▶ Display::service() ──refresh()──▶ panel
//! ```
//!
//! The [`PowerState`] is a `static` shared with the input layer; the
//! `Display` itself lives in the foreground.

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod display;
pub mod images;
pub mod test_screens;

#[cfg(test)]
mod mock;

pub use config::Config;
pub use display::Display;

pub use orcos_core::{PowerEvent, PowerRails, PowerState, ScreenTag, TickOutcome};
pub use orcos_display::{BitOrder, BlitOp, Color, DisplayError, FillValue, FontId};
