//! Board-agnostic core logic for the OpenRPNCalc display
//!
//! This crate contains the parts of the display subsystem that do not touch
//! pixels:
//!
//! - Power/timeout controller (rail sequencing, wake ticks, idle auto-off)
//! - Shared power state usable from interrupt context
//! - Screen tags deciding which screens refresh on wake ticks
//! - Timing configuration for the panel link and the power rails

#![no_std]
#![deny(unsafe_code)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

pub mod config;
pub mod power;
pub mod screen;
pub mod traits;

pub use config::{LinkTiming, PowerConfig};
pub use power::{fatal, PowerController, PowerEvent, PowerRails, PowerState, TickOutcome};
pub use screen::ScreenTag;
pub use traits::PanelLink;
