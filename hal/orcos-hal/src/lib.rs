//! OpenRPNCalc Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware capabilities the display
//! core consumes. Board support code implements them on top of the chip HAL
//! (directly, or through the `embedded-hal` 1.0 adapters in [`compat`]).
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  orcos (display facade, test screens)   │
//! └─────────────────────────────────────────┘
//!          │                     │
//!          ▼                     ▼
//! ┌─────────────────┐   ┌─────────────────┐
//! │  orcos-display  │──▶│   orcos-core    │
//! └─────────────────┘   └─────────────────┘
//!          │                     │
//!          └──────────┬──────────┘
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  orcos-hal (this crate - traits)        │
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Chip-select, power rails, EXTCOMIN
//! - [`spi::SpiBus`] - Write-only serial link to the panel
//! - [`delay::DelayUs`] - Microsecond busy waits for setup/hold timing
//! - [`wake::WakeSource`] - Periodic real-time wake-up
//! - [`rtc::RealTimeClock`] - Calendar time for the clock screen

#![no_std]
#![deny(unsafe_code)]

pub mod compat;
pub mod delay;
pub mod gpio;
pub mod rtc;
pub mod spi;
pub mod wake;

// Re-export key traits at crate root for convenience
pub use delay::DelayUs;
pub use gpio::OutputPin;
pub use rtc::{Date, RealTimeClock, Time};
pub use spi::SpiBus;
pub use wake::{WakeError, WakeSource};
