//! Display power management
//!
//! The panel is energized through a 5 V boost converter and enabled with the
//! DISP line; while it is on, a periodic wake source drives the EXTCOMIN
//! polarity toggle and an idle counter that switches the display off after
//! a period without key activity.
//!
//! The work is split between [`PowerState`], which only holds atomics and
//! can be shared with interrupt handlers and the input layer, and
//! [`PowerController`], which owns the rail pins and the wake source and is
//! driven from the foreground loop.

mod controller;
mod state;

pub use controller::{PowerController, PowerRails};
pub use state::{PowerEvent, PowerState, TickOutcome};

/// Abort on an unrecoverable hardware fault
///
/// A display that failed to initialize leaves no way to show anything to
/// the user, so there is nothing to degrade to. The firmware panic handler
/// halts the core.
#[cold]
pub fn fatal(what: &'static str) -> ! {
    error!("fatal display fault: {}", what);
    panic!("fatal display fault: {}", what);
}
