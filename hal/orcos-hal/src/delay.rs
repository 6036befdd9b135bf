//! Microsecond delays
//!
//! The panel protocol needs short, fixed setup and hold times around each
//! chip-select pulse; boards typically derive them from a 1 MHz timer.

/// Blocking microsecond delay
pub trait DelayUs {
    /// Busy-wait for at least `us` microseconds
    fn delay_us(&mut self, us: u32);
}

impl<D: DelayUs + ?Sized> DelayUs for &mut D {
    fn delay_us(&mut self, us: u32) {
        (**self).delay_us(us)
    }
}
