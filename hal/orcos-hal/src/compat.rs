//! Adapters from `embedded-hal` 1.0 traits
//!
//! Chip HALs (embassy, stm32 HALs, linux-embedded-hal for bench tests) all
//! speak `embedded-hal`; these newtypes bridge them to the traits of this
//! crate without blanket impls, so boards can still hand-implement the
//! traits for odd peripherals.

use core::convert::Infallible;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{self, PinState};
use embedded_hal::spi;

use crate::{DelayUs, OutputPin, SpiBus};

/// `embedded-hal` output pin adapter
///
/// Keeps a shadow copy of the last written level so [`OutputPin::toggle`]
/// and [`OutputPin::is_set_high`] work with write-only pins.
///
/// [`OutputPin`] has no error path, so only pins whose writes cannot fail
/// (`Error = Infallible`) are accepted.
pub struct EhOutput<P> {
    pin: P,
    high: bool,
}

fn drive<P: digital::OutputPin<Error = Infallible>>(pin: &mut P, high: bool) {
    pin.set_state(PinState::from(high))
        .unwrap_or_else(|never| match never {});
}

impl<P: digital::OutputPin<Error = Infallible>> EhOutput<P> {
    /// Wrap a pin and drive it to the given initial level
    pub fn new(mut pin: P, initial_high: bool) -> Self {
        drive(&mut pin, initial_high);
        Self {
            pin,
            high: initial_high,
        }
    }

    /// Release the wrapped pin
    pub fn into_inner(self) -> P {
        self.pin
    }
}

impl<P: digital::OutputPin<Error = Infallible>> OutputPin for EhOutput<P> {
    fn set_high(&mut self) {
        drive(&mut self.pin, true);
        self.high = true;
    }

    fn set_low(&mut self) {
        drive(&mut self.pin, false);
        self.high = false;
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

/// `embedded-hal` SPI bus adapter
pub struct EhSpi<S>(pub S);

impl<S: spi::SpiBus<u8>> SpiBus for EhSpi<S> {
    type Error = S::Error;

    fn write(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write(data)?;
        // embedded-hal allows write() to return before the last byte leaves
        // the shift register; chip-select must not drop that early.
        self.0.flush()
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        self.0.flush()
    }
}

/// `embedded-hal` delay adapter
pub struct EhDelay<D>(pub D);

impl<D: DelayNs> DelayUs for EhDelay<D> {
    fn delay_us(&mut self, us: u32) {
        self.0.delay_us(us);
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use std::vec::Vec;

    #[derive(Default)]
    struct MockPin {
        level: Option<bool>,
        writes: u32,
    }

    impl digital::ErrorType for MockPin {
        type Error = Infallible;
    }

    impl digital::OutputPin for MockPin {
        fn set_low(&mut self) -> Result<(), Self::Error> {
            self.level = Some(false);
            self.writes += 1;
            Ok(())
        }

        fn set_high(&mut self) -> Result<(), Self::Error> {
            self.level = Some(true);
            self.writes += 1;
            Ok(())
        }
    }

    #[derive(Default)]
    struct MockBus {
        written: Vec<u8>,
        flushes: u32,
    }

    impl spi::ErrorType for MockBus {
        type Error = Infallible;
    }

    impl spi::SpiBus<u8> for MockBus {
        fn read(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            words.fill(0);
            Ok(())
        }

        fn write(&mut self, words: &[u8]) -> Result<(), Self::Error> {
            self.written.extend_from_slice(words);
            Ok(())
        }

        fn transfer(&mut self, read: &mut [u8], write: &[u8]) -> Result<(), Self::Error> {
            self.written.extend_from_slice(write);
            read.fill(0);
            Ok(())
        }

        fn transfer_in_place(&mut self, words: &mut [u8]) -> Result<(), Self::Error> {
            self.written.extend_from_slice(words);
            Ok(())
        }

        fn flush(&mut self) -> Result<(), Self::Error> {
            self.flushes += 1;
            Ok(())
        }
    }

    struct MockDelay {
        total_ns: u64,
    }

    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, ns: u32) {
            self.total_ns += u64::from(ns);
        }
    }

    #[test]
    fn test_output_initial_level() {
        let pin = EhOutput::new(MockPin::default(), false);
        assert!(pin.is_set_low());
        assert_eq!(pin.into_inner().level, Some(false));
    }

    #[test]
    fn test_output_toggle_tracks_shadow_level() {
        let mut pin = EhOutput::new(MockPin::default(), false);
        pin.toggle();
        assert!(pin.is_set_high());
        pin.toggle();
        assert!(pin.is_set_low());

        let inner = pin.into_inner();
        assert_eq!(inner.level, Some(false));
        assert_eq!(inner.writes, 3);
    }

    #[test]
    fn test_output_every_write_reaches_pin() {
        let mut pin = EhOutput::new(MockPin::default(), true);
        pin.set_low();
        pin.set_low();
        pin.set_high();
        assert!(pin.is_set_high());

        let inner = pin.into_inner();
        assert_eq!(inner.level, Some(true));
        assert_eq!(inner.writes, 4);
    }

    #[test]
    fn test_spi_write_flushes() {
        let mut bus = EhSpi(MockBus::default());
        bus.write(&[0x01, 0x02, 0x03]).unwrap();
        assert_eq!(bus.0.written, [0x01, 0x02, 0x03]);
        assert_eq!(bus.0.flushes, 1);
    }

    #[test]
    fn test_delay_us() {
        let mut delay = EhDelay(MockDelay { total_ns: 0 });
        delay.delay_us(12);
        assert!(delay.0.total_ns >= 12_000);
    }
}
