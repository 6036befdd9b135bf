//! Recording peripherals for facade tests

extern crate std;

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::vec::Vec;

use orcos_core::{PowerRails, PowerState};
use orcos_hal::{Date, DelayUs, OutputPin, RealTimeClock, SpiBus, Time, WakeError, WakeSource};

use crate::config::Config;
use crate::display::Display;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Ev {
    Pin(&'static str, bool),
    Delay(u32),
    Write(Vec<u8>),
    Arm(u32),
    Disarm,
}

#[derive(Default)]
struct Shared {
    log: RefCell<Vec<Ev>>,
    spi_fail: Cell<bool>,
    /// Seconds since midnight
    clock: Cell<u32>,
}

/// Handle for inspecting and steering the mocks
#[derive(Clone)]
pub struct Recorder(Rc<Shared>);

impl Recorder {
    pub fn writes(&self) -> Vec<Vec<u8>> {
        self.0
            .log
            .borrow()
            .iter()
            .filter_map(|ev| match ev {
                Ev::Write(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn saw(&self, ev: &Ev) -> bool {
        self.0.log.borrow().contains(ev)
    }

    pub fn reset(&self) {
        self.0.log.borrow_mut().clear();
    }

    pub fn fail_spi(&self, fail: bool) {
        self.0.spi_fail.set(fail);
    }

    pub fn set_clock(&self, hour: u32, min: u32, sec: u32) {
        self.0.clock.set(hour * 3600 + min * 60 + sec);
    }

    pub fn advance_clock(&self, secs: u32) {
        self.0.clock.set(self.0.clock.get() + secs);
    }

    fn push(&self, ev: Ev) {
        self.0.log.borrow_mut().push(ev);
    }
}

pub struct MockSpi(Recorder);

impl SpiBus for MockSpi {
    type Error = ();

    fn write(&mut self, data: &[u8]) -> Result<(), ()> {
        self.0.push(Ev::Write(data.to_vec()));
        if self.0 .0.spi_fail.get() {
            Err(())
        } else {
            Ok(())
        }
    }
}

pub struct MockPin {
    name: &'static str,
    high: bool,
    recorder: Recorder,
}

impl OutputPin for MockPin {
    fn set_high(&mut self) {
        self.high = true;
        self.recorder.push(Ev::Pin(self.name, true));
    }

    fn set_low(&mut self) {
        self.high = false;
        self.recorder.push(Ev::Pin(self.name, false));
    }

    fn is_set_high(&self) -> bool {
        self.high
    }
}

#[derive(Clone)]
pub struct MockDelay(Recorder);

impl DelayUs for MockDelay {
    fn delay_us(&mut self, us: u32) {
        self.0.push(Ev::Delay(us));
    }
}

pub struct MockWake {
    armed: bool,
    recorder: Recorder,
}

impl WakeSource for MockWake {
    fn arm(&mut self, period_ms: u32) -> Result<(), WakeError> {
        self.armed = true;
        self.recorder.push(Ev::Arm(period_ms));
        Ok(())
    }

    fn disarm(&mut self) {
        self.armed = false;
        self.recorder.push(Ev::Disarm);
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

pub struct MockRtc(Recorder);

impl RealTimeClock for MockRtc {
    fn read(&mut self) -> (Time, Date) {
        let secs = self.0 .0.clock.get() % 86_400;
        let time = Time {
            hour: (secs / 3600) as u8,
            min: (secs / 60 % 60) as u8,
            sec: (secs % 60) as u8,
        };
        let date = Date {
            year: 2025,
            month: 3,
            day: 14,
        };
        (time, date)
    }
}

pub type MockDisplay<'a> =
    Display<'a, MockSpi, MockPin, MockDelay, MockPin, MockPin, MockPin, MockWake, MockRtc>;

fn pin(name: &'static str, recorder: &Recorder) -> MockPin {
    MockPin {
        name,
        high: false,
        recorder: recorder.clone(),
    }
}

/// Unpowered display on recording mocks, with an empty log
pub fn display(state: &PowerState) -> (MockDisplay<'_>, Recorder) {
    let recorder = Recorder(Rc::new(Shared::default()));
    recorder.set_clock(12, 34, 56);

    let rails = PowerRails::new(pin("boost", &recorder), pin("disp", &recorder), pin("extcomin", &recorder));
    let display = Display::new(
        state,
        MockSpi(recorder.clone()),
        pin("cs", &recorder),
        MockDelay(recorder.clone()),
        rails,
        MockWake {
            armed: false,
            recorder: recorder.clone(),
        },
        MockRtc(recorder.clone()),
        Config::default(),
    );
    recorder.reset();
    (display, recorder)
}
