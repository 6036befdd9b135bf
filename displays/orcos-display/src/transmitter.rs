//! Refresh transmitter
//!
//! Serializes the framebuffer into the panel line protocol and drives the
//! software chip-select. The panel latches data while CS is *high*.

use heapless::Vec;
use orcos_core::{LinkTiming, PanelLink};
use orcos_hal::{DelayUs, OutputPin, SpiBus};

use crate::error::DisplayError;
use crate::framebuffer::{Framebuffer, HEIGHT, LINE_BYTES};
use crate::protocol::{self, cmd, CHUNK_LINE_LEN, LINE_FRAME_LEN, TRAILER};

/// Chunk buffer capacity for `lines` lines per transfer
pub const fn chunk_buffer_len(lines: usize) -> usize {
    1 + lines * CHUNK_LINE_LEN + 1
}

/// Chunk capacity sending the whole frame in one transfer
pub const FULL_FRAME_CHUNK: usize = chunk_buffer_len(HEIGHT);

/// Transmitter refreshing the whole panel in a single transfer
pub type FullFrameTransmitter<S, C, D> = Transmitter<S, C, D, FULL_FRAME_CHUNK>;

/// Chip-select framing around the SPI bus
struct Link<S, C, D> {
    spi: S,
    cs: C,
    delay: D,
    timing: LinkTiming,
}

impl<S: SpiBus, C: OutputPin, D: DelayUs> Link<S, C, D> {
    fn transmit(&mut self, data: &[u8]) -> Result<(), DisplayError> {
        self.cs.set_high();
        self.delay.delay_us(self.timing.setup_us);

        let result = self.spi.write(data).map_err(|_| {
            warn!("panel write of {} bytes failed", data.len());
            DisplayError::Communication
        });

        self.delay.delay_us(self.timing.hold_us);
        self.cs.set_low();
        self.delay.delay_us(self.timing.release_us);
        result
    }
}

/// Sharp Memory LCD refresh transmitter
///
/// `CAP` is the chunk buffer size in bytes, see [`chunk_buffer_len`]. A full
/// refresh is sent as `HEIGHT / lines_per_chunk` transfers, the last one
/// possibly shorter.
pub struct Transmitter<S, C, D, const CAP: usize> {
    link: Link<S, C, D>,
    chunk: Vec<u8, CAP>,
}

impl<S, C, D, const CAP: usize> Transmitter<S, C, D, CAP>
where
    S: SpiBus,
    C: OutputPin,
    D: DelayUs,
{
    const LINES_PER_CHUNK: usize = {
        assert!(CAP >= chunk_buffer_len(1), "chunk buffer cannot hold a line");
        (CAP - 2) / CHUNK_LINE_LEN
    };

    /// Create a transmitter; chip-select is driven low
    pub fn new(spi: S, mut cs: C, delay: D, timing: LinkTiming) -> Self {
        cs.set_low();
        Self {
            link: Link {
                spi,
                cs,
                delay,
                timing,
            },
            chunk: Vec::new(),
        }
    }

    /// Lines sent per chip-select window
    pub const fn lines_per_chunk() -> usize {
        Self::LINES_PER_CHUNK
    }

    /// Send the whole framebuffer
    ///
    /// A lone no-op transfer goes first to bring the panel's serial
    /// interface into a known state.
    pub fn refresh(&mut self, fb: &Framebuffer) -> Result<(), DisplayError> {
        trace!("refresh, {} lines per chunk", Self::LINES_PER_CHUNK);
        self.nop()?;

        for (index, lines) in fb.rows().chunks(Self::LINES_PER_CHUNK).enumerate() {
            let first = index * Self::LINES_PER_CHUNK;
            self.fill_chunk(first, lines)?;
            self.link.transmit(&self.chunk)?;
        }
        Ok(())
    }

    /// Send one line prepared by the caller
    ///
    /// The caller fills the line number and the pixel data; the command and
    /// trailer bytes are written here.
    pub fn write_line(&mut self, frame: &mut [u8; LINE_FRAME_LEN]) -> Result<(), DisplayError> {
        frame[0] = cmd::WRITE_LINE;
        frame[LINE_FRAME_LEN - 2] = TRAILER;
        frame[LINE_FRAME_LEN - 1] = TRAILER;
        self.link.transmit(frame)
    }

    /// Clear the panel memory to white
    pub fn clear_display(&mut self) -> Result<(), DisplayError> {
        debug!("panel clear");
        self.link.transmit(&protocol::CLEAR_FRAME)
    }

    /// Send the no-op command
    pub fn nop(&mut self) -> Result<(), DisplayError> {
        self.link.transmit(&[cmd::NOP])
    }

    /// Release the bus, chip-select and delay
    pub fn release(self) -> (S, C, D) {
        (self.link.spi, self.link.cs, self.link.delay)
    }

    fn fill_chunk(&mut self, first: usize, lines: &[[u8; LINE_BYTES]]) -> Result<(), DisplayError> {
        self.chunk.clear();
        self.push(cmd::WRITE_LINE)?;
        for (offset, data) in lines.iter().enumerate() {
            self.push(protocol::line_address(first + offset))?;
            self.chunk
                .extend_from_slice(data)
                .map_err(|_| DisplayError::BufferOverflow)?;
            self.push(TRAILER)?;
        }
        self.push(TRAILER)
    }

    fn push(&mut self, byte: u8) -> Result<(), DisplayError> {
        self.chunk
            .push(byte)
            .map_err(|_| DisplayError::BufferOverflow)
    }
}

impl<S, C, D, const CAP: usize> PanelLink for Transmitter<S, C, D, CAP>
where
    S: SpiBus,
    C: OutputPin,
    D: DelayUs,
{
    type Error = DisplayError;

    fn clear_panel(&mut self) -> Result<(), DisplayError> {
        self.clear_display()
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;
    use crate::graphics::Color;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::vec::Vec as StdVec;

    #[derive(Debug, Clone, PartialEq, Eq)]
    enum Ev {
        Cs(bool),
        Delay(u32),
        Write(StdVec<u8>),
    }

    type Log = Rc<RefCell<StdVec<Ev>>>;

    struct MockSpi {
        log: Log,
        fail: bool,
    }

    impl SpiBus for MockSpi {
        type Error = ();

        fn write(&mut self, data: &[u8]) -> Result<(), ()> {
            self.log.borrow_mut().push(Ev::Write(data.to_vec()));
            if self.fail {
                Err(())
            } else {
                Ok(())
            }
        }
    }

    struct MockCs {
        log: Log,
        high: bool,
    }

    impl OutputPin for MockCs {
        fn set_high(&mut self) {
            self.high = true;
            self.log.borrow_mut().push(Ev::Cs(true));
        }

        fn set_low(&mut self) {
            self.high = false;
            self.log.borrow_mut().push(Ev::Cs(false));
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    struct MockDelay(Log);

    impl DelayUs for MockDelay {
        fn delay_us(&mut self, us: u32) {
            self.0.borrow_mut().push(Ev::Delay(us));
        }
    }

    fn transmitter<const CAP: usize>(fail: bool) -> (Transmitter<MockSpi, MockCs, MockDelay, CAP>, Log) {
        let log: Log = Rc::new(RefCell::new(StdVec::new()));
        let tx = Transmitter::new(
            MockSpi {
                log: log.clone(),
                fail,
            },
            MockCs {
                log: log.clone(),
                high: true,
            },
            MockDelay(log.clone()),
            LinkTiming::DEFAULT,
        );
        log.borrow_mut().clear();
        (tx, log)
    }

    fn writes(log: &Log) -> StdVec<StdVec<u8>> {
        log.borrow()
            .iter()
            .filter_map(|ev| match ev {
                Ev::Write(data) => Some(data.clone()),
                _ => None,
            })
            .collect()
    }

    fn sample_frame() -> Framebuffer {
        let mut fb = Framebuffer::new();
        fb.test_pattern(8);
        fb.fill_rect(13, 100, 77, 9, crate::FillValue::Invert);
        fb
    }

    #[test]
    fn test_chunk_sizes() {
        assert_eq!(chunk_buffer_len(1), 54);
        assert_eq!(FULL_FRAME_CHUNK, 1 + 240 * 52 + 1);
        assert_eq!(FullFrameTransmitter::<MockSpi, MockCs, MockDelay>::lines_per_chunk(), 240);
        assert_eq!(
            Transmitter::<MockSpi, MockCs, MockDelay, { chunk_buffer_len(7) }>::lines_per_chunk(),
            7
        );
    }

    #[test]
    fn test_transfer_framing() {
        let (mut tx, log) = transmitter::<{ chunk_buffer_len(1) }>(false);
        tx.nop().unwrap();
        assert_eq!(
            *log.borrow(),
            [
                Ev::Cs(true),
                Ev::Delay(12),
                Ev::Write(std::vec![0x00]),
                Ev::Delay(4),
                Ev::Cs(false),
                Ev::Delay(4),
            ]
        );
    }

    #[test]
    fn test_single_chunk_matches_line_frames() {
        let fb = sample_frame();
        let (mut tx, log) = transmitter::<FULL_FRAME_CHUNK>(false);
        tx.refresh(&fb).unwrap();

        let mut expected = std::vec![cmd::WRITE_LINE];
        for (y, row) in fb.rows().iter().enumerate() {
            let frame = protocol::line_frame(y, row);
            expected.extend_from_slice(&frame[1..LINE_FRAME_LEN - 1]);
        }
        expected.push(TRAILER);

        assert_eq!(writes(&log), [std::vec![cmd::NOP], expected]);
    }

    #[test]
    fn test_partial_last_chunk() {
        let fb = sample_frame();
        let (mut tx, log) = transmitter::<{ chunk_buffer_len(7) }>(false);
        tx.refresh(&fb).unwrap();

        let sent = writes(&log);
        // No-op, 34 full chunks and one chunk of 2 lines
        assert_eq!(sent.len(), 1 + 35);
        assert!(sent[1..35].iter().all(|w| w.len() == chunk_buffer_len(7)));
        let last = &sent[35];
        assert_eq!(last.len(), chunk_buffer_len(2));
        assert_eq!(last[1], 239);
        assert_eq!(&last[2..52], &fb.row(238).unwrap()[..]);
        assert_eq!(last[1 + CHUNK_LINE_LEN], 240);

        // Every chunk carries consecutive line numbers
        let mut line = 1u8;
        for chunk in &sent[1..] {
            assert_eq!(chunk[0], cmd::WRITE_LINE);
            for entry in chunk[1..chunk.len() - 1].chunks(CHUNK_LINE_LEN) {
                assert_eq!(entry[0], line);
                assert_eq!(entry[CHUNK_LINE_LEN - 1], TRAILER);
                line = line.wrapping_add(1);
            }
        }
        assert_eq!(line, 241);
    }

    #[test]
    fn test_write_line_sets_command_and_trailer() {
        let (mut tx, log) = transmitter::<{ chunk_buffer_len(1) }>(false);
        let mut frame = [0xEE; LINE_FRAME_LEN];
        frame[1] = 42;
        tx.write_line(&mut frame).unwrap();

        let sent = writes(&log);
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0][0], cmd::WRITE_LINE);
        assert_eq!(sent[0][1], 42);
        assert_eq!(&sent[0][52..], &[0x00, 0x00]);
    }

    #[test]
    fn test_clear_command() {
        let (mut tx, log) = transmitter::<{ chunk_buffer_len(1) }>(false);
        tx.clear_panel().unwrap();
        assert_eq!(writes(&log), [std::vec![0x04, 0x00]]);
    }

    #[test]
    fn test_write_failure_releases_cs() {
        let (mut tx, log) = transmitter::<FULL_FRAME_CHUNK>(true);
        let mut fb = Framebuffer::new();
        fb.fill(Color::Set);
        assert_eq!(tx.refresh(&fb), Err(DisplayError::Communication));

        // Stopped after the failed no-op, chip-select back low
        assert_eq!(writes(&log).len(), 1);
        let (_, cs, _) = tx.release();
        assert!(cs.is_set_low());
    }
}
