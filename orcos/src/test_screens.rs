//! Diagnostic test screens
//!
//! | index | content |
//! |---|---|
//! | 0-2 | checkerboards with 8, 16 and 32 pixel squares |
//! | 3 | 32 pixel checkerboard with a rook on every square |
//! | 4 | icon placement and clipping |
//! | 5 | live clock, redrawn on every wake tick |
//! | 6 | font specimen |
//! | 7 | inverted font specimen |
//! | 8 | stripes sent line by line |
//!
//! Indices wrap modulo the screen count.

use core::fmt::Write;

use heapless::String;
use orcos_core::screen::{LIVE_CLOCK_SCREEN, TEST_SCREEN_COUNT};
use orcos_core::ScreenTag;
use orcos_display::framebuffer::{HEIGHT, WIDTH};
use orcos_display::{protocol, Color, DisplayError, FontId};
use orcos_hal::{DelayUs, OutputPin, RealTimeClock, SpiBus, WakeSource};

use crate::display::Display;
use crate::images::{CROSSED_FRAME, ICON_SIZE, ROOK};

/// Icon positions on the placement screen: aligned, unaligned, then
/// clipped at each edge
const PLACEMENTS: [(i32, i32); 7] = [
    (8, 8),
    (45, 10),
    (99, 13),
    (-16, 60),
    (384, 60),
    (200, -16),
    (300, 224),
];

/// Top-left corners of the 2×2 icon blocks on the placement screen
const BLOCKS: [(i32, i32); 2] = [(130, 110), (261, 150)];

const SPECIMEN: [&str; 3] = [
    "0123456789 +-*/=.,",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "abcdefghijklmnopqrstuvwxyz",
];

const STRIPE_HEIGHT: usize = 8;

const CLOCK_TIME_Y: i32 = 80;
const CLOCK_DATE_Y: i32 = 130;

impl<'a, S, C, D, B, E, X, W, R, const CAP: usize> Display<'a, S, C, D, B, E, X, W, R, CAP>
where
    S: SpiBus,
    C: OutputPin,
    D: DelayUs + Clone,
    B: OutputPin,
    E: OutputPin,
    X: OutputPin,
    W: WakeSource,
    R: RealTimeClock,
{
    /// Draw test screen `index` and send it to the panel
    pub fn show_test_screen(&mut self, index: u8) -> Result<(), DisplayError> {
        let index = index % TEST_SCREEN_COUNT;
        info!("test screen {}", index);
        self.set_screen(ScreenTag::for_test_screen(index));

        match index {
            0 => self.test_pattern(8),
            1 => self.test_pattern(16),
            2 => self.test_pattern(32),
            3 => self.draw_rook_board(),
            4 => self.draw_placement_test(),
            LIVE_CLOCK_SCREEN => self.render_live_clock(),
            6 => self.draw_font_specimen(),
            7 => {
                self.draw_font_specimen();
                self.invert();
            }
            _ => return self.send_stripes(),
        }
        self.refresh()
    }

    /// Redraw the clock screen from the real-time clock
    pub(crate) fn render_live_clock(&mut self) {
        let (time, date) = self.rtc.read();
        self.clear_buffer();

        let mut text: String<16> = String::new();
        if write!(text, "{:02}:{:02}:{:02}", time.hour, time.min, time.sec).is_ok() {
            self.draw_centered(&text, FontId::Huge24x40, CLOCK_TIME_Y);
        }

        text.clear();
        if write!(text, "{:02}/{:02}/{:04}", date.day, date.month, date.year).is_ok() {
            self.draw_centered(&text, FontId::Medium12x20, CLOCK_DATE_Y);
        }
    }

    fn draw_centered(&mut self, text: &str, id: FontId, y: i32) {
        let width = text.len() * id.font().width();
        let x = WIDTH.saturating_sub(width) / 2;
        self.framebuffer_mut()
            .draw_string(text, id.font(), x as i32, y, Color::Set);
    }

    fn draw_rook_board(&mut self) {
        self.test_pattern(ICON_SIZE);
        for row in 0..HEIGHT.div_ceil(ICON_SIZE) {
            for col in 0..WIDTH.div_ceil(ICON_SIZE) {
                // Dark rooks on white squares, white rooks on dark ones
                let color = if (row + col) % 2 == 1 {
                    Color::Set
                } else {
                    Color::Empty
                };
                let (x, y) = ((col * ICON_SIZE) as i32, (row * ICON_SIZE) as i32);
                self.draw_image(&ROOK, ICON_SIZE, ICON_SIZE, x, y, color);
            }
        }
    }

    fn draw_placement_test(&mut self) {
        self.clear_buffer();
        for (x, y) in PLACEMENTS {
            self.draw_image(&CROSSED_FRAME, ICON_SIZE, ICON_SIZE, x, y, Color::Set);
        }

        let size = ICON_SIZE as i32;
        for (x, y) in BLOCKS {
            for (dx, dy) in [(0, 0), (size, 0), (0, size), (size, size)] {
                self.draw_image(&CROSSED_FRAME, ICON_SIZE, ICON_SIZE, x + dx, y + dy, Color::Set);
            }
        }
    }

    fn draw_font_specimen(&mut self) {
        self.clear_buffer();
        let mut y = 4;
        for id in FontId::ALL {
            let font = id.font();
            let lines = match font.height() {
                0..=8 => 3,
                9..=30 => 2,
                _ => 1,
            };
            for line in SPECIMEN.iter().take(lines) {
                self.framebuffer_mut()
                    .draw_string(line, font, 8, y, Color::Set);
                y += font.height() as i32 + 2;
            }
        }
    }

    /// Stripes sent one line at a time, without a full refresh
    ///
    /// The framebuffer is updated to match what the panel shows.
    fn send_stripes(&mut self) -> Result<(), DisplayError> {
        for y in 0..HEIGHT {
            let value = if (y / STRIPE_HEIGHT) % 2 == 0 { 0x00 } else { 0xFF };
            let Some(row) = self.framebuffer_mut().row_mut(y) else {
                break;
            };
            row.fill(value);
            let mut frame = protocol::line_frame(y, row);
            self.write_line(&mut frame)?;
        }
        Ok(())
    }
}
