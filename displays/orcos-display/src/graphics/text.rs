//! Text rendering

use super::{BitOrder, Color};
use crate::font::Font;
use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

/// Round `x` up to the next byte boundary
fn align_start(x: i32) -> i32 {
    x.saturating_add(7).div_euclid(8) * 8
}

impl Framebuffer {
    /// Draw `text` starting at `(x, y)` and return the cursor after it
    ///
    /// The start column is rounded up to a multiple of 8. Each byte of the
    /// string is one glyph; drawing stops at the right edge of the screen.
    pub fn draw_string(&mut self, text: &str, font: &Font, x: i32, y: i32, color: Color) -> i32 {
        let mut cursor = align_start(x);
        if y >= HEIGHT as i32 {
            return cursor;
        }

        for code in text.bytes() {
            if cursor >= WIDTH as i32 {
                break;
            }
            cursor = self.draw_glyph(code, font, cursor, y, color);
        }
        cursor
    }

    /// Draw a single character and return the cursor after it
    pub fn draw_char(&mut self, code: u8, font: &Font, x: i32, y: i32, color: Color) -> i32 {
        let cursor = align_start(x);
        if y >= HEIGHT as i32 || cursor >= WIDTH as i32 {
            return cursor;
        }
        self.draw_glyph(code, font, cursor, y, color)
    }

    fn draw_glyph(&mut self, code: u8, font: &Font, x: i32, y: i32, color: Color) -> i32 {
        let glyph = font.glyph(code);
        self.draw_image(glyph, font.width(), font.height(), x, y, color, BitOrder::MsbFirst);
        x.saturating_add(font.width() as i32)
    }
}
