//! Bit-level drawing on the framebuffer
//!
//! Every operation clips to the screen and never fails. Coordinates are
//! signed so callers can place images and text partially off-screen.

mod blit;
mod image;
mod rect;
mod text;

use crate::framebuffer::Framebuffer;

/// Drawing color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Color {
    /// Activate pixels (dark)
    Set,
    /// Clear pixels (white)
    Empty,
}

/// Rectangle fill mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FillValue {
    Set,
    Empty,
    /// Toggle every pixel
    Invert,
}

impl From<Color> for FillValue {
    fn from(color: Color) -> Self {
        match color {
            Color::Set => FillValue::Set,
            Color::Empty => FillValue::Empty,
        }
    }
}

/// Bit order of source image bytes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BitOrder {
    /// Most significant bit is the leftmost pixel (fonts, most image tools)
    #[default]
    MsbFirst,
    /// Least significant bit is the leftmost pixel (panel order)
    LsbFirst,
}

impl BitOrder {
    /// Convert a source byte to panel order
    pub const fn to_panel(self, byte: u8) -> u8 {
        match self {
            BitOrder::MsbFirst => byte.reverse_bits(),
            BitOrder::LsbFirst => byte,
        }
    }
}

/// Raster operation for [`Framebuffer::bitblt24`]
///
/// Operations act on the raw framebuffer bits, where 1 is white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum BlitOp {
    /// Set the bits of source ones
    Or,
    /// Clear the bits of source zeros
    AndNot,
    /// Toggle the bits of source ones
    Xor,
}

/// Largest checkerboard square accepted by [`Framebuffer::test_pattern`]
pub const MAX_PATTERN_SQUARE: usize = 32;

/// Apply `mask` to a byte in the given color
#[inline]
pub(crate) fn paint(byte: &mut u8, mask: u8, color: Color) {
    match color {
        Color::Set => *byte &= !mask,
        Color::Empty => *byte |= mask,
    }
}

impl Framebuffer {
    /// Complement every pixel
    pub fn invert(&mut self) {
        for row in self.rows.iter_mut() {
            for byte in row.iter_mut() {
                *byte = !*byte;
            }
        }
    }

    /// Fill the whole screen with one color
    pub fn fill(&mut self, color: Color) {
        match color {
            Color::Set => self.fill_bytes(0x00),
            Color::Empty => self.fill_bytes(0xFF),
        }
    }

    /// Clear the screen to white
    pub fn clear(&mut self) {
        self.fill(Color::Empty);
    }

    /// Draw a checkerboard with squares of `square` pixels
    ///
    /// The bit of pixel `(x, y)` is set when `x / n + y / n` is odd. `square`
    /// is clamped to `1..=32`.
    pub fn test_pattern(&mut self, square: usize) {
        let n = square.clamp(1, MAX_PATTERN_SQUARE);
        for (y, row) in self.rows.iter_mut().enumerate() {
            let band = y / n;
            for (i, byte) in row.iter_mut().enumerate() {
                let mut value = 0u8;
                for bit in 0..8 {
                    let x = i * 8 + bit;
                    if (x / n + band) % 2 == 1 {
                        value |= 1 << bit;
                    }
                }
                *byte = value;
            }
        }
    }
}
