//! Framebuffer store

use core::fmt;

/// Panel width in pixels
pub const WIDTH: usize = 400;

/// Panel height in pixels
pub const HEIGHT: usize = 240;

/// Bytes per scanline
pub const LINE_BYTES: usize = WIDTH / 8;

/// Total framebuffer size in bytes
pub const FRAME_BYTES: usize = LINE_BYTES * HEIGHT;

const _: () = assert!(WIDTH % 8 == 0);
const _: () = assert!(FRAME_BYTES == 12_000);

/// 400×240 1bpp pixel store
///
/// Rows are stored top to bottom in panel byte order (see the crate docs).
/// A new framebuffer is white.
#[derive(Clone, PartialEq, Eq)]
pub struct Framebuffer {
    pub(crate) rows: [[u8; LINE_BYTES]; HEIGHT],
}

impl Default for Framebuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Framebuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Framebuffer")
            .field("width", &WIDTH)
            .field("height", &HEIGHT)
            .finish_non_exhaustive()
    }
}

impl Framebuffer {
    /// Create a white framebuffer
    pub const fn new() -> Self {
        Self {
            rows: [[0xFF; LINE_BYTES]; HEIGHT],
        }
    }

    /// Scanline `y`, if on screen
    pub fn row(&self, y: usize) -> Option<&[u8; LINE_BYTES]> {
        self.rows.get(y)
    }

    /// Mutable scanline `y`, if on screen
    pub fn row_mut(&mut self, y: usize) -> Option<&mut [u8; LINE_BYTES]> {
        self.rows.get_mut(y)
    }

    /// All scanlines, top to bottom
    pub fn rows(&self) -> &[[u8; LINE_BYTES]; HEIGHT] {
        &self.rows
    }

    /// The whole store as one byte slice
    pub fn as_bytes(&self) -> &[u8] {
        self.rows.as_flattened()
    }

    /// Raw bit of pixel `(x, y)`; `false` is dark
    pub fn pixel(&self, x: usize, y: usize) -> Option<bool> {
        if x >= WIDTH {
            return None;
        }
        let row = self.rows.get(y)?;
        Some(row[x / 8] & (1 << (x % 8)) != 0)
    }

    /// Write the raw bit of pixel `(x, y)`; off-screen writes are dropped
    pub fn set_pixel(&mut self, x: usize, y: usize, bit: bool) {
        if x >= WIDTH {
            return;
        }
        if let Some(row) = self.rows.get_mut(y) {
            let mask = 1 << (x % 8);
            if bit {
                row[x / 8] |= mask;
            } else {
                row[x / 8] &= !mask;
            }
        }
    }

    /// Set every byte of the store to `byte`
    pub fn fill_bytes(&mut self, byte: u8) {
        for row in self.rows.iter_mut() {
            row.fill(byte);
        }
    }
}
