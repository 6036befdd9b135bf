//! Built-in 32×32 icons for the test screens
//!
//! Row-major, four bytes per row, most significant bit leftmost.

/// Icon edge length in pixels
pub const ICON_SIZE: usize = 32;

/// Bytes per icon
pub const ICON_LEN: usize = ICON_SIZE / 8 * ICON_SIZE;

/// Chess rook
#[rustfmt::skip]
pub static ROOK: [u8; ICON_LEN] = [
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x01, 0xE3, 0xC7, 0x80,
    0x01, 0xE3, 0xC7, 0x80,
    0x01, 0xE3, 0xC7, 0x80,
    0x01, 0xFF, 0xFF, 0x80,
    0x01, 0xFF, 0xFF, 0x80,
    0x00, 0xFF, 0xFF, 0x00,
    0x00, 0x7F, 0xFE, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x3F, 0xFC, 0x00,
    0x00, 0x7F, 0xFE, 0x00,
    0x00, 0xFF, 0xFF, 0x00,
    0x01, 0xFF, 0xFF, 0x80,
    0x01, 0xFF, 0xFF, 0x80,
    0x03, 0xFF, 0xFF, 0xC0,
    0x03, 0xFF, 0xFF, 0xC0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x07, 0xFF, 0xFF, 0xE0,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
    0x00, 0x00, 0x00, 0x00,
];

/// Frame with both diagonals, for checking placement and clipping
pub static CROSSED_FRAME: [u8; ICON_LEN] = crossed_frame();

const fn crossed_frame() -> [u8; ICON_LEN] {
    let mut out = [0u8; ICON_LEN];
    let mut y = 0;
    while y < ICON_SIZE {
        let mut x = 0;
        while x < ICON_SIZE {
            let edge = x == 0 || y == 0 || x == ICON_SIZE - 1 || y == ICON_SIZE - 1;
            if edge || x == y || x == ICON_SIZE - 1 - y {
                out[y * 4 + x / 8] |= 0x80 >> (x % 8);
            }
            x += 1;
        }
        y += 1;
    }
    out
}
