//! LS027B7DH01 line protocol
//!
//! The panel is written one or more lines per chip-select window:
//!
//! ```text
//! [cmd:1][line#:1][data:50][trailer:2]                        single line
//! [cmd:1] ([line#:1][data:50][trailer:1])* [chunk_trailer:1]  multi line
//! ```
//!
//! Line numbers are 1-based. Bytes go out LSB first, so framebuffer rows
//! are sent without any bit reordering.

use crate::framebuffer::LINE_BYTES;

/// Panel commands
pub mod cmd {
    /// No operation (display mode)
    pub const NOP: u8 = 0x00;
    /// Write one or more lines
    pub const WRITE_LINE: u8 = 0x01;
    /// Clear all pixels to white
    pub const CLEAR: u8 = 0x04;
}

/// Dummy byte closing a line or a transfer
pub const TRAILER: u8 = 0x00;

/// Length of a single-line transfer
pub const LINE_FRAME_LEN: usize = 1 + 1 + LINE_BYTES + 2;

/// Length of one line inside a multi-line transfer
pub const CHUNK_LINE_LEN: usize = 1 + LINE_BYTES + 1;

/// Clear-memory transfer
pub const CLEAR_FRAME: [u8; 2] = [cmd::CLEAR, TRAILER];

/// Offset of the line number in a single-line transfer
pub const LINE_ADDRESS_OFFSET: usize = 1;

/// Offset of the pixel data in a single-line transfer
pub const LINE_DATA_OFFSET: usize = 2;

/// Panel address of framebuffer row `y`
pub const fn line_address(y: usize) -> u8 {
    (y + 1) as u8
}

/// Build a complete single-line transfer for row `y`
pub fn line_frame(y: usize, data: &[u8; LINE_BYTES]) -> [u8; LINE_FRAME_LEN] {
    let mut frame = [TRAILER; LINE_FRAME_LEN];
    frame[0] = cmd::WRITE_LINE;
    frame[LINE_ADDRESS_OFFSET] = line_address(y);
    frame[LINE_DATA_OFFSET..LINE_DATA_OFFSET + LINE_BYTES].copy_from_slice(data);
    frame
}
