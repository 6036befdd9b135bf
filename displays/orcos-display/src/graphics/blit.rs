//! Short horizontal bit runs

use super::BlitOp;
use crate::framebuffer::{Framebuffer, WIDTH};

/// Longest run accepted by [`Framebuffer::bitblt24`]
pub const MAX_BLIT_BITS: u8 = 24;

impl Framebuffer {
    /// Combine a run of up to 24 source bits into row `y` starting at `x`
    ///
    /// Source bit `dx - 1 - i` lands on pixel `x + i`, so the value reads
    /// left to right like a binary literal. `Or` sets the bits of source
    /// ones, `AndNot` clears the bits of source zeros, `Xor` toggles the
    /// bits of source ones.
    ///
    /// With `fill`, `Or` and `AndNot` write every bit of the run: the source
    /// becomes all zeros for `Or` (the run is cleared) and all ones for
    /// `AndNot` (the run is set). `fill` has no effect on `Xor`.
    ///
    /// Runs longer than 24 bits and empty runs are ignored.
    pub fn bitblt24(&mut self, x: i32, dx: u8, y: i32, val: u32, op: BlitOp, fill: bool) {
        if dx == 0 || dx > MAX_BLIT_BITS {
            return;
        }
        let Some(row) = usize::try_from(y).ok().and_then(|y| self.rows.get_mut(y)) else {
            return;
        };

        let src = match (op, fill) {
            (BlitOp::Or, true) => 0,
            (BlitOp::AndNot, true) => u32::MAX,
            _ => val,
        };
        for i in 0..dx {
            let px = i64::from(x) + i64::from(i);
            if px < 0 {
                continue;
            }
            if px >= WIDTH as i64 {
                break;
            }

            let bit = (src >> (dx - 1 - i)) & 1 == 1;
            let px = px as usize;
            let byte = &mut row[px / 8];
            let mask = 1u8 << (px % 8);
            match op {
                BlitOp::Or if bit => *byte |= mask,
                BlitOp::Or if fill => *byte &= !mask,
                BlitOp::AndNot if !bit => *byte &= !mask,
                BlitOp::AndNot if fill => *byte |= mask,
                BlitOp::Xor if bit => *byte ^= mask,
                _ => {}
            }
        }
    }
}
