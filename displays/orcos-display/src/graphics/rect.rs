//! Filled rectangles

use super::FillValue;
use crate::framebuffer::{Framebuffer, HEIGHT, WIDTH};

fn apply(byte: &mut u8, mask: u8, value: FillValue) {
    match value {
        FillValue::Set => *byte &= !mask,
        FillValue::Empty => *byte |= mask,
        FillValue::Invert => *byte ^= mask,
    }
}

/// Clip the half-open span `[start, start + len)` to `[0, limit)`
fn clip_span(start: i32, len: usize, limit: usize) -> Option<(usize, usize)> {
    let start = i64::from(start);
    let len = i64::try_from(len).unwrap_or(i64::MAX);
    let end = start.saturating_add(len).min(limit as i64);
    let start = start.max(0);
    (start < end).then_some((start as usize, end as usize))
}

impl Framebuffer {
    /// Fill a `width` × `height` rectangle at `(x, y)`, clipped to the screen
    pub fn fill_rect(&mut self, x: i32, y: i32, width: usize, height: usize, value: FillValue) {
        let Some((x0, x1)) = clip_span(x, width, WIDTH) else {
            return;
        };
        let Some((y0, y1)) = clip_span(y, height, HEIGHT) else {
            return;
        };

        let first = x0 / 8;
        let last = (x1 - 1) / 8;
        let first_mask = 0xFFu8 << (x0 % 8);
        let last_mask = 0xFFu8 >> (7 - (x1 - 1) % 8);

        for row in &mut self.rows[y0..y1] {
            if first == last {
                apply(&mut row[first], first_mask & last_mask, value);
                continue;
            }
            apply(&mut row[first], first_mask, value);
            for byte in &mut row[first + 1..last] {
                apply(byte, 0xFF, value);
            }
            apply(&mut row[last], last_mask, value);
        }
    }
}
