//! Monochrome image drawing

use super::{paint, BitOrder, Color};
use crate::framebuffer::{Framebuffer, HEIGHT, LINE_BYTES, WIDTH};

impl Framebuffer {
    /// Draw a 1bpp image with its top-left corner at `(x, y)`
    ///
    /// `img` is row-major with `ceil(width / 8)` bytes per row. Source ones
    /// are painted in `color`; source zeros leave the framebuffer untouched.
    /// Rows missing from a short slice are not drawn.
    #[allow(clippy::too_many_arguments)]
    pub fn draw_image(
        &mut self,
        img: &[u8],
        width: usize,
        height: usize,
        x: i32,
        y: i32,
        color: Color,
        order: BitOrder,
    ) {
        if width == 0 || height == 0 {
            return;
        }

        let x = i64::from(x);
        let y = i64::from(y);
        let right = x.saturating_add(i64::try_from(width).unwrap_or(i64::MAX));
        if x >= WIDTH as i64 || right <= 0 || y >= HEIGHT as i64 {
            return;
        }

        let stride = width.div_ceil(8);
        let tail_mask = match width % 8 {
            0 => 0xFF,
            bits => (1u8 << bits) - 1,
        };
        let aligned = x % 8 == 0 && width % 8 == 0;

        for (sy, src) in img.chunks_exact(stride).take(height).enumerate() {
            let dy = y + sy as i64;
            if dy < 0 {
                continue;
            }
            if dy >= HEIGHT as i64 {
                break;
            }
            let row = &mut self.rows[dy as usize];

            if aligned {
                blit_aligned(row, src, x, color, order);
            } else {
                blit_shifted(row, src, x, tail_mask, color, order);
            }
        }
    }
}

/// Whole-byte combine for byte-aligned images
fn blit_aligned(row: &mut [u8; LINE_BYTES], src: &[u8], x: i64, color: Color, order: BitOrder) {
    let first = x.div_euclid(8);
    for (i, &raw) in src.iter().enumerate() {
        let index = first + i as i64;
        if index < 0 {
            continue;
        }
        if index >= LINE_BYTES as i64 {
            break;
        }
        if raw != 0 {
            paint(&mut row[index as usize], order.to_panel(raw), color);
        }
    }
}

/// Split each source byte across two framebuffer bytes
fn blit_shifted(
    row: &mut [u8; LINE_BYTES],
    src: &[u8],
    x: i64,
    tail_mask: u8,
    color: Color,
    order: BitOrder,
) {
    let last = src.len() - 1;
    for (i, &raw) in src.iter().enumerate() {
        let mut bits = order.to_panel(raw);
        if i == last {
            bits &= tail_mask;
        }
        if bits == 0 {
            continue;
        }

        let px = x + i as i64 * 8;
        let index = px.div_euclid(8);
        let shift = px.rem_euclid(8) as u32;

        let low = bits << shift;
        let high = if shift == 0 { 0 } else { bits >> (8 - shift) };

        if (0..LINE_BYTES as i64).contains(&index) {
            paint(&mut row[index as usize], low, color);
        }
        if high != 0 && (0..LINE_BYTES as i64).contains(&(index + 1)) {
            paint(&mut row[index as usize + 1], high, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// 16×2 image, MSB-first: a left bar on row 0, a right bar on row 1
    const BARS: [u8; 4] = [0xF0, 0x00, 0x00, 0x0F];

    #[test]
    fn test_aligned_msb_first() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&BARS, 16, 2, 8, 0, Color::Set, BitOrder::MsbFirst);

        // Leftmost four pixels of byte 1 on row 0
        assert_eq!(fb.row(0).unwrap()[1], 0b1111_0000);
        assert_eq!(fb.row(0).unwrap()[2], 0xFF);
        // Rightmost four pixels of byte 2 on row 1
        assert_eq!(fb.row(1).unwrap()[2], 0b0000_1111);
        for x in 8..12 {
            assert_eq!(fb.pixel(x, 0), Some(false));
        }
        assert_eq!(fb.pixel(12, 0), Some(true));
    }

    #[test]
    fn test_lsb_first_copies_bytes() {
        let mut fb = Framebuffer::new();
        fb.fill(Color::Set);
        fb.draw_image(&[0x81], 8, 1, 0, 5, Color::Empty, BitOrder::LsbFirst);
        assert_eq!(fb.row(5).unwrap()[0], 0x81);
    }

    #[test]
    fn test_unaligned_split() {
        let mut fb = Framebuffer::new();
        // 8 dark pixels starting at x = 5
        fb.draw_image(&[0xFF], 8, 1, 5, 0, Color::Set, BitOrder::MsbFirst);
        for x in 0..20 {
            assert_eq!(fb.pixel(x, 0), Some(!(5..13).contains(&x)), "x={}", x);
        }
    }

    #[test]
    fn test_tail_mask() {
        let mut fb = Framebuffer::new();
        // Width 3 ignores the five trailing source bits
        fb.draw_image(&[0xFF], 3, 1, 2, 0, Color::Set, BitOrder::MsbFirst);
        for x in 0..10 {
            assert_eq!(fb.pixel(x, 0), Some(!(2..5).contains(&x)), "x={}", x);
        }
    }

    #[test]
    fn test_negative_origin_clips() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&[0xFF, 0xFF, 0xFF, 0xFF], 16, 2, -4, -1, Color::Set, BitOrder::MsbFirst);
        // Row 1 of the image lands on row 0, pixels 0..12 visible
        for x in 0..16 {
            assert_eq!(fb.pixel(x, 0), Some(x >= 12), "x={}", x);
        }
        assert!(fb.row(1).unwrap().iter().all(|&b| b == 0xFF));
    }

    #[test]
    fn test_right_edge_clips() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&[0xFF, 0xFF], 16, 1, 396, 0, Color::Set, BitOrder::MsbFirst);
        for x in 390..WIDTH {
            assert_eq!(fb.pixel(x, 0), Some(x < 396));
        }
    }

    #[test]
    fn test_short_slice_draws_present_rows() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&[0xFF], 8, 4, 0, 0, Color::Set, BitOrder::MsbFirst);
        assert_eq!(fb.row(0).unwrap()[0], 0x00);
        assert_eq!(fb.row(1).unwrap()[0], 0xFF);
    }

    #[test]
    fn test_empty_geometry_no_op() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&[0xFF], 0, 1, 0, 0, Color::Set, BitOrder::MsbFirst);
        fb.draw_image(&[0xFF], 8, 0, 0, 0, Color::Set, BitOrder::MsbFirst);
        fb.draw_image(&[], 8, 1, 0, 0, Color::Set, BitOrder::MsbFirst);
        assert_eq!(fb, Framebuffer::new());
    }

    #[test]
    fn test_huge_width_does_not_overflow() {
        let mut fb = Framebuffer::new();
        fb.draw_image(&[0xFF], i64::MAX as usize, 1, 1, 0, Color::Set, BitOrder::MsbFirst);
        fb.draw_image(&[0xFF], usize::MAX, 1, -8, 0, Color::Set, BitOrder::MsbFirst);
        assert_eq!(fb, Framebuffer::new());
    }

    proptest! {
        #[test]
        fn prop_draw_stays_inside_image_bounds(
            x in -64i32..464,
            y in -64i32..304,
            width in 1usize..48,
            height in 1usize..48,
            seed in any::<u8>(),
        ) {
            let stride = width.div_ceil(8);
            let img: [u8; 6 * 48] = core::array::from_fn(|i| (i as u8).wrapping_mul(31) ^ seed);
            let img = &img[..stride * height];

            let mut fb = Framebuffer::new();
            fb.draw_image(img, width, height, x, y, Color::Set, BitOrder::MsbFirst);

            for py in 0..HEIGHT {
                for px in 0..WIDTH {
                    let inside = (px as i32) >= x
                        && (px as i32) < x + width as i32
                        && (py as i32) >= y
                        && (py as i32) < y + height as i32;
                    if !inside {
                        prop_assert_eq!(fb.pixel(px, py), Some(true));
                    }
                }
            }
        }

        #[test]
        fn prop_set_then_empty_restores(
            x in -16i32..416,
            y in -16i32..256,
            width in 1usize..40,
            height in 1usize..20,
        ) {
            let stride = width.div_ceil(8);
            let img = [0xFFu8; 5 * 20];
            let img = &img[..stride * height];

            let mut fb = Framebuffer::new();
            fb.draw_image(img, width, height, x, y, Color::Set, BitOrder::MsbFirst);
            fb.draw_image(img, width, height, x, y, Color::Empty, BitOrder::MsbFirst);
            prop_assert_eq!(fb, Framebuffer::new());
        }

        #[test]
        fn prop_huge_width_never_panics(
            x in -64i32..464,
            y in -8i32..248,
            width in (usize::MAX / 2)..=usize::MAX,
            height in 1usize..4,
            order in prop_oneof![Just(BitOrder::MsbFirst), Just(BitOrder::LsbFirst)],
        ) {
            let img = [0xFFu8; 64];
            let mut fb = Framebuffer::new();
            fb.draw_image(&img, width, height, x, y, Color::Set, order);
            prop_assert_eq!(fb, Framebuffer::new());
        }
    }
}
