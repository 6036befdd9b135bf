//! Fixed-width bitmap fonts
//!
//! All faces cover printable ASCII. Every face shares the calculator's cell
//! geometry and font ids, but the glyphs are nearest-neighbour resamplings
//! of the 6×8 base face built at compile time, not hand-drawn faces.

mod glyphs;

pub use glyphs::{FIRST_CHAR, GLYPHS_6X8, GLYPH_COUNT, LAST_CHAR};

/// Character drawn for codes outside the table
pub const REPLACEMENT_CHAR: u8 = b'?';

const BASE_WIDTH: usize = 6;
const BASE_HEIGHT: usize = 8;

/// Immutable glyph table
///
/// Glyphs are row-major, most significant bit leftmost, with
/// `ceil(width / 8)` bytes per row.
#[derive(Debug)]
pub struct Font {
    width: u8,
    height: u8,
    first: u8,
    last: u8,
    data: &'static [u8],
}

impl Font {
    /// Glyph cell width in pixels
    pub const fn width(&self) -> usize {
        self.width as usize
    }

    /// Glyph cell height in pixels
    pub const fn height(&self) -> usize {
        self.height as usize
    }

    /// Bytes per glyph row
    pub const fn stride(&self) -> usize {
        (self.width as usize).div_ceil(8)
    }

    /// Bytes per glyph
    pub const fn glyph_len(&self) -> usize {
        self.stride() * self.height as usize
    }

    /// Check if `code` has its own glyph
    pub const fn covers(&self, code: u8) -> bool {
        code >= self.first && code <= self.last
    }

    /// Glyph bitmap for `code`
    ///
    /// Codes outside the table get the `?` glyph.
    pub fn glyph(&self, code: u8) -> &'static [u8] {
        let code = if self.covers(code) {
            code
        } else {
            warn!("no glyph for code {=u8:#x}", code);
            REPLACEMENT_CHAR
        };
        let start = (code - self.first) as usize * self.glyph_len();
        self.data
            .get(start..start + self.glyph_len())
            .unwrap_or_default()
    }
}

/// Font selector
///
/// Ids and cell sizes follow the calculator firmware. Faces other than
/// `Small6x8` are resampled from it, so they keep its shapes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum FontId {
    Small6x8 = 0,
    Bold7x12 = 1,
    Medium12x20 = 2,
    Huge24x40 = 3,
    Large16x26 = 4,
}

impl FontId {
    pub const ALL: [FontId; 5] = [
        FontId::Small6x8,
        FontId::Bold7x12,
        FontId::Medium12x20,
        FontId::Huge24x40,
        FontId::Large16x26,
    ];

    /// Look up a numeric font identifier
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            0 => Some(FontId::Small6x8),
            1 => Some(FontId::Bold7x12),
            2 => Some(FontId::Medium12x20),
            3 => Some(FontId::Huge24x40),
            4 => Some(FontId::Large16x26),
            _ => None,
        }
    }

    pub const fn font(self) -> &'static Font {
        match self {
            FontId::Small6x8 => &SMALL_6X8,
            FontId::Bold7x12 => &BOLD_7X12,
            FontId::Medium12x20 => &MEDIUM_12X20,
            FontId::Huge24x40 => &HUGE_24X40,
            FontId::Large16x26 => &LARGE_16X26,
        }
    }
}

const fn table_len(width: usize, height: usize) -> usize {
    width.div_ceil(8) * height * GLYPH_COUNT
}

/// Resample every base glyph into a `width` × `height` cell
///
/// A bold resample smears each base row one pixel right first, widening
/// the source to 7 columns.
const fn resampled<const N: usize>(width: usize, height: usize, bold: bool) -> [u8; N] {
    let src_width = if bold { BASE_WIDTH + 1 } else { BASE_WIDTH };
    let stride = width.div_ceil(8);
    let mut out = [0u8; N];

    let mut g = 0;
    while g < GLYPH_COUNT {
        let base = g * stride * height;
        let mut y = 0;
        while y < height {
            let mut src = GLYPHS_6X8[g][y * BASE_HEIGHT / height];
            if bold {
                src |= src >> 1;
            }
            let mut x = 0;
            while x < width {
                if src & (0x80 >> (x * src_width / width)) != 0 {
                    out[base + y * stride + x / 8] |= 0x80 >> (x % 8);
                }
                x += 1;
            }
            y += 1;
        }
        g += 1;
    }
    out
}

const SMALL_LEN: usize = table_len(6, 8);
const BOLD_LEN: usize = table_len(7, 12);
const MEDIUM_LEN: usize = table_len(12, 20);
const HUGE_LEN: usize = table_len(24, 40);
const LARGE_LEN: usize = table_len(16, 26);

static SMALL_DATA: [u8; SMALL_LEN] = resampled::<SMALL_LEN>(6, 8, false);
static BOLD_DATA: [u8; BOLD_LEN] = resampled::<BOLD_LEN>(7, 12, true);
static MEDIUM_DATA: [u8; MEDIUM_LEN] = resampled::<MEDIUM_LEN>(12, 20, false);
static HUGE_DATA: [u8; HUGE_LEN] = resampled::<HUGE_LEN>(24, 40, false);
static LARGE_DATA: [u8; LARGE_LEN] = resampled::<LARGE_LEN>(16, 26, false);

const fn face(width: usize, height: usize, data: &'static [u8]) -> Font {
    Font {
        width: width as u8,
        height: height as u8,
        first: FIRST_CHAR,
        last: LAST_CHAR,
        data,
    }
}

pub static SMALL_6X8: Font = face(6, 8, &SMALL_DATA);
pub static BOLD_7X12: Font = face(7, 12, &BOLD_DATA);
pub static MEDIUM_12X20: Font = face(12, 20, &MEDIUM_DATA);
pub static HUGE_24X40: Font = face(24, 40, &HUGE_DATA);
pub static LARGE_16X26: Font = face(16, 26, &LARGE_DATA);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_ids() {
        for (raw, id) in FontId::ALL.iter().enumerate() {
            assert_eq!(FontId::from_raw(raw as u8), Some(*id));
            assert_eq!(*id as u8, raw as u8);
        }
        assert_eq!(FontId::from_raw(5), None);
        assert_eq!(FontId::from_raw(255), None);
    }

    #[test]
    fn test_cell_sizes() {
        let sizes: [(usize, usize); 5] = [(6, 8), (7, 12), (12, 20), (24, 40), (16, 26)];
        for (id, (w, h)) in FontId::ALL.iter().zip(sizes) {
            let font = id.font();
            assert_eq!((font.width(), font.height()), (w, h));
            assert_eq!(font.glyph(b'A').len(), w.div_ceil(8) * h);
        }
    }

    #[test]
    fn test_small_matches_base() {
        let glyph = SMALL_6X8.glyph(b'0');
        assert_eq!(glyph, &GLYPHS_6X8[(b'0' - FIRST_CHAR) as usize]);
    }

    #[test]
    fn test_medium_doubles_columns() {
        // Top row of '1' is 0x20: a single pixel in column 2
        let glyph = MEDIUM_12X20.glyph(b'1');
        assert_eq!(&glyph[..4], &[0x0C, 0x00, 0x0C, 0x00]);
    }

    #[test]
    fn test_bold_smears_right() {
        let base = GLYPHS_6X8[(b'|' - FIRST_CHAR) as usize][0];
        assert_eq!(BOLD_7X12.glyph(b'|')[0], base | (base >> 1));
    }

    #[test]
    fn test_rows_resample_nearest() {
        // 8 base rows over 20 output rows: output row 3 reads base row 1
        let base = GLYPHS_6X8[(b'A' - FIRST_CHAR) as usize];
        let glyph = MEDIUM_12X20.glyph(b'A');
        let doubled = |row: u8| {
            (0..12).fold(0u16, |acc, x| {
                if row & (0x80 >> (x / 2)) != 0 {
                    acc | (0x8000 >> x)
                } else {
                    acc
                }
            })
        };
        let row3 = u16::from_be_bytes([glyph[6], glyph[7]]);
        assert_eq!(row3, doubled(base[1]));
        let last = u16::from_be_bytes([glyph[38], glyph[39]]);
        assert_eq!(last, doubled(base[7]));
    }

    #[test]
    fn test_out_of_range_uses_replacement() {
        for font in FontId::ALL.iter().map(|id| id.font()) {
            assert!(!font.covers(0x7F));
            assert_eq!(font.glyph(0x7F), font.glyph(REPLACEMENT_CHAR));
            assert_eq!(font.glyph(0x00), font.glyph(REPLACEMENT_CHAR));
        }
    }
}
