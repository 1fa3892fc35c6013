//! Pre-rasterized bitmap fonts
//!
//! A font is a byte table, as produced by the EA LCD-Tools and shipped with the
//! EA DOG Arduino library:
//!
//! | offset | content                        |
//! |--------|--------------------------------|
//! | 0, 1   | magic, ignored                 |
//! | 2      | first character code           |
//! | 3      | last character code            |
//! | 4      | glyph width in pixel           |
//! | 5      | reserved                       |
//! | 6      | glyph height in pages          |
//! | 7      | bytes per glyph                |
//! | 8..    | glyphs, one page row after the other |

/// Size of the font header in bytes
pub const HEADER_LEN: usize = 8;

/// A font table borrowed from flash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Font<'a> {
    data: &'a [u8],
}

impl<'a> Font<'a> {
    /// Wraps a font table
    ///
    /// A table shorter than the header describes a font without any glyph.
    pub const fn new(data: &'a [u8]) -> Self {
        Font { data }
    }

    fn header(&self, index: usize) -> u8 {
        if self.data.len() < HEADER_LEN {
            return 0;
        }
        self.data[index]
    }

    /// First character code with a glyph
    pub fn first_code(&self) -> u8 {
        self.header(2)
    }

    /// Last character code with a glyph
    pub fn last_code(&self) -> u8 {
        self.header(3)
    }

    /// Width of every glyph in pixel
    pub fn glyph_width(&self) -> u8 {
        self.header(4)
    }

    /// Height of every glyph in pages
    pub fn rows_per_glyph(&self) -> u8 {
        self.header(6)
    }

    /// Size of one glyph in the table
    pub fn bytes_per_glyph(&self) -> u8 {
        self.header(7)
    }

    /// Tests whether `code` has a glyph
    pub fn contains(&self, code: u8) -> bool {
        self.data.len() >= HEADER_LEN && (self.first_code()..=self.last_code()).contains(&code)
    }

    /// Number of characters of `text` this font can render
    pub fn glyph_count(&self, text: &[u8]) -> usize {
        text.iter().filter(|&&c| self.contains(c)).count()
    }

    /// Width of `text` in pixel, characters without glyph take no space
    pub fn string_width(&self, text: &[u8]) -> i32 {
        let count = i32::try_from(self.glyph_count(text)).unwrap_or(i32::MAX);
        count.saturating_mul(i32::from(self.glyph_width()))
    }

    /// Byte `x` of page row `row` of the glyph for `code`
    ///
    /// Bytes beyond the end of a truncated table read as `0x00`.
    pub fn glyph_byte(&self, code: u8, row: u8, x: u8) -> u8 {
        if !self.contains(code) {
            return 0;
        }
        let index = HEADER_LEN
            + usize::from(code - self.first_code()) * usize::from(self.bytes_per_glyph())
            + usize::from(row) * usize::from(self.glyph_width())
            + usize::from(x);
        self.data.get(index).copied().unwrap_or(0)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Two row font for 'A'..='C', 3 px wide; every glyph byte encodes
    /// `(code - 'A') << 4 | row << 2 | x` so tests can tell bytes apart
    pub(crate) const FONT_3X16: [u8; 8 + 3 * 6] = [
        0x00, 0x00, b'A', b'C', 3, 0, 2, 6, //
        0x00, 0x01, 0x02, 0x04, 0x05, 0x06, //
        0x10, 0x11, 0x12, 0x14, 0x15, 0x16, //
        0x20, 0x21, 0x22, 0x24, 0x25, 0x26, //
    ];

    #[test]
    fn header() {
        let font = Font::new(&FONT_3X16);
        assert_eq!(font.first_code(), b'A');
        assert_eq!(font.last_code(), b'C');
        assert_eq!(font.glyph_width(), 3);
        assert_eq!(font.rows_per_glyph(), 2);
        assert_eq!(font.bytes_per_glyph(), 6);
    }

    #[test]
    fn width_skips_unknown_characters() {
        let font = Font::new(&FONT_3X16);
        assert_eq!(font.string_width(b"ABC"), 9);
        assert_eq!(font.string_width(b"A-B"), 6);
        assert_eq!(font.string_width(b"xyz"), 0);
        assert_eq!(font.string_width(b""), 0);
    }

    #[test]
    fn glyph_bytes() {
        let font = Font::new(&FONT_3X16);
        assert_eq!(font.glyph_byte(b'A', 0, 0), 0x00);
        assert_eq!(font.glyph_byte(b'B', 1, 2), 0x16);
        assert_eq!(font.glyph_byte(b'C', 1, 0), 0x24);
        assert_eq!(font.glyph_byte(b'D', 0, 0), 0x00);
    }

    #[test]
    fn truncated_tables() {
        let font = Font::new(&[0, 0, b'A']);
        assert!(!font.contains(b'A'));
        assert_eq!(font.string_width(b"AAA"), 0);

        let font = Font::new(&FONT_3X16[..10]);
        assert_eq!(font.glyph_byte(b'A', 0, 1), 0x01);
        assert_eq!(font.glyph_byte(b'A', 0, 2), 0x00);
    }
}
