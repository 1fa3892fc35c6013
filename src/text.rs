//! Text layout
//!
//! Turns a string into one run of display bytes per page row of the font. The
//! layout is kept free of any bus access, [`DogDisplay::string`] positions the
//! write pointer and sends the rows produced here.
//!
//! [`DogDisplay::string`]: crate::display::DogDisplay::string

use crate::font::Font;

/// Horizontal alignment of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    /// The string starts at the given column
    #[default]
    Left,
    /// The string is centered on the panel, the given column is ignored
    Center,
    /// The string ends at the given column
    ///
    /// Column `0` is treated as "flush to the right edge of the panel". There is
    /// no way to right-align a string so that it ends at column 0.
    Right,
}

/// Rendering style of a string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Style {
    /// Glyphs as stored in the font
    #[default]
    Normal,
    /// Inverted glyphs
    Inverse,
    /// Glyphs on a cleared band over the full panel width
    Full,
    /// Inverted glyphs on a set band over the full panel width
    FullInverse,
}

impl Style {
    /// Mask every glyph byte is xor-ed with
    fn xor_mask(self) -> u8 {
        match self {
            Style::Normal | Style::Full => 0x00,
            Style::Inverse | Style::FullInverse => 0xFF,
        }
    }

    /// Background pattern used to pad the row, if the style pads at all
    fn padding(self) -> Option<u8> {
        match self {
            Style::Normal | Style::Inverse => None,
            Style::Full => Some(0x00),
            Style::FullInverse => Some(0xFF),
        }
    }
}

/// Resolves the start column of a string of `string_width` pixel
pub fn resolve_column(column: i32, string_width: i32, columns: u8, align: Align) -> i32 {
    let columns = i32::from(columns);
    match align {
        Align::Left => column,
        Align::Right if column == 0 => columns.saturating_sub(string_width),
        Align::Right => column.saturating_sub(string_width),
        Align::Center => columns.saturating_sub(string_width) / 2,
    }
}

/// Number of page rows of the font that fit below `page`
pub(crate) fn visible_rows(font: &Font<'_>, page: u8, pages: u8) -> u8 {
    font.rows_per_glyph().min(pages.saturating_sub(page))
}

/// Column the write pointer is set to before a row is sent
pub(crate) fn row_start(column: i32, columns: u8, style: Style) -> u8 {
    if style.padding().is_some() {
        return 0;
    }
    // nothing is sent when the string starts right of the panel, any
    // in-range column will do
    let last = i32::from(columns.saturating_sub(1));
    u8::try_from(column.clamp(0, last)).unwrap_or(0)
}

/// Lays out page row `row` of `text`, starting at the signed `column`
///
/// Writes the bytes to send from [`row_start`] onwards into `buf` and returns
/// their number. Nothing is produced outside `0..columns`; glyphs hanging over an
/// edge are cut, glyphs completely off panel are skipped.
///
/// `buf` must hold at least `columns` bytes.
pub(crate) fn layout_row(
    font: &Font<'_>,
    text: &[u8],
    column: i32,
    row: u8,
    columns: u8,
    style: Style,
    buf: &mut [u8],
) -> usize {
    let width = i32::from(columns);
    let glyph_width = i32::from(font.glyph_width());
    let mask = style.xor_mask();
    let mut len = 0;

    if let Some(pattern) = style.padding() {
        let lead = usize::try_from(column.clamp(0, width)).unwrap_or(0);
        buf[..lead].fill(pattern);
        len = lead;
    }

    let mut cursor = column;
    for &code in text {
        if cursor > width {
            // everything from here on is right of the panel
            cursor = cursor.saturating_add(glyph_width);
            continue;
        }
        if cursor.saturating_add(glyph_width) < 0 {
            // left of the panel, keeps its place even without a glyph
            cursor = cursor.saturating_add(glyph_width);
            continue;
        }
        if !font.contains(code) {
            continue;
        }

        let from = cursor.saturating_neg().max(0);
        let to = glyph_width.min(width - cursor);
        for x in from..to {
            // 0 <= x < glyph_width <= u8::MAX
            buf[len] = font.glyph_byte(code, row, x as u8) ^ mask;
            len += 1;
        }
        cursor = cursor.saturating_add(glyph_width);
    }

    if let Some(pattern) = style.padding() {
        let end = usize::from(columns);
        if len < end {
            buf[len..end].fill(pattern);
            len = end;
        }
    }

    len
}
