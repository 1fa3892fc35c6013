//! In-memory drawing surface
//!
//! A canvas mirrors a rectangular region of the display memory, in the same page
//! layout the controller uses: one byte per column and page, the topmost row in
//! the least significant bit. It is placed on the panel with an origin given in
//! columns and pages, both of which may be negative or beyond the panel.
//!
//! The canvas itself never touches the bus. [`DogDisplay`] owns it and either
//! writes every modified byte through immediately ([`CanvasMode::Direct`]) or
//! sends the whole canvas on [`flush`] ([`CanvasMode::Buffered`]).
//!
//! [`DogDisplay`]: crate::display::DogDisplay
//! [`flush`]: crate::display::DogDisplay::flush

use alloc::vec;
use alloc::vec::Vec;
use bit_field::BitField;

use crate::color::Color;
use crate::traits::DrawPixel;
use crate::variant::PAGE_HEIGHT;

/// When drawing on the canvas reaches the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CanvasMode {
    /// Every pixel change is sent right away
    ///
    /// That costs a full addressing sequence and one data byte per pixel.
    Direct,
    /// Changes stay in memory until the canvas is flushed
    #[default]
    Buffered,
}

/// Monochrome bitmap in display page layout
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    width: u32,
    height: u32,
    pages: u32,
    origin_x: i32,
    origin_y: i32,
    mode: CanvasMode,
    buffer: Vec<u8>,
}

impl Canvas {
    /// Allocates a cleared canvas
    ///
    /// `height` is rounded up to the next multiple of 8. `origin_x` is the panel
    /// column of the left edge, `origin_y` the panel page of the top edge.
    pub fn new(width: u32, height: u32, origin_x: i32, origin_y: i32, mode: CanvasMode) -> Self {
        let pages = height.div_ceil(PAGE_HEIGHT);
        let len = (pages as usize).saturating_mul(width as usize);
        Canvas {
            width,
            height: pages.saturating_mul(PAGE_HEIGHT),
            pages,
            origin_x,
            origin_y,
            mode,
            buffer: vec![0u8; len],
        }
    }

    /// Width in pixel
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixel, always a multiple of 8
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of pages
    pub fn pages(&self) -> u32 {
        self.pages
    }

    /// Panel column of the left edge
    pub fn origin_x(&self) -> i32 {
        self.origin_x
    }

    /// Panel page of the top edge
    pub fn origin_y(&self) -> i32 {
        self.origin_y
    }

    /// Moves the canvas on the panel
    ///
    /// Only affects future writes, nothing already on the panel moves.
    pub fn set_origin(&mut self, origin_x: i32, origin_y: i32) {
        self.origin_x = origin_x;
        self.origin_y = origin_y;
    }

    /// Current mode
    pub fn mode(&self) -> CanvasMode {
        self.mode
    }

    /// Switches between direct and buffered drawing
    pub fn set_mode(&mut self, mode: CanvasMode) {
        self.mode = mode;
    }

    /// get internal buffer, `pages` rows of `width` bytes
    pub fn buffer(&self) -> &[u8] {
        &self.buffer
    }

    /// Page row `page` of the buffer
    pub fn page_row(&self, page: u32) -> &[u8] {
        let start = page as usize * self.width as usize;
        self.buffer
            .get(start..start + self.width as usize)
            .unwrap_or(&[])
    }

    /// Page holding row `y`
    pub fn page_of(&self, y: u32) -> u32 {
        if self.height == 0 {
            return 0;
        }
        // equal to y / 8 as the height is rounded to full pages
        (u64::from(y) * u64::from(self.pages) / u64::from(self.height)) as u32
    }

    /// Index into the buffer of the pixel, `None` outside of the canvas
    fn locate(&self, x: i32, y: i32) -> Option<(usize, usize)> {
        let x = u32::try_from(x).ok().filter(|&x| x < self.width)?;
        let y = u32::try_from(y).ok().filter(|&y| y < self.height)?;
        let index = self.page_of(y) as usize * self.width as usize + x as usize;
        Some((index, (y % PAGE_HEIGHT) as usize))
    }

    /// Set a specific pixel on this canvas
    ///
    /// Returns the page of the modified byte, or `None` (and does nothing) when the
    /// pixel is outside of the canvas.
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> Option<u32> {
        let (index, bit) = self.locate(x, y)?;
        self.buffer[index].set_bit(bit, color.is_on());
        Some(self.page_of(y as u32))
    }

    /// Reads a pixel back, `None` outside of the canvas
    pub fn pixel(&self, x: i32, y: i32) -> Option<Color> {
        let (index, bit) = self.locate(x, y)?;
        Some(Color::from(self.buffer[index].get_bit(bit)))
    }

    /// The byte at column `x` of page `page`
    pub fn byte(&self, x: u32, page: u32) -> u8 {
        self.page_row(page).get(x as usize).copied().unwrap_or(0)
    }

    /// Clears the memory, nothing is sent
    pub fn clear(&mut self) {
        self.buffer.fill(0);
    }
}

/// Memory only drawing, the mode is not looked at
impl DrawPixel for Canvas {
    type Error = core::convert::Infallible;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error> {
        self.set_pixel(x, y, color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn height_rounded_to_pages() {
        let canvas = Canvas::new(20, 10, 0, 0, CanvasMode::Buffered);
        assert_eq!(canvas.pages(), 2);
        assert_eq!(canvas.height(), 16);
        assert_eq!(canvas.buffer().len(), 40);

        let canvas = Canvas::new(20, 16, 0, 0, CanvasMode::Buffered);
        assert_eq!(canvas.pages(), 2);

        let canvas = Canvas::new(20, 0, 0, 0, CanvasMode::Buffered);
        assert_eq!(canvas.pages(), 0);
        assert!(canvas.buffer().is_empty());
    }

    #[test]
    fn rounded_rows_are_usable() {
        let mut canvas = Canvas::new(20, 10, 0, 0, CanvasMode::Buffered);
        assert_eq!(canvas.set_pixel(3, 15, Color::On), Some(1));
        assert_eq!(canvas.pixel(3, 15), Some(Color::On));
        assert_eq!(canvas.set_pixel(3, 16, Color::On), None);
        assert_eq!(canvas.pixel(3, 16), None);
    }

    #[test]
    fn pixel_round_trip() {
        let mut canvas = Canvas::new(8, 8, 0, 0, CanvasMode::Buffered);
        canvas.set_pixel(2, 5, Color::On);
        assert_eq!(canvas.pixel(2, 5), Some(Color::On));
        assert_eq!(canvas.pixel(2, 4), Some(Color::Off));
        canvas.set_pixel(2, 5, Color::Off);
        assert_eq!(canvas.pixel(2, 5), Some(Color::Off));
        assert!(canvas.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn page_layout() {
        let mut canvas = Canvas::new(4, 16, 0, 0, CanvasMode::Buffered);
        canvas.set_pixel(1, 0, Color::On);
        canvas.set_pixel(1, 7, Color::On);
        canvas.set_pixel(2, 9, Color::On);
        assert_eq!(canvas.buffer(), &[0, 0x81, 0, 0, 0, 0, 0x02, 0]);
        assert_eq!(canvas.byte(1, 0), 0x81);
        assert_eq!(canvas.page_row(1), &[0, 0, 0x02, 0]);
        assert_eq!(canvas.page_of(9), 1);
    }

    #[test]
    fn outside_is_ignored() {
        let mut canvas = Canvas::new(8, 8, 0, 0, CanvasMode::Buffered);
        for (x, y) in [(-1, 0), (0, -1), (8, 0), (0, 8), (i32::MIN, i32::MAX)] {
            assert_eq!(canvas.set_pixel(x, y, Color::On), None);
            assert_eq!(canvas.pixel(x, y), None);
        }
        assert!(canvas.buffer().iter().all(|&b| b == 0));
    }

    #[test]
    fn clear() {
        let mut canvas = Canvas::new(8, 8, 0, 0, CanvasMode::Direct);
        canvas.set_pixel(0, 0, Color::On);
        canvas.clear();
        assert_eq!(canvas.pixel(0, 0), Some(Color::Off));
        assert_eq!(canvas.mode(), CanvasMode::Direct);
    }
}
