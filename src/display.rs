//! The driver for a single EA DOG display
//!
//! [`DogDisplay`] owns the A0 and reset pins, the optional [`Canvas`] and the
//! view direction. The SPI device is passed into every function talking to the
//! display, so it can be shared with other devices on the bus in between.
//!
//! All drawing functions clip silently: anything outside of the panel is simply
//! not sent. The only errors reported are those of the bus and the pins.

use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};
use log::{debug, trace};

use crate::canvas::{Canvas, CanvasMode};
use crate::color::Color;
use crate::command::Command;
use crate::error::ErrorKind;
use crate::font::Font;
use crate::interface::DisplayInterface;
use crate::picture::{Picture, PictureStyle};
use crate::text::{self, Align, Style};
use crate::traits::DrawPixel;
use crate::variant::{PanelGeometry, Variant};
use crate::MAX_COLUMNS;

/// Time the reset line is held low, in us
const RESET_PULSE_US: u32 = 10;

/// Viewing direction of the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewDirection {
    /// Default mounting, 6 o'clock view
    #[default]
    Bottom,
    /// Display mounted upside down, 12 o'clock view
    Top,
}

/// EA DOG display driver
pub struct DogDisplay<SPI, DC, RST> {
    /// Connection Interface
    interface: DisplayInterface<SPI, DC, RST>,
    variant: Variant,
    geometry: PanelGeometry,
    view: ViewDirection,
    canvas: Option<Canvas>,
}

impl<SPI, DC, RST> DogDisplay<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new driver from a SPI device, the A0 pin and the reset pin
    ///
    /// This resets the controller, sends the initialization sequence of
    /// `variant` and clears the panel.
    pub fn new<DELAY: DelayNs>(
        spi: &mut SPI,
        dc: DC,
        rst: RST,
        delay: &mut DELAY,
        variant: Variant,
    ) -> Result<Self, ErrorKind<SPI, DC, RST>> {
        let mut display = DogDisplay {
            interface: DisplayInterface::new(dc, rst),
            variant,
            geometry: variant.geometry(),
            view: ViewDirection::default(),
            canvas: None,
        };

        display.init(spi, delay)?;
        Ok(display)
    }

    /// Resets and initialises the controller, then clears the panel
    ///
    /// Already called by [`new`](DogDisplay::new). The view direction falls back
    /// to [`ViewDirection::Bottom`], as set by the initialization sequence.
    pub fn init<DELAY: DelayNs>(
        &mut self,
        spi: &mut SPI,
        delay: &mut DELAY,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        debug!("initialising {:?}", self.variant);
        self.interface.reset(delay, RESET_PULSE_US)?;
        self.interface.cmds(spi, self.variant.init_sequence())?;
        self.view = ViewDirection::Bottom;
        self.clear(spi)
    }

    /// Returns the pins
    pub fn release(self) -> (DC, RST) {
        self.interface.release()
    }

    /// The display this driver was set up for
    pub fn variant(&self) -> Variant {
        self.variant
    }

    /// Size of the panel
    pub fn geometry(&self) -> PanelGeometry {
        self.geometry
    }

    /// Number of columns
    pub fn width(&self) -> u8 {
        self.geometry.columns
    }

    /// Number of pages
    pub fn pages(&self) -> u8 {
        self.geometry.pages
    }

    /// Current view direction
    pub fn view_direction(&self) -> ViewDirection {
        self.view
    }

    /// Clears the entire panel
    pub fn clear(&mut self, spi: &mut SPI) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.rectangle(spi, 0, 0, self.geometry.columns - 1, self.geometry.pages - 1, 0x00)
    }

    /// Sets the contrast, only the lower 6 bits of `value` are used
    pub fn contrast(&mut self, spi: &mut SPI, value: u8) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.interface.cmd_with_param(spi, Command::ElectronicVolume, value & 0x3F)
    }

    /// Sets the viewing direction
    ///
    /// This clears the panel, as the old content would show up mirrored.
    pub fn view(
        &mut self,
        spi: &mut SPI,
        direction: ViewDirection,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        debug!("view direction {:?}", direction);
        self.view = direction;
        let (seg, com) = match direction {
            ViewDirection::Top => (Command::SegDirectionNormal, Command::ComDirectionReverse),
            ViewDirection::Bottom => (Command::SegDirectionReverse, Command::ComDirectionNormal),
        };
        self.interface.cmd(spi, seg)?;
        self.interface.cmd(spi, com)?;
        self.clear(spi)
    }

    /// Shows every pixel set (`true`) or the display memory (`false`)
    pub fn all_pixels_on(
        &mut self,
        spi: &mut SPI,
        on: bool,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let command = if on {
            Command::AllPixelsOn
        } else {
            Command::AllPixelsOff
        };
        self.interface.cmd(spi, command)
    }

    /// Inverts the whole panel (`true`) or shows it normally (`false`)
    pub fn inverse(&mut self, spi: &mut SPI, inverse: bool) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let command = if inverse {
            Command::DisplayInverse
        } else {
            Command::DisplayNormal
        };
        self.interface.cmd(spi, command)
    }

    /// Puts the display to sleep (`true`) or wakes it up (`false`)
    ///
    /// The display memory is kept while sleeping.
    pub fn sleep(&mut self, spi: &mut SPI, sleep: bool) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let command = if sleep {
            Command::DisplayOff
        } else {
            Command::DisplayOn
        };
        self.interface.cmd(spi, command)
    }

    /// Sets the write pointer of the controller
    ///
    /// The mirror offset of the variant is added while in top view. The caller
    /// is responsible for `column` and `page` being on the panel.
    pub(crate) fn position(
        &mut self,
        spi: &mut SPI,
        column: u8,
        page: u8,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let bytes = address_bytes(&self.geometry, self.view, column, page);
        self.interface.cmds(spi, &bytes)
    }

    /// Fills the columns `start_column..=end_column` of the pages
    /// `start_page..=end_page` with `pattern`
    ///
    /// The end is clipped to the panel, empty ranges draw nothing.
    pub fn rectangle(
        &mut self,
        spi: &mut SPI,
        start_column: u8,
        start_page: u8,
        end_column: u8,
        end_page: u8,
        pattern: u8,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let end_column = end_column.min(self.geometry.columns - 1);
        let end_page = end_page.min(self.geometry.pages - 1);
        if start_column > end_column || start_page > end_page {
            trace!("rectangle off panel");
            return Ok(());
        }

        let row = [pattern; MAX_COLUMNS];
        let len = usize::from(end_column - start_column) + 1;
        for page in start_page..=end_page {
            self.position(spi, start_column, page)?;
            self.interface.data(spi, &row[..len])?;
        }
        Ok(())
    }

    /// Shows a picture with its top left corner at `column` and `page`
    ///
    /// Parts right or below the panel are cut.
    pub fn picture(
        &mut self,
        spi: &mut SPI,
        column: u8,
        page: u8,
        picture: &Picture<'_>,
        style: PictureStyle,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let width = picture.width().min(self.geometry.columns.saturating_sub(column));
        let pages = picture.pages().min(self.geometry.pages.saturating_sub(page));
        if width == 0 || pages == 0 {
            trace!("picture off panel");
            return Ok(());
        }

        let mut inverted = [0u8; MAX_COLUMNS];
        for p in 0..pages {
            let row = picture.row(p, width);
            self.position(spi, column, page + p)?;
            match style {
                PictureStyle::Normal => self.interface.data(spi, row)?,
                PictureStyle::Inverse => {
                    for (dst, src) in inverted.iter_mut().zip(row) {
                        *dst = !src;
                    }
                    self.interface.data(spi, &inverted[..row.len()])?;
                }
            }
        }
        Ok(())
    }

    /// Shows `text` in `font` on `page`
    ///
    /// `column` may be negative or beyond the panel, whatever doesn't fit is cut
    /// off. Characters without a glyph in the font are skipped.
    ///
    /// With [`Align::Right`] the string ends at `column`, except for column `0`
    /// which right-aligns to the panel edge. [`Align::Center`] ignores `column`.
    #[allow(clippy::too_many_arguments)]
    pub fn string<T: AsRef<[u8]>>(
        &mut self,
        spi: &mut SPI,
        column: i32,
        page: u8,
        font: &Font<'_>,
        text: T,
        align: Align,
        style: Style,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let text = text.as_ref();
        let columns = self.geometry.columns;
        let column = text::resolve_column(column, font.string_width(text), columns, align);
        let rows = text::visible_rows(font, page, self.geometry.pages);
        let start = text::row_start(column, columns, style);

        let mut buf = [0u8; MAX_COLUMNS];
        for y in 0..rows {
            let len = text::layout_row(font, text, column, y, columns, style, &mut buf);
            self.position(spi, start, page + y)?;
            self.interface.data(spi, &buf[..len])?;
        }
        Ok(())
    }

    /// Shows left aligned `text` at `column + offset`
    ///
    /// Moving `offset` step by step scrolls the text through the panel, it may
    /// start left of the first column.
    pub fn string_offset<T: AsRef<[u8]>>(
        &mut self,
        spi: &mut SPI,
        column: u8,
        page: u8,
        offset: i32,
        font: &Font<'_>,
        text: T,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.string(
            spi,
            i32::from(column).saturating_add(offset),
            page,
            font,
            text,
            Align::Left,
            Style::Normal,
        )
    }

    /// Creates the canvas, replacing any previous one
    ///
    /// See [`Canvas::new`] for the parameters. The new canvas is cleared in
    /// memory, nothing is sent.
    pub fn create_canvas(
        &mut self,
        width: u32,
        height: u32,
        origin_x: i32,
        origin_y: i32,
        mode: CanvasMode,
    ) -> &mut Canvas {
        debug!(
            "canvas {}x{} at ({}, {}) {:?}",
            width, height, origin_x, origin_y, mode
        );
        self.canvas.insert(Canvas::new(width, height, origin_x, origin_y, mode))
    }

    /// The canvas, if one was created
    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    /// The canvas, if one was created
    ///
    /// Drawing on it directly never reaches the panel before the next
    /// [`flush`](DogDisplay::flush), regardless of its mode.
    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    /// Frees the canvas, the panel keeps what was sent
    pub fn destroy_canvas(&mut self) -> Option<Canvas> {
        debug!("canvas destroyed");
        self.canvas.take()
    }

    /// Sets a pixel of the canvas
    ///
    /// Does nothing without a canvas or when (`x`, `y`) is outside of it. In
    /// [`CanvasMode::Direct`] the modified byte is sent right away if it lies on
    /// the panel.
    pub fn set_pixel(
        &mut self,
        spi: &mut SPI,
        x: i32,
        y: i32,
        color: Color,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let Some(canvas) = self.canvas.as_mut() else {
            return Ok(());
        };
        let Some(page) = canvas.set_pixel(x, y, color) else {
            return Ok(());
        };
        if canvas.mode() == CanvasMode::Buffered {
            return Ok(());
        }

        // x lies on the canvas, so it is positive
        let byte = canvas.byte(x as u32, page);
        let column = x.saturating_add(canvas.origin_x());
        let panel_page = i32::try_from(page)
            .unwrap_or(i32::MAX)
            .saturating_add(canvas.origin_y());
        if !self.geometry.contains_column(column) || !self.geometry.contains_page(panel_page) {
            return Ok(());
        }
        // both checked against the panel size above
        let (column, panel_page) = (column as u8, panel_page as u8);
        self.rectangle(spi, column, panel_page, column, panel_page, byte)
    }

    /// Clears every pixel of the canvas through [`set_pixel`](DogDisplay::set_pixel)
    ///
    /// In [`CanvasMode::Direct`] this sends one byte per pixel, use it on small
    /// canvases only.
    pub fn clear_canvas(&mut self, spi: &mut SPI) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let Some((width, height)) = self.canvas.as_ref().map(|c| (c.width(), c.height())) else {
            return Ok(());
        };
        for y in 0..height {
            for x in 0..width {
                // the canvas size is bounded by the buffer the allocator handed out
                self.set_pixel(spi, x as i32, y as i32, Color::Off)?;
            }
        }
        Ok(())
    }

    /// Sends the visible part of the canvas at its origin
    pub fn flush(&mut self, spi: &mut SPI) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let Some(canvas) = self.canvas.take() else {
            return Ok(());
        };
        let result = self.flush_canvas(spi, &canvas);
        self.canvas = Some(canvas);
        result
    }

    /// Moves the canvas to (`origin_x`, `origin_y`) and sends it
    pub fn flush_at(
        &mut self,
        spi: &mut SPI,
        origin_x: i32,
        origin_y: i32,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        if let Some(canvas) = self.canvas.as_mut() {
            canvas.set_origin(origin_x, origin_y);
        }
        self.flush(spi)
    }

    fn flush_canvas(
        &mut self,
        spi: &mut SPI,
        canvas: &Canvas,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        let origin_x = i64::from(canvas.origin_x());
        let columns = i64::from(self.geometry.columns);
        // leading canvas columns hidden left of the panel
        let skip = (-origin_x).max(0);
        let start = origin_x.max(0);
        let len = (i64::from(canvas.width()) - skip).min(columns - start);
        if len <= 0 {
            trace!("canvas off panel");
            return Ok(());
        }
        // 0 <= start < columns and 0 < skip + len <= canvas width
        let (start, skip, len) = (start as u8, skip as usize, len as usize);

        for page in 0..canvas.pages() {
            let panel_page = i64::from(page) + i64::from(canvas.origin_y());
            if !(0..i64::from(self.geometry.pages)).contains(&panel_page) {
                continue;
            }
            self.position(spi, start, panel_page as u8)?;
            self.interface
                .data(spi, &canvas.page_row(page)[skip..skip + len])?;
        }
        Ok(())
    }

    /// A [`DrawPixel`] target drawing on the canvas, as [`set_pixel`](DogDisplay::set_pixel) does
    pub fn canvas_target<'a>(&'a mut self, spi: &'a mut SPI) -> CanvasTarget<'a, SPI, DC, RST> {
        CanvasTarget { display: self, spi }
    }
}

/// Column high, column low and page address commands for `column` and `page`
fn address_bytes(geometry: &PanelGeometry, view: ViewDirection, column: u8, page: u8) -> [u8; 3] {
    let column = match view {
        ViewDirection::Top => column.wrapping_add(geometry.mirror_offset),
        ViewDirection::Bottom => column,
    };
    [
        Command::ColumnAddressHigh.with_param(column >> 4, 0x0F),
        Command::ColumnAddressLow.with_param(column, 0x0F),
        Command::PageAddress.with_param(page, 0x0F),
    ]
}

/// The canvas of a display together with the bus, see [`DogDisplay::canvas_target`]
pub struct CanvasTarget<'a, SPI, DC, RST> {
    display: &'a mut DogDisplay<SPI, DC, RST>,
    spi: &'a mut SPI,
}

impl<'a, SPI, DC, RST> CanvasTarget<'a, SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// The canvas drawn on, if one was created
    pub fn canvas(&self) -> Option<&Canvas> {
        self.display.canvas()
    }

    /// Sends the canvas, see [`DogDisplay::flush`]
    pub fn flush(&mut self) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.display.flush(self.spi)
    }
}

impl<'a, SPI, DC, RST> DrawPixel for CanvasTarget<'a, SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Error = ErrorKind<SPI, DC, RST>;

    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error> {
        self.display.set_pixel(self.spi, x, y, color)
    }
}
