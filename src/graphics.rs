//! Graphics Support for the canvas
//!
//! With the `graphics` feature a [`Canvas`] and a [`CanvasTarget`] can be drawn
//! on with everything [`embedded_graphics`] offers, using [`BinaryColor`].
//!
//! [`embedded_graphics`]: https://docs.rs/embedded-graphics/0.8

use core::convert::Infallible;

use embedded_graphics_core::{pixelcolor::BinaryColor, prelude::*};
use embedded_hal::{digital::OutputPin, spi::SpiDevice};

use crate::canvas::Canvas;
use crate::display::CanvasTarget;
use crate::error::ErrorKind;
use crate::traits::DrawPixel;

/// For use with embedded_grahics, memory only
impl DrawTarget for Canvas {
    type Color = BinaryColor;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point.x, point.y, color.into());
        }
        Ok(())
    }
}

/// For use with embedded_grahics
impl OriginDimensions for Canvas {
    fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// For use with embedded_grahics, honours the mode of the canvas
impl<'a, SPI, DC, RST> DrawTarget for CanvasTarget<'a, SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    type Color = BinaryColor;
    type Error = ErrorKind<SPI, DC, RST>;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.draw_pixel(point.x, point.y, color.into())?;
        }
        Ok(())
    }
}

/// For use with embedded_grahics, no canvas means no size
impl<'a, SPI, DC, RST> OriginDimensions for CanvasTarget<'a, SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn size(&self) -> Size {
        self.canvas()
            .map(|canvas| Size::new(canvas.width(), canvas.height()))
            .unwrap_or_else(Size::zero)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::CanvasMode;
    use crate::color::Color;
    use embedded_graphics::{
        prelude::*,
        primitives::{Line, PrimitiveStyle, Rectangle},
    };

    #[test]
    fn graphics_size() {
        let canvas = Canvas::new(20, 12, 0, 0, CanvasMode::Buffered);
        assert_eq!(canvas.size(), Size::new(20, 16));
        assert_eq!(canvas.bounding_box().bottom_right(), Some(Point::new(19, 15)));
    }

    #[test]
    fn graphics_line() {
        let mut canvas = Canvas::new(8, 16, 0, 0, CanvasMode::Buffered);
        let _ = Line::new(Point::new(0, 9), Point::new(7, 9))
            .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
            .draw(&mut canvas);

        assert_eq!(canvas.page_row(0), &[0u8; 8]);
        assert_eq!(canvas.page_row(1), &[0x02u8; 8]);
    }

    #[test]
    fn graphics_clipped_rectangle() {
        let mut canvas = Canvas::new(4, 8, 0, 0, CanvasMode::Buffered);
        let _ = Rectangle::new(Point::new(-2, -2), Size::new(4, 4))
            .into_styled(PrimitiveStyle::with_fill(BinaryColor::On))
            .draw(&mut canvas);

        assert_eq!(canvas.buffer(), &[0x03, 0x03, 0x00, 0x00]);
        assert_eq!(canvas.pixel(1, 1), Some(Color::On));
    }

    #[test]
    fn graphics_clear() {
        let mut canvas = Canvas::new(4, 8, 0, 0, CanvasMode::Buffered);
        DrawTarget::clear(&mut canvas, BinaryColor::On).unwrap();
        assert_eq!(canvas.buffer(), &[0xFF; 4]);
        DrawTarget::clear(&mut canvas, BinaryColor::Off).unwrap();
        assert_eq!(canvas.buffer(), &[0x00; 4]);
    }
}
