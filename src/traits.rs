use crate::color::Color;

/// All commands need to have this trait which gives the address of the command
/// which needs to be send via SPI with activated CommandsPin (A0 low)
pub(crate) trait Command: Copy {
    fn address(self) -> u8;
}

/// Anything a single pixel can be set on
///
/// The rasterizer in [`shapes`](crate::shapes) is written against this trait only.
/// Implementations silently ignore coordinates outside of their area.
pub trait DrawPixel {
    /// Error returned by the underlying output, if any
    type Error;

    /// Set the pixel at (`x`, `y`) to `color`
    fn draw_pixel(&mut self, x: i32, y: i32, color: Color) -> Result<(), Self::Error>;
}
