//! A Driver for the EA DOG graphic LCDs via SPI
//!
//! Supports the four modules of the series, built around two controllers:
//!
//! - EA DOGM128-6 (ST7565R, 128x64)
//! - EA DOGL128-6 (ST7565R, 128x64)
//! - EA DOGM132-5 (ST7565R, 132x32)
//! - EA DOGS102-6 (UC1701, 102x64)
//!
//! This driver was built using [`embedded-hal`] traits.
//!
//! [`embedded-hal`]: https://docs.rs/embedded-hal/1.0
//!
//! # Requirements
//!
//! ### SPI
//!
//! - MISO is not connected/available
//! - SPI_MODE_3 is used (CPOL = 1, CPHA = 1)
//! - 8 bits per word, MSB first
//! - Chip select is handled by the [`SpiDevice`](embedded_hal::spi::SpiDevice), one
//!   transaction per command or data run
//!
//! ### Other....
//!
//! - A0 selects between commands (low) and display data (high)
//! - The display memory is organised in pages: one byte covers one column and
//!   eight rows, the least significant bit on top
//!
//! # Examples
//!
//!```rust, no_run
//!# use embedded_hal_mock::eh1::*;
//!# fn main() -> Result<(), embedded_hal::spi::ErrorKind> {
//!use dog_graphic_display::{prelude::*, Variant};
//!#
//!# let expectations = [];
//!# let mut spi = spi::Mock::new(&expectations);
//!# let expectations = [];
//!# let a0 = digital::Mock::new(&expectations);
//!# let expectations = [];
//!# let rst = digital::Mock::new(&expectations);
//!# let mut delay = delay::NoopDelay::new();
//!
//!let mut lcd = DogDisplay::new(&mut spi, a0, rst, &mut delay, Variant::Dogm132).unwrap();
//!
//!lcd.contrast(&mut spi, 0x1F).unwrap();
//!lcd.rectangle(&mut spi, 0, 0, 131, 0, 0xAA).unwrap();
//!
//!// draw through a canvas and push it out in one go
//!lcd.create_canvas(32, 16, 50, 1, CanvasMode::Buffered);
//!let mut target = lcd.canvas_target(&mut spi);
//!target.circle(15, 7, 6, false, Color::On).unwrap();
//!lcd.flush(&mut spi).unwrap();
//!
//!lcd.sleep(&mut spi, true).unwrap();
//!# Ok(())
//!# }
//!```
//!
#![no_std]
#![deny(missing_docs)]

extern crate alloc;

#[cfg(feature = "graphics")]
pub mod graphics;

mod traits;

pub mod canvas;
pub mod color;
pub mod command;
pub mod display;
pub mod error;
pub mod font;
pub mod picture;
pub mod shapes;
pub mod text;
pub mod variant;

/// Interface for the physical connection between display and the controlling device
mod interface;

pub use crate::display::{DogDisplay, ViewDirection};
pub use crate::traits::DrawPixel;
pub use crate::variant::{PanelGeometry, Variant};

/// Includes everything important besides the chosen display variant
pub mod prelude {
    pub use crate::canvas::{Canvas, CanvasMode};
    pub use crate::color::Color;
    pub use crate::display::{DogDisplay, ViewDirection};
    pub use crate::error::ErrorKind;
    pub use crate::font::Font;
    pub use crate::picture::{Picture, PictureStyle};
    pub use crate::shapes::Primitives;
    pub use crate::text::{Align, Style};
    pub use crate::traits::DrawPixel;
    pub use crate::SPI_MODE;
}

use embedded_hal::spi::{Mode, Phase, Polarity};

/// SPI mode -
/// For more infos see [Requirements: SPI](index.html#spi)
pub const SPI_MODE: Mode = Mode {
    phase: Phase::CaptureOnSecondTransition,
    polarity: Polarity::IdleHigh,
};

/// Widest panel of the series, used to size the on-stack row buffers
pub(crate) const MAX_COLUMNS: usize = 132;
