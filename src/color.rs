//! Pixel states of the monochrome panels

#[cfg(feature = "graphics")]
use embedded_graphics_core::pixelcolor::BinaryColor;

/// Only two states: a set (dark) or cleared (transparent) liquid crystal
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Color {
    /// Pixel cleared, the background shows through
    #[default]
    Off,
    /// Pixel set
    On,
}

impl Color {
    /// `true` for a set pixel
    pub fn is_on(self) -> bool {
        self == Color::On
    }
}

impl From<bool> for Color {
    fn from(value: bool) -> Self {
        if value {
            Color::On
        } else {
            Color::Off
        }
    }
}

impl From<Color> for bool {
    fn from(color: Color) -> Self {
        color.is_on()
    }
}

#[cfg(feature = "graphics")]
impl From<BinaryColor> for Color {
    fn from(b: BinaryColor) -> Color {
        match b {
            BinaryColor::On => Color::On,
            BinaryColor::Off => Color::Off,
        }
    }
}

#[cfg(feature = "graphics")]
impl From<Color> for BinaryColor {
    fn from(c: Color) -> BinaryColor {
        match c {
            Color::On => BinaryColor::On,
            Color::Off => BinaryColor::Off,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_bool() {
        assert_eq!(Color::On, Color::from(true));
        assert_eq!(Color::Off, Color::from(false));
        assert!(bool::from(Color::On));
    }

    #[cfg(feature = "graphics")]
    #[test]
    fn binary_color_conversion() {
        assert_eq!(Color::from(BinaryColor::On), Color::On);
        assert_eq!(BinaryColor::from(Color::Off), BinaryColor::Off);
    }
}
