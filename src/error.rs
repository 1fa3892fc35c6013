//! Errors of the bus and the pins

use core::fmt::{Debug, Display, Formatter};

use embedded_hal::{digital::OutputPin, spi::SpiDevice};

/// Display error type
///
/// Drawing never fails on its own, out of range input is clipped. What is left
/// are the errors of the bus and of the two GPIOs.
#[derive(Eq, PartialEq)]
pub enum ErrorKind<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Encountered an SPI error
    SpiError(SPI::Error),

    /// Encountered an error on the A0 (data/command) GPIO
    DcError(DC::Error),

    /// Encountered an error on RST GPIO
    RstError(RST::Error),
}

impl<SPI, DC, RST> Clone for ErrorKind<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Clone,
    DC: OutputPin,
    DC::Error: Clone,
    RST: OutputPin,
    RST::Error: Clone,
{
    fn clone(&self) -> Self {
        match self {
            Self::SpiError(err) => Self::SpiError(err.clone()),
            Self::DcError(err) => Self::DcError(err.clone()),
            Self::RstError(err) => Self::RstError(err.clone()),
        }
    }
}

impl<SPI, DC, RST> Display for ErrorKind<SPI, DC, RST>
where
    SPI: SpiDevice,
    SPI::Error: Display,
    DC: OutputPin,
    DC::Error: Display,
    RST: OutputPin,
    RST::Error: Display,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => Display::fmt(&err, f),
            Self::DcError(err) => Display::fmt(&err, f),
            Self::RstError(err) => Display::fmt(&err, f),
        }
    }
}

impl<SPI, DC, RST> Debug for ErrorKind<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::SpiError(err) => f.debug_tuple("SpiError").field(err).finish(),
            Self::DcError(err) => f.debug_tuple("DcError").field(err).finish(),
            Self::RstError(err) => f.debug_tuple("RstError").field(err).finish(),
        }
    }
}
