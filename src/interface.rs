use crate::{error::ErrorKind, traits::Command};
use core::marker::PhantomData;
use embedded_hal::{delay::DelayNs, digital::OutputPin, spi::SpiDevice};

/// The Connection Interface of the DOG displays
///
/// Every [`cmd`](DisplayInterface::cmd) or [`data`](DisplayInterface::data) call
/// is a single transaction on the [`SpiDevice`], so chip select stays low for
/// exactly one run of bytes of the same kind.
pub(crate) struct DisplayInterface<SPI, DC, RST> {
    /// SPI
    _spi: PhantomData<SPI>,
    /// A0: Data/Command Control Pin (High for data, Low for command)
    dc: DC,
    /// Pin for Resetting
    rst: RST,
}

impl<SPI, DC, RST> DisplayInterface<SPI, DC, RST>
where
    SPI: SpiDevice,
    DC: OutputPin,
    RST: OutputPin,
{
    /// Creates a new `DisplayInterface` struct
    pub fn new(dc: DC, rst: RST) -> Self {
        DisplayInterface {
            _spi: PhantomData,
            dc,
            rst,
        }
    }

    /// Basic function for sending [Commands](Command).
    pub(crate) fn cmd<T: Command>(
        &mut self,
        spi: &mut SPI,
        command: T,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.cmds(spi, &[command.address()])
    }

    /// Sends a run of raw command bytes in one transaction
    ///
    /// Used for the address commands, which carry their parameter in the low bits,
    /// and for the initialization tables.
    pub(crate) fn cmds(
        &mut self,
        spi: &mut SPI,
        bytes: &[u8],
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        if bytes.is_empty() {
            return Ok(());
        }
        // low for commands
        self.dc.set_low().map_err(ErrorKind::DcError)?;

        self.write(spi, bytes)
    }

    /// Basic function for sending [Commands](Command) and the parameter byte belonging to it.
    ///
    /// The parameter is a command byte as well, A0 stays low.
    pub(crate) fn cmd_with_param<T: Command>(
        &mut self,
        spi: &mut SPI,
        command: T,
        param: u8,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.cmds(spi, &[command.address(), param])
    }

    /// Basic function for sending an array of u8-values of display data over spi
    pub(crate) fn data(
        &mut self,
        spi: &mut SPI,
        data: &[u8],
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        if data.is_empty() {
            return Ok(());
        }
        // high for data
        self.dc.set_high().map_err(ErrorKind::DcError)?;

        self.write(spi, data)
    }

    // spi write helper/abstraction function
    fn write(&mut self, spi: &mut SPI, data: &[u8]) -> Result<(), ErrorKind<SPI, DC, RST>> {
        spi.write(data).map_err(ErrorKind::SpiError)
    }

    /// Resets the device.
    ///
    /// Keeps the reset pin low for `duration` us, then waits 1ms for the
    /// controller to come up.
    pub(crate) fn reset<DELAY: DelayNs>(
        &mut self,
        delay: &mut DELAY,
        duration: u32,
    ) -> Result<(), ErrorKind<SPI, DC, RST>> {
        self.rst.set_low().map_err(ErrorKind::RstError)?;
        delay.delay_us(duration);
        self.rst.set_high().map_err(ErrorKind::RstError)?;
        delay.delay_ms(1);
        Ok(())
    }

    /// Hands the pins back
    pub(crate) fn release(self) -> (DC, RST) {
        (self.dc, self.rst)
    }
}
