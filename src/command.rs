//! SPI Commands for the ST7565R and UC1701 controllers
//!
//! Only the commands the driver sends at runtime are listed here. The
//! initialization sequences live in [`variant`](crate::variant) as raw tables.

use crate::traits;

/// ST7565R / UC1701
///
/// For more infos about the addresses and what they are doing look into the datasheets.
/// Commands carrying a parameter in their low bits are combined with
/// [`Command::with_param`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Lower nibble of the column address, parameter in bits 0..4
    ColumnAddressLow = 0x00,
    /// Upper nibble of the column address, parameter in bits 0..4
    ColumnAddressHigh = 0x10,
    /// Double byte command, followed by the 6 bit contrast value
    ElectronicVolume = 0x81,
    /// SEG output direction normal, used for top view
    SegDirectionNormal = 0xA0,
    /// SEG output direction reversed, used for bottom view
    SegDirectionReverse = 0xA1,
    /// Show the display memory
    AllPixelsOff = 0xA4,
    /// Set every pixel regardless of the display memory
    AllPixelsOn = 0xA5,
    /// Normal video
    DisplayNormal = 0xA6,
    /// Inverse video over the whole panel
    DisplayInverse = 0xA7,
    /// Panel off, controller in sleep mode
    DisplayOff = 0xAE,
    /// Panel on
    DisplayOn = 0xAF,
    /// Page address, parameter in bits 0..4
    PageAddress = 0xB0,
    /// COM output direction normal, used for bottom view
    ComDirectionNormal = 0xC0,
    /// COM output direction reversed, used for top view
    ComDirectionReverse = 0xC8,
}

impl Command {
    /// Combines the command with the parameter bits selected by `mask`
    pub(crate) fn with_param(self, param: u8, mask: u8) -> u8 {
        self as u8 | (param & mask)
    }
}

impl traits::Command for Command {
    /// Returns the address of the command
    fn address(self) -> u8 {
        self as u8
    }
}
