//! Bus interface implementations for the LPS25HB
//!
//! This module provides implementations of the `device-driver` register interface for
//! I2C and SPI communication with the LPS25HB, plus the enums selecting the serial
//! interface configuration stored in the device itself.
//!
//! Both buses need a flag in the register address byte for multi-byte transfers to
//! auto-increment the register address:
//! - I2C: bit 7 of the sub-address
//! - SPI: bit 6 (`MS`), with bit 7 (`RW`) set for reads

use crate::{I2C_ADDRESS_SA0_HIGH, I2C_ADDRESS_SA0_LOW};
use device_driver::RegisterInterface;

const I2C_AUTO_INCREMENT: u8 = 0x80;
const SPI_READ: u8 = 0x80;
const SPI_AUTO_INCREMENT: u8 = 0x40;

/// SPI serial interface mode (`CTRL_REG1.SIM`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiMode {
    /// 4-wire interface (reset default)
    #[default]
    FourWire = 0,
    /// 3-wire interface, SDI/SDO shared
    ThreeWire = 1,
}

impl SpiMode {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::ThreeWire } else { Self::FourWire }
    }

    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::ThreeWire)
    }
}

/// I2C interface enable (`CTRL_REG2.I2C_DIS`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum I2cMode {
    /// I2C interface enabled (reset default)
    #[default]
    Enabled = 0,
    /// I2C interface disabled, SPI only
    Disabled = 1,
}

impl I2cMode {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::Disabled } else { Self::Enabled }
    }

    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::Disabled)
    }
}

/// I2C interface for the LPS25HB
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C> I2cInterface<I2C> {
    /// Create a new I2C interface with the default address (0x5C, SA0 pin LOW)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    ///
    /// # Example
    /// ```ignore
    /// let interface = I2cInterface::default(i2c);
    /// let mut baro = Lps25hb::new(interface);
    /// ```
    pub const fn default(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_LOW,
        }
    }

    /// Create a new I2C interface with the alternative address (0x5D, SA0 pin HIGH)
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    pub const fn alternative(i2c: I2C) -> Self {
        Self {
            i2c,
            address: I2C_ADDRESS_SA0_HIGH,
        }
    }

    /// Create a new I2C interface with a custom 7-bit device address
    ///
    /// # Arguments
    /// * `i2c` - The I2C peripheral
    /// * `address` - The 7-bit I2C device address
    pub const fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Get the 7-bit device address in use
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Consume the interface and return the I2C peripheral
    pub fn release(self) -> I2C {
        self.i2c
    }

    const fn sub_address(address: u8, len: usize) -> u8 {
        if len > 1 {
            address | I2C_AUTO_INCREMENT
        } else {
            address
        }
    }
}

impl<I2C, E> RegisterInterface for I2cInterface<I2C>
where
    I2C: embedded_hal::i2c::I2c<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for I2C
        let sub_address = Self::sub_address(address, read_data.len());
        self.i2c.write_read(self.address, &[sub_address], read_data)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for I2C
        let sub_address = Self::sub_address(address, write_data.len());

        // Adjacent writes go out back to back, without a repeated start
        let mut operations = [
            embedded_hal::i2c::Operation::Write(&[sub_address]),
            embedded_hal::i2c::Operation::Write(write_data),
        ];

        self.i2c.transaction(self.address, &mut operations)
    }
}

/// SPI interface for the LPS25HB
///
/// # Note on Chip Select
///
/// This interface uses the `SpiDevice` trait from `embedded-hal`, which manages
/// the chip select (CS) pin automatically. If using `embedded-hal-bus`:
/// ```ignore
/// let spi_device = embedded_hal_bus::spi::ExclusiveDevice::new(spi_bus, cs_pin, delay);
/// let interface = SpiInterface::new(spi_device);
/// ```
///
/// The LPS25HB uses SPI mode 3 (CPOL = 1, CPHA = 1).
pub struct SpiInterface<SPI> {
    spi: SPI,
}

impl<SPI> SpiInterface<SPI> {
    /// Create a new SPI interface with the given SPI device
    pub const fn new(spi: SPI) -> Self {
        Self { spi }
    }

    /// Consume the interface and return the SPI device
    pub fn release(self) -> SPI {
        self.spi
    }

    const fn command(address: u8, len: usize) -> u8 {
        let address = address & 0x3F;
        if len > 1 {
            address | SPI_AUTO_INCREMENT
        } else {
            address
        }
    }
}

impl<SPI, E> RegisterInterface for SpiInterface<SPI>
where
    SPI: embedded_hal::spi::SpiDevice<Error = E>,
{
    type Error = E;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in read_data.len() for SPI
        let command = Self::command(address, read_data.len()) | SPI_READ;

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[command]),
            embedded_hal::spi::Operation::Read(read_data),
        ];

        self.spi.transaction(&mut operations)
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let _ = size_bits; // Size is implicit in write_data.len() for SPI
        let command = Self::command(address, write_data.len());

        let mut operations = [
            embedded_hal::spi::Operation::Write(&[command]),
            embedded_hal::spi::Operation::Write(write_data),
        ];

        self.spi.transaction(&mut operations)
    }
}
