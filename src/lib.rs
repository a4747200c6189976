#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

pub mod fifo;
pub mod interrupt;
pub mod power;

// Re-export main types
pub use device::{DataStatus, Lps25hb, UcfLine};
pub use interface::{I2cInterface, I2cMode, SpiInterface, SpiMode};
pub use sensors::{
    PRESSURE_SENSITIVITY, PressureAveraging, SensorConfig, TEMPERATURE_OFFSET_DEGC,
    TEMPERATURE_SENSITIVITY, TemperatureAveraging, from_lsb_to_degc, from_lsb_to_hpa,
};

pub use fifo::{FIFO_DEPTH, FIFO_WATERMARK_MAX, FifoConfig, FifoMode, FifoStatus};
pub use interrupt::{
    InterruptConfig, InterruptPinConfig, InterruptPolarity, InterruptSignal, InterruptSource,
    NotificationMode, PinMode, ThresholdInterruptConfig, ThresholdSign,
};
pub use power::OutputDataRate;

/// LPS25HB 7-bit I2C address when the SA0 pin is low (default: 0x5C)
///
/// Use [`I2cInterface::default()`] for this configuration.
pub const I2C_ADDRESS_SA0_LOW: u8 = 0x5C;

/// LPS25HB 7-bit I2C address when the SA0 pin is high (alternative: 0x5D)
///
/// Use [`I2cInterface::alternative()`] for this configuration.
pub const I2C_ADDRESS_SA0_HIGH: u8 = 0x5D;

/// LPS25HB 8-bit I2C read address with SA0 low, as printed in the datasheet
pub const I2C_ADD_L: u8 = 0xB9;

/// LPS25HB 8-bit I2C read address with SA0 high, as printed in the datasheet
pub const I2C_ADD_H: u8 = 0xBB;

/// Expected value of `WHO_AM_I` register
pub const WHO_AM_I_VALUE: u8 = 0xBD;

/// Driver errors
#[derive(Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// Communication error with the device
    Bus(E),
    /// Invalid `WHO_AM_I` register value (contains the actual value read)
    InvalidDevice(u8),
    /// A self-clearing control bit (reset, boot, one-shot) did not clear in time
    Timeout,
}

impl<E> From<E> for Error<E> {
    fn from(error: E) -> Self {
        Self::Bus(error)
    }
}
