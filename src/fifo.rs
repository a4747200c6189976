//! FIFO (First In First Out) buffer management
//!
//! The LPS25HB has a 32-slot FIFO holding pressure and temperature samples. The driver
//! only configures it and reports its flags; draining it is a matter of reading the
//! output registers [`FifoStatus::level`] times.
//!
//! # Example
//!
//! ```ignore
//! # use lps25hb::{Lps25hb, fifo::{FifoConfig, FifoMode}};
//! # let mut baro: Lps25hb<_> = todo!();
//! // Keep the newest samples, flag when 16 are stored
//! let config = FifoConfig {
//!     mode: FifoMode::Stream,
//!     watermark: 15,
//!     ..Default::default()
//! };
//! baro.configure_fifo(&config)?;
//!
//! let status = baro.fifo_status_get()?;
//! for _ in 0..status.level {
//!     let raw = baro.pressure_raw_get()?;
//! }
//! # Ok::<(), lps25hb::Error<()>>(())
//! ```

/// FIFO depth in samples
pub const FIFO_DEPTH: u8 = 32;

/// Largest value the 5-bit watermark field can hold
pub const FIFO_WATERMARK_MAX: u8 = 0x1F;

/// FIFO operating mode (`FIFO_CTRL.F_MODE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FifoMode {
    /// FIFO disabled, output registers hold the newest sample (reset default)
    #[default]
    Bypass = 0,
    /// Stops collecting when full
    Fifo = 1,
    /// Keeps the newest samples, oldest are overwritten when full
    Stream = 2,
    /// Stream mode until an interrupt event, then FIFO mode
    StreamToFifo = 3,
    /// Bypass mode until an interrupt event, then stream mode
    BypassToStream = 4,
    /// Output is the running mean of the watermark-selected number of samples
    Mean = 6,
    /// Bypass mode until an interrupt event, then FIFO mode
    BypassToFifo = 7,
}

impl FifoMode {
    /// Get the raw 3-bit `F_MODE` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw 3-bit `F_MODE` field value
    ///
    /// The reserved value 5 decodes as [`Self::Bypass`].
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x07 {
            1 => Self::Fifo,
            2 => Self::Stream,
            3 => Self::StreamToFifo,
            4 => Self::BypassToStream,
            6 => Self::Mean,
            7 => Self::BypassToFifo,
            _ => Self::Bypass,
        }
    }
}

/// FIFO configuration
///
/// Applied by [`Lps25hb::configure_fifo`](crate::Lps25hb::configure_fifo), which also
/// sets `CTRL_REG2.FIFO_EN` for every mode other than bypass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoConfig {
    /// FIFO operating mode
    pub mode: FifoMode,
    /// Watermark level (0-31)
    ///
    /// In mean mode this selects the number of averaged samples: 1, 3, 7, 15 and 31
    /// average 2, 4, 8, 16 and 32 samples.
    pub watermark: u8,
    /// Decimate the mean-mode output to 1 Hz
    pub mean_decimator: bool,
    /// Stop filling at the watermark level
    pub stop_on_threshold: bool,
}

impl Default for FifoConfig {
    fn default() -> Self {
        Self {
            mode: FifoMode::Bypass,
            watermark: 0,
            mean_decimator: false,
            stop_on_threshold: false,
        }
    }
}

impl FifoConfig {
    /// Running mean over 32 samples, the datasheet's recommended noise-reduction setup
    pub const fn mean_32() -> Self {
        Self {
            mode: FifoMode::Mean,
            watermark: 31,
            mean_decimator: false,
            stop_on_threshold: false,
        }
    }

    /// Stream mode flagging the watermark at `watermark` samples
    pub const fn stream(watermark: u8) -> Self {
        Self {
            mode: FifoMode::Stream,
            watermark: watermark & FIFO_WATERMARK_MAX,
            mean_decimator: false,
            stop_on_threshold: false,
        }
    }

    /// Check if this configuration needs the FIFO enabled
    pub const fn fifo_enabled(&self) -> bool {
        !matches!(self.mode, FifoMode::Bypass)
    }
}

/// FIFO status snapshot (`FIFO_STATUS`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct FifoStatus {
    /// Number of unread samples
    pub level: u8,
    /// FIFO is empty
    pub empty: bool,
    /// FIFO is full and at least one sample was overwritten
    pub overrun: bool,
    /// Fill level is at or above the watermark
    pub threshold_reached: bool,
}

impl FifoStatus {
    /// Decode a raw `FIFO_STATUS` byte
    pub const fn from_raw(value: u8) -> Self {
        Self {
            level: value & 0x1F,
            empty: (value & 0x20) != 0,
            overrun: (value & 0x40) != 0,
            threshold_reached: (value & 0x80) != 0,
        }
    }

    /// Convert to the raw `FIFO_STATUS` byte
    pub const fn to_raw(&self) -> u8 {
        let mut value = self.level & 0x1F;
        if self.empty {
            value |= 0x20;
        }
        if self.overrun {
            value |= 0x40;
        }
        if self.threshold_reached {
            value |= 0x80;
        }
        value
    }
}
