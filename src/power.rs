//! Power modes and output data rate
//!
//! The LPS25HB power state and sampling rate share one 4-bit field in `CTRL_REG1`:
//! bit 7 (`PD`) takes the device out of power-down and bits 6:4 (`ODR`) choose the rate.
//! With `PD` set and `ODR` cleared the device waits for one-shot triggers.
//!
//! # Example
//!
//! ```ignore
//! # use lps25hb::{Lps25hb, OutputDataRate};
//! # let mut baro: Lps25hb<_> = todo!();
//! baro.data_rate_set(OutputDataRate::Hz12_5)?;
//! assert_eq!(baro.data_rate_get()?, OutputDataRate::Hz12_5);
//! # Ok::<(), lps25hb::Error<()>>(())
//! ```

/// Output data rate selection (`CTRL_REG1.PD` + `CTRL_REG1.ODR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum OutputDataRate {
    /// Power-down mode (reset default)
    #[default]
    PowerDown = 0,
    /// Active, conversions started by the one-shot bit
    OneShot = 8,
    /// 1 Hz continuous
    Hz1 = 9,
    /// 7 Hz continuous
    Hz7 = 10,
    /// 12.5 Hz continuous
    Hz12_5 = 11,
    /// 25 Hz continuous
    Hz25 = 12,
}

impl OutputDataRate {
    /// Get the raw 4-bit `PD`/`ODR` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw 4-bit `PD`/`ODR` field value
    ///
    /// Combinations the datasheet leaves undefined decode as [`Self::PowerDown`].
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x0F {
            8 => Self::OneShot,
            9 => Self::Hz1,
            10 => Self::Hz7,
            11 => Self::Hz12_5,
            12 => Self::Hz25,
            _ => Self::PowerDown,
        }
    }

    /// Check if the device is powered
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::PowerDown)
    }

    /// Get the sample rate in Hz, or `None` when not sampling continuously
    #[must_use]
    pub const fn rate_hz(self) -> Option<f32> {
        match self {
            Self::PowerDown | Self::OneShot => None,
            Self::Hz1 => Some(1.0),
            Self::Hz7 => Some(7.0),
            Self::Hz12_5 => Some(12.5),
            Self::Hz25 => Some(25.0),
        }
    }

    /// Get the sample period in microseconds, or `None` when not sampling continuously
    #[must_use]
    pub const fn sample_period_us(self) -> Option<u32> {
        match self {
            Self::PowerDown | Self::OneShot => None,
            Self::Hz1 => Some(1_000_000),
            Self::Hz7 => Some(142_857),
            Self::Hz12_5 => Some(80_000),
            Self::Hz25 => Some(40_000),
        }
    }
}
