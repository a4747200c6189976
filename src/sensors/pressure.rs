//! Pressure sensor types and conversion
//!
//! The LPS25HB reports pressure as a 24-bit unsigned count with a sensitivity of
//! 4096 LSB/hPa.

/// Pressure sensitivity in LSB/hPa
pub const PRESSURE_SENSITIVITY: f32 = 4096.0;

/// Number of internal pressure samples averaged per output sample (`RES_CONF.AVGP`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressureAveraging {
    /// 8 internal samples
    Avg8 = 0,
    /// 32 internal samples (reset default)
    #[default]
    Avg32 = 1,
    /// 128 internal samples
    Avg128 = 2,
    /// 512 internal samples (lowest noise)
    Avg512 = 3,
}

impl PressureAveraging {
    /// Get the raw `AVGP` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw `AVGP` field value
    ///
    /// Only the low two bits are significant.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Avg8,
            1 => Self::Avg32,
            2 => Self::Avg128,
            _ => Self::Avg512,
        }
    }

    /// Get the number of internal samples averaged
    #[must_use]
    pub const fn samples(self) -> u16 {
        match self {
            Self::Avg8 => 8,
            Self::Avg32 => 32,
            Self::Avg128 => 128,
            Self::Avg512 => 512,
        }
    }
}

/// Convert a pressure count to hectopascal
///
/// `lsb` is the unshifted 24-bit count; divide the value returned by
/// [`Lps25hb::pressure_raw_get`](crate::Lps25hb::pressure_raw_get) by 256 first,
/// or use [`Lps25hb::read_pressure_hpa`](crate::Lps25hb::read_pressure_hpa).
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn from_lsb_to_hpa(lsb: u32) -> f32 {
    lsb as f32 / PRESSURE_SENSITIVITY
}
