//! Temperature sensor types and conversion
//!
//! Temperature is a signed 16-bit count: 480 LSB/°C with an offset of 42.5 °C.

/// Temperature sensitivity in LSB/°C
pub const TEMPERATURE_SENSITIVITY: f32 = 480.0;

/// Temperature reading at a raw count of zero, in °C
pub const TEMPERATURE_OFFSET_DEGC: f32 = 42.5;

/// Number of internal temperature samples averaged per output sample (`RES_CONF.AVGT`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TemperatureAveraging {
    /// 8 internal samples
    Avg8 = 0,
    /// 16 internal samples (reset default)
    #[default]
    Avg16 = 1,
    /// 32 internal samples
    Avg32 = 2,
    /// 64 internal samples
    Avg64 = 3,
}

impl TemperatureAveraging {
    /// Get the raw `AVGT` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw `AVGT` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::Avg8,
            1 => Self::Avg16,
            2 => Self::Avg32,
            _ => Self::Avg64,
        }
    }

    /// Get the number of internal samples averaged
    #[must_use]
    pub const fn samples(self) -> u8 {
        match self {
            Self::Avg8 => 8,
            Self::Avg16 => 16,
            Self::Avg32 => 32,
            Self::Avg64 => 64,
        }
    }
}

/// Convert a raw temperature count to degrees Celsius
#[must_use]
pub fn from_lsb_to_degc(lsb: i16) -> f32 {
    TEMPERATURE_OFFSET_DEGC + (f32::from(lsb) / TEMPERATURE_SENSITIVITY)
}
