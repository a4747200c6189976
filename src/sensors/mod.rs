//! Sensor modules for the LPS25HB
//!
//! This module provides types, enums, configuration structures and unit conversions for
//! the two measurement channels of the LPS25HB:
//! - Pressure (24-bit, 4096 LSB/hPa)
//! - Temperature (16-bit, 480 LSB/°C)
//!
//! All register operations are performed through methods on [`Lps25hb`](crate::Lps25hb).

pub mod pressure;
pub mod temperature;

pub use pressure::{PRESSURE_SENSITIVITY, PressureAveraging, from_lsb_to_hpa};
pub use temperature::{
    TEMPERATURE_OFFSET_DEGC, TEMPERATURE_SENSITIVITY, TemperatureAveraging, from_lsb_to_degc,
};

use crate::power::OutputDataRate;

/// Measurement configuration
///
/// Covers `CTRL_REG1` (data rate, block data update) and `RES_CONF` (averaging).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Output data rate, or power-down / one-shot
    pub data_rate: OutputDataRate,
    /// Hold output registers until both MSB and LSB have been read
    pub block_data_update: bool,
    /// Pressure internal averaging
    pub pressure_avg: PressureAveraging,
    /// Temperature internal averaging
    pub temperature_avg: TemperatureAveraging,
}

impl Default for SensorConfig {
    /// Power-down with the reset-default averaging and block data update enabled
    fn default() -> Self {
        Self {
            data_rate: OutputDataRate::PowerDown,
            block_data_update: true,
            pressure_avg: PressureAveraging::Avg32,
            temperature_avg: TemperatureAveraging::Avg16,
        }
    }
}

impl SensorConfig {
    /// Continuous 25 Hz sampling with light averaging
    pub const fn high_rate() -> Self {
        Self {
            data_rate: OutputDataRate::Hz25,
            block_data_update: true,
            pressure_avg: PressureAveraging::Avg32,
            temperature_avg: TemperatureAveraging::Avg16,
        }
    }

    /// Continuous 1 Hz sampling with maximum averaging (lowest noise)
    pub const fn low_noise() -> Self {
        Self {
            data_rate: OutputDataRate::Hz1,
            block_data_update: true,
            pressure_avg: PressureAveraging::Avg512,
            temperature_avg: TemperatureAveraging::Avg64,
        }
    }

    /// One-shot conversions triggered by the host
    pub const fn one_shot() -> Self {
        Self {
            data_rate: OutputDataRate::OneShot,
            block_data_update: true,
            pressure_avg: PressureAveraging::Avg512,
            temperature_avg: TemperatureAveraging::Avg64,
        }
    }
}
