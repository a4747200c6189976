//! Interrupt configuration and management
//!
//! The LPS25HB has a single interrupt pin (`INT_DRDY`) that can carry:
//! - Differential pressure high/low events (against `THS_P`)
//! - Data ready
//! - FIFO overrun, watermark and empty flags
//!
//! # Example
//!
//! ```ignore
//! # use lps25hb::{Lps25hb, interrupt::*};
//! # let mut baro: Lps25hb<_> = todo!();
//! // Active-low open-drain pin carrying the pressure-high event
//! let pin_config = InterruptPinConfig {
//!     signal: InterruptSignal::PressureHigh,
//!     pin_mode: PinMode::OpenDrain,
//!     polarity: InterruptPolarity::ActiveLow,
//! };
//! baro.configure_interrupt_pin(&pin_config)?;
//!
//! // Fire when pressure exceeds the reference by 2 hPa, latched until INT_SOURCE is read
//! let threshold = ThresholdInterruptConfig {
//!     sign: ThresholdSign::Positive,
//!     notification: NotificationMode::Latched,
//!     threshold: ThresholdInterruptConfig::threshold_from_hpa(2.0),
//! };
//! baro.configure_threshold_interrupt(&threshold)?;
//! # Ok::<(), lps25hb::Error<()>>(())
//! ```

/// Data signal routed to the interrupt pin (`CTRL_REG3.INT_S`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptSignal {
    /// Data ready or FIFO flags, as selected in `CTRL_REG4` (reset default)
    #[default]
    DataReadyOrFifoFlags = 0,
    /// Differential pressure high
    PressureHigh = 1,
    /// Differential pressure low
    PressureLow = 2,
    /// Differential pressure high or low
    PressureHighOrLow = 3,
}

impl InterruptSignal {
    /// Get the raw `INT_S` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw `INT_S` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::DataReadyOrFifoFlags,
            1 => Self::PressureHigh,
            2 => Self::PressureLow,
            _ => Self::PressureHighOrLow,
        }
    }
}

/// Interrupt pin output stage (`CTRL_REG3.PP_OD`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull (reset default)
    #[default]
    PushPull = 0,
    /// Open-drain
    OpenDrain = 1,
}

impl PinMode {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::OpenDrain } else { Self::PushPull }
    }

    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::OpenDrain)
    }
}

/// Interrupt pin polarity (`CTRL_REG3.INT_H_L`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InterruptPolarity {
    /// Active high (reset default)
    #[default]
    ActiveHigh = 0,
    /// Active low
    ActiveLow = 1,
}

impl InterruptPolarity {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::ActiveLow } else { Self::ActiveHigh }
    }

    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::ActiveLow)
    }
}

/// Which threshold crossings raise an interrupt (`INTERRUPT_CFG.PE`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThresholdSign {
    /// No threshold events (reset default)
    #[default]
    NoThreshold = 0,
    /// Differential pressure above `+THS_P`
    Positive = 1,
    /// Differential pressure below `-THS_P`
    Negative = 2,
    /// Both directions
    Both = 3,
}

impl ThresholdSign {
    /// Get the raw `PE` field value
    #[must_use]
    pub const fn bits(self) -> u8 {
        self as u8
    }

    /// Decode the raw `PE` field value
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        match bits & 0x03 {
            0 => Self::NoThreshold,
            1 => Self::Positive,
            2 => Self::Negative,
            _ => Self::Both,
        }
    }
}

/// Interrupt request notification (`INTERRUPT_CFG.LIR`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NotificationMode {
    /// Interrupt follows the event (reset default)
    #[default]
    Pulsed = 0,
    /// Interrupt is latched until `INT_SOURCE` is read
    Latched = 1,
}

impl NotificationMode {
    pub(crate) const fn from_bit(bit: bool) -> Self {
        if bit { Self::Latched } else { Self::Pulsed }
    }

    pub(crate) const fn bit(self) -> bool {
        matches!(self, Self::Latched)
    }
}

/// Interrupt pin electrical configuration (`CTRL_REG3`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptPinConfig {
    /// Signal routed to the pin
    pub signal: InterruptSignal,
    /// Output stage
    pub pin_mode: PinMode,
    /// Active level
    pub polarity: InterruptPolarity,
}

impl InterruptPinConfig {
    /// Active-low, open-drain pin carrying the `CTRL_REG4` flags (shared interrupt lines)
    pub const fn open_drain_active_low() -> Self {
        Self {
            signal: InterruptSignal::DataReadyOrFifoFlags,
            pin_mode: PinMode::OpenDrain,
            polarity: InterruptPolarity::ActiveLow,
        }
    }
}

/// Events routed to the interrupt pin when the signal is
/// [`InterruptSignal::DataReadyOrFifoFlags`] (`CTRL_REG4`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct InterruptConfig {
    /// New pressure/temperature data available
    pub data_ready: bool,
    /// FIFO overrun
    pub fifo_overrun: bool,
    /// FIFO watermark reached
    pub fifo_threshold: bool,
    /// FIFO empty
    pub fifo_empty: bool,
}

impl InterruptConfig {
    /// Create configuration with only data ready enabled
    pub const fn data_ready_only() -> Self {
        Self {
            data_ready: true,
            fifo_overrun: false,
            fifo_threshold: false,
            fifo_empty: false,
        }
    }

    /// Create configuration for FIFO batch reading
    pub const fn fifo_batch() -> Self {
        Self {
            data_ready: false,
            fifo_overrun: true,
            fifo_threshold: true,
            fifo_empty: false,
        }
    }

    /// Check if any event is enabled
    pub const fn any_enabled(&self) -> bool {
        self.data_ready || self.fifo_overrun || self.fifo_threshold || self.fifo_empty
    }
}

/// Differential pressure interrupt configuration
///
/// Applied by
/// [`Lps25hb::configure_threshold_interrupt`](crate::Lps25hb::configure_threshold_interrupt),
/// which also enables interrupt generation (`CTRL_REG1.DIFF_EN`) unless the sign is
/// [`ThresholdSign::NoThreshold`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ThresholdInterruptConfig {
    /// Crossing directions that raise an event
    pub sign: ThresholdSign,
    /// Pulsed or latched notification
    pub notification: NotificationMode,
    /// Unsigned threshold in units of 1/16 hPa
    pub threshold: u16,
}

impl ThresholdInterruptConfig {
    /// Threshold sensitivity in LSB/hPa
    pub const THRESHOLD_SENSITIVITY: f32 = 16.0;

    /// Convert a threshold in hPa to the `THS_P` register value, saturating at the
    /// register range
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn threshold_from_hpa(hpa: f32) -> u16 {
        let lsb = hpa * Self::THRESHOLD_SENSITIVITY;
        lsb.clamp(0.0, f32::from(u16::MAX)) as u16
    }

    /// Check if the configuration enables any threshold event
    pub const fn enabled(&self) -> bool {
        !matches!(self.sign, ThresholdSign::NoThreshold)
    }
}

/// Interrupt source snapshot (`INT_SOURCE`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InterruptSource {
    /// Differential pressure high event
    pub pressure_high: bool,
    /// Differential pressure low event
    pub pressure_low: bool,
    /// One or more interrupt events have been generated
    pub active: bool,
}

impl InterruptSource {
    /// Check if any event flag is set
    pub const fn any_set(&self) -> bool {
        self.pressure_high || self.pressure_low || self.active
    }
}
