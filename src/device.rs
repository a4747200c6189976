//! High-level driver API for the LPS25HB
//!
//! This module provides the register accessors of the LPS25HB: one `_set`/`_get` pair
//! per named setting, the raw data readers, status queries and the configuration
//! blocks built on top of them.
//!
//! Every `_set` accessor is a read-modify-write of the owning register. If the read
//! fails the write is never issued, and all other bits of the register are preserved.

use crate::registers::Lps25hbRegisters as RegisterDevice;
use crate::{Error, WHO_AM_I_VALUE};

use device_driver::RegisterInterface;

use crate::fifo::{FIFO_WATERMARK_MAX, FifoConfig, FifoMode, FifoStatus};
use crate::interface::{I2cMode, SpiMode};
use crate::interrupt::{
    InterruptConfig, InterruptPinConfig, InterruptPolarity, InterruptSignal, InterruptSource,
    NotificationMode, PinMode, ThresholdInterruptConfig, ThresholdSign,
};
use crate::power::OutputDataRate;
use crate::sensors::{
    PressureAveraging, SensorConfig, TemperatureAveraging, from_lsb_to_degc, from_lsb_to_hpa,
};

/// Polling interval used while waiting for self-clearing control bits
const POLL_INTERVAL_MS: u32 = 1;

/// Upper bound for software reset and memory reboot to complete
const RESET_TIMEOUT_MS: u32 = 10;

/// Upper bound for a one-shot conversion with maximum averaging
const ONE_SHOT_TIMEOUT_MS: u32 = 100;

/// Data status snapshot (`STATUS_REG`)
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[allow(clippy::struct_excessive_bools)]
pub struct DataStatus {
    /// New pressure sample available
    pub pressure_ready: bool,
    /// New temperature sample available
    pub temperature_ready: bool,
    /// A pressure sample was overwritten before being read
    pub pressure_overrun: bool,
    /// A temperature sample was overwritten before being read
    pub temperature_overrun: bool,
}

/// One entry of a predefined register configuration
///
/// Configuration tools export device setups as a list of register writes; feed them to
/// [`Lps25hb::load_config`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct UcfLine {
    /// Register address
    pub address: u8,
    /// Value to write
    pub data: u8,
}

impl UcfLine {
    /// Create a configuration entry
    pub const fn new(address: u8, data: u8) -> Self {
        Self { address, data }
    }
}

/// Main driver for the LPS25HB
pub struct Lps25hb<I> {
    device: RegisterDevice<I>,
}

impl<I> Lps25hb<I>
where
    I: RegisterInterface<AddressType = u8>,
{
    /// Create a new LPS25HB driver instance
    ///
    /// No bus traffic happens here. Call [`init`](Self::init) to verify the device
    /// identity.
    pub fn new(interface: I) -> Self {
        Self {
            device: RegisterDevice::new(interface),
        }
    }

    /// Verify that the device on the bus is an LPS25HB
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The `WHO_AM_I` register contains an unexpected value
    pub fn init(&mut self) -> Result<(), Error<I::Error>> {
        let who_am_i = self.device_id_get()?;

        if who_am_i != WHO_AM_I_VALUE {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "LPS25HB: unexpected WHO_AM_I 0x{:02X} (expected 0x{:02X})",
                who_am_i,
                WHO_AM_I_VALUE
            );
            return Err(Error::InvalidDevice(who_am_i));
        }

        Ok(())
    }

    /// Consume the driver and return the underlying interface
    pub fn release(self) -> I {
        self.device.interface
    }

    /// Get a reference to the underlying register device (for advanced usage)
    pub const fn device(&self) -> &RegisterDevice<I> {
        &self.device
    }

    /// Get a mutable reference to the underlying register device (for advanced usage)
    pub const fn device_mut(&mut self) -> &mut RegisterDevice<I> {
        &mut self.device
    }

    // ==================== RAW ACCESS ====================

    /// Read `buffer.len()` consecutive registers starting at `address`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn read_register(&mut self, address: u8, buffer: &mut [u8]) -> Result<(), Error<I::Error>> {
        let size_bits = (buffer.len() * 8) as u32;
        self.device
            .interface
            .read_register(address, size_bits, buffer)?;
        Ok(())
    }

    /// Write `data` to consecutive registers starting at `address`
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_possible_truncation)]
    pub fn write_register(&mut self, address: u8, data: &[u8]) -> Result<(), Error<I::Error>> {
        let size_bits = (data.len() * 8) as u32;
        self.device
            .interface
            .write_register(address, size_bits, data)?;
        Ok(())
    }

    /// Apply a predefined configuration, one register write per entry
    ///
    /// Entries are written in order and loading stops at the first failure.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn load_config(&mut self, config: &[UcfLine]) -> Result<(), Error<I::Error>> {
        for line in config {
            self.write_register(line.address, &[line.data])?;
        }

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: loaded {} register writes", config.len());

        Ok(())
    }

    // ==================== RES_CONF ====================

    /// Set the pressure internal averaging
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_avg_set(&mut self, avg: PressureAveraging) -> Result<(), Error<I::Error>> {
        self.device.res_conf().modify(|w| {
            w.set_avgp(avg.bits());
        })?;
        Ok(())
    }

    /// Get the pressure internal averaging
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_avg_get(&mut self) -> Result<PressureAveraging, Error<I::Error>> {
        let reg = self.device.res_conf().read()?;
        Ok(PressureAveraging::from_bits(reg.avgp()))
    }

    /// Set the temperature internal averaging
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_avg_set(
        &mut self,
        avg: TemperatureAveraging,
    ) -> Result<(), Error<I::Error>> {
        self.device.res_conf().modify(|w| {
            w.set_avgt(avg.bits());
        })?;
        Ok(())
    }

    /// Get the temperature internal averaging
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_avg_get(&mut self) -> Result<TemperatureAveraging, Error<I::Error>> {
        let reg = self.device.res_conf().read()?;
        Ok(TemperatureAveraging::from_bits(reg.avgt()))
    }

    // ==================== CTRL_REG1 ====================

    /// Set the SPI serial interface mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn spi_mode_set(&mut self, mode: SpiMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_sim(mode.bit());
        })?;
        Ok(())
    }

    /// Get the SPI serial interface mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn spi_mode_get(&mut self) -> Result<SpiMode, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(SpiMode::from_bit(reg.sim()))
    }

    /// Reset the autozero function (`RESET_AZ`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_rst_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_reset_az(enable);
        })?;
        Ok(())
    }

    /// Get the autozero reset bit (`RESET_AZ`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_rst_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.reset_az())
    }

    /// Enable or disable block data update
    ///
    /// With block data update enabled the output registers are not refreshed until
    /// both the low and high parts have been read.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn block_data_update_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_bdu(enable);
        })?;
        Ok(())
    }

    /// Check whether block data update is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn block_data_update_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.bdu())
    }

    /// Enable or disable interrupt generation (`DIFF_EN`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_generation_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_diff_en(enable);
        })?;
        Ok(())
    }

    /// Check whether interrupt generation is enabled (`DIFF_EN`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_generation_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(reg.diff_en())
    }

    /// Set the output data rate and power state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_rate_set(&mut self, rate: OutputDataRate) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_1().modify(|w| {
            w.set_odr(rate.bits());
        })?;
        Ok(())
    }

    /// Get the output data rate and power state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn data_rate_get(&mut self) -> Result<OutputDataRate, Error<I::Error>> {
        let reg = self.device.ctrl_reg_1().read()?;
        Ok(OutputDataRate::from_bits(reg.odr()))
    }

    // ==================== CTRL_REG2 ====================

    /// Set the one-shot bit, starting a single conversion
    ///
    /// The device clears the bit once the conversion is done. See
    /// [`trigger_one_shot`](Self::trigger_one_shot) for a blocking variant.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn one_shot_trigger_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_one_shot(enable);
        })?;
        Ok(())
    }

    /// Check whether a one-shot conversion is still pending
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn one_shot_trigger_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.one_shot())
    }

    /// Enable or disable autozero
    ///
    /// When enabled, the current pressure is stored in `REF_P` and subtracted from
    /// subsequent samples.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_autozero(enable);
        })?;
        Ok(())
    }

    /// Check whether autozero is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn autozero_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.autozero())
    }

    /// Set the software reset bit
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_swreset(enable);
        })?;
        Ok(())
    }

    /// Check whether a software reset is in progress
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn reset_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.swreset())
    }

    /// Enable or disable the I2C interface
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i2c_interface_set(&mut self, mode: I2cMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_i_2_c_dis(mode.bit());
        })?;
        Ok(())
    }

    /// Get the I2C interface state
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn i2c_interface_get(&mut self) -> Result<I2cMode, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(I2cMode::from_bit(reg.i_2_c_dis()))
    }

    /// Enable or disable the 1 Hz decimation of the FIFO mean output
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mean_decimator_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_fifo_mean_dec(enable);
        })?;
        Ok(())
    }

    /// Check whether FIFO mean decimation is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mean_decimator_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.fifo_mean_dec())
    }

    /// Stop filling the FIFO once the watermark level is reached
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn stop_on_fifo_threshold_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_stop_on_fth(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO stops at the watermark level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn stop_on_fifo_threshold_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.stop_on_fth())
    }

    /// Enable or disable the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_fifo_en(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO is enabled
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.fifo_en())
    }

    /// Set the memory reboot bit
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn boot_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_2().modify(|w| {
            w.set_boot(enable);
        })?;
        Ok(())
    }

    /// Check whether a memory reboot is in progress
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn boot_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_2().read()?;
        Ok(reg.boot())
    }

    // ==================== CTRL_REG3 ====================

    /// Select the data signal routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_pin_mode_set(&mut self, signal: InterruptSignal) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_s(signal.bits());
        })?;
        Ok(())
    }

    /// Get the data signal routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_pin_mode_get(&mut self) -> Result<InterruptSignal, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read()?;
        Ok(InterruptSignal::from_bits(reg.int_s()))
    }

    /// Set the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_mode_set(&mut self, mode: PinMode) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_pp_od(mode.bit());
        })?;
        Ok(())
    }

    /// Get the interrupt pin output stage
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pin_mode_get(&mut self) -> Result<PinMode, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read()?;
        Ok(PinMode::from_bit(reg.pp_od()))
    }

    /// Set the interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_polarity_set(&mut self, polarity: InterruptPolarity) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_h_l(polarity.bit());
        })?;
        Ok(())
    }

    /// Get the interrupt pin polarity
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_polarity_get(&mut self) -> Result<InterruptPolarity, Error<I::Error>> {
        let reg = self.device.ctrl_reg_3().read()?;
        Ok(InterruptPolarity::from_bit(reg.int_h_l()))
    }

    // ==================== CTRL_REG4 ====================

    /// Route the data-ready signal to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn drdy_on_int_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_drdy(enable);
        })?;
        Ok(())
    }

    /// Check whether the data-ready signal is routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn drdy_on_int_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(reg.drdy())
    }

    /// Route the FIFO overrun flag to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_ovr_on_int_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_f_ovr(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO overrun flag is routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_ovr_on_int_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(reg.f_ovr())
    }

    /// Route the FIFO watermark flag to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_threshold_on_int_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_f_fth(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO watermark flag is routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_threshold_on_int_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(reg.f_fth())
    }

    /// Route the FIFO empty flag to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_empty_on_int_set(&mut self, enable: bool) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_f_empty(enable);
        })?;
        Ok(())
    }

    /// Check whether the FIFO empty flag is routed to the interrupt pin
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_empty_on_int_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.ctrl_reg_4().read()?;
        Ok(reg.f_empty())
    }

    // ==================== INTERRUPT_CFG ====================

    /// Select which threshold crossings raise an interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sign_of_int_threshold_set(
        &mut self,
        sign: ThresholdSign,
    ) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_pe(sign.bits());
        })?;
        Ok(())
    }

    /// Get which threshold crossings raise an interrupt
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn sign_of_int_threshold_get(&mut self) -> Result<ThresholdSign, Error<I::Error>> {
        let reg = self.device.interrupt_cfg().read()?;
        Ok(ThresholdSign::from_bits(reg.pe()))
    }

    /// Select pulsed or latched interrupt notification
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_notification_mode_set(
        &mut self,
        mode: NotificationMode,
    ) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_lir(mode.bit());
        })?;
        Ok(())
    }

    /// Get the interrupt notification mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_notification_mode_get(&mut self) -> Result<NotificationMode, Error<I::Error>> {
        let reg = self.device.interrupt_cfg().read()?;
        Ok(NotificationMode::from_bit(reg.lir()))
    }

    // ==================== FIFO_CTRL ====================

    /// Set the FIFO watermark level
    ///
    /// Only the low 5 bits of `watermark` are used.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark_set(&mut self, watermark: u8) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_wtm_point(watermark & FIFO_WATERMARK_MAX);
        })?;
        Ok(())
    }

    /// Get the FIFO watermark level
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_watermark_get(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read()?;
        Ok(reg.wtm_point())
    }

    /// Set the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mode_set(&mut self, mode: FifoMode) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().modify(|w| {
            w.set_f_mode(mode.bits());
        })?;
        Ok(())
    }

    /// Get the FIFO mode
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_mode_get(&mut self) -> Result<FifoMode, Error<I::Error>> {
        let reg = self.device.fifo_ctrl().read()?;
        Ok(FifoMode::from_bits(reg.f_mode()))
    }

    // ==================== MULTI-BYTE VALUES ====================

    /// Set the pressure threshold for interrupt generation (`THS_P`, 16 LSB/hPa)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_threshold_set(&mut self, threshold: u16) -> Result<(), Error<I::Error>> {
        self.device.ths_p().write(|w| {
            w.set_ths(threshold);
        })?;
        Ok(())
    }

    /// Get the pressure threshold for interrupt generation
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_threshold_get(&mut self) -> Result<u16, Error<I::Error>> {
        let reg = self.device.ths_p().read()?;
        Ok(reg.ths())
    }

    /// Set the pressure offset compensation (`RPDS`)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_offset_set(&mut self, offset: i16) -> Result<(), Error<I::Error>> {
        self.device.rpds().write(|w| {
            w.set_rpds(offset);
        })?;
        Ok(())
    }

    /// Get the pressure offset compensation
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_offset_get(&mut self) -> Result<i16, Error<I::Error>> {
        let reg = self.device.rpds().read()?;
        Ok(reg.rpds())
    }

    /// Set the reference pressure (`REF_P`)
    ///
    /// The register holds a 24-bit two's complement value; bits above bit 23 of
    /// `reference` are discarded.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_sign_loss)]
    pub fn pressure_ref_set(&mut self, reference: i32) -> Result<(), Error<I::Error>> {
        let raw = (reference as u32) & 0x00FF_FFFF;
        self.device.ref_p().write(|w| {
            w.set_refp(raw);
        })?;
        Ok(())
    }

    /// Get the reference pressure, sign-extended from 24 bits
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    #[allow(clippy::cast_possible_wrap)]
    pub fn pressure_ref_get(&mut self) -> Result<i32, Error<I::Error>> {
        let reg = self.device.ref_p().read()?;
        Ok(((reg.refp() << 8) as i32) >> 8)
    }

    // ==================== DATA ====================

    /// Read the raw pressure sample
    ///
    /// The 24-bit output is returned left-aligned in a `u32` (shifted up by 8 bits).
    /// Use [`read_pressure_hpa`](Self::read_pressure_hpa) for a converted value.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn pressure_raw_get(&mut self) -> Result<u32, Error<I::Error>> {
        let reg = self.device.press_out().read()?;
        let raw = reg.press() << 8;

        #[cfg(feature = "defmt")]
        defmt::trace!("LPS25HB: raw pressure 0x{:08X}", raw);

        Ok(raw)
    }

    /// Read the raw temperature sample
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temperature_raw_get(&mut self) -> Result<i16, Error<I::Error>> {
        let reg = self.device.temp_out().read()?;
        let raw = reg.temp();

        #[cfg(feature = "defmt")]
        defmt::trace!("LPS25HB: raw temperature {}", raw);

        Ok(raw)
    }

    /// Read the pressure in hPa
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_pressure_hpa(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.pressure_raw_get()?;
        Ok(from_lsb_to_hpa(raw >> 8))
    }

    /// Read the temperature in degrees Celsius
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn read_temperature_celsius(&mut self) -> Result<f32, Error<I::Error>> {
        let raw = self.temperature_raw_get()?;
        Ok(from_lsb_to_degc(raw))
    }

    // ==================== STATUS ====================

    /// Read the device identification register (expected 0xBD)
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn device_id_get(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.who_am_i().read()?;
        Ok(reg.who_am_i())
    }

    /// Read the data status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn status_get(&mut self) -> Result<DataStatus, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(DataStatus {
            pressure_ready: reg.p_da(),
            temperature_ready: reg.t_da(),
            pressure_overrun: reg.p_or(),
            temperature_overrun: reg.t_or(),
        })
    }

    /// Check whether a new pressure sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn press_data_ready_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(reg.p_da())
    }

    /// Check whether a new temperature sample is available
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temp_data_ready_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(reg.t_da())
    }

    /// Check whether a pressure sample was overwritten before being read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn press_data_ovr_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(reg.p_or())
    }

    /// Check whether a temperature sample was overwritten before being read
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn temp_data_ovr_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.status_reg().read()?;
        Ok(reg.t_or())
    }

    /// Read the interrupt source register
    ///
    /// Reading clears latched interrupt requests.
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_source_get(&mut self) -> Result<InterruptSource, Error<I::Error>> {
        let reg = self.device.int_source().read()?;
        Ok(InterruptSource {
            pressure_high: reg.ph(),
            pressure_low: reg.pl(),
            active: reg.ia(),
        })
    }

    /// Check for a differential pressure high event
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_on_press_high_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_source().read()?;
        Ok(reg.ph())
    }

    /// Check for a differential pressure low event
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn int_on_press_low_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_source().read()?;
        Ok(reg.pl())
    }

    /// Check whether any interrupt event has been generated
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn interrupt_event_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.int_source().read()?;
        Ok(reg.ia())
    }

    /// Read the FIFO status register
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_status_get(&mut self) -> Result<FifoStatus, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(FifoStatus {
            level: reg.fss(),
            empty: reg.empty_fifo(),
            overrun: reg.ovr(),
            threshold_reached: reg.fth_fifo(),
        })
    }

    /// Get the number of unread samples in the FIFO
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_data_level_get(&mut self) -> Result<u8, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(reg.fss())
    }

    /// Check whether the FIFO is empty
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_empty_flag_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(reg.empty_fifo())
    }

    /// Check whether the FIFO has overrun
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_ovr_flag_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(reg.ovr())
    }

    /// Check whether the FIFO fill level reached the watermark
    ///
    /// # Errors
    ///
    /// Returns an error if communication with the device fails.
    pub fn fifo_fth_flag_get(&mut self) -> Result<bool, Error<I::Error>> {
        let reg = self.device.fifo_status().read()?;
        Ok(reg.fth_fifo())
    }

    // ==================== CONFIGURATION ====================

    /// Apply a measurement configuration
    ///
    /// Averaging is written before the data rate, so a continuous mode starts with
    /// the requested resolution.
    ///
    /// # Arguments
    /// * `config` - Measurement configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_sensor(&mut self, config: &SensorConfig) -> Result<(), Error<I::Error>> {
        self.device.res_conf().modify(|w| {
            w.set_avgp(config.pressure_avg.bits());
            w.set_avgt(config.temperature_avg.bits());
        })?;

        self.device.ctrl_reg_1().modify(|w| {
            w.set_bdu(config.block_data_update);
            w.set_odr(config.data_rate.bits());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: sensor configured {}", config);

        Ok(())
    }

    /// Apply a FIFO configuration
    ///
    /// Also enables the FIFO (`FIFO_EN`) for every mode except bypass.
    ///
    /// # Arguments
    /// * `config` - FIFO configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_fifo(&mut self, config: &FifoConfig) -> Result<(), Error<I::Error>> {
        self.device.fifo_ctrl().write(|w| {
            w.set_f_mode(config.mode.bits());
            w.set_wtm_point(config.watermark & FIFO_WATERMARK_MAX);
        })?;

        self.device.ctrl_reg_2().modify(|w| {
            w.set_fifo_en(config.fifo_enabled());
            w.set_fifo_mean_dec(config.mean_decimator);
            w.set_stop_on_fth(config.stop_on_threshold);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: FIFO configured {}", config);

        Ok(())
    }

    /// Configure interrupt pin electrical properties
    ///
    /// # Arguments
    /// * `config` - Interrupt pin configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupt_pin(
        &mut self,
        config: &InterruptPinConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_3().modify(|w| {
            w.set_int_s(config.signal.bits());
            w.set_pp_od(config.pin_mode.bit());
            w.set_int_h_l(config.polarity.bit());
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: interrupt pin configured {}", config);

        Ok(())
    }

    /// Configure the data-ready and FIFO events routed to the interrupt pin
    ///
    /// # Arguments
    /// * `config` - Interrupt configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_interrupts(
        &mut self,
        config: &InterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.ctrl_reg_4().modify(|w| {
            w.set_drdy(config.data_ready);
            w.set_f_ovr(config.fifo_overrun);
            w.set_f_fth(config.fifo_threshold);
            w.set_f_empty(config.fifo_empty);
        })?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: interrupts configured {}", config);

        Ok(())
    }

    /// Configure the differential pressure interrupt
    ///
    /// Writes `INTERRUPT_CFG` and `THS_P`, then sets `DIFF_EN` when any threshold
    /// event is enabled and clears it otherwise.
    ///
    /// # Arguments
    /// * `config` - Threshold interrupt configuration
    ///
    /// # Errors
    /// Returns an error if communication with the device fails.
    pub fn configure_threshold_interrupt(
        &mut self,
        config: &ThresholdInterruptConfig,
    ) -> Result<(), Error<I::Error>> {
        self.device.interrupt_cfg().modify(|w| {
            w.set_pe(config.sign.bits());
            w.set_lir(config.notification.bit());
        })?;

        self.int_threshold_set(config.threshold)?;
        self.int_generation_set(config.enabled())?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: threshold interrupt configured {}", config);

        Ok(())
    }

    // ==================== BLOCKING SEQUENCES ====================

    /// Perform a software reset and wait for it to complete
    ///
    /// User registers are restored to their default values.
    ///
    /// # Arguments
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The reset bit does not clear within 10 ms ([`Error::Timeout`])
    pub fn software_reset<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.reset_set(true)?;
        self.wait_until_cleared(delay, RESET_TIMEOUT_MS, Self::reset_get)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: software reset complete");

        Ok(())
    }

    /// Reload the trimming parameters from internal memory and wait for it to complete
    ///
    /// # Arguments
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The boot bit does not clear within 10 ms ([`Error::Timeout`])
    pub fn reboot_memory<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.boot_set(true)?;
        self.wait_until_cleared(delay, RESET_TIMEOUT_MS, Self::boot_get)?;

        #[cfg(feature = "defmt")]
        defmt::debug!("LPS25HB: memory reboot complete");

        Ok(())
    }

    /// Start a one-shot conversion and wait until the new sample is available
    ///
    /// The device must be in [`OutputDataRate::OneShot`] mode.
    ///
    /// # Arguments
    /// * `delay` - Delay provider implementing `embedded_hal::delay::DelayNs`
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Communication with the device fails
    /// - The conversion does not finish within 100 ms ([`Error::Timeout`])
    pub fn trigger_one_shot<D>(&mut self, delay: &mut D) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        self.one_shot_trigger_set(true)?;
        self.wait_until_cleared(delay, ONE_SHOT_TIMEOUT_MS, Self::one_shot_trigger_get)
    }

    /// Poll a self-clearing bit until `pending` reports it cleared
    fn wait_until_cleared<D>(
        &mut self,
        delay: &mut D,
        max_wait_ms: u32,
        pending: fn(&mut Self) -> Result<bool, Error<I::Error>>,
    ) -> Result<(), Error<I::Error>>
    where
        D: embedded_hal::delay::DelayNs,
    {
        for _ in 0..(max_wait_ms / POLL_INTERVAL_MS) {
            delay.delay_ms(POLL_INTERVAL_MS);
            if !pending(self)? {
                return Ok(());
            }
        }

        Err(Error::Timeout)
    }
}
