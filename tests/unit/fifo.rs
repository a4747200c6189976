//! Unit tests for FIFO configuration and status

use crate::common::create_mock_driver;
use lps25hb::{FifoConfig, FifoMode, FifoStatus};

const CTRL_REG2: u8 = 0x21;
const FIFO_CTRL: u8 = 0x2E;
const FIFO_STATUS: u8 = 0x2F;

#[test]
fn test_fifo_mode_preserves_watermark() {
    let (mut driver, interface) = create_mock_driver();

    driver.fifo_watermark_set(10).unwrap();
    driver.fifo_mode_set(FifoMode::Stream).unwrap();

    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Stream);
    assert_eq!(driver.fifo_mode_get().unwrap().bits(), 2);
    assert_eq!(driver.fifo_watermark_get().unwrap(), 10);
    assert_eq!(interface.get_register(FIFO_CTRL), 0x4A);
}

#[test]
fn test_fifo_mode_round_trip() {
    let (mut driver, interface) = create_mock_driver();

    let modes = [
        FifoMode::Bypass,
        FifoMode::Fifo,
        FifoMode::Stream,
        FifoMode::StreamToFifo,
        FifoMode::BypassToStream,
        FifoMode::Mean,
        FifoMode::BypassToFifo,
    ];

    for mode in modes {
        interface.set_register(FIFO_CTRL, 0x1F);
        driver.fifo_mode_set(mode).unwrap();

        assert_eq!(driver.fifo_mode_get().unwrap(), mode);
        assert_eq!(interface.get_register(FIFO_CTRL), (mode.bits() << 5) | 0x1F);
    }
}

#[test]
fn test_fifo_watermark_is_masked() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(FIFO_CTRL, 0xC0);

    driver.fifo_watermark_set(0x25).unwrap();

    assert_eq!(driver.fifo_watermark_get().unwrap(), 0x05);
    assert_eq!(interface.get_register(FIFO_CTRL), 0xC5);
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Mean);
}

#[test]
fn test_undefined_fifo_mode_reads_as_bypass() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(FIFO_CTRL, 0xA0);
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Bypass);
}

#[test]
fn test_configure_fifo_enables_fifo() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL_REG2, 0x08);

    let config = FifoConfig {
        mode: FifoMode::Stream,
        watermark: 15,
        mean_decimator: false,
        stop_on_threshold: true,
    };
    driver.configure_fifo(&config).unwrap();

    assert_eq!(interface.get_register(FIFO_CTRL), 0x4F);
    // FIFO_EN, STOP_ON_FTH, I2C_DIS kept
    assert_eq!(interface.get_register(CTRL_REG2), 0x68);
    assert!(driver.fifo_get().unwrap());
    assert!(driver.stop_on_fifo_threshold_get().unwrap());
}

#[test]
fn test_configure_fifo_bypass_disables_fifo() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL_REG2, 0x70);

    driver.configure_fifo(&FifoConfig::default()).unwrap();

    assert_eq!(interface.get_register(FIFO_CTRL), 0x00);
    assert_eq!(interface.get_register(CTRL_REG2), 0x00);
}

#[test]
fn test_configure_fifo_mean() {
    let (mut driver, interface) = create_mock_driver();

    driver.configure_fifo(&FifoConfig::mean_32()).unwrap();

    assert_eq!(interface.get_register(FIFO_CTRL), 0xDF);
    assert_eq!(driver.fifo_mode_get().unwrap(), FifoMode::Mean);
    assert_eq!(driver.fifo_watermark_get().unwrap(), 31);
}

#[test]
fn test_fifo_status_flags() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_register(FIFO_STATUS, 0xDF);
    let status = driver.fifo_status_get().unwrap();
    assert_eq!(
        status,
        FifoStatus {
            level: 31,
            empty: false,
            overrun: true,
            threshold_reached: true,
        }
    );
    assert_eq!(status, FifoStatus::from_raw(0xDF));

    assert_eq!(driver.fifo_data_level_get().unwrap(), 31);
    assert!(!driver.fifo_empty_flag_get().unwrap());
    assert!(driver.fifo_ovr_flag_get().unwrap());
    assert!(driver.fifo_fth_flag_get().unwrap());

    interface.set_register(FIFO_STATUS, 0x20);
    assert!(driver.fifo_empty_flag_get().unwrap());
    assert_eq!(driver.fifo_data_level_get().unwrap(), 0);
    assert!(!driver.fifo_ovr_flag_get().unwrap());
}

#[test]
fn test_fifo_event_routing() {
    let (mut driver, interface) = create_mock_driver();

    driver.fifo_ovr_on_int_set(true).unwrap();
    driver.fifo_threshold_on_int_set(true).unwrap();
    driver.fifo_empty_on_int_set(true).unwrap();
    assert_eq!(interface.get_register(0x23), 0x0E);

    assert!(driver.fifo_ovr_on_int_get().unwrap());
    assert!(driver.fifo_threshold_on_int_get().unwrap());
    assert!(driver.fifo_empty_on_int_get().unwrap());

    driver.fifo_threshold_on_int_set(false).unwrap();
    assert_eq!(interface.get_register(0x23), 0x0A);
}
