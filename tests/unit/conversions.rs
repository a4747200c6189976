//! Unit tests for pressure and temperature conversion

use crate::common::{assert_float_eq, create_mock_driver};
use lps25hb::{from_lsb_to_degc, from_lsb_to_hpa};

#[test]
#[allow(clippy::float_cmp)]
fn test_hpa_conversion() {
    assert_eq!(from_lsb_to_hpa(0), 0.0);
    assert_eq!(from_lsb_to_hpa(4096), 1.0);
    assert_eq!(from_lsb_to_hpa(0x3F_5000), 1013.0);
    // Left-aligned raw value straight from pressure_raw_get
    assert_eq!(from_lsb_to_hpa(0x3F50_0000), 259_328.0);
}

#[test]
#[allow(clippy::float_cmp)]
fn test_degc_conversion() {
    assert_eq!(from_lsb_to_degc(0), 42.5);
    assert_eq!(from_lsb_to_degc(480), 43.5);
    assert_eq!(from_lsb_to_degc(-480), 41.5);
    assert_float_eq(from_lsb_to_degc(i16::MIN), 42.5 - 68.266_67, 0.001);
}

#[test]
fn test_read_pressure_hpa() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_pressure_data(0x3F_5000);
    assert_float_eq(driver.read_pressure_hpa().unwrap(), 1013.0, 0.001);

    // 1013.25 hPa
    interface.set_pressure_data(4_150_272);
    assert_float_eq(driver.read_pressure_hpa().unwrap(), 1013.25, 0.001);
}

#[test]
fn test_read_temperature_celsius() {
    let (mut driver, interface) = create_mock_driver();

    interface.set_temperature_data(-8640);
    assert_float_eq(driver.read_temperature_celsius().unwrap(), 24.5, 0.001);

    interface.set_temperature_data(0);
    assert_float_eq(driver.read_temperature_celsius().unwrap(), 42.5, 0.001);
}
