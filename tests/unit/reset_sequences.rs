//! Unit tests for reset, reboot, one-shot and predefined configurations

use crate::common::{MockDelay, Operation, create_mock_driver};
use lps25hb::{Error, UcfLine};

const CTRL_REG1: u8 = 0x20;
const CTRL_REG2: u8 = 0x21;

#[test]
fn test_software_reset_completes() {
    let (mut driver, interface) = create_mock_driver();
    interface.auto_clear_ctrl_reg2(true);

    let mut delay = MockDelay::default();
    driver.software_reset(&mut delay).unwrap();

    assert!(!driver.reset_get().unwrap());
    assert_eq!(delay.elapsed_ms, 1);
}

#[test]
fn test_software_reset_times_out() {
    let (mut driver, _interface) = create_mock_driver();

    let mut delay = MockDelay::default();
    let result = driver.software_reset(&mut delay);

    assert!(matches!(result, Err(Error::Timeout)));
    assert_eq!(delay.elapsed_ms, 10);
}

#[test]
fn test_reboot_memory() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_register(CTRL_REG2, 0x08);
    interface.auto_clear_ctrl_reg2(true);

    driver.reboot_memory(&mut MockDelay::default()).unwrap();

    assert!(!driver.boot_get().unwrap());
    assert_eq!(interface.get_register(CTRL_REG2), 0x08);
}

#[test]
fn test_reboot_memory_times_out() {
    let (mut driver, _interface) = create_mock_driver();

    let mut delay = MockDelay::default();
    assert!(matches!(
        driver.reboot_memory(&mut delay),
        Err(Error::Timeout)
    ));
    assert_eq!(delay.elapsed_ms, 10);
}

#[test]
fn test_one_shot_conversion() {
    let (mut driver, interface) = create_mock_driver();
    interface.auto_clear_ctrl_reg2(true);
    interface.set_pressure_data(0x3F_5000);

    driver.trigger_one_shot(&mut MockDelay::default()).unwrap();

    assert!(!driver.one_shot_trigger_get().unwrap());
    assert_eq!(driver.pressure_raw_get().unwrap(), 0x3F50_0000);
}

#[test]
fn test_one_shot_times_out() {
    let (mut driver, _interface) = create_mock_driver();

    let mut delay = MockDelay::default();
    assert!(matches!(
        driver.trigger_one_shot(&mut delay),
        Err(Error::Timeout)
    ));
    assert_eq!(delay.elapsed_ms, 100);
}

#[test]
fn test_load_config_writes_in_order() {
    let (mut driver, interface) = create_mock_driver();

    let config = [
        UcfLine::new(0x10, 0x0F),
        UcfLine::new(0x2E, 0xDF),
        UcfLine::new(0x21, 0x40),
        UcfLine::new(CTRL_REG1, 0x90),
    ];

    interface.clear_operations();
    driver.load_config(&config).unwrap();

    let written: Vec<(u8, u8)> = interface
        .operations()
        .into_iter()
        .filter_map(|op| match op {
            Operation::WriteRegister { address, value } => Some((address, value)),
            Operation::ReadRegister { .. } => None,
        })
        .collect();
    assert_eq!(
        written,
        vec![(0x10, 0x0F), (0x2E, 0xDF), (0x21, 0x40), (CTRL_REG1, 0x90)]
    );
    assert_eq!(interface.get_register(0x10), 0x0F);
    assert_eq!(interface.get_register(0x2E), 0xDF);
    assert_eq!(interface.get_register(0x21), 0x40);
    assert_eq!(interface.get_register(CTRL_REG1), 0x90);
}

#[test]
fn test_load_config_stops_at_first_failure() {
    let (mut driver, interface) = create_mock_driver();

    interface.clear_operations();
    interface.fail_next_write();

    let config = [UcfLine::new(0x10, 0x0F), UcfLine::new(CTRL_REG1, 0x90)];
    assert!(driver.load_config(&config).is_err());

    assert_eq!(interface.write_count(), 0);
    assert_eq!(interface.get_register(CTRL_REG1), 0x00);
}

#[test]
fn test_raw_register_access() {
    let (mut driver, interface) = create_mock_driver();

    driver.write_register(0x30, &[0x34, 0x12]).unwrap();
    assert_eq!(driver.int_threshold_get().unwrap(), 0x1234);

    let mut buffer = [0u8; 2];
    driver.read_register(0x0F, &mut buffer).unwrap();
    assert_eq!(buffer, [0xBD, 0x05]);

    assert_eq!(interface.get_register(0x31), 0x12);
}
