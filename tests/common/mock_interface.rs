//! Mock interface implementation for testing the LPS25HB driver

use device_driver::RegisterInterface;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

const WHO_AM_I: u8 = 0x0F;
const RES_CONF: u8 = 0x10;
const CTRL_REG2: u8 = 0x21;
const PRESS_OUT_XL: u8 = 0x28;
const TEMP_OUT_L: u8 = 0x2B;

/// `BOOT`, `SWRESET` and `ONE_SHOT` clear themselves on the real device
const CTRL_REG2_SELF_CLEARING: u8 = 0x85;

/// Records operations performed on the mock interface
#[derive(Debug, Clone, PartialEq)]
pub enum Operation {
    /// Read register operation
    ReadRegister {
        /// Register address
        address: u8,
        /// Value that was returned
        value: u8,
    },
    /// Write register operation
    WriteRegister {
        /// Register address
        address: u8,
        /// Value that was written
        value: u8,
    },
}

/// Shared state for mock interface (uses interior mutability)
#[derive(Debug)]
struct MockState {
    /// Simulated register values address -> value
    registers: HashMap<u8, u8>,

    /// Operations log for verification
    operations: Vec<Operation>,

    /// Number of bus transfers (one per read_register/write_register call)
    transfers: usize,

    /// Failure injection flags
    fail_next_read: bool,
    fail_next_write: bool,

    /// Clear BOOT/SWRESET/ONE_SHOT right after they are written
    auto_clear_ctrl_reg2: bool,
}

impl MockState {
    fn new() -> Self {
        let mut state = Self {
            registers: HashMap::new(),
            operations: Vec::new(),
            transfers: 0,
            fail_next_read: false,
            fail_next_write: false,
            auto_clear_ctrl_reg2: false,
        };

        // Power-on register values
        state.registers.insert(WHO_AM_I, 0xBD);
        state.registers.insert(RES_CONF, 0x05);

        state
    }
}

/// Mock interface for testing
#[derive(Clone)]
pub struct MockInterface {
    state: Rc<RefCell<MockState>>,
}

impl MockInterface {
    /// Create a new mock interface with power-on register values
    pub fn new() -> Self {
        Self {
            state: Rc::new(RefCell::new(MockState::new())),
        }
    }

    /// Set a register value
    pub fn set_register(&self, address: u8, value: u8) {
        self.state.borrow_mut().registers.insert(address, value);
    }

    /// Get a register value
    pub fn get_register(&self, address: u8) -> u8 {
        self.state
            .borrow()
            .registers
            .get(&address)
            .copied()
            .unwrap_or(0)
    }

    /// Set WHO_AM_I register value
    pub fn set_who_am_i(&self, value: u8) {
        self.set_register(WHO_AM_I, value);
    }

    /// Set the 24-bit pressure output (PRESS_OUT_XL/L/H)
    pub fn set_pressure_data(&self, raw: u32) {
        let [xl, l, h, _] = raw.to_le_bytes();
        self.set_register(PRESS_OUT_XL, xl);
        self.set_register(PRESS_OUT_XL + 1, l);
        self.set_register(PRESS_OUT_XL + 2, h);
    }

    /// Set the 16-bit temperature output (TEMP_OUT_L/H)
    pub fn set_temperature_data(&self, raw: i16) {
        let [l, h] = raw.to_le_bytes();
        self.set_register(TEMP_OUT_L, l);
        self.set_register(TEMP_OUT_L + 1, h);
    }

    /// Emulate the self-clearing bits of CTRL_REG2
    pub fn auto_clear_ctrl_reg2(&self, enable: bool) {
        self.state.borrow_mut().auto_clear_ctrl_reg2 = enable;
    }

    /// Inject a read failure on the next read operation
    pub fn fail_next_read(&self) {
        self.state.borrow_mut().fail_next_read = true;
    }

    /// Inject a write failure on the next write operation
    pub fn fail_next_write(&self) {
        self.state.borrow_mut().fail_next_write = true;
    }

    /// Get the operations log
    pub fn operations(&self) -> Vec<Operation> {
        self.state.borrow().operations.clone()
    }

    /// Clear the operations log and transfer count
    pub fn clear_operations(&self) {
        let mut state = self.state.borrow_mut();
        state.operations.clear();
        state.transfers = 0;
    }

    /// Count logged register writes
    pub fn write_count(&self) -> usize {
        self.state
            .borrow()
            .operations
            .iter()
            .filter(|op| matches!(op, Operation::WriteRegister { .. }))
            .count()
    }

    /// Count bus transfers since the log was last cleared
    pub fn transfer_count(&self) -> usize {
        self.state.borrow().transfers
    }
}

/// Mock error type
#[derive(Debug, Clone, PartialEq)]
pub enum MockError {
    /// Simulated communication error
    Communication,
}

impl RegisterInterface for MockInterface {
    type Error = MockError;
    type AddressType = u8;

    fn read_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        read_data: &mut [u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_read {
            state.fail_next_read = false;
            return Err(MockError::Communication);
        }

        state.transfers += 1;

        for (i, byte) in read_data.iter_mut().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);
            *byte = state.registers.get(&reg_addr).copied().unwrap_or(0);

            state.operations.push(Operation::ReadRegister {
                address: reg_addr,
                value: *byte,
            });
        }

        Ok(())
    }

    fn write_register(
        &mut self,
        address: Self::AddressType,
        _size_bits: u32,
        write_data: &[u8],
    ) -> Result<(), Self::Error> {
        let mut state = self.state.borrow_mut();

        // Check for injected failure
        if state.fail_next_write {
            state.fail_next_write = false;
            return Err(MockError::Communication);
        }

        state.transfers += 1;

        for (i, &byte) in write_data.iter().enumerate() {
            let reg_addr = address.wrapping_add(i as u8);

            state.operations.push(Operation::WriteRegister {
                address: reg_addr,
                value: byte,
            });

            let stored = if reg_addr == CTRL_REG2 && state.auto_clear_ctrl_reg2 {
                byte & !CTRL_REG2_SELF_CLEARING
            } else {
                byte
            };
            state.registers.insert(reg_addr, stored);
        }

        Ok(())
    }
}

impl Default for MockInterface {
    fn default() -> Self {
        Self::new()
    }
}
