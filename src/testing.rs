//! Testing utilities and mock implementations
//!
//! Mocks for exercising the driver on the host without hardware access.
//! Only available when running `cargo test`.

// Note: The #[cfg(test)] attribute is applied in lib.rs where this module is declared
#![allow(missing_docs)]
#![allow(clippy::std_instead_of_core, clippy::std_instead_of_alloc)]

extern crate std;

use core::cell::{Cell, RefCell};
use std::collections::{HashMap, HashSet};
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

use crate::driver::error::{IoError, Result};
use crate::hal::mdio::MdioBus;
use crate::internal::phy_registers::{bcr, bsr, lan8742a, phy_reg};
use crate::internal::register::RegisterAccess;
use crate::internal::register::dma::{DMAMR_OFFSET, DMAMR_SWR};
use crate::internal::register::mac::{
    MACMDIOAR_GOC_MASK, MACMDIOAR_GOC_READ, MACMDIOAR_GOC_SHIFT, MACMDIOAR_GOC_WRITE,
    MACMDIOAR_MB, MACMDIOAR_OFFSET, MACMDIOAR_PA_MASK, MACMDIOAR_PA_SHIFT, MACMDIOAR_RDA_MASK,
    MACMDIOAR_RDA_SHIFT, MACMDIODR_OFFSET,
};

// =============================================================================
// Mock MDIO Bus
// =============================================================================

/// Mock MDIO bus for testing PHY drivers without hardware
///
/// Unset registers read as `0xFFFF`, the value of an undriven bus.
///
/// ```ignore
/// let mut mdio = MockMdioBus::new();
/// mdio.set_register(0, 0x01, 0x782D); // BSR with link up
///
/// let mut phy = Lan8742a::new(0, Spin);
/// assert!(phy.is_link_up(&mut mdio).unwrap());
/// ```
#[derive(Debug, Default)]
pub struct MockMdioBus {
    /// Register values: (phy_addr, reg_addr) -> value
    registers: RefCell<HashMap<(u8, u8), u16>>,
    /// Record of writes: (phy_addr, reg_addr, value)
    write_log: RefCell<Vec<(u8, u8, u16)>>,
    /// Record of reads: (phy_addr, reg_addr)
    read_log: RefCell<Vec<(u8, u8)>>,
    /// PHY addresses whose reads always fail
    failing_phys: RefCell<HashSet<u8>>,
    /// Number of upcoming reads that fail regardless of address
    transient_failures: Cell<u32>,
    /// Writes fail while set
    fail_writes: Cell<bool>,
    /// Bits that clear themselves after a number of reads
    self_clearing: RefCell<HashMap<(u8, u8), (u16, u32)>>,
    /// Whether the bus should report as busy
    busy: Cell<bool>,
}

impl MockMdioBus {
    /// Create a new mock MDIO bus
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a register value
    pub fn set_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);
    }

    /// Get the current value of a register (for test verification)
    pub fn get_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.registers.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Get all writes that have been made
    pub fn get_writes(&self) -> Vec<(u8, u8, u16)> {
        self.write_log.borrow().clone()
    }

    /// Get all reads that have been made
    pub fn get_reads(&self) -> Vec<(u8, u8)> {
        self.read_log.borrow().clone()
    }

    /// Whether `reg_addr` of `phy_addr` was ever read
    pub fn was_read(&self, phy_addr: u8, reg_addr: u8) -> bool {
        self.read_log.borrow().contains(&(phy_addr, reg_addr))
    }

    /// Clear both access logs
    pub fn clear_logs(&self) {
        self.write_log.borrow_mut().clear();
        self.read_log.borrow_mut().clear();
    }

    /// Make every read of `phy_addr` fail
    pub fn fail_reads_from(&self, phy_addr: u8) {
        self.failing_phys.borrow_mut().insert(phy_addr);
    }

    /// Make the next `count` reads fail
    pub fn fail_next_reads(&self, count: u32) {
        self.transient_failures.set(count);
    }

    /// Make writes fail
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Clear `bits` of a register once it has been read `after_reads` times
    pub fn self_clear(&self, phy_addr: u8, reg_addr: u8, bits: u16, after_reads: u32) {
        self.self_clearing
            .borrow_mut()
            .insert((phy_addr, reg_addr), (bits, after_reads));
    }

    /// Set the busy flag
    pub fn set_busy(&self, busy: bool) {
        self.busy.set(busy);
    }

    /// Setup for a LAN8742A PHY with reset-default register values
    pub fn setup_lan8742a(&self, phy_addr: u8) {
        self.set_register(phy_addr, phy_reg::PHYIDR1, 0x0007);
        self.set_register(phy_addr, phy_reg::PHYIDR2, 0xC131);

        let bsr_value = bsr::TX_FD_CAPABLE
            | bsr::TX_HD_CAPABLE
            | bsr::T10_FD_CAPABLE
            | bsr::T10_HD_CAPABLE
            | bsr::AN_ABILITY
            | bsr::EXT_CAPABLE;
        self.set_register(phy_addr, phy_reg::BSR, bsr_value);
        self.set_register(phy_addr, phy_reg::BCR, bcr::AN_ENABLE);
        self.set_register(phy_addr, phy_reg::ANAR, 0x01E1);
        self.set_register(phy_addr, lan8742a::SSR, 0x0040);
    }

    /// Simulate link up with the given SSR speed code and AUTODONE set
    pub fn simulate_link_up(&self, phy_addr: u8, code: u16) {
        let bsr_val = self.get_register(phy_addr, phy_reg::BSR).unwrap_or(0);
        self.set_register(
            phy_addr,
            phy_reg::BSR,
            bsr_val | bsr::LINK_STATUS | bsr::AN_COMPLETE,
        );
        self.set_register(
            phy_addr,
            lan8742a::SSR,
            lan8742a::ssr::AUTODONE | (code << lan8742a::ssr::SPEED_SHIFT),
        );
    }

    /// Simulate link going down
    pub fn simulate_link_down(&self, phy_addr: u8) {
        let bsr_val = self.get_register(phy_addr, phy_reg::BSR).unwrap_or(0);
        self.set_register(
            phy_addr,
            phy_reg::BSR,
            bsr_val & !(bsr::LINK_STATUS | bsr::AN_COMPLETE),
        );
        self.set_register(phy_addr, lan8742a::SSR, 0x0040);
    }
}

impl MdioBus for MockMdioBus {
    fn read(&mut self, phy_addr: u8, reg_addr: u8) -> Result<u16> {
        self.read_log.borrow_mut().push((phy_addr, reg_addr));

        let pending = self.transient_failures.get();
        if pending > 0 {
            self.transient_failures.set(pending - 1);
            return Err(IoError::PhyError.into());
        }
        if self.failing_phys.borrow().contains(&phy_addr) {
            return Err(IoError::PhyError.into());
        }

        let mut clearing = self.self_clearing.borrow_mut();
        if let Some((bits, left)) = clearing.get_mut(&(phy_addr, reg_addr)) {
            if *left == 0 {
                let bits = *bits;
                clearing.remove(&(phy_addr, reg_addr));
                let mut regs = self.registers.borrow_mut();
                if let Some(value) = regs.get_mut(&(phy_addr, reg_addr)) {
                    *value &= !bits;
                }
            } else {
                *left -= 1;
            }
        }

        Ok(self
            .registers
            .borrow()
            .get(&(phy_addr, reg_addr))
            .copied()
            .unwrap_or(0xFFFF))
    }

    fn write(&mut self, phy_addr: u8, reg_addr: u8, value: u16) -> Result<()> {
        self.write_log
            .borrow_mut()
            .push((phy_addr, reg_addr, value));

        if self.fail_writes.get() {
            return Err(IoError::PhyError.into());
        }

        self.registers
            .borrow_mut()
            .insert((phy_addr, reg_addr), value);

        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

// =============================================================================
// Mock Delay
// =============================================================================

/// Mock delay for testing without actual timing
///
/// Records delays for verification without actually waiting. Also
/// implemented for `&MockDelay` so a test can keep inspecting it while a
/// policy holds it.
#[derive(Debug, Default)]
pub struct MockDelay {
    /// Total nanoseconds delayed
    total_ns: Cell<u64>,
}

impl MockDelay {
    /// Create a new mock delay
    pub fn new() -> Self {
        Self::default()
    }

    /// Get total nanoseconds that were "delayed"
    pub fn total_ns(&self) -> u64 {
        self.total_ns.get()
    }

    /// Get total microseconds that were "delayed"
    pub fn total_us(&self) -> u64 {
        self.total_ns() / 1_000
    }

    /// Reset the delay counter
    pub fn reset(&self) {
        self.total_ns.set(0);
    }
}

impl embedded_hal::delay::DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

impl embedded_hal::delay::DelayNs for &MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.total_ns.set(self.total_ns.get() + ns as u64);
    }
}

// =============================================================================
// Mock Output Pin
// =============================================================================

/// Output pin that records every level change
#[derive(Debug, Default)]
pub struct MockPin {
    levels: Vec<bool>,
    fail: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    /// A pin whose every operation fails
    pub fn failing() -> Self {
        Self {
            levels: Vec::new(),
            fail: true,
        }
    }

    /// Levels driven so far, `true` = high
    pub fn levels(&self) -> &[bool] {
        &self.levels
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> core::result::Result<(), Self::Error> {
        if self.fail {
            return Err(ErrorKind::Other);
        }
        self.levels.push(true);
        Ok(())
    }
}

// =============================================================================
// Simulated Register File
// =============================================================================

/// Register file standing in for the Ethernet peripheral.
///
/// Plain registers hold whatever was last written. Two registers behave
/// like the hardware:
///
/// - MACMDIOAR: writing MB performs the read or write against an
///   internal PHY register map (absent registers read as `0xFFFF`). MB
///   then stays set for `mdio_latency` reads, or forever when stuck.
/// - DMAMR: SWR clears immediately unless the reset is stuck.
#[derive(Debug, Default)]
pub struct SimRegisters {
    regs: RefCell<HashMap<usize, u32>>,
    writes: RefCell<Vec<(usize, u32)>>,
    phy: RefCell<HashMap<(u8, u8), u16>>,
    mdio_latency: Cell<u32>,
    mdio_busy_left: Cell<u32>,
    mdio_stuck: Cell<bool>,
    last_mdio_command: Cell<Option<u32>>,
    reset_stuck: Cell<bool>,
}

impl SimRegisters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register value without read side effects
    pub fn peek(&self, offset: usize) -> u32 {
        self.regs.borrow().get(&offset).copied().unwrap_or(0)
    }

    /// Every register write, in order
    pub fn writes(&self) -> Vec<(usize, u32)> {
        self.writes.borrow().clone()
    }

    /// Values written to one register, in order
    pub fn writes_to(&self, offset: usize) -> Vec<u32> {
        self.writes
            .borrow()
            .iter()
            .filter(|(o, _)| *o == offset)
            .map(|(_, v)| *v)
            .collect()
    }

    pub fn clear_writes(&self) {
        self.writes.borrow_mut().clear();
    }

    pub fn set_phy_register(&self, phy_addr: u8, reg_addr: u8, value: u16) {
        self.phy.borrow_mut().insert((phy_addr, reg_addr), value);
    }

    pub fn phy_register(&self, phy_addr: u8, reg_addr: u8) -> Option<u16> {
        self.phy.borrow().get(&(phy_addr, reg_addr)).copied()
    }

    /// Reads of MACMDIOAR that still see MB, for the current and every
    /// later transaction
    pub fn set_mdio_latency(&self, reads: u32) {
        self.mdio_latency.set(reads);
        self.mdio_busy_left.set(reads);
    }

    pub fn set_mdio_stuck(&self, stuck: bool) {
        self.mdio_stuck.set(stuck);
    }

    /// Last MACMDIOAR value that started a read or write
    pub fn last_mdio_command(&self) -> Option<u32> {
        self.last_mdio_command.get()
    }

    pub fn set_reset_stuck(&self, stuck: bool) {
        self.reset_stuck.set(stuck);
    }

    fn run_mdio(&self, command: u32) {
        let goc = (command & MACMDIOAR_GOC_MASK) >> MACMDIOAR_GOC_SHIFT;
        let pa = ((command & MACMDIOAR_PA_MASK) >> MACMDIOAR_PA_SHIFT) as u8;
        let rda = ((command & MACMDIOAR_RDA_MASK) >> MACMDIOAR_RDA_SHIFT) as u8;

        match goc {
            MACMDIOAR_GOC_READ => {
                let value = self.phy_register(pa, rda).unwrap_or(0xFFFF);
                self.regs
                    .borrow_mut()
                    .insert(MACMDIODR_OFFSET, value as u32);
            }
            MACMDIOAR_GOC_WRITE => {
                let value = self.peek(MACMDIODR_OFFSET) as u16;
                self.set_phy_register(pa, rda, value);
            }
            _ => return,
        }
        self.last_mdio_command.set(Some(command));
    }
}

impl RegisterAccess for SimRegisters {
    fn read(&self, offset: usize) -> u32 {
        let value = self.peek(offset);
        if offset == MACMDIOAR_OFFSET && value & MACMDIOAR_MB != 0 && !self.mdio_stuck.get() {
            let left = self.mdio_busy_left.get();
            if left > 0 {
                self.mdio_busy_left.set(left - 1);
            } else {
                let idle = value & !MACMDIOAR_MB;
                self.regs.borrow_mut().insert(offset, idle);
                return idle;
            }
        }
        value
    }

    fn write(&self, offset: usize, value: u32) {
        self.writes.borrow_mut().push((offset, value));

        let mut stored = value;
        match offset {
            MACMDIOAR_OFFSET if value & MACMDIOAR_MB != 0 => {
                self.mdio_busy_left.set(self.mdio_latency.get());
                self.run_mdio(value);
            }
            DMAMR_OFFSET if value & DMAMR_SWR != 0 && !self.reset_stuck.get() => {
                stored &= !DMAMR_SWR;
            }
            _ => {}
        }
        self.regs.borrow_mut().insert(offset, stored);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_bus_unset_register_floats_high() {
        let mut mdio = MockMdioBus::new();
        assert_eq!(mdio.read(9, 2).unwrap(), 0xFFFF);
    }

    #[test]
    fn mock_bus_self_clearing_bits() {
        let mut mdio = MockMdioBus::new();
        mdio.set_register(0, 0, 0x8000);
        mdio.self_clear(0, 0, 0x8000, 1);
        assert_eq!(mdio.read(0, 0).unwrap(), 0x8000);
        assert_eq!(mdio.read(0, 0).unwrap(), 0x0000);
    }

    #[test]
    fn sim_mdio_latency_counts_reads() {
        let sim = SimRegisters::new();
        sim.set_mdio_latency(2);
        sim.write(MACMDIOAR_OFFSET, MACMDIOAR_MB | (MACMDIOAR_GOC_READ << MACMDIOAR_GOC_SHIFT));
        assert_ne!(sim.read(MACMDIOAR_OFFSET) & MACMDIOAR_MB, 0);
        assert_ne!(sim.read(MACMDIOAR_OFFSET) & MACMDIOAR_MB, 0);
        assert_eq!(sim.read(MACMDIOAR_OFFSET) & MACMDIOAR_MB, 0);
        assert_eq!(sim.peek(MACMDIODR_OFFSET), 0xFFFF);
    }

    #[test]
    fn sim_reset_self_clears() {
        let sim = SimRegisters::new();
        sim.write(DMAMR_OFFSET, DMAMR_SWR);
        assert_eq!(sim.read(DMAMR_OFFSET), 0);

        sim.set_reset_stuck(true);
        sim.write(DMAMR_OFFSET, DMAMR_SWR);
        assert_eq!(sim.read(DMAMR_OFFSET), DMAMR_SWR);
    }
}
