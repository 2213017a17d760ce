//! General-Purpose Register File.
//!
//! This module provides the `RegisterFile` struct, the eight 8-bit registers of the
//! machine. It provides:
//! 1. **Storage:** Eight byte-wide registers, `R0`-`R7`.
//! 2. **Stack Pointer:** `R7` doubles as the stack pointer and is reset to `0xF4`.
//! 3. **Observability:** A formatted dump of all registers for tracing.

use std::fmt::Write as _;

use super::constants::{NUM_REGISTERS, SP_INIT, SP_REG};

/// Register file containing the eight general-purpose registers.
///
/// Indices are validated by the CPU before they reach this type, so `read` and
/// `write` index directly and treat an out-of-range index as a bug.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u8; NUM_REGISTERS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers zeroed and `R7` at the initial stack pointer.
    pub const fn new() -> Self {
        Self::with_sp(SP_INIT)
    }

    /// Creates a register file with all registers zeroed and `R7` set to `sp`.
    pub const fn with_sp(sp: u8) -> Self {
        let mut regs = [0; NUM_REGISTERS];
        regs[SP_REG] = sp;
        Self { regs }
    }

    /// Returns `Some(idx)` if `operand` names a register.
    #[inline]
    pub const fn index(operand: u8) -> Option<usize> {
        let idx = operand as usize;
        if idx < NUM_REGISTERS { Some(idx) } else { None }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    #[inline]
    pub const fn read(&self, idx: usize) -> u8 {
        self.regs[idx]
    }

    /// Writes a register.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index (0-7).
    /// * `val` - The byte to store.
    #[inline]
    pub const fn write(&mut self, idx: usize, val: u8) {
        self.regs[idx] = val;
    }

    /// Returns the stack pointer (`R7`).
    #[inline]
    pub const fn sp(&self) -> u8 {
        self.regs[SP_REG]
    }

    /// Sets the stack pointer (`R7`).
    #[inline]
    pub const fn set_sp(&mut self, val: u8) {
        self.regs[SP_REG] = val;
    }

    /// Returns all registers in index order.
    pub const fn as_array(&self) -> &[u8; NUM_REGISTERS] {
        &self.regs
    }

    /// Formats every register as ` XX` hex pairs, `R0` first.
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(NUM_REGISTERS * 3);
        for r in self.regs {
            let _ = write!(out, " {r:02X}");
        }
        out
    }
}
