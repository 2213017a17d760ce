//! Memory Access Helpers.
//!
//! This module provides the interface between the CPU and memory. It performs the following:
//! 1. **Plain Access:** Byte reads and writes at any address.
//! 2. **Stack Discipline:** Push and pop through `R7`, which grows downward.
//! 3. **Bounds Enforcement:** The stack pointer may not wrap past either end of memory.

use std::io::Write;

use super::Cpu;
use crate::common::VmError;

impl<W: Write> Cpu<W> {
    /// Reads the byte at `addr`.
    #[inline]
    pub const fn ram_read(&self, addr: u8) -> u8 {
        self.ram.read(addr)
    }

    /// Writes `val` to `addr`.
    #[inline]
    pub const fn ram_write(&mut self, addr: u8, val: u8) {
        self.ram.write(addr, val);
    }

    /// Decrements the stack pointer and stores `val` at the new top of stack.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackOverflow`] if the stack pointer is already 0.
    /// Nothing is written in that case.
    ///
    /// # Arguments
    ///
    /// * `val` - The byte to push.
    /// * `pc` - Address of the instruction performing the push, for diagnostics.
    pub fn stack_push(&mut self, val: u8, pc: u8) -> Result<(), VmError> {
        let sp = self
            .regs
            .sp()
            .checked_sub(1)
            .ok_or(VmError::StackOverflow { pc })?;
        self.regs.set_sp(sp);
        self.ram_write(sp, val);
        Ok(())
    }

    /// Reads the top of stack and increments the stack pointer.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::StackUnderflow`] if the stack pointer is already 255.
    /// The stack pointer is unchanged in that case.
    ///
    /// # Arguments
    ///
    /// * `pc` - Address of the instruction performing the pop, for diagnostics.
    pub fn stack_pop(&mut self, pc: u8) -> Result<u8, VmError> {
        let sp = self.regs.sp();
        let next = sp.checked_add(1).ok_or(VmError::StackUnderflow { pc })?;
        let val = self.ram_read(sp);
        self.regs.set_sp(next);
        Ok(val)
    }
}
