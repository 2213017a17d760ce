//! Global Machine Constants.
//!
//! This module defines machine-wide constants used across the emulator. It includes:
//! 1. **Memory Constants:** Address space size and the top-of-stack reset value.
//! 2. **Register Constants:** Register file size and the stack pointer slot.
//! 3. **Instruction Constants:** Field masks and shifts for the opcode byte.

/// Number of addressable memory cells (the full 8-bit address space).
pub const MEMORY_SIZE: usize = 256;

/// Number of general-purpose registers.
pub const NUM_REGISTERS: usize = 8;

/// Register index reserved for the stack pointer by convention.
pub const SP_REG: usize = 7;

/// Initial stack pointer value; the stack grows downward from here.
pub const SP_INIT: u8 = 0xF4;

/// Initial program counter value.
pub const PC_INIT: u8 = 0x00;

/// Bit position shift for the operand count field (bits 6-7).
pub const OPERAND_COUNT_SHIFT: u8 = 6;

/// Bit mask for the operand count field after shifting.
pub const OPERAND_COUNT_MASK: u8 = 0b11;

/// Bit mask for the ALU-class flag (bit 5).
pub const ALU_FLAG_MASK: u8 = 1 << 5;

/// Bit mask for the sets-PC flag (bit 4).
pub const SETS_PC_FLAG_MASK: u8 = 1 << 4;

/// Bit mask for the instruction identifier field (bits 0-3).
pub const INSTRUCTION_ID_MASK: u8 = 0x0F;

/// Offset from a CALL to the instruction it returns to.
pub const CALL_RETURN_OFFSET: u8 = 2;
