//! LS-8 Opcodes.
//!
//! Defines the raw byte encoding of every instruction. The high nibble packs
//! the operand count (bits 6-7), the ALU flag (bit 5) and the sets-PC flag
//! (bit 4); the low nibble identifies the instruction within its class.

/// Halt the machine.
pub const HLT: u8 = 0b0000_0001;

/// Return from subroutine.
pub const RET: u8 = 0b0001_0001;

/// Push a register onto the stack.
pub const PUSH: u8 = 0b0100_0101;

/// Pop the top of the stack into a register.
pub const POP: u8 = 0b0100_0110;

/// Print a register as a decimal integer.
pub const PRN: u8 = 0b0100_0111;

/// Call a subroutine at the address held in a register.
pub const CALL: u8 = 0b0101_0000;

/// Jump to the address held in a register.
pub const JMP: u8 = 0b0101_0100;

/// Jump if the comparison flag is set.
pub const JEQ: u8 = 0b0101_0101;

/// Jump if the comparison flag is clear.
pub const JNE: u8 = 0b0101_0110;

/// Load an immediate into a register.
pub const LDI: u8 = 0b1000_0010;

/// Add two registers.
pub const ADD: u8 = 0b1010_0000;

/// Multiply two registers.
pub const MUL: u8 = 0b1010_0010;

/// Compare two registers for equality.
pub const CMP: u8 = 0b1010_0111;
