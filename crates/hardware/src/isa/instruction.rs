//! Instruction encoding utilities.
//!
//! Provides bit extraction for the fields packed into an opcode byte, and the
//! `Decoded` structure handed from the fetch stage to execution.

use crate::common::constants::{
    ALU_FLAG_MASK, INSTRUCTION_ID_MASK, OPERAND_COUNT_MASK, OPERAND_COUNT_SHIFT,
    SETS_PC_FLAG_MASK,
};
use crate::isa::decode::Opcode;

/// Trait for extracting instruction fields from an encoded opcode byte.
pub trait InstructionBits {
    /// Extracts the operand count (bits 6-7).
    ///
    /// Returns 0, 1 or 2 for every defined instruction; 3 is encodable but unused.
    fn operand_count(&self) -> u8;

    /// Returns true if the ALU flag (bit 5) is set.
    ///
    /// Informational only; dispatch does not depend on it.
    fn is_alu(&self) -> bool;

    /// Returns true if the sets-PC flag (bit 4) is set.
    fn sets_pc(&self) -> bool;

    /// Extracts the instruction identifier (bits 0-3).
    fn instruction_id(&self) -> u8;

    /// Total size of the instruction in bytes, opcode included.
    fn size(&self) -> u8 {
        1 + self.operand_count()
    }
}

impl InstructionBits for u8 {
    #[inline(always)]
    fn operand_count(&self) -> u8 {
        (self >> OPERAND_COUNT_SHIFT) & OPERAND_COUNT_MASK
    }

    #[inline(always)]
    fn is_alu(&self) -> bool {
        self & ALU_FLAG_MASK != 0
    }

    #[inline(always)]
    fn sets_pc(&self) -> bool {
        self & SETS_PC_FLAG_MASK != 0
    }

    #[inline(always)]
    fn instruction_id(&self) -> u8 {
        self & INSTRUCTION_ID_MASK
    }
}

/// A fetched and decoded instruction.
///
/// Both operand bytes are always fetched, whether or not the instruction
/// uses them; memory is fully initialized so the extra read is harmless.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Address the opcode was fetched from.
    pub pc: u8,
    /// Decoded operation.
    pub opcode: Opcode,
    /// Byte at `pc + 1`.
    pub operand_a: u8,
    /// Byte at `pc + 2`.
    pub operand_b: u8,
}
