//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 8-bit integer ALU behind `ADD` and `MUL`.
//! Registers are one byte wide, so every result wraps modulo 256.

/// Operations the ALU can perform.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Wrapping addition.
    Add,
    /// Wrapping multiplication.
    Mul,
}

/// Arithmetic Logic Unit for byte-wide integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Returns
    ///
    /// The low eight bits of the exact result.
    ///
    /// # Examples
    ///
    /// ```
    /// use ls8_core::core::units::alu::{Alu, AluOp};
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 8, 9), 17);
    /// assert_eq!(Alu::execute(AluOp::Add, 200, 100), 44);
    /// assert_eq!(Alu::execute(AluOp::Mul, 16, 17), 16);
    /// ```
    #[inline]
    pub const fn execute(op: AluOp, a: u8, b: u8) -> u8 {
        match op {
            AluOp::Add => a.wrapping_add(b),
            AluOp::Mul => a.wrapping_mul(b),
        }
    }
}
