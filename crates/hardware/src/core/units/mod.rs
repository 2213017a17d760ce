//! Execution units.
//!
//! The LS-8 has a single functional unit beyond the register file and
//! memory: the byte-wide ALU used by `ADD` and `MUL`.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
