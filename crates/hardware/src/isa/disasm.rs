//! Instruction Disassembler for the LS-8.
//!
//! Converts an opcode byte and its two operand bytes into a human-readable
//! string for debug tracing, diagnostics, and test output.
//!
//! # Usage
//!
//! ```
//! use ls8_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0b1000_0010, 0, 8), "LDI R0, 8");
//! assert_eq!(disassemble(0xFF, 0, 0), "unknown (0xff)");
//! ```

use crate::isa::decode::Opcode;

/// Disassembles one instruction.
///
/// Register operands render as `R<n>`; the `LDI` immediate renders in decimal.
/// Operand bytes the instruction does not use are ignored. Returns
/// `"unknown (0x..)"` for bytes that decode to nothing.
///
/// # Arguments
///
/// * `opcode` - The raw opcode byte.
/// * `a` - The byte following the opcode.
/// * `b` - The byte after that.
pub fn disassemble(opcode: u8, a: u8, b: u8) -> String {
    let Some(op) = Opcode::decode(opcode) else {
        return format!("unknown ({opcode:#04x})");
    };
    let m = op.mnemonic();
    match op {
        Opcode::Ldi => format!("{m} R{a}, {b}"),
        Opcode::Add | Opcode::Mul | Opcode::Cmp => format!("{m} R{a}, R{b}"),
        Opcode::Prn
        | Opcode::Push
        | Opcode::Pop
        | Opcode::Call
        | Opcode::Jmp
        | Opcode::Jeq
        | Opcode::Jne => format!("{m} R{a}"),
        Opcode::Ret | Opcode::Hlt => m.to_string(),
    }
}
