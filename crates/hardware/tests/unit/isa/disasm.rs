//! # Disassembler Tests
//!
//! Verifies mnemonic and operand rendering for every instruction.

use ls8_core::isa::disasm::disassemble;
use ls8_core::isa::opcodes::*;
use pretty_assertions::assert_eq;
use rstest::rstest;

#[rstest]
#[case(LDI, 2, 200, "LDI R2, 200")]
#[case(PRN, 5, 0, "PRN R5")]
#[case(ADD, 0, 1, "ADD R0, R1")]
#[case(MUL, 3, 4, "MUL R3, R4")]
#[case(PUSH, 1, 0, "PUSH R1")]
#[case(POP, 6, 0, "POP R6")]
#[case(CALL, 1, 0, "CALL R1")]
#[case(RET, 0, 0, "RET")]
#[case(CMP, 0, 7, "CMP R0, R7")]
#[case(JMP, 2, 0, "JMP R2")]
#[case(JEQ, 3, 0, "JEQ R3")]
#[case(JNE, 4, 0, "JNE R4")]
#[case(HLT, 0, 0, "HLT")]
fn test_disassemble(#[case] op: u8, #[case] a: u8, #[case] b: u8, #[case] expected: &str) {
    assert_eq!(disassemble(op, a, b), expected);
}

#[test]
fn test_unknown_byte() {
    assert_eq!(disassemble(0, 0, 0), "unknown (0x00)");
    assert_eq!(disassemble(0b1111_1111, 1, 2), "unknown (0xff)");
}
