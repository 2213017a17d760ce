//! LS-8 Instruction Decoder.
//!
//! Maps an opcode byte to the operation it names. The mapping is closed: a
//! byte that is not one of the thirteen defined encodings has no operation and
//! the CPU must fault on it.

use crate::isa::instruction::InstructionBits;
use crate::isa::opcodes;

/// Every operation the machine can execute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `LDI reg, imm`
    Ldi,
    /// `PRN reg`
    Prn,
    /// `ADD reg_a, reg_b`
    Add,
    /// `MUL reg_a, reg_b`
    Mul,
    /// `PUSH reg`
    Push,
    /// `POP reg`
    Pop,
    /// `CALL reg`
    Call,
    /// `RET`
    Ret,
    /// `CMP reg_a, reg_b`
    Cmp,
    /// `JMP reg`
    Jmp,
    /// `JEQ reg`
    Jeq,
    /// `JNE reg`
    Jne,
    /// `HLT`
    Hlt,
}

impl Opcode {
    /// All operations, in instruction table order.
    pub const ALL: [Self; 13] = [
        Self::Ldi,
        Self::Prn,
        Self::Add,
        Self::Mul,
        Self::Push,
        Self::Pop,
        Self::Call,
        Self::Ret,
        Self::Cmp,
        Self::Jmp,
        Self::Jeq,
        Self::Jne,
        Self::Hlt,
    ];

    /// Decodes an opcode byte, or returns `None` if no instruction has that encoding.
    pub const fn decode(byte: u8) -> Option<Self> {
        Some(match byte {
            opcodes::LDI => Self::Ldi,
            opcodes::PRN => Self::Prn,
            opcodes::ADD => Self::Add,
            opcodes::MUL => Self::Mul,
            opcodes::PUSH => Self::Push,
            opcodes::POP => Self::Pop,
            opcodes::CALL => Self::Call,
            opcodes::RET => Self::Ret,
            opcodes::CMP => Self::Cmp,
            opcodes::JMP => Self::Jmp,
            opcodes::JEQ => Self::Jeq,
            opcodes::JNE => Self::Jne,
            opcodes::HLT => Self::Hlt,
            _ => return None,
        })
    }

    /// Returns the byte encoding of this operation.
    pub const fn encoding(self) -> u8 {
        match self {
            Self::Ldi => opcodes::LDI,
            Self::Prn => opcodes::PRN,
            Self::Add => opcodes::ADD,
            Self::Mul => opcodes::MUL,
            Self::Push => opcodes::PUSH,
            Self::Pop => opcodes::POP,
            Self::Call => opcodes::CALL,
            Self::Ret => opcodes::RET,
            Self::Cmp => opcodes::CMP,
            Self::Jmp => opcodes::JMP,
            Self::Jeq => opcodes::JEQ,
            Self::Jne => opcodes::JNE,
            Self::Hlt => opcodes::HLT,
        }
    }

    /// Returns the assembler mnemonic.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::Ldi => "LDI",
            Self::Prn => "PRN",
            Self::Add => "ADD",
            Self::Mul => "MUL",
            Self::Push => "PUSH",
            Self::Pop => "POP",
            Self::Call => "CALL",
            Self::Ret => "RET",
            Self::Cmp => "CMP",
            Self::Jmp => "JMP",
            Self::Jeq => "JEQ",
            Self::Jne => "JNE",
            Self::Hlt => "HLT",
        }
    }

    /// Number of operand bytes following the opcode.
    pub fn operand_count(self) -> u8 {
        self.encoding().operand_count()
    }

    /// Number of bytes the PC advances past this instruction when it does not jump.
    pub fn size(self) -> u8 {
        self.encoding().size()
    }
}

impl std::fmt::Display for Opcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.mnemonic())
    }
}
