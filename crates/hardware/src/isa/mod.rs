//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode encodings, opcode-byte field extraction, the decoder
//! and the disassembler for the LS-8 instruction set.

/// Instruction decoding from opcode byte to operation.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Opcode byte field extraction and the decoded instruction structure.
pub mod instruction;

/// Raw opcode encodings.
pub mod opcodes;

pub use decode::Opcode;
pub use instruction::{Decoded, InstructionBits};
