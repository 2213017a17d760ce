//! Fault and Load Error definitions.
//!
//! This module defines the error handling for the emulator. It provides:
//! 1. **Runtime Faults:** Everything that stops a program mid-execution (`VmError`).
//! 2. **Load Errors:** Everything that prevents a program image from being read (`LoadError`).
//! 3. **Exit Policy:** The process exit status each error maps to.
//!
//! None of these are recoverable: the run loop stops at the first fault and the
//! caller decides how to report it.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Exit status for a successful halt.
pub const EXIT_SUCCESS: i32 = 0;

/// Exit status for runtime faults, malformed images and usage errors.
pub const EXIT_FAILURE: i32 = 1;

/// Exit status when the program image does not exist.
pub const EXIT_IMAGE_NOT_FOUND: i32 = 2;

/// Faults raised while executing a program.
///
/// Every variant carries the program counter of the faulting instruction so a
/// diagnostic can point at it. A fault never leaves partial state behind: each
/// handler validates its operands before it writes anything.
#[derive(Debug, Error)]
pub enum VmError {
    /// The fetched byte does not name any instruction.
    #[error("Error: Instruction {opcode} not found (pc={pc:#04x})")]
    UnknownOpcode {
        /// The offending byte.
        opcode: u8,
        /// Address it was fetched from.
        pc: u8,
    },

    /// An operand used as a register index is outside the register file.
    #[error("register index {index} out of range (pc={pc:#04x})")]
    RegisterOutOfRange {
        /// The offending operand byte.
        index: u8,
        /// Address of the instruction.
        pc: u8,
    },

    /// A push or call would move the stack pointer below address 0.
    #[error("stack overflow (pc={pc:#04x})")]
    StackOverflow {
        /// Address of the instruction.
        pc: u8,
    },

    /// A pop or return would move the stack pointer above address 255.
    #[error("stack underflow (pc={pc:#04x})")]
    StackUnderflow {
        /// Address of the instruction.
        pc: u8,
    },

    /// The program image does not fit in memory.
    #[error("program image is {len} bytes, memory holds 256")]
    ImageTooLarge {
        /// Length of the rejected image.
        len: usize,
    },

    /// The output sink rejected a PRN write.
    #[error("output error: {0}")]
    Output(#[from] io::Error),
}

impl VmError {
    /// Returns the process exit status for this fault.
    pub const fn exit_code(&self) -> i32 {
        EXIT_FAILURE
    }
}

/// Errors raised while reading a program image.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The named file does not exist.
    #[error("{} not found", .0.display())]
    ImageNotFound(PathBuf),

    /// The file exists but could not be read.
    #[error("could not read {}: {source}", path.display())]
    Io {
        /// Path of the image.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },

    /// A line does not hold a base-2 literal that fits in one byte.
    #[error("line {line}: invalid binary literal '{text}'")]
    InvalidLiteral {
        /// 1-based line number.
        line: usize,
        /// The literal as written, comment stripped.
        text: String,
    },

    /// The image has more lines than memory has cells.
    #[error("program image is {len} bytes, memory holds 256")]
    ImageTooLarge {
        /// Number of bytes parsed so far.
        len: usize,
    },
}

impl LoadError {
    /// Returns the process exit status for this error.
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::ImageNotFound(_) => EXIT_IMAGE_NOT_FOUND,
            Self::Io { .. } | Self::InvalidLiteral { .. } | Self::ImageTooLarge { .. } => {
                EXIT_FAILURE
            }
        }
    }
}
