//! LS-8 virtual machine library.
//!
//! This crate implements the LS-8, an 8-bit stack-and-register machine with the following:
//! 1. **Core:** Eight byte-wide registers (`R7` is the stack pointer), a comparison flag,
//!    and a fetch-decode-execute loop.
//! 2. **Memory:** A flat 256-byte address space holding both program and stack.
//! 3. **ISA:** Thirteen instructions: load, print, add, multiply, push, pop, call,
//!    return, compare, and three jumps, plus halt.
//! 4. **Simulation:** Program image loader, configuration, tracing and statistics.
//!
//! ```
//! use ls8_core::{Config, Cpu};
//!
//! let mut cpu = Cpu::with_output(&Config::default(), Vec::new());
//! cpu.load_image(&[
//!     0b1000_0010, 0, 8, // LDI R0,8
//!     0b1000_0010, 1, 9, // LDI R1,9
//!     0b1010_0000, 0, 1, // ADD R0,R1
//!     0b0100_0111, 0, // PRN R0
//!     0b0000_0001, // HLT
//! ])?;
//! cpu.run()?;
//! assert_eq!(cpu.output(), b"17\n");
//! # Ok::<(), ls8_core::VmError>(())
//! ```

/// Common types and constants (registers, memory, errors).
pub mod common;
/// Run configuration (reset state, tracing).
pub mod config;
/// CPU core (state, execution loop, instruction handlers, ALU).
pub mod core;
/// Instruction set (opcodes, decode, disassembler).
pub mod isa;
/// Program image loader.
pub mod sim;
/// Execution statistics collection and reporting.
pub mod stats;

/// Runtime fault and image load error types.
pub use crate::common::{LoadError, VmError};
/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds registers, memory and the output sink.
pub use crate::core::Cpu;
