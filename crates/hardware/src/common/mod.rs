//! Common types shared by every part of the emulator.
//!
//! This module provides the fundamental building blocks of the machine. It includes:
//! 1. **Constants:** Memory size, register layout, and opcode field masks.
//! 2. **Error Handling:** Runtime faults, load errors, and their exit codes.
//! 3. **Memory:** The 256-byte address space.
//! 4. **Register Management:** The eight-register file with `R7` as stack pointer.

/// Machine-wide constants.
pub mod constants;

/// Fault and load error types.
pub mod error;

/// Main memory.
pub mod memory;

/// Register file implementation.
pub mod reg;

pub use constants::{MEMORY_SIZE, NUM_REGISTERS, SP_INIT, SP_REG};
pub use error::{LoadError, VmError};
pub use memory::Memory;
pub use reg::RegisterFile;
