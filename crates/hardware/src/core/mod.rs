//! Core processor implementation.
//!
//! This module contains the CPU state, the fetch-decode-execute loop, the
//! instruction handlers and the ALU.

/// CPU core implementation and execution loop.
pub mod cpu;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::{Control, Cpu, RunState};
