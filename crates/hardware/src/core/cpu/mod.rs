//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Registers, program counter, comparison flag and run state.
//! 2. **Memory:** The 256-byte address space the program is loaded into.
//! 3. **Output:** The sink `PRN` writes to (stdout by default, any `io::Write` in tests).
//! 4. **Observability:** Statistics and the optional per-instruction trace.

/// Fetch-decode-execute loop.
pub mod execution;

/// Instruction handlers.
pub mod instructions;

/// Memory and stack access helpers.
pub mod memory;

use std::io::{self, Stdout, Write};

use crate::common::{Memory, RegisterFile, VmError};
use crate::config::Config;
use crate::stats::SimStats;

/// How an instruction leaves the program counter.
///
/// Every handler returns one of these. The execution loop applies it, so a
/// handler can never both jump and advance.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    /// Continue with the instruction `n` bytes further on.
    Advance(u8),
    /// Continue at this address; no further increment.
    Jump(u8),
    /// Stop the run loop.
    Halt,
}

/// Run state of the machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum RunState {
    /// Executing instructions.
    #[default]
    Running,
    /// Stopped by `HLT` or a fault. Terminal until `reset`.
    Halted,
}

/// Main CPU structure containing all machine state.
///
/// Generic over the sink `PRN` writes to. `Cpu::new` uses stdout;
/// `Cpu::with_output` accepts any writer, such as a `Vec<u8>` in tests.
#[derive(Debug)]
pub struct Cpu<W: Write = Stdout> {
    /// General-purpose registers; `R7` is the stack pointer.
    pub regs: RegisterFile,
    /// Main memory.
    pub ram: Memory,
    /// Program counter.
    pub pc: u8,
    /// Comparison flag, set by `CMP` when its operands are equal.
    pub equal: bool,
    /// Running or halted.
    pub state: RunState,
    /// Emit a trace line before each instruction.
    pub trace: bool,
    /// Execution statistics.
    pub stats: SimStats,
    start_pc: u8,
    initial_sp: u8,
    out: W,
}

impl Cpu<Stdout> {
    /// Creates a CPU that prints to stdout.
    ///
    /// # Arguments
    ///
    /// * `config` - Reset state and tracing options.
    pub fn new(config: &Config) -> Self {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> Cpu<W> {
    /// Creates a CPU that prints to `out`.
    ///
    /// Memory is zeroed, `PC` and `R7` take the configured reset values, and the
    /// comparison flag is clear.
    ///
    /// # Arguments
    ///
    /// * `config` - Reset state and tracing options.
    /// * `out` - Destination for `PRN` output.
    pub fn with_output(config: &Config, out: W) -> Self {
        let general = &config.general;
        Self {
            regs: RegisterFile::with_sp(general.initial_sp),
            ram: Memory::new(),
            pc: general.start_pc,
            equal: false,
            state: RunState::Running,
            trace: general.trace_instructions,
            stats: SimStats::default(),
            start_pc: general.start_pc,
            initial_sp: general.initial_sp,
            out,
        }
    }

    /// Returns the machine to its reset state: memory and registers cleared,
    /// `PC` and `R7` at their reset values, flag clear, running.
    pub fn reset(&mut self) {
        self.regs = RegisterFile::with_sp(self.initial_sp);
        self.ram.clear();
        self.pc = self.start_pc;
        self.equal = false;
        self.state = RunState::Running;
        self.stats = SimStats::default();
        tracing::debug!(pc = self.pc, sp = self.initial_sp, "cpu reset");
    }

    /// Copies a program image into memory starting at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::ImageTooLarge`] if the image is longer than memory;
    /// memory is left untouched in that case.
    pub fn load_image(&mut self, image: &[u8]) -> Result<(), VmError> {
        if !self.ram.load_at_zero(image) {
            return Err(VmError::ImageTooLarge { len: image.len() });
        }
        tracing::debug!(bytes = image.len(), "program image loaded");
        Ok(())
    }

    /// Returns true once the machine has stopped.
    pub fn is_halted(&self) -> bool {
        self.state == RunState::Halted
    }

    /// Returns the stack pointer (`R7`).
    pub const fn sp(&self) -> u8 {
        self.regs.sp()
    }

    /// Borrows the output sink.
    pub const fn output(&self) -> &W {
        &self.out
    }

    /// Consumes the CPU and returns the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Logs the current CPU state (PC, SP, flag and registers) at `DEBUG` level.
    pub fn dump_state(&self) {
        let regs = self.regs.dump();
        tracing::debug!(
            pc = self.pc,
            sp = self.sp(),
            equal = self.equal,
            regs = %regs.trim_start(),
            "cpu state"
        );
    }
}
