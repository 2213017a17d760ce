//! Main Execution Loop.
//!
//! This module implements the fetch-decode-execute cycle. It performs the following:
//! 1. **Fetch:** Reads the opcode at `PC` and, unconditionally, the two bytes after it.
//! 2. **Decode:** Maps the opcode to an operation or raises `UnknownOpcode`.
//! 3. **Execute:** Runs the handler and applies the `Control` it returns to `PC`.
//! 4. **Observability:** Emits a trace line per step and keeps statistics.

use std::io::Write;

use super::{Control, Cpu, RunState};
use crate::common::VmError;
use crate::isa::disasm::disassemble;
use crate::isa::{Decoded, Opcode};

impl<W: Write> Cpu<W> {
    /// Fetches and decodes the instruction at `PC`.
    ///
    /// Performs no mutation. Operand addresses wrap past `0xFF`.
    ///
    /// # Errors
    ///
    /// Returns [`VmError::UnknownOpcode`] if the byte at `PC` is not an instruction.
    pub fn fetch(&self) -> Result<Decoded, VmError> {
        let pc = self.pc;
        let raw = self.ram_read(pc);
        let opcode = Opcode::decode(raw).ok_or(VmError::UnknownOpcode { opcode: raw, pc })?;
        Ok(Decoded {
            pc,
            opcode,
            operand_a: self.ram_read(pc.wrapping_add(1)),
            operand_b: self.ram_read(pc.wrapping_add(2)),
        })
    }

    /// Executes a single instruction.
    ///
    /// A halted CPU does nothing and reports [`Control::Halt`]. On a fault the
    /// CPU halts and the error is returned; registers and memory are as they
    /// were before the step.
    ///
    /// # Errors
    ///
    /// Returns the fault raised by fetch or by the instruction handler.
    pub fn step(&mut self) -> Result<Control, VmError> {
        if self.state == RunState::Halted {
            return Ok(Control::Halt);
        }
        if self.trace {
            tracing::trace!("{}", self.trace_line());
        }

        let result = self.fetch().and_then(|inst| {
            let control = self.execute(&inst)?;
            self.stats.record(inst.opcode, control);
            Ok(control)
        });

        match result {
            Ok(control) => {
                self.apply(control);
                Ok(control)
            }
            Err(e) => {
                self.state = RunState::Halted;
                Err(e)
            }
        }
    }

    /// Runs until `HLT` or the first fault.
    ///
    /// # Errors
    ///
    /// Returns the fault that stopped execution. A normal halt is `Ok(())`.
    pub fn run(&mut self) -> Result<(), VmError> {
        loop {
            if self.step()? == Control::Halt {
                return Ok(());
            }
        }
    }

    /// Applies a handler's control decision to the program counter.
    fn apply(&mut self, control: Control) {
        match control {
            Control::Advance(n) => self.pc = self.pc.wrapping_add(n),
            Control::Jump(target) => self.pc = target,
            Control::Halt => {
                self.state = RunState::Halted;
                tracing::debug!(
                    pc = self.pc,
                    retired = self.stats.instructions_retired,
                    "halted"
                );
            }
        }
    }

    /// Renders the machine state about to execute.
    ///
    /// Format: `TRACE: PC | OP A B | R0 .. R7 | disassembly`, all bytes in hex.
    pub fn trace_line(&self) -> String {
        let pc = self.pc;
        let op = self.ram_read(pc);
        let a = self.ram_read(pc.wrapping_add(1));
        let b = self.ram_read(pc.wrapping_add(2));
        format!(
            "TRACE: {pc:02X} | {op:02X} {a:02X} {b:02X} |{} | {}",
            self.regs.dump(),
            disassemble(op, a, b)
        )
    }
}
