//! Instruction Handlers.
//!
//! One handler per operation. Each validates its operands, applies its effect
//! and reports how the program counter moves on via [`Control`]. Operands are
//! validated before anything is written, so a faulting instruction leaves the
//! machine exactly as it found it.

use std::io::Write;

use super::{Control, Cpu};
use crate::common::{RegisterFile, SP_REG, VmError};
use crate::common::constants::CALL_RETURN_OFFSET;
use crate::core::units::alu::{Alu, AluOp};
use crate::isa::{Decoded, Opcode};

impl<W: Write> Cpu<W> {
    /// Executes one decoded instruction.
    ///
    /// Does not touch the program counter; the caller applies the returned
    /// [`Control`].
    ///
    /// # Errors
    ///
    /// Returns the fault raised by the handler, if any.
    pub fn execute(&mut self, inst: &Decoded) -> Result<Control, VmError> {
        let Decoded {
            pc,
            opcode,
            operand_a: a,
            operand_b: b,
            ..
        } = *inst;
        let next = Control::Advance(opcode.size());

        match opcode {
            Opcode::Ldi => self.op_ldi(pc, a, b).map(|()| next),
            Opcode::Prn => self.op_prn(pc, a).map(|()| next),
            Opcode::Add => self.op_alu(AluOp::Add, pc, a, b).map(|()| next),
            Opcode::Mul => self.op_alu(AluOp::Mul, pc, a, b).map(|()| next),
            Opcode::Push => self.op_push(pc, a).map(|()| next),
            Opcode::Pop => self.op_pop(pc, a).map(|()| next),
            Opcode::Cmp => self.op_cmp(pc, a, b).map(|()| next),
            Opcode::Call => self.op_call(pc, a),
            Opcode::Ret => self.stack_pop(pc).map(Control::Jump),
            Opcode::Jmp => Ok(Control::Jump(self.reg_value(pc, a)?)),
            Opcode::Jeq => self.op_branch(pc, a, self.equal, next),
            Opcode::Jne => self.op_branch(pc, a, !self.equal, next),
            Opcode::Hlt => Ok(Control::Halt),
        }
    }

    /// Resolves a register operand.
    fn reg_index(pc: u8, operand: u8) -> Result<usize, VmError> {
        RegisterFile::index(operand).ok_or(VmError::RegisterOutOfRange { index: operand, pc })
    }

    /// Resolves a register operand and reads it.
    fn reg_value(&self, pc: u8, operand: u8) -> Result<u8, VmError> {
        Self::reg_index(pc, operand).map(|r| self.regs.read(r))
    }

    fn op_ldi(&mut self, pc: u8, a: u8, imm: u8) -> Result<(), VmError> {
        let r = Self::reg_index(pc, a)?;
        self.regs.write(r, imm);
        Ok(())
    }

    fn op_prn(&mut self, pc: u8, a: u8) -> Result<(), VmError> {
        let val = self.reg_value(pc, a)?;
        writeln!(self.out, "{val}")?;
        Ok(())
    }

    fn op_alu(&mut self, op: AluOp, pc: u8, a: u8, b: u8) -> Result<(), VmError> {
        let ra = Self::reg_index(pc, a)?;
        let rb = Self::reg_index(pc, b)?;
        let result = Alu::execute(op, self.regs.read(ra), self.regs.read(rb));
        self.regs.write(ra, result);
        Ok(())
    }

    fn op_cmp(&mut self, pc: u8, a: u8, b: u8) -> Result<(), VmError> {
        self.equal = self.reg_value(pc, a)? == self.reg_value(pc, b)?;
        Ok(())
    }

    /// `PUSH` reads the register before moving the stack pointer, so
    /// `PUSH R7` stores the old stack pointer.
    fn op_push(&mut self, pc: u8, a: u8) -> Result<(), VmError> {
        let val = self.reg_value(pc, a)?;
        self.stack_push(val, pc)
    }

    /// `POP` writes the destination before bumping the stack pointer, so
    /// `POP R7` leaves `R7` one past the popped value.
    fn op_pop(&mut self, pc: u8, a: u8) -> Result<(), VmError> {
        let r = Self::reg_index(pc, a)?;
        let sp = self.regs.sp();
        let val = self.ram_read(sp);
        let base = if r == SP_REG { val } else { sp };
        let next = base.checked_add(1).ok_or(VmError::StackUnderflow { pc })?;
        self.regs.write(r, val);
        self.regs.set_sp(next);
        Ok(())
    }

    /// `CALL` pushes the return address, then reads the target register.
    fn op_call(&mut self, pc: u8, a: u8) -> Result<Control, VmError> {
        let r = Self::reg_index(pc, a)?;
        self.stack_push(pc.wrapping_add(CALL_RETURN_OFFSET), pc)?;
        Ok(Control::Jump(self.regs.read(r)))
    }

    /// Shared body of `JEQ` and `JNE`. The register is validated even when the
    /// branch falls through.
    fn op_branch(&self, pc: u8, a: u8, taken: bool, next: Control) -> Result<Control, VmError> {
        let target = self.reg_value(pc, a)?;
        Ok(if taken { Control::Jump(target) } else { next })
    }
}
