//! Execution statistics collection and reporting.
//!
//! This module tracks what a program did while it ran. It provides:
//! 1. **Totals:** Instructions retired and host execution speed.
//! 2. **Instruction mix:** Counts by category (ALU, load, stack, branch, call, output).
//! 3. **Branches:** Conditional jumps taken versus fallen through.

use std::time::Instant;

use crate::core::cpu::Control;
use crate::isa::Opcode;

/// Execution statistics for one run.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Number of instructions executed to completion, `HLT` included.
    pub instructions_retired: u64,

    /// Count of `ADD`, `MUL` and `CMP`.
    pub inst_alu: u64,
    /// Count of `LDI`.
    pub inst_load: u64,
    /// Count of `PUSH` and `POP`.
    pub inst_stack: u64,
    /// Count of `JMP`, `JEQ` and `JNE`.
    pub inst_branch: u64,
    /// Count of `CALL` and `RET`.
    pub inst_call: u64,
    /// Count of `PRN`.
    pub inst_output: u64,
    /// Count of `HLT`.
    pub inst_system: u64,

    /// Conditional jumps that transferred control.
    pub branches_taken: u64,
    /// Conditional jumps that fell through.
    pub branches_not_taken: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_stack: 0,
            inst_branch: 0,
            inst_call: 0,
            inst_output: 0,
            inst_system: 0,
            branches_taken: 0,
            branches_not_taken: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "branch"];

impl SimStats {
    /// Records one retired instruction and how it left the program counter.
    pub const fn record(&mut self, op: Opcode, control: Control) {
        self.instructions_retired += 1;
        match op {
            Opcode::Add | Opcode::Mul | Opcode::Cmp => self.inst_alu += 1,
            Opcode::Ldi => self.inst_load += 1,
            Opcode::Push | Opcode::Pop => self.inst_stack += 1,
            Opcode::Call | Opcode::Ret => self.inst_call += 1,
            Opcode::Prn => self.inst_output += 1,
            Opcode::Hlt => self.inst_system += 1,
            Opcode::Jmp => self.inst_branch += 1,
            Opcode::Jeq | Opcode::Jne => {
                self.inst_branch += 1;
                match control {
                    Control::Jump(_) => self.branches_taken += 1,
                    Control::Advance(_) | Control::Halt => self.branches_not_taken += 1,
                }
            }
        }
    }

    /// Renders the requested sections.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`]. An empty
    /// slice selects every section.
    pub fn render_sections(&self, sections: &[&str]) -> String {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64| (n as f64 / instr) * 100.0;
        let mut out = Vec::new();

        out.push("==========================================================".to_string());
        out.push("LS-8 EXECUTION STATISTICS".to_string());
        out.push("==========================================================".to_string());
        if want("summary") {
            let ips = if seconds > 0.0 {
                self.instructions_retired as f64 / seconds
            } else {
                0.0
            };
            out.push(format!("host_seconds             {seconds:.6} s"));
            out.push(format!("sim_insts                {}", self.instructions_retired));
            out.push(format!("sim_insts_per_sec        {ips:.0}"));
            out.push("----------------------------------------------------------".to_string());
        }
        if want("instruction_mix") {
            out.push("INSTRUCTION MIX".to_string());
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.stack", self.inst_stack),
                ("op.branch", self.inst_branch),
                ("op.call", self.inst_call),
                ("op.output", self.inst_output),
                ("op.system", self.inst_system),
            ] {
                out.push(format!("  {name:<22} {n} ({:.2}%)", pct(n)));
            }
            out.push("----------------------------------------------------------".to_string());
        }
        if want("branch") {
            let total = self.branches_taken + self.branches_not_taken;
            let rate = if total > 0 {
                100.0 * (self.branches_taken as f64 / total as f64)
            } else {
                0.0
            };
            out.push("CONDITIONAL BRANCHES".to_string());
            out.push(format!("  br.taken               {}", self.branches_taken));
            out.push(format!("  br.not_taken           {}", self.branches_not_taken));
            out.push(format!("  br.taken_rate          {rate:.2}%"));
        }
        out.push("==========================================================".to_string());
        out.join("\n")
    }

    /// Prints the requested sections to stdout.
    pub fn print_sections(&self, sections: &[&str]) {
        println!("{}", self.render_sections(sections));
    }

    /// Prints all statistics sections to stdout.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
