//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the pipelined core. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and derived metrics (CPI, IPC).
//! 2. **Instruction mix:** Counts by category (ALU, load, store, branch, jump).
//! 3. **Control flow:** Taken redirects and flushed wrong-path instructions.
//! 4. **Stalls:** Cycles with the external stall input asserted.

use std::fmt;
use std::time::Instant;

use crate::core::cpu::TickReport;

/// Report section names accepted by [`SimStats::render_sections`].
pub const SECTIONS: [&str; 4] = ["summary", "instruction_mix", "control", "stalls"];

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug)]
pub struct SimStats {
    start_time: Instant,
    /// Total simulator cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired through Writeback.
    pub instructions_retired: u64,

    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branch instructions retired.
    pub inst_branch: u64,
    /// Count of jump instructions retired.
    pub inst_jump: u64,
    /// Count of ALU (non-load/store/branch/jump) instructions retired.
    pub inst_alu: u64,
    /// Count of unsupported encodings retired as no-ops.
    pub inst_other: u64,

    /// Taken branches and jumps that redirected Fetch.
    pub redirects: u64,
    /// Wrong-path instructions discarded by redirects.
    pub flushed: u64,
    /// Cycles with the external stall input asserted.
    pub stall_cycles: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            instructions_retired: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_jump: 0,
            inst_alu: 0,
            inst_other: 0,
            redirects: 0,
            flushed: 0,
            stall_cycles: 0,
        }
    }
}

impl SimStats {
    /// Accumulates the effects of one tick.
    pub fn record(&mut self, report: &TickReport) {
        self.cycles += 1;
        if report.stalled {
            self.stall_cycles += 1;
        }
        if report.redirect.is_some() {
            self.redirects += 1;
        }
        self.flushed += u64::from(report.flushed);

        let Some(retired) = report.retired else {
            return;
        };
        self.instructions_retired += 1;
        let ctrl = retired.ctrl;
        if ctrl.load {
            self.inst_load += 1;
        } else if ctrl.store {
            self.inst_store += 1;
        } else if ctrl.branch.is_some() {
            self.inst_branch += 1;
        } else if ctrl.jump {
            self.inst_jump += 1;
        } else if ctrl.alu.is_some() {
            self.inst_alu += 1;
        } else {
            self.inst_other += 1;
        }
    }

    /// Cycles per retired instruction, or 0 before the first retirement.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            return 0.0;
        }
        self.cycles as f64 / self.instructions_retired as f64
    }

    /// Retired instructions per cycle.
    pub fn ipc(&self) -> f64 {
        if self.cycles == 0 {
            return 0.0;
        }
        self.instructions_retired as f64 / self.cycles as f64
    }

    /// Renders only the requested report sections.
    ///
    /// Each element of `sections` should be one of [`SECTIONS`]. Pass an empty
    /// slice to render every section (same as the `Display` output).
    pub fn render_sections(&self, sections: &[&str]) -> String {
        let mut out = String::new();
        // Writing into a String cannot fail.
        let _ = self.write_sections(&mut out, sections);
        out
    }

    /// Logs the full report at `info` level.
    pub fn log(&self) {
        tracing::info!("{self}");
    }

    fn write_sections(&self, f: &mut impl fmt::Write, sections: &[&str]) -> fmt::Result {
        let want = |s: &str| sections.is_empty() || sections.contains(&s);
        let instr = self.instructions_retired.max(1) as f64;
        let pct = |n: u64, total: f64| (n as f64 / total) * 100.0;

        writeln!(f, "==========================================================")?;
        writeln!(f, "MIPS PIPELINE SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        if want("summary") {
            let seconds = self.start_time.elapsed().as_secs_f64();
            writeln!(f, "host_seconds             {seconds:.4} s")?;
            writeln!(f, "sim_cycles               {}", self.cycles)?;
            writeln!(f, "sim_insts                {}", self.instructions_retired)?;
            writeln!(f, "sim_ipc                  {:.4}", self.ipc())?;
            writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if want("instruction_mix") {
            writeln!(f, "INSTRUCTION MIX")?;
            for (name, n) in [
                ("op.alu", self.inst_alu),
                ("op.load", self.inst_load),
                ("op.store", self.inst_store),
                ("op.branch", self.inst_branch),
                ("op.jump", self.inst_jump),
                ("op.other", self.inst_other),
            ] {
                writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n, instr))?;
            }
            writeln!(f, "----------------------------------------------------------")?;
        }
        if want("control") {
            writeln!(f, "CONTROL FLOW")?;
            writeln!(f, "  redirects              {}", self.redirects)?;
            writeln!(f, "  flushed                {}", self.flushed)?;
            writeln!(f, "----------------------------------------------------------")?;
        }
        if want("stalls") {
            let cyc = self.cycles.max(1) as f64;
            writeln!(f, "STALLS")?;
            writeln!(
                f,
                "  stalls.external        {} ({:.2}%)",
                self.stall_cycles,
                pct(self.stall_cycles, cyc)
            )?;
        }
        writeln!(f, "==========================================================")
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_sections(f, &[])
    }
}
