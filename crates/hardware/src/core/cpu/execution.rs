//! Main Execution Loop.
//!
//! This module implements the clock tick of the CPU. Every stage is evaluated
//! from the latch contents at the start of the tick, in reverse pipeline order
//! so that the values each stage forwards are available to the stage behind
//! it, and the results are committed together only when every stage
//! succeeded.

use super::Cpu;
use crate::common::error::SimError;
use crate::core::arch::gpr::RegWrite;
use crate::core::pipeline::hazards::{PipelineControl, Redirect};
use crate::core::pipeline::latches::Latches;
use crate::core::pipeline::signals::ControlSignals;
use crate::core::pipeline::stages::{
    StoreRequest, decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage,
};
use crate::isa::disasm::disassemble;

/// An instruction leaving the pipeline through Writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Retired {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// Control signals, including whether a register was written.
    pub ctrl: ControlSignals,
}

/// Observable effects of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Instruction committed this tick.
    pub retired: Option<Retired>,
    /// Register write committed this tick, including discarded writes to `$0`.
    pub reg_write: Option<RegWrite>,
    /// Data memory write committed this tick.
    pub store: Option<StoreRequest>,
    /// Redirect applied to Fetch this tick; a deferred redirect is reported
    /// on the tick it is finally applied.
    pub redirect: Option<Redirect>,
    /// Valid wrong-path instructions discarded this tick.
    pub flushed: u32,
    /// The stall input was asserted.
    pub stalled: bool,
}

impl Cpu {
    /// Advances the core by one clock tick.
    ///
    /// # Arguments
    ///
    /// * `stall` - External stall input; holds Fetch for this tick
    ///
    /// # Errors
    ///
    /// Returns [`SimError`] if Fetch or the Memory stage accesses memory out
    /// of bounds. No state is modified in that case.
    pub fn tick(&mut self, stall: bool) -> Result<TickReport, SimError> {
        let trace = self.trace;
        let ctrl = PipelineControl::new(stall, &self.latches, self.pc, self.deferred_redirect);

        let wb = wb_stage(&self.latches.mem_wb);
        let mem = mem_stage(&self.latches.ex_mem, &self.dmem, trace)?;
        let ex_mem = execute_stage(&self.latches.id_ex, wb_stage(&mem.entry), wb, trace);
        let id_ex = decode_stage(&self.latches.if_id, &self.regs, wb, &ctrl, trace);
        let fetch = fetch_stage(self.pc, &self.imem, &ctrl, trace)?;

        if let Some(store) = mem.store {
            self.dmem.write(store.addr, store.size, store.value)?;
        }
        if let Some(w) = wb {
            self.regs.commit(w);
        }

        let retiring = &self.latches.mem_wb;
        let retired = retiring.valid.then_some(Retired {
            pc: retiring.pc,
            inst: retiring.inst,
            ctrl: retiring.ctrl,
        });
        if trace && let Some(r) = retired {
            tracing::trace!(
                pc = format_args!("{:#010x}", r.pc),
                "WB  {}{}",
                disassemble(r.inst),
                wb.map(|w| format!(" ${} <- {:#010x}", w.addr, w.value))
                    .unwrap_or_default()
            );
        }

        let flushed = ctrl.flushed(&self.latches.if_id);
        if let Some(redirect) = ctrl.applied() {
            tracing::debug!(
                from = format_args!("{:#010x}", redirect.source_pc),
                to = format_args!("{:#010x}", redirect.target),
                flushed,
                "redirect"
            );
        } else if let Some(redirect) = ctrl.deferred() {
            tracing::debug!(
                from = format_args!("{:#010x}", redirect.source_pc),
                "redirect deferred until delay slot is fetched"
            );
        }

        self.latches = Latches {
            if_id: fetch.entry,
            id_ex,
            ex_mem,
            mem_wb: mem.entry,
        };
        self.pc = fetch.next_pc;
        self.deferred_redirect = ctrl.deferred();

        Ok(TickReport {
            retired,
            reg_write: wb,
            store: mem.store,
            redirect: ctrl.applied(),
            flushed,
            stalled: stall,
        })
    }
}
