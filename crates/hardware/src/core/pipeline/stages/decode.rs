//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the instruction pipeline. It performs:
//! 1. **Decoding:** Splits the instruction into register slots, operand fields and control signals.
//! 2. **Register Read:** Reads both register slots every cycle, observing this tick's writeback.
//! 3. **Flushing:** Converts the wrong-path instruction behind a taken branch into a bubble.

use crate::core::arch::gpr::{Gpr, RegWrite};
use crate::core::pipeline::hazards::PipelineControl;
use crate::core::pipeline::latches::{IdExEntry, IfIdEntry};
use crate::isa::decode::decode;
use crate::isa::disasm::disassemble;

/// Executes the instruction decode stage of the pipeline.
///
/// # Arguments
///
/// * `if_id` - Current IF/ID latch
/// * `regs` - Register file before this tick's commit
/// * `wb` - Write committed by Writeback in the same tick
/// * `ctrl` - Flush control for this tick
/// * `trace` - Emit a trace event for the decoded instruction
///
/// Returns the new ID/EX latch contents; a bubble for bubbles and flushed
/// instructions.
pub fn decode_stage(
    if_id: &IfIdEntry,
    regs: &Gpr,
    wb: Option<RegWrite>,
    ctrl: &PipelineControl,
    trace: bool,
) -> IdExEntry {
    if !if_id.valid {
        return IdExEntry::default();
    }
    if ctrl.squash_decode() {
        if trace {
            tracing::trace!(pc = format_args!("{:#010x}", if_id.pc), "ID  flushed");
        }
        return IdExEntry::default();
    }

    let d = decode(if_id.inst);
    let entry = IdExEntry {
        pc: if_id.pc,
        inst: if_id.inst,
        valid: true,
        rs: d.rs,
        rt: d.rt,
        rd: d.rd,
        rs_data: regs.read_bypassed(d.rs, wb),
        rt_data: regs.read_bypassed(d.rt, wb),
        shamt: d.shamt,
        imm: d.imm,
        target: d.target,
        ctrl: d.ctrl,
    };

    if trace {
        tracing::trace!(
            pc = format_args!("{:#010x}", entry.pc),
            "ID  {} rs=${}={:#x} rt=${}={:#x}",
            disassemble(entry.inst),
            entry.rs,
            entry.rs_data,
            entry.rt,
            entry.rt_data
        );
    }

    entry
}
