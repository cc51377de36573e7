//! Execute (EX) Stage.
//!
//! This module implements the third stage of the instruction pipeline. It performs:
//! 1. **Operand Forwarding:** Replaces stale register values with in-flight results.
//! 2. **ALU Evaluation:** Register, immediate, shift, `lui` and link computations.
//! 3. **Address Generation:** Effective addresses for loads and stores.
//! 4. **Branch Resolution:** Branch conditions and jump targets, latched for Fetch.

use crate::common::constants::{LINK_OFFSET, LUI_SHIFT};
use crate::core::arch::gpr::RegWrite;
use crate::core::pipeline::hazards::forward_operands;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry};
use crate::core::pipeline::signals::AluMode;
use crate::core::units::alu::Alu;
use crate::core::units::bru::Bru;
use crate::isa::disasm::disassemble;
use crate::isa::instruction::sext16;

/// Executes the execute stage of the pipeline.
///
/// # Arguments
///
/// * `id_ex` - Current ID/EX latch
/// * `newer` - Result leaving the Memory stage this tick (one instruction ahead)
/// * `older` - Result committed by Writeback this tick (two instructions ahead)
/// * `trace` - Emit trace events
///
/// Returns the new EX/ME latch contents. A conditional branch-and-link that is
/// not taken has its register write disabled here.
pub fn execute_stage(
    id_ex: &IdExEntry,
    newer: Option<RegWrite>,
    older: Option<RegWrite>,
    trace: bool,
) -> ExMemEntry {
    if !id_ex.valid {
        return ExMemEntry::default();
    }

    let (rs, rt) = forward_operands(id_ex, newer, older, trace);
    let alu_result = compute(id_ex, rs, rt);
    let (branch_taken, branch_target) = resolve(id_ex, rs, rt);

    let mut ctrl = id_ex.ctrl;
    if ctrl.branch.is_some() && ctrl.link && !branch_taken {
        ctrl.writes_rd = false;
    }

    if trace {
        tracing::trace!(
            pc = format_args!("{:#010x}", id_ex.pc),
            "EX  {} -> {alu_result:#010x}{}",
            disassemble(id_ex.inst),
            if branch_taken {
                format!(" taken to {branch_target:#010x}")
            } else {
                String::new()
            }
        );
    }

    ExMemEntry {
        pc: id_ex.pc,
        inst: id_ex.inst,
        valid: true,
        rd: id_ex.rd,
        alu_result,
        store_data: rt,
        branch_taken,
        branch_target,
        ctrl,
    }
}

/// Computes the ALU output: link address, `lui` value, ALU result, or
/// effective address. Instructions without ALU semantics produce 0.
fn compute(e: &IdExEntry, rs: u32, rt: u32) -> u32 {
    let ctrl = &e.ctrl;
    if ctrl.load || ctrl.store {
        return Alu::execute(AluMode::Addu, rs, e.imm.map_or(0, sext16));
    }

    let Some(mode) = ctrl.alu else {
        return 0;
    };

    if ctrl.link {
        return Alu::execute(mode, e.pc, LINK_OFFSET);
    }
    if ctrl.lui {
        return Alu::execute(mode, e.imm.map_or(0, u32::from), LUI_SHIFT);
    }

    let b = if mode.is_shift() {
        e.shamt.map_or(rt, u32::from)
    } else {
        match e.imm {
            Some(imm) if mode.zero_extends_immediate() => u32::from(imm),
            Some(imm) => sext16(imm),
            None => rt,
        }
    };
    Alu::execute(mode, rs, b)
}

/// Resolves control flow: `(taken, target)`.
///
/// The target of a conditional branch is reported whether or not it is taken.
fn resolve(e: &IdExEntry, rs: u32, rt: u32) -> (bool, u32) {
    if let Some(mode) = e.ctrl.branch {
        let target = Bru::branch_target(e.pc, e.imm.unwrap_or(0));
        (Bru::taken(mode, rs, rt), target)
    } else if e.ctrl.jump {
        let target = e.target.map_or(rs, |t| Bru::jump_target(e.pc, t));
        (true, target)
    } else {
        (false, 0)
    }
}
