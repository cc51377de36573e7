//! Instruction Fetch (IF) Stage.
//!
//! This module implements the first stage of the instruction pipeline. It
//! reads the word at the fetch program counter and advances sequentially.
//! There is no branch prediction: a taken branch or jump reaches Fetch as a
//! [`Redirect`](crate::core::pipeline::hazards::Redirect) one tick after it
//! executes, and the word fetched in that tick is discarded unless it is the
//! branch's delay slot.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::SimError;
use crate::core::pipeline::hazards::{DelaySlot, PipelineControl};
use crate::core::pipeline::latches::IfIdEntry;
use crate::isa::disasm::disassemble;
use crate::soc::InstructionMemory;

/// Result of one fetch cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchOutput {
    /// New IF/ID latch contents.
    pub entry: IfIdEntry,
    /// Program counter fetched next tick.
    pub next_pc: u32,
}

/// Executes the instruction fetch stage of the pipeline.
///
/// # Arguments
///
/// * `pc` - Program counter to fetch this tick
/// * `imem` - Instruction memory
/// * `ctrl` - Stall input and pending redirect
/// * `trace` - Emit a trace event for the fetched instruction
///
/// # Behavior
///
/// - Stalled: the program counter holds and IF/ID receives `{pc, 0}` as a
///   bubble, so repeated observations are identical
/// - Redirected: the sequential word is squashed and the program counter
///   becomes the redirect target, whether or not the stage is stalled
/// - Redirected before the delay slot was fetched: the delay slot is fetched
///   and the program counter becomes the target; a stall defers both
/// - Otherwise: IF/ID receives `{pc, imem[pc]}` and the program counter
///   advances by 4
///
/// # Errors
///
/// Returns [`SimError::FetchOutOfBounds`] if a non-squashed fetch reads past
/// the end of instruction memory.
pub fn fetch_stage(
    pc: u32,
    imem: &InstructionMemory,
    ctrl: &PipelineControl,
    trace: bool,
) -> Result<FetchOutput, SimError> {
    let bubble = IfIdEntry {
        pc,
        inst: 0,
        valid: false,
    };

    if let Some(redirect) = ctrl.redirect
        && ctrl.delay_slot != DelaySlot::Unfetched
    {
        if trace {
            tracing::trace!(
                pc = format_args!("{pc:#010x}"),
                "IF  squashed, redirect to {:#010x}",
                redirect.target
            );
        }
        return Ok(FetchOutput {
            entry: bubble,
            next_pc: redirect.target,
        });
    }

    if ctrl.stall {
        if trace {
            tracing::trace!(pc = format_args!("{pc:#010x}"), "IF  stalled");
        }
        return Ok(FetchOutput {
            entry: bubble,
            next_pc: pc,
        });
    }

    let inst = imem.read_word(pc)?;
    if trace {
        tracing::trace!(
            pc = format_args!("{pc:#010x}"),
            "IF  {inst:#010x} {}",
            disassemble(inst)
        );
    }
    // a delay slot fetched after its branch resolved is followed by the target
    let next_pc = ctrl
        .redirect
        .map_or(pc.wrapping_add(INSTRUCTION_SIZE), |r| r.target);
    Ok(FetchOutput {
        entry: IfIdEntry {
            pc,
            inst,
            valid: true,
        },
        next_pc,
    })
}
