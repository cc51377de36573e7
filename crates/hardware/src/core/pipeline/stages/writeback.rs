//! Writeback (WB) Stage.
//!
//! This module implements the final stage of the instruction pipeline. It
//! selects the committed value (loaded data for loads, the ALU result
//! otherwise) and presents it to the register file's write port. The same
//! write is visible to Decode's register read and to Execute's forwarding
//! network in the tick it commits.

use crate::core::arch::gpr::RegWrite;
use crate::core::pipeline::latches::MemWbEntry;

/// Executes the writeback stage of the pipeline.
///
/// Returns the register write for valid instructions with `writes_rd` set,
/// `None` otherwise. Writes addressed to register 0 are returned and then
/// discarded by the register file.
pub const fn wb_stage(mem_wb: &MemWbEntry) -> Option<RegWrite> {
    if !mem_wb.valid || !mem_wb.ctrl.writes_rd {
        return None;
    }
    let value = if mem_wb.ctrl.load {
        mem_wb.load_data
    } else {
        mem_wb.alu_result
    };
    Some(RegWrite {
        addr: mem_wb.rd,
        value,
    })
}
