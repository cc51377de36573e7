//! Memory Access (MEM) Stage.
//!
//! This module implements the fourth stage of the instruction pipeline. It performs:
//! 1. **Loads:** Reads data memory at the effective address and extends the value.
//! 2. **Stores:** Validates the access and returns the write to be committed at the end of the tick.
//! 3. **Pass-through:** Forwards ALU results and destination fields unchanged for other instructions.

use crate::common::error::SimError;
use crate::core::pipeline::latches::{ExMemEntry, MemWbEntry};
use crate::core::pipeline::signals::MemSize;
use crate::core::units::lsu::Lsu;
use crate::soc::DataMemory;

/// A data memory write performed when the tick commits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StoreRequest {
    /// Effective byte address.
    pub addr: u32,
    /// Access width.
    pub size: MemSize,
    /// Data, already truncated to the access width.
    pub value: u32,
}

/// Result of one memory cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemOutput {
    /// New ME/WB latch contents.
    pub entry: MemWbEntry,
    /// Store to commit, if the instruction is a store.
    pub store: Option<StoreRequest>,
}

/// Executes the memory access stage of the pipeline.
///
/// # Errors
///
/// Returns [`SimError::DataOutOfBounds`] if a load or store touches bytes
/// outside data memory. Nothing has been written when this happens.
pub fn mem_stage(
    ex_mem: &ExMemEntry,
    dmem: &DataMemory,
    trace: bool,
) -> Result<MemOutput, SimError> {
    if !ex_mem.valid {
        return Ok(MemOutput::default());
    }

    let ctrl = ex_mem.ctrl;
    let addr = ex_mem.alu_result;
    let mut load_data = 0;
    let mut store = None;

    if ctrl.load {
        let raw = dmem.read(addr, ctrl.mem_size)?;
        load_data = Lsu::extend(raw, ctrl.mem_size, ctrl.sign_extend);
        if trace {
            tracing::trace!(
                pc = format_args!("{:#010x}", ex_mem.pc),
                "MEM load {:?} [{addr:#010x}] -> {load_data:#010x}",
                ctrl.mem_size
            );
        }
    } else if ctrl.store {
        dmem.check(addr, ctrl.mem_size)?;
        let value = Lsu::truncate(ex_mem.store_data, ctrl.mem_size);
        if trace {
            tracing::trace!(
                pc = format_args!("{:#010x}", ex_mem.pc),
                "MEM store {:?} [{addr:#010x}] <- {value:#010x}",
                ctrl.mem_size
            );
        }
        store = Some(StoreRequest {
            addr,
            size: ctrl.mem_size,
            value,
        });
    }

    Ok(MemOutput {
        entry: MemWbEntry {
            pc: ex_mem.pc,
            inst: ex_mem.inst,
            valid: true,
            rd: ex_mem.rd,
            alu_result: ex_mem.alu_result,
            load_data,
            ctrl,
        },
        store,
    })
}
