//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the five pipeline
//! stages: Fetch → Decode → Execute → Memory → Writeback.
//!
//! 1. **Instruction Flow:** One entry per stage boundary, rewritten every tick.
//! 2. **Bubbles:** `Default` is a bubble; flushed and stalled slots are
//!    bubbles, and every stage treats an entry with `valid == false` as a no-op.
//! 3. **Observability:** Every entry keeps the program counter and raw
//!    instruction word so each stage boundary can be inspected and traced.

use crate::core::pipeline::signals::ControlSignals;

/// Entry in the IF/ID pipeline latch (Fetch to Decode stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// False for bubbles, the reset slot, and flushed wrong-path fetches.
    pub valid: bool,
}

/// Entry in the ID/EX pipeline latch (Decode to Execute stage).
///
/// Register slots that the instruction does not use hold register 0 and its
/// value 0.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct IdExEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// False for bubbles.
    pub valid: bool,
    /// Register read through the rs slot.
    pub rs: usize,
    /// Register read through the rt slot.
    pub rt: usize,
    /// Destination register index.
    pub rd: usize,
    /// Value read from the rs slot in Decode.
    pub rs_data: u32,
    /// Value read from the rt slot in Decode.
    pub rt_data: u32,
    /// Shift amount, for constant shifts.
    pub shamt: Option<u8>,
    /// Raw 16-bit immediate.
    pub imm: Option<u16>,
    /// 26-bit jump target.
    pub target: Option<u32>,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the EX/ME pipeline latch (Execute to Memory stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct ExMemEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// False for bubbles.
    pub valid: bool,
    /// Destination register index.
    pub rd: usize,
    /// ALU result, link address, or effective address for loads and stores.
    pub alu_result: u32,
    /// Forwarded rt value; the data written by stores.
    pub store_data: u32,
    /// The instruction is a taken branch or a jump.
    pub branch_taken: bool,
    /// Resolved target; meaningful only when `branch_taken` is set.
    pub branch_target: u32,
    /// Control signals for downstream pipeline stages.
    pub ctrl: ControlSignals,
}

/// Entry in the ME/WB pipeline latch (Memory to Writeback stage).
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct MemWbEntry {
    /// Program counter of the instruction.
    pub pc: u32,
    /// 32-bit instruction encoding.
    pub inst: u32,
    /// False for bubbles.
    pub valid: bool,
    /// Destination register index.
    pub rd: usize,
    /// ALU computation result (for non-load instructions).
    pub alu_result: u32,
    /// Extended data loaded from memory (for load instructions).
    pub load_data: u32,
    /// Control signals for the writeback stage.
    pub ctrl: ControlSignals,
}

/// The four pipeline registers of the core.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct Latches {
    /// Fetch to Decode.
    pub if_id: IfIdEntry,
    /// Decode to Execute.
    pub id_ex: IdExEntry,
    /// Execute to Memory.
    pub ex_mem: ExMemEntry,
    /// Memory to Writeback.
    pub mem_wb: MemWbEntry,
}

impl Latches {
    /// Latch contents while reset is asserted: bubbles everywhere and the
    /// IF/ID register showing the reset program counter with instruction 0.
    pub fn reset(reset_pc: u32) -> Self {
        Self {
            if_id: IfIdEntry {
                pc: reset_pc,
                ..IfIdEntry::default()
            },
            ..Self::default()
        }
    }

    /// Number of stage slots holding a valid instruction.
    pub fn occupancy(&self) -> usize {
        [
            self.if_id.valid,
            self.id_ex.valid,
            self.ex_mem.valid,
            self.mem_wb.valid,
        ]
        .into_iter()
        .filter(|v| *v)
        .count()
    }
}
