//! Branch resolution unit (BRU).
//!
//! Evaluates branch conditions and computes control-flow targets in the
//! Execute stage. The pipeline has no predictor: fetch runs sequentially and a
//! taken branch or jump redirects it one tick after resolution.

use crate::common::constants::{INSTRUCTION_SIZE, JUMP_REGION_MASK};
use crate::core::pipeline::signals::BranchMode;
use crate::isa::instruction::sext16;

/// Shift converting a word offset or word index into a byte offset.
const WORD_SHIFT: u32 = 2;

/// Branch resolution unit.
#[derive(Debug)]
pub struct Bru;

impl Bru {
    /// Evaluates a branch condition on the forwarded operands.
    ///
    /// All comparisons are signed; `rt` is only consulted by `BEQ` and `BNE`.
    pub const fn taken(mode: BranchMode, rs: u32, rt: u32) -> bool {
        let s = rs as i32;
        match mode {
            BranchMode::Bltz => s < 0,
            BranchMode::Bgez => s >= 0,
            BranchMode::Beq => rs == rt,
            BranchMode::Bne => rs != rt,
            BranchMode::Blez => s <= 0,
            BranchMode::Bgtz => s > 0,
        }
    }

    /// Target of a conditional branch: `pc + 4 + sext(imm) * 4`.
    pub const fn branch_target(pc: u32, imm: u16) -> u32 {
        pc.wrapping_add(INSTRUCTION_SIZE)
            .wrapping_add(sext16(imm) << WORD_SHIFT)
    }

    /// Target of `j`/`jal`: the 26-bit word index placed in the 256 MiB region of `pc + 4`.
    pub const fn jump_target(pc: u32, target: u32) -> u32 {
        (pc.wrapping_add(INSTRUCTION_SIZE) & JUMP_REGION_MASK) | (target << WORD_SHIFT)
    }
}
