//! Instruction encoding and field extraction.
//!
//! MIPS-I uses three formats that share the 6-bit opcode in bits 31-26:
//!
//! ```text
//! R: opcode | rs | rt | rd | shamt | funct
//! I: opcode | rs | rt | imm[15:0]
//! J: opcode | target[25:0]
//! ```

use crate::common::constants::{IMM_MASK, OP_FIELD_MASK, REG_FIELD_MASK, TARGET_MASK};

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the rs field.
pub const RS_SHIFT: u32 = 21;
/// Bit position of the rt field.
pub const RT_SHIFT: u32 = 16;
/// Bit position of the rd field.
pub const RD_SHIFT: u32 = 11;
/// Bit position of the shift-amount field.
pub const SHAMT_SHIFT: u32 = 6;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the rs register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the rt register field (bits 16-20).
    ///
    /// For REGIMM branches this field selects the branch variant instead.
    fn rt(&self) -> usize;

    /// Extracts the rd register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the shift-amount field (bits 6-10).
    fn shamt(&self) -> u8;

    /// Extracts the function field (bits 0-5) of R-type instructions.
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate (bits 0-15).
    fn imm(&self) -> u16;

    /// Extracts the immediate sign-extended to 32 bits.
    fn imm_sext(&self) -> u32;

    /// Extracts the 26-bit jump target (bits 0-25).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OP_FIELD_MASK
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        ((self >> RS_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        ((self >> RT_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_FIELD_MASK) as usize
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_FIELD_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        self & OP_FIELD_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    #[inline(always)]
    fn imm_sext(&self) -> u32 {
        sext16(self.imm())
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Sign-extends a raw 16-bit immediate to 32 bits, replicating bit 15.
#[inline(always)]
pub const fn sext16(imm: u16) -> u32 {
    imm as i16 as i32 as u32
}
