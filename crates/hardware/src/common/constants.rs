//! Global System Constants.
//!
//! This module defines constants shared by the ISA decoder and the pipeline:
//! 1. **Instruction Constants:** Word size and field masks.
//! 2. **Control Flow:** Link offset and jump region mask.
//! 3. **Reset:** Default fetch sentinel and memory sizes.

/// Size of an instruction word in bytes.
pub const INSTRUCTION_SIZE: u32 = 4;

/// Number of general-purpose registers.
pub const REG_COUNT: usize = 32;

/// Mask for a 5-bit register or shift-amount field.
pub const REG_FIELD_MASK: u32 = 0x1F;

/// Mask for the 6-bit opcode and function fields.
pub const OP_FIELD_MASK: u32 = 0x3F;

/// Mask for the 16-bit immediate field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Mask for the 26-bit jump target field.
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Bits of `pc + 4` retained by an absolute jump.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Offset from a linking instruction to its return address (skips the delay slot).
pub const LINK_OFFSET: u32 = 8;

/// Shift applied to the immediate by `lui`.
pub const LUI_SHIFT: u32 = 16;

/// Program counter shown by the IF/ID register while in reset: one word before 0.
pub const RESET_PC: u32 = 0u32.wrapping_sub(INSTRUCTION_SIZE);

/// Default instruction memory size (64 KiB).
pub const DEFAULT_IMEM_SIZE: usize = 64 * 1024;

/// Default data memory size (64 KiB).
pub const DEFAULT_DMEM_SIZE: usize = 64 * 1024;
