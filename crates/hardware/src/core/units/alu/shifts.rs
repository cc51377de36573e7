//! ALU shift operations.
//!
//! Implements shift-left logical (SLL), shift-right logical (SRL), and
//! shift-right arithmetic (SRA). Only the low five bits of the shift amount
//! are used, so variable shifts by a register behave like the hardware.

use crate::core::pipeline::signals::AluMode;

/// Bit mask for the shift amount (5 bits: 0-31).
const SHAMT_MASK: u32 = 0x1f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `mode` - The ALU operation to perform (must be a shift variant).
/// * `a`    - The value to be shifted.
/// * `b`    - The shift amount (upper bits ignored).
///
/// Returns `0` for non-shift modes.
pub const fn execute(mode: AluMode, a: u32, b: u32) -> u32 {
    let sh = b & SHAMT_MASK;
    match mode {
        AluMode::Sll => a << sh,
        AluMode::Srl => a >> sh,
        AluMode::Sra => ((a as i32) >> sh) as u32,
        _ => 0,
    }
}
