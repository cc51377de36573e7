//! ALU logical and comparison operations.

use crate::core::pipeline::signals::AluMode;

/// Executes a bitwise or set-on-less-than operation.
///
/// `SLT` compares the operands as two's-complement values, `SLTU` as unsigned
/// values; both produce 1 or 0. Returns `0` for other modes.
pub const fn execute(mode: AluMode, a: u32, b: u32) -> u32 {
    match mode {
        AluMode::And => a & b,
        AluMode::Or => a | b,
        AluMode::Xor => a ^ b,
        AluMode::Nor => !(a | b),
        AluMode::Slt => ((a as i32) < (b as i32)) as u32,
        AluMode::Sltu => (a < b) as u32,
        _ => 0,
    }
}
