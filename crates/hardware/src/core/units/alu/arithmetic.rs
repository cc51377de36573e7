//! ALU arithmetic operations.
//!
//! Addition and subtraction wrap modulo 2^32. The trapping (`ADD`, `SUB`) and
//! non-trapping (`ADDU`, `SUBU`) forms produce identical results because
//! overflow exceptions are not modelled.

use crate::core::pipeline::signals::AluMode;

/// Executes an integer arithmetic operation.
///
/// Returns `0` for non-arithmetic modes.
pub const fn execute(mode: AluMode, a: u32, b: u32) -> u32 {
    match mode {
        AluMode::Add | AluMode::Addu => a.wrapping_add(b),
        AluMode::Sub | AluMode::Subu => a.wrapping_sub(b),
        _ => 0,
    }
}
