//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU used in the Execute stage. All
//! operations work on 32-bit words with wrapping arithmetic; `ADD` and `SUB`
//! do not trap on overflow.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Addu, Sub, Subu
//! - [`logic`]:      And, Or, Xor, Nor, Slt, Sltu
//! - [`shifts`]:     Sll, Srl, Sra

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, xor, nor, slt).
pub mod logic;

/// Shift operations (sll, srl, sra).
pub mod shifts;

use crate::core::pipeline::signals::AluMode;

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `mode` - The ALU operation to perform
    /// * `a`    - First operand; the value being shifted for shift modes
    /// * `b`    - Second operand; the shift amount for shift modes
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::core::pipeline::signals::AluMode;
    ///
    /// assert_eq!(Alu::execute(AluMode::Add, 115, 102), 217);
    /// assert_eq!(Alu::execute(AluMode::Sub, 115, 102), 13);
    /// assert_eq!(Alu::execute(AluMode::Sll, 102, 30), 0x8000_0000);
    ///
    /// // Signed comparison
    /// assert_eq!(Alu::execute(AluMode::Slt, -5_i32 as u32, 10), 1);
    /// // Unsigned comparison sees -5 as a large value
    /// assert_eq!(Alu::execute(AluMode::Sltu, -5_i32 as u32, 10), 0);
    /// ```
    pub const fn execute(mode: AluMode, a: u32, b: u32) -> u32 {
        match mode {
            AluMode::Add | AluMode::Addu | AluMode::Sub | AluMode::Subu => {
                arithmetic::execute(mode, a, b)
            }
            AluMode::And
            | AluMode::Or
            | AluMode::Xor
            | AluMode::Nor
            | AluMode::Slt
            | AluMode::Sltu => logic::execute(mode, a, b),
            AluMode::Sll | AluMode::Srl | AluMode::Sra => shifts::execute(mode, a, b),
        }
    }
}
