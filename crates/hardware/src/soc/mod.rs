//! Memory system surrounding the core.
//!
//! The core sees two independent byte arrays: a read-only instruction memory
//! and a read/write data memory.

/// Instruction and data memories.
pub mod memory;

pub use self::memory::{DataMemory, InstructionMemory};
