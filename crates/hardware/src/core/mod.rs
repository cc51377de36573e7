//! Core processor implementation.
//!
//! This module contains the pipelined CPU: the register file, the pipeline
//! stages and latches, the execution units, and the `Cpu` that clocks them.

/// Architectural state (general purpose register file).
pub mod arch;

/// CPU core implementation and tick orchestration.
pub mod cpu;

/// Instruction pipeline implementation (stages, latches, hazards, signals).
pub mod pipeline;

/// Execution units (ALU, branch resolution, load/store lane helpers).
pub mod units;

pub use self::cpu::Cpu;
