//! Execution units and functional components.
//!
//! This module contains the combinational units used by the Execute and
//! Memory stages: the integer ALU, the branch resolution unit, and the
//! load/store lane helpers.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;

/// Branch Resolution Unit: branch conditions and control-flow targets.
pub mod bru;

/// Load/Store Unit: access-width truncation and load extension.
pub mod lsu;
