//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Instruction field masks, control-flow offsets, and reset values.
//! 2. **Error Handling:** The `SimError` type returned by all fallible operations.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types.
pub mod error;

pub use constants::{INSTRUCTION_SIZE, REG_COUNT, RESET_PC};
pub use error::SimError;
