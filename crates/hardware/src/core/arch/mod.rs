//! Architectural state components.
//!
//! This module contains the programmer-visible state of the core:
//! 1. **GPRs:** The 32-entry general-purpose register file and its write port.

/// General-Purpose Register file implementation.
pub mod gpr;
