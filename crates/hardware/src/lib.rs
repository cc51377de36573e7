//! Five-stage pipelined MIPS-I core simulator library.
//!
//! This crate implements a cycle-accurate model of a classic in-order MIPS
//! pipeline with the following:
//! 1. **Core:** Fetch, decode, execute, memory and writeback stages joined by
//!    pipeline latches, with full forwarding and a single branch delay slot.
//! 2. **Memory:** Separate instruction and data memories with configurable
//!    byte ordering.
//! 3. **ISA:** Decoding and disassembly of the MIPS-I integer subset.
//! 4. **Simulation:** Program loading, run control, configuration, and
//!    statistics collection.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::{Config, Simulator};
//!
//! let mut sim = Simulator::new(&Config::default())?;
//! // addiu $t0, $zero, 7 ; nop
//! sim.load_words(&[0x2408_0007, 0])?;
//! let cycles = sim.run_until(0, 16)?;
//! assert_eq!(cycles, 5);
//! assert_eq!(sim.cpu().regs.read(8), 7);
//! # Ok::<(), mipsim_core::common::SimError>(())
//! ```

/// Common types and constants (error type, field masks, memory defaults).
pub mod common;
/// Simulator configuration (defaults, enums, hierarchical config structures).
pub mod config;
/// CPU core (pipeline, register file, execution units, tick orchestration).
pub mod core;
/// Instruction set (field extraction, opcodes, decode, disassembly, ABI names).
pub mod isa;
/// Run control and program image loading.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// Main CPU type; holds the latches, register file and memories.
pub use crate::core::Cpu;
/// Top-level simulator driving a `Cpu` and collecting statistics.
pub use crate::sim::Simulator;
