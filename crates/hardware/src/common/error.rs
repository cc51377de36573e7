//! Simulator error definitions.
//!
//! The pipeline itself never faults: unsupported encodings decode to no-ops and
//! arithmetic overflow wraps. Errors are raised only at the boundary of the
//! modelled hardware:
//! 1. **Memory Bounds:** Fetches and data accesses outside the configured arrays.
//! 2. **Program Loading:** Malformed images or images that do not fit the
//!    instruction memory.
//! 3. **Configuration:** Malformed or inconsistent configuration documents.
//! 4. **Run Control:** Bounded run loops that exhaust their cycle budget.

use thiserror::Error;

/// Errors reported by the simulator.
///
/// A tick that returns an error commits no state, so the core can be inspected
/// exactly as it was before the offending cycle.
#[derive(Debug, Error)]
pub enum SimError {
    /// Instruction fetch beyond the end of instruction memory.
    #[error("instruction fetch out of bounds at {pc:#010x} (instruction memory is {len} bytes)")]
    FetchOutOfBounds {
        /// Program counter of the fetch.
        pc: u32,
        /// Size of the instruction memory in bytes.
        len: usize,
    },

    /// Load or store touching bytes outside data memory.
    #[error("data access of {size} byte(s) at {addr:#010x} out of bounds (data memory is {len} bytes)")]
    DataOutOfBounds {
        /// Effective address of the access.
        addr: u32,
        /// Access width in bytes.
        size: usize,
        /// Size of the data memory in bytes.
        len: usize,
    },

    /// Program image larger than the instruction memory.
    #[error("program of {len} bytes does not fit in {capacity}-byte instruction memory")]
    ProgramTooLarge {
        /// Program size in bytes.
        len: usize,
        /// Instruction memory size in bytes.
        capacity: usize,
    },

    /// Program image that is not a whole number of instruction words.
    #[error("program length {0} is not a multiple of the 4-byte instruction size")]
    UnalignedProgram(usize),

    /// Malformed line in a hexadecimal program image.
    #[error("program image line {line}: invalid instruction word `{text}`")]
    ProgramParse {
        /// One-based line number.
        line: usize,
        /// Offending token.
        text: String,
    },

    /// Configuration values that are individually valid but unusable.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration document that failed to deserialize.
    #[error("failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Bounded run that did not reach its stop condition.
    #[error("stop condition not reached within {limit} cycles")]
    CycleLimit {
        /// Cycle budget that was exhausted.
        limit: u64,
    },
}
