//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains field extraction, opcode tables, decoding and disassembly for the
//! MIPS-I integer subset implemented by the pipeline.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Instruction decoding into register slots and control signals.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Instruction encoding and bit extraction utilities.
pub mod instruction;

/// Opcode, function and REGIMM field values.
pub mod opcodes;
