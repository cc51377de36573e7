//! Instruction and Data Memories.
//!
//! This module implements the two byte arrays the core accesses. It provides:
//! 1. **Instruction Memory:** Read-only program storage fetched one word at a time.
//! 2. **Data Memory:** Byte-addressable storage for byte, half-word and word accesses.
//! 3. **Byte Ordering:** Composition of multi-byte values from contiguous cells.
//!
//! Both memories are bounds-checked: an access that does not fit returns a
//! [`SimError`](crate::common::SimError) and leaves the contents untouched.

/// Read/write data memory.
pub mod data;

/// Read-only instruction memory.
pub mod instruction;

pub use self::data::DataMemory;
pub use self::instruction::InstructionMemory;

use crate::config::ByteOrder;

/// Composes up to four contiguous bytes into a value.
fn compose(bytes: &[u8], order: ByteOrder) -> u32 {
    let fold = |acc: u32, b: &u8| (acc << 8) | u32::from(*b);
    match order {
        ByteOrder::Big => bytes.iter().fold(0, fold),
        ByteOrder::Little => bytes.iter().rev().fold(0, fold),
    }
}

/// Splits the low `out.len()` bytes of `value` into contiguous cells.
fn decompose(value: u32, out: &mut [u8], order: ByteOrder) {
    let n = out.len();
    for (i, cell) in out.iter_mut().enumerate() {
        let lane = match order {
            ByteOrder::Big => n - 1 - i,
            ByteOrder::Little => i,
        };
        *cell = (value >> (8 * lane)) as u8;
    }
}

/// Returns the byte range `addr..addr + size` if it lies inside `len` bytes.
fn span(addr: u32, size: usize, len: usize) -> Option<std::ops::Range<usize>> {
    let start = usize::try_from(addr).ok()?;
    let end = start.checked_add(size)?;
    (end <= len).then_some(start..end)
}
