//! Load/Store Unit (LSU).
//!
//! Lane helpers shared by the memory stage: narrowing store data to the
//! access width and widening load data back to a register word.

use crate::core::pipeline::signals::MemSize;

/// Load/Store Unit (LSU) for memory operations.
#[derive(Debug)]
pub struct Lsu;

impl Lsu {
    /// Widens a raw loaded value to 32 bits.
    ///
    /// With `sign_extend` the top bit of the loaded field is replicated across
    /// the remaining high bits, otherwise they are cleared.
    ///
    /// ```
    /// use mipsim_core::core::pipeline::signals::MemSize;
    /// use mipsim_core::core::units::lsu::Lsu;
    ///
    /// assert_eq!(Lsu::extend(0xBA, MemSize::Byte, true), 0xFFFF_FFBA);
    /// assert_eq!(Lsu::extend(0xBA, MemSize::Byte, false), 0x0000_00BA);
    /// ```
    pub const fn extend(raw: u32, size: MemSize, sign_extend: bool) -> u32 {
        match (size, sign_extend) {
            (MemSize::Byte, true) => raw as u8 as i8 as i32 as u32,
            (MemSize::Byte, false) => raw & 0xFF,
            (MemSize::HalfWord, true) => raw as u16 as i16 as i32 as u32,
            (MemSize::HalfWord, false) => raw & 0xFFFF,
            (MemSize::Word, _) => raw,
        }
    }

    /// Keeps the low bits of `value` that fit the access width.
    pub const fn truncate(value: u32, size: MemSize) -> u32 {
        match size {
            MemSize::Byte => value & 0xFF,
            MemSize::HalfWord => value & 0xFFFF,
            MemSize::Word => value,
        }
    }
}
