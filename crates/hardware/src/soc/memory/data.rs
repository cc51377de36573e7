//! Read/write data memory.

use crate::common::error::SimError;
use crate::config::ByteOrder;
use crate::core::pipeline::signals::MemSize;

use super::{compose, decompose, span};

/// Data memory: a zero-filled byte array accessed by the Memory stage.
///
/// Half-word and word accesses compose contiguous cells starting at any byte
/// address; no alignment is required.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl DataMemory {
    /// Creates a zero-filled data memory of `size` bytes.
    pub fn new(size: usize, order: ByteOrder) -> Self {
        Self {
            bytes: vec![0; size],
            order,
        }
    }

    /// Size of the memory in bytes.
    pub const fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns true if the memory has zero capacity.
    pub const fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Byte order used to compose multi-byte accesses.
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Validates an access without performing it.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataOutOfBounds`] if the access does not fit.
    pub fn check(&self, addr: u32, size: MemSize) -> Result<(), SimError> {
        self.range(addr, size).map(|_| ())
    }

    /// Reads `size` bytes at `addr`, zero-extended to 32 bits.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataOutOfBounds`] if the access does not fit.
    pub fn read(&self, addr: u32, size: MemSize) -> Result<u32, SimError> {
        let range = self.range(addr, size)?;
        Ok(compose(&self.bytes[range], self.order))
    }

    /// Writes the low `size` bytes of `value` at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataOutOfBounds`] if the access does not fit; the
    /// memory is left unchanged.
    pub fn write(&mut self, addr: u32, size: MemSize, value: u32) -> Result<(), SimError> {
        let range = self.range(addr, size)?;
        decompose(value, &mut self.bytes[range], self.order);
        Ok(())
    }

    /// Raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Copies `bytes` into memory starting at `addr`, for preloading data.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::DataOutOfBounds`] if the slice does not fit.
    pub fn load(&mut self, addr: u32, bytes: &[u8]) -> Result<(), SimError> {
        let range = span(addr, bytes.len(), self.bytes.len()).ok_or(SimError::DataOutOfBounds {
            addr,
            size: bytes.len(),
            len: self.bytes.len(),
        })?;
        self.bytes[range].copy_from_slice(bytes);
        Ok(())
    }

    fn range(&self, addr: u32, size: MemSize) -> Result<std::ops::Range<usize>, SimError> {
        span(addr, size.bytes(), self.bytes.len()).ok_or(SimError::DataOutOfBounds {
            addr,
            size: size.bytes(),
            len: self.bytes.len(),
        })
    }
}
