//! Read-only instruction memory.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::common::error::SimError;
use crate::config::ByteOrder;

use super::{compose, decompose, span};

/// Instruction memory: a zero-filled byte array holding the program at address 0.
///
/// Unused space reads as `0x00000000`, which decodes as `nop`.
#[derive(Clone, Debug)]
pub struct InstructionMemory {
    bytes: Vec<u8>,
    order: ByteOrder,
}

impl InstructionMemory {
    /// Creates an empty instruction memory of `size` bytes.
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

    /// Byte order used to compose instruction words.
    pub const fn order(&self) -> ByteOrder {
        self.order
    }

    /// Replaces the contents with a program image placed at address 0.
    ///
    /// The image is a raw byte stream in the memory's byte order; the rest of
    /// the memory is cleared.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::UnalignedProgram`] if the image is not a whole
    /// number of words and [`SimError::ProgramTooLarge`] if it does not fit.
    pub fn load(&mut self, program: &[u8]) -> Result<(), SimError> {
        if program.len() % INSTRUCTION_SIZE as usize != 0 {
            return Err(SimError::UnalignedProgram(program.len()));
        }
        if program.len() > self.bytes.len() {
            return Err(SimError::ProgramTooLarge {
                len: program.len(),
                capacity: self.bytes.len(),
            });
        }
        self.bytes.fill(0);
        self.bytes[..program.len()].copy_from_slice(program);
        Ok(())
    }

    /// Replaces the contents with a sequence of instruction words placed at address 0.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] if the words do not fit.
    pub fn load_words(&mut self, words: &[u32]) -> Result<(), SimError> {
        let mut image = vec![0u8; words.len() * INSTRUCTION_SIZE as usize];
        for (chunk, word) in image.chunks_exact_mut(INSTRUCTION_SIZE as usize).zip(words) {
            decompose(*word, chunk, self.order);
        }
        self.load(&image)
    }

    /// Reads the instruction word at `pc`.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::FetchOutOfBounds`] if any of the four bytes lies
    /// beyond the end of the memory.
    pub fn read_word(&self, pc: u32) -> Result<u32, SimError> {
        let range = span(pc, INSTRUCTION_SIZE as usize, self.bytes.len()).ok_or(
            SimError::FetchOutOfBounds {
                pc,
                len: self.bytes.len(),
            },
        )?;
        Ok(compose(&self.bytes[range], self.order))
    }

    /// Raw contents.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}
