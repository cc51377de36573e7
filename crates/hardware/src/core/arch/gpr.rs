//! General-Purpose Register File.
//!
//! This module implements the 32-entry integer register file. It performs the following:
//! 1. **Storage:** Maintains 32 word registers (`$0`-`$31`).
//! 2. **Invariant Enforcement:** Ensures that register `$0` reads as zero and discards writes.
//! 3. **Write-Then-Read:** Resolves a same-tick read against the write committed in that tick.
//! 4. **Debugging:** Renders the complete register state with ABI names.

use std::fmt;

use crate::common::constants::REG_COUNT;
use crate::isa::abi::reg_name;

/// One register-file write: the single write port driven by Writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register index (0-31); writes to 0 are discarded.
    pub addr: usize,
    /// Value to commit.
    pub value: u32,
}

/// General-Purpose Register file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: [u32; REG_COUNT],
}

impl Gpr {
    /// Creates a new register file with all registers initialized to zero.
    pub const fn new() -> Self {
        Self {
            regs: [0; REG_COUNT],
        }
    }

    /// Reads a register. Register `$0` always returns 0.
    pub const fn read(&self, idx: usize) -> u32 {
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Reads a register as it appears after `pending` commits.
    ///
    /// Decode reads the file in the same tick that Writeback commits into it and
    /// must observe the new value, so the pending write wins on an address match.
    pub fn read_bypassed(&self, idx: usize, pending: Option<RegWrite>) -> u32 {
        match pending {
            Some(w) if w.addr == idx && idx != 0 => w.value,
            _ => self.read(idx),
        }
    }

    /// Writes a value to a register. Writes to `$0` are discarded.
    pub const fn write(&mut self, idx: usize, val: u32) {
        if idx != 0 {
            self.regs[idx] = val;
        }
    }

    /// Commits a write-port transaction.
    pub const fn commit(&mut self, w: RegWrite) {
        self.write(w.addr, w.value);
    }

    /// Returns a copy of all 32 registers.
    pub const fn snapshot(&self) -> [u32; REG_COUNT] {
        self.regs
    }
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Gpr {
    /// Renders registers in pairs with ABI names and hexadecimal values.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..REG_COUNT).step_by(2) {
            writeln!(
                f,
                "${:<2} {:>4}={:#010x}  ${:<2} {:>4}={:#010x}",
                i,
                reg_name(i),
                self.regs[i],
                i + 1,
                reg_name(i + 1),
                self.regs[i + 1]
            )?;
        }
        Ok(())
    }
}
