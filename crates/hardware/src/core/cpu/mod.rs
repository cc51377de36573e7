//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the entire
//! processor state. It coordinates the following:
//! 1. **State Management:** Register file and the fetch program counter.
//! 2. **Pipeline Control:** The four pipeline latches and the reset state.
//! 3. **Memories:** Instruction and data memories owned by the core.
//!
//! The clock is advanced by [`Cpu::tick`], defined in the `execution` module.

/// Single-tick pipeline evaluation and commit.
pub mod execution;

pub use self::execution::{Retired, TickReport};

use crate::common::constants::INSTRUCTION_SIZE;
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::core::pipeline::hazards::Redirect;
use crate::core::pipeline::latches::{ExMemEntry, IdExEntry, IfIdEntry, Latches, MemWbEntry};
use crate::soc::{DataMemory, InstructionMemory};

/// Main CPU structure containing all processor state and components.
#[derive(Clone, Debug)]
pub struct Cpu {
    /// General Purpose Registers.
    pub regs: Gpr,
    /// Program counter of the next fetch.
    pub pc: u32,
    /// Pipeline registers.
    pub latches: Latches,
    /// Redirect held back until its delay slot can be fetched.
    pub deferred_redirect: Option<Redirect>,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Enable per-stage tracing (forced on by the `always-trace` feature).
    pub trace: bool,
    /// Program counter shown by IF/ID while in reset.
    reset_pc: u32,
}

impl Cpu {
    /// Creates a CPU in the reset state with zeroed registers and memories.
    pub fn new(config: &Config) -> Self {
        let reset_pc = config.general.reset_pc;
        Self {
            regs: Gpr::new(),
            pc: reset_pc.wrapping_add(INSTRUCTION_SIZE),
            latches: Latches::reset(reset_pc),
            deferred_redirect: None,
            imem: InstructionMemory::new(
                config.memory.imem_size,
                config.memory.instruction_order,
            ),
            dmem: DataMemory::new(config.memory.dmem_size, config.memory.data_order),
            trace: config.general.trace || cfg!(feature = "always-trace"),
            reset_pc,
        }
    }

    /// Asserts reset.
    ///
    /// Every in-flight instruction becomes a bubble, IF/ID shows the reset
    /// program counter with instruction 0, and the next fetch is from the
    /// word after it. Registers and memories keep their contents.
    pub fn reset(&mut self) {
        self.latches = Latches::reset(self.reset_pc);
        self.deferred_redirect = None;
        self.pc = self.reset_pc.wrapping_add(INSTRUCTION_SIZE);
        tracing::debug!(reset_pc = format_args!("{:#010x}", self.reset_pc), "reset");
    }

    /// Program counter shown by IF/ID while in reset.
    pub const fn reset_pc(&self) -> u32 {
        self.reset_pc
    }

    /// Current IF/ID latch: the fetched (program counter, instruction) pair.
    pub const fn fetched(&self) -> &IfIdEntry {
        &self.latches.if_id
    }

    /// Current ID/EX latch.
    pub const fn decoded(&self) -> &IdExEntry {
        &self.latches.id_ex
    }

    /// Current EX/ME latch.
    pub const fn executed(&self) -> &ExMemEntry {
        &self.latches.ex_mem
    }

    /// Current ME/WB latch.
    pub const fn memory_result(&self) -> &MemWbEntry {
        &self.latches.mem_wb
    }
}
