//! Simulator: owns the CPU and its statistics side-by-side.
//!
//! The simulator is the run-control layer above [`Cpu::tick`]: it loads
//! programs, drives the clock, and folds every [`TickReport`] into
//! [`SimStats`].

use crate::common::error::SimError;
use crate::config::Config;
use crate::core::Cpu;
use crate::core::cpu::TickReport;
use crate::stats::SimStats;

/// Top-level simulator: CPU state plus collected statistics.
#[derive(Debug)]
pub struct Simulator {
    cpu: Cpu,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator in the reset state.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if the configuration is unusable.
    pub fn new(config: &Config) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            cpu: Cpu::new(config),
            stats: SimStats::default(),
        })
    }

    /// Loads raw instruction bytes at address 0 and resets the core.
    ///
    /// # Errors
    ///
    /// Returns an error if the image is not word-sized or does not fit.
    pub fn load_program(&mut self, bytes: &[u8]) -> Result<(), SimError> {
        self.cpu.imem.load(bytes)?;
        tracing::debug!(bytes = bytes.len(), "program loaded");
        self.reset();
        Ok(())
    }

    /// Loads instruction words at address 0 and resets the core.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ProgramTooLarge`] if the program does not fit.
    pub fn load_words(&mut self, words: &[u32]) -> Result<(), SimError> {
        self.cpu.imem.load_words(words)?;
        tracing::debug!(words = words.len(), "program loaded");
        self.reset();
        Ok(())
    }

    /// Asserts reset and clears the statistics.
    pub fn reset(&mut self) {
        self.cpu.reset();
        self.stats = SimStats::default();
    }

    /// Advances the simulator by one clock cycle.
    ///
    /// # Errors
    ///
    /// Propagates out-of-bounds memory accesses from the core.
    pub fn tick(&mut self, stall: bool) -> Result<TickReport, SimError> {
        let report = self.cpu.tick(stall)?;
        self.stats.record(&report);
        Ok(report)
    }

    /// Runs `cycles` unstalled clock cycles.
    ///
    /// # Errors
    ///
    /// Stops at the first failing tick and returns its error.
    pub fn run(&mut self, cycles: u64) -> Result<(), SimError> {
        for _ in 0..cycles {
            let _ = self.tick(false)?;
        }
        Ok(())
    }

    /// Runs until the instruction at `pc` retires.
    ///
    /// Returns the number of cycles executed by this call, including the
    /// cycle in which the instruction retired.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::CycleLimit`] if the instruction has not retired
    /// after `max_cycles`, or the error of a failing tick.
    pub fn run_until(&mut self, pc: u32, max_cycles: u64) -> Result<u64, SimError> {
        for cycle in 1..=max_cycles {
            let report = self.tick(false)?;
            if report.retired.is_some_and(|r| r.pc == pc) {
                tracing::debug!(pc = format_args!("{pc:#010x}"), cycles = cycle, "stop pc retired");
                return Ok(cycle);
            }
        }
        Err(SimError::CycleLimit { limit: max_cycles })
    }

    /// Statistics collected since the last reset.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// The simulated core.
    pub const fn cpu(&self) -> &Cpu {
        &self.cpu
    }

    /// Mutable access to the simulated core, e.g. to preload data memory.
    pub const fn cpu_mut(&mut self) -> &mut Cpu {
        &mut self.cpu
    }
}
