//! Configuration system for the pipelined core.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline memory sizes, byte orders, and the reset sentinel.
//! 2. **Structures:** Hierarchical config for general and memory settings.
//! 3. **Enums:** Byte ordering for multi-byte memory accesses.
//!
//! Configuration is supplied as JSON via [`Config::from_json`], or use
//! `Config::default()` for the stock core.

use serde::Deserialize;

use crate::common::constants::{
    DEFAULT_DMEM_SIZE, DEFAULT_IMEM_SIZE, INSTRUCTION_SIZE, RESET_PC,
};
use crate::common::error::SimError;

/// Default configuration constants for the simulator.
mod defaults {
    use super::{ByteOrder, DEFAULT_DMEM_SIZE, DEFAULT_IMEM_SIZE, RESET_PC};

    /// Program counter visible in the IF/ID register while in reset.
    ///
    /// One word before 0. Byte-granular sentinels such as `0xFFFF_FFFB` fail
    /// the word-alignment check in [`Config::validate`](super::Config::validate).
    pub const RESET_PC_VALUE: u32 = RESET_PC;

    /// Instruction memory size in bytes (64 KiB).
    pub const IMEM_SIZE: usize = DEFAULT_IMEM_SIZE;

    /// Data memory size in bytes (64 KiB).
    pub const DMEM_SIZE: usize = DEFAULT_DMEM_SIZE;

    /// Instruction words are stored most-significant byte first.
    pub const INSTRUCTION_ORDER: ByteOrder = ByteOrder::Big;

    /// Data words are stored least-significant byte first.
    ///
    /// After `sw 0xcecebaba` to address 0, `lb` from address 0 yields `0xba`.
    pub const DATA_ORDER: ByteOrder = ByteOrder::Little;
}

/// Byte ordering used to compose multi-byte memory accesses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum ByteOrder {
    /// Least-significant byte at the lowest address.
    #[default]
    #[serde(alias = "little", alias = "LE")]
    Little,
    /// Most-significant byte at the lowest address.
    #[serde(alias = "big", alias = "BE")]
    Big,
}

/// Root configuration structure.
///
/// # Examples
///
/// ```
/// use mipsim_core::config::{ByteOrder, Config};
///
/// let json = r#"{
///     "general": { "trace": true },
///     "memory": { "dmem_size": 1024, "data_order": "Big" }
/// }"#;
///
/// let config = Config::from_json(json)?;
/// assert!(config.general.trace);
/// assert_eq!(config.memory.dmem_size, 1024);
/// assert_eq!(config.memory.data_order, ByteOrder::Big);
/// assert_eq!(config.general.reset_pc, 0xFFFF_FFFC);
/// # Ok::<(), mipsim_core::common::SimError>(())
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings
    #[serde(default)]
    pub general: GeneralConfig,
    /// Instruction and data memory configuration
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses and validates a JSON configuration document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::ConfigParse`] for malformed JSON and
    /// [`SimError::InvalidConfig`] when [`Config::validate`] rejects the values.
    pub fn from_json(json: &str) -> Result<Self, SimError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks cross-field constraints that deserialization cannot express.
    ///
    /// # Errors
    ///
    /// Returns [`SimError::InvalidConfig`] if either memory is empty, the
    /// instruction memory is not a whole number of words, or the reset program
    /// counter is not word aligned.
    pub fn validate(&self) -> Result<(), SimError> {
        let word = INSTRUCTION_SIZE as usize;
        if self.memory.imem_size == 0 || self.memory.imem_size % word != 0 {
            return Err(SimError::InvalidConfig(format!(
                "imem_size must be a non-zero multiple of {word}, got {}",
                self.memory.imem_size
            )));
        }
        if self.memory.dmem_size == 0 {
            return Err(SimError::InvalidConfig("dmem_size must be non-zero".into()));
        }
        if self.general.reset_pc % INSTRUCTION_SIZE != 0 {
            return Err(SimError::InvalidConfig(format!(
                "reset_pc {:#010x} is not word aligned",
                self.general.reset_pc
            )));
        }
        Ok(())
    }
}

/// General simulation settings.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Emit per-stage `tracing` events at TRACE level for every tick
    #[serde(default)]
    pub trace: bool,

    /// Program counter shown by IF/ID during reset; fetching starts one word later
    #[serde(default = "GeneralConfig::default_reset_pc")]
    pub reset_pc: u32,
}

impl GeneralConfig {
    /// Returns the default reset program counter.
    const fn default_reset_pc() -> u32 {
        defaults::RESET_PC_VALUE
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace: false,
            reset_pc: defaults::RESET_PC_VALUE,
        }
    }
}

/// Instruction and data memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Instruction memory size in bytes
    #[serde(default = "MemoryConfig::default_imem_size")]
    pub imem_size: usize,

    /// Data memory size in bytes
    #[serde(default = "MemoryConfig::default_dmem_size")]
    pub dmem_size: usize,

    /// Byte order of instruction words in instruction memory
    #[serde(default = "MemoryConfig::default_instruction_order")]
    pub instruction_order: ByteOrder,

    /// Byte order of half-word and word data accesses
    #[serde(default = "MemoryConfig::default_data_order")]
    pub data_order: ByteOrder,
}

impl MemoryConfig {
    /// Returns the default instruction memory size in bytes.
    const fn default_imem_size() -> usize {
        defaults::IMEM_SIZE
    }

    /// Returns the default data memory size in bytes.
    const fn default_dmem_size() -> usize {
        defaults::DMEM_SIZE
    }

    /// Returns the default instruction byte order.
    const fn default_instruction_order() -> ByteOrder {
        defaults::INSTRUCTION_ORDER
    }

    /// Returns the default data byte order.
    const fn default_data_order() -> ByteOrder {
        defaults::DATA_ORDER
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            imem_size: defaults::IMEM_SIZE,
            dmem_size: defaults::DMEM_SIZE,
            instruction_order: defaults::INSTRUCTION_ORDER,
            data_order: defaults::DATA_ORDER,
        }
    }
}
