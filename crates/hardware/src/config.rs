//! Configuration system for the LS-8 emulator.
//!
//! This module defines the configuration structures used to parameterize a run. It provides:
//! 1. **Defaults:** Reset values for the program counter and stack pointer.
//! 2. **Structures:** A `general` section for tracing and reset state.
//! 3. **Loading:** JSON parsing via `serde_json`; every field is optional.
//!
//! The CLI uses `Config::default()` unless `--config <file>` is given.

use serde::Deserialize;

/// Default configuration constants for the emulator.
mod defaults {
    use crate::common::constants::{PC_INIT, SP_INIT};

    /// Program counter after reset.
    pub const START_PC: u8 = PC_INIT;

    /// Stack pointer (`R7`) after reset.
    pub const INITIAL_SP: u8 = SP_INIT;
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// General run settings.
    #[serde(default)]
    pub general: GeneralConfig,
}

impl Config {
    /// Parses a configuration from a JSON document.
    ///
    /// Missing sections and fields take their default values.
    ///
    /// # Errors
    ///
    /// Returns the `serde_json` error if the document is malformed or a field
    /// has the wrong type (for example a stack pointer above 255).
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

/// General run settings.
///
/// Contains tracing and the machine's reset state.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Emit one trace line per executed instruction at `TRACE` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u8,

    /// Initial stack pointer value.
    #[serde(default = "GeneralConfig::default_initial_sp")]
    pub initial_sp: u8,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u8 {
        defaults::START_PC
    }

    /// Returns the default initial stack pointer.
    const fn default_initial_sp() -> u8 {
        defaults::INITIAL_SP
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            initial_sp: defaults::INITIAL_SP,
        }
    }
}
