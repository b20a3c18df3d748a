//! Probe configuration.
//!
//! Everything a deployment varies lives here: target module, byte
//! signature, the guard/pointer register pair, and the extraction policy.
//! Configs are JSON on disk and ship with presets for the two deployed
//! status-effect probes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::{ExtractionPolicy, FieldLayout};
use crate::host::Register;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Target module name, matched case-insensitively.
    pub module: String,
    /// Hex byte signature; whitespace allowed.
    pub pattern: String,
    /// Register whose lower 32 bits must be zero for a firing to qualify.
    pub guard_register: Register,
    /// Register holding the extraction base pointer.
    pub pointer_register: Register,
    pub extraction: ExtractionPolicy,
}

pub fn load_config<P: AsRef<Path>>(path: P) -> Result<ProbeConfig> {
    let content = fs::read_to_string(&path)?;
    let config = serde_json::from_str(&content)?;
    Ok(config)
}

pub fn save_config<P: AsRef<Path>>(path: P, config: &ProbeConfig) -> Result<()> {
    let content = serde_json::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

/// Built-in configs for the known probe sites.
pub mod presets {
    use super::*;

    pub const DEFAULT_MODULE: &str = "nightreign.exe";

    /// Status-effect table read inside the target's effect lookup loop.
    pub const STATUS_EFFECT_PATTERN: &str = "41 8B 44 80 18";

    pub const BUFF_OFFSETS: [u64; 3] = [0x18, 0x1C, 0x20];
    pub const DEBUFF_OFFSETS: [u64; 3] = [0x40, 0x44, 0x48];

    /// Grouped buff/debuff extraction with sentinel filtering and pointer
    /// dedup. This is the shape the overlay controller consumes.
    pub fn status_effects() -> ProbeConfig {
        ProbeConfig {
            module: DEFAULT_MODULE.to_string(),
            pattern: STATUS_EFFECT_PATTERN.to_string(),
            guard_register: Register::Rdx,
            pointer_register: Register::R8,
            extraction: ExtractionPolicy {
                layout: FieldLayout::Grouped {
                    buff: BUFF_OFFSETS.to_vec(),
                    debuff: DEBUFF_OFFSETS.to_vec(),
                },
                sentinel_filter: true,
                dedup: true,
            },
        }
    }

    /// Raw variant of the same site: every field on every qualifying call,
    /// sentinels included, plus the base pointer for offline analysis.
    pub fn status_effects_raw() -> ProbeConfig {
        ProbeConfig {
            module: DEFAULT_MODULE.to_string(),
            pattern: STATUS_EFFECT_PATTERN.to_string(),
            guard_register: Register::Rdx,
            pointer_register: Register::R8,
            extraction: ExtractionPolicy {
                layout: FieldLayout::Flat {
                    offsets: vec![0x18, 0x40, 0x1C, 0x44, 0x20, 0x48],
                },
                sentinel_filter: false,
                dedup: false,
            },
        }
    }
}
