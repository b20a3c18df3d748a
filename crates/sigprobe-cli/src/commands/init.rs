//! Init command implementation.

use std::path::Path;

use anyhow::Result;
use sigprobe_core::{presets, save_config};
use tracing::info;

use crate::cli::Preset;

/// Write a built-in preset config to `path`.
pub fn run(path: &Path, preset: Preset) -> Result<()> {
    let config = match preset {
        Preset::Status => presets::status_effects(),
        Preset::StatusRaw => presets::status_effects_raw(),
    };

    save_config(path, &config)?;
    info!("Wrote {:?} preset to {}", preset, path.display());
    println!("Config written to {}", path.display());

    Ok(())
}
