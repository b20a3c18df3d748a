//! Scan command implementation.
//!
//! Dry-run of the install pipeline against an offline dump: the dump file
//! stands in for the target module, and attaching is a no-op since there
//! is no live process to intercept.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use sigprobe_core::{
    CallHandler, CallProbe, InstallOutcome, JsonLineSink, MemoryImage, SignatureProbe, load_config,
};

use super::hex_utils::parse_hex_address;

/// Accepts the attach without installing anything.
struct DryRunProbe;

impl CallProbe for DryRunProbe {
    fn attach(&self, _address: u64, _handler: CallHandler) -> sigprobe_core::Result<()> {
        Ok(())
    }
}

/// Run the scan command
pub fn run(config_path: &Path, dump_path: &Path, base: &str) -> Result<()> {
    let config = load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;
    let base = parse_hex_address(base)?;

    let bytes = fs::read(dump_path)
        .with_context(|| format!("failed to read dump {}", dump_path.display()))?;
    let image = MemoryImage::new(config.module.clone(), base, bytes);

    println!("=== Signature Scan ===");
    println!("Dump:      {}", dump_path.display());
    println!(
        "Image:     {} @ {:#x} ({} bytes)",
        image.name(),
        image.base(),
        image.size()
    );

    let probe = SignatureProbe::new(config, JsonLineSink::stdout())?;
    println!("Signature: {}", probe.signature());

    match probe.install(&image, &image, &DryRunProbe)? {
        InstallOutcome::Installed { address } => {
            println!("Match:     {:#x} (offset {:#x})", address, address - base);
        }
        InstallOutcome::PatternNotFound => {
            println!("Match:     none - the probe would stay inert");
        }
    }

    Ok(())
}
