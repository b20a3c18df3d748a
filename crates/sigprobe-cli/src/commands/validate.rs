//! Validate command implementation.

use std::path::Path;

use anyhow::{Context, Result};
use sigprobe_core::{FieldLayout, ProbeConfig, Signature, load_config};

/// Run the validate command
pub fn run(config_path: &Path) -> Result<()> {
    let config = load_config(config_path)
        .with_context(|| format!("failed to load config from {}", config_path.display()))?;

    let signature = Signature::parse(&config.pattern).context("invalid byte signature")?;

    println!("=== Probe Config Validation ===");
    println!("File:      {}", config_path.display());
    println!("Module:    {}", config.module);
    println!("Signature: {} ({} bytes)", signature, signature.len());
    println!(
        "Registers: guard={}, pointer={}",
        config.guard_register, config.pointer_register
    );
    print_policy(&config);
    println!();
    println!("Config OK");

    Ok(())
}

fn print_policy(config: &ProbeConfig) {
    match &config.extraction.layout {
        FieldLayout::Grouped { buff, debuff } => {
            println!(
                "Layout:    grouped ({} buff offsets, {} debuff offsets)",
                buff.len(),
                debuff.len()
            );
        }
        FieldLayout::Flat { offsets } => {
            println!("Layout:    flat ({} offsets)", offsets.len());
        }
    }
    println!(
        "Policy:    sentinel_filter={}, dedup={}",
        config.extraction.sentinel_filter, config.extraction.dedup
    );
}
