//! Command-line interface definitions.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sigprobe")]
#[command(about = "Signature probe toolkit: validate configs and scan memory dumps")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a built-in preset config to a file
    Init {
        /// Destination config path
        path: PathBuf,

        /// Which preset to write
        #[arg(long, value_enum, default_value = "status")]
        preset: Preset,
    },

    /// Validate a probe config file
    Validate {
        /// Config file to check
        config: PathBuf,
    },

    /// Scan a memory dump for the configured signature
    Scan {
        /// Config file with module name and pattern
        config: PathBuf,

        /// Raw memory dump of the target module
        dump: PathBuf,

        /// Base address the dump was captured at (hex)
        #[arg(long, default_value = "0x140000000")]
        base: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Preset {
    /// Grouped buff/debuff extraction with sentinel filtering and dedup
    Status,
    /// Flat raw extraction, every field on every qualifying call
    StatusRaw,
}
