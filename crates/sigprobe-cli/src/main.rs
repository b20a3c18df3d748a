use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("sigprobe_core=info".parse()?))
        .init();

    let args = Cli::parse();

    match args.command {
        Command::Init { path, preset } => commands::init::run(&path, preset),
        Command::Validate { config } => commands::validate::run(&config),
        Command::Scan { config, dump, base } => commands::scan::run(&config, &dump, &base),
    }
}
