//! CLI argument parsing
//!
//! Defines the demo binary's command-line interface using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Showcase runner for the cest testing runtime
#[derive(Parser, Debug)]
#[command(name = "cest-demo")]
#[command(version)]
#[command(about = "Run the cest showcase suite")]
#[command(long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file (overrides CEST_CONFIG and the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Diagnostic log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the showcase tests
    Run(RunArgs),

    /// Show supported environment variables
    Env,

    /// Write a default config file
    Init(InitArgs),
}

/// Arguments for run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Run the showcase tests on their own threads
    #[arg(short, long)]
    pub parallel: bool,

    /// Color mode (auto, always, never)
    #[arg(long)]
    pub color: Option<String>,

    /// Skip the closing summary line
    #[arg(long)]
    pub no_summary: bool,
}

/// Arguments for init command
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config (.yaml/.yml or .json)
    #[arg(default_value = "cest.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file
    #[arg(short, long)]
    pub force: bool,
}
