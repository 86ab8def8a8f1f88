//! cest-demo - showcase runner for the cest testing runtime
//!
//! ## Usage
//!
//! ```bash
//! # Run the showcase tests sequentially
//! cest-demo run
//!
//! # Run them on their own threads without colors
//! cest-demo run --parallel --color never
//!
//! # Write a default config file
//! cest-demo init cest.yaml
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use std::process::ExitCode;
use tracing::info;

mod cli;
mod demo;

use cest::config::{print_env_help, ConfigFile, EnvConfig};
use cest::utils::{init_logger, LogLevel};
use cest::{ColorMode, Suite, SuiteConfig};
use cli::{Args, Command};

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let config_path = args
        .config
        .clone()
        .or_else(|| env.config_file.clone().map(Into::into));
    let mut config = SuiteConfig::load_from(config_path.as_deref(), &env)?;

    if let Some(level) = &args.log_level {
        config.log_level = LogLevel::from_str(level)
            .ok_or_else(|| anyhow::anyhow!("Unknown log level: {}", level))?;
    }
    init_logger(config.log_level);

    match args.command {
        Command::Run(run_args) => run(run_args, config),
        Command::Env => {
            print_env_help();
            Ok(ExitCode::SUCCESS)
        }
        Command::Init(init_args) => {
            init(init_args, config)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run(args: cli::RunArgs, mut config: SuiteConfig) -> Result<ExitCode> {
    if let Some(color) = &args.color {
        config.color = ColorMode::from_str(color)
            .ok_or_else(|| anyhow::anyhow!("Unknown color mode: {}", color))?;
    }
    if args.no_summary {
        config.summary = false;
    }

    info!(
        "Running showcase suite ({})",
        if args.parallel { "parallel" } else { "sequential" }
    );

    let suite = Suite::new(&config);
    if args.parallel {
        demo::run_parallel(&suite);
    } else {
        demo::run_sequential(&suite);
    }

    Ok(suite.finish().exit_code())
}

fn init(args: cli::InitArgs, config: SuiteConfig) -> Result<()> {
    if args.path.exists() && !args.force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            args.path.display()
        );
    }

    let file = ConfigFile {
        suite: config,
        ..Default::default()
    };
    file.save(&args.path)
        .with_context(|| format!("Failed to initialize {}", args.path.display()))?;

    println!("Wrote {}", args.path.display());
    Ok(())
}
