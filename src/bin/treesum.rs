//! Treesum CLI Binary
//!
//! Command-line interface for building and comparing tree manifests.

use clap::Parser;
use std::process;
use tracing::{error, info};
use treesum::cli::{map_error, Cli, RunContext};
use treesum::logging::{init_logging, LoggingConfig};

fn main() {
    let cli = Cli::parse();

    let logging_config = build_logging_config(&cli);

    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    info!("Treesum CLI starting");

    let context = RunContext::new(cli.verbose);

    match context.execute(&cli.command) {
        Ok(output) => {
            info!("Command completed successfully");
            println!("{}", output);
        }
        Err(e) => {
            error!("Command failed: {}", e);
            eprintln!("{}", map_error(&e));
            process::exit(1);
        }
    }
}

/// Build logging configuration from CLI args and defaults.
/// Without --verbose the CLI stays quiet unless explicit flags say otherwise.
fn build_logging_config(cli: &Cli) -> LoggingConfig {
    let mut config = LoggingConfig::default();

    if !cli.verbose {
        config.level = "off".to_string();
    }

    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }

    config
}
