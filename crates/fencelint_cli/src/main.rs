//! fencelint CLI
//!
//! Lints markdown that lives inside `markdown`/`md` code fences of markdown
//! files, reporting findings at their line in the outer file.

mod cli;
mod output;

use std::path::Path;
use std::process::ExitCode;

use clap::Parser;
use miette::{IntoDiagnostic, Result};
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

use fencelint_core::{Linter, LinterConfig};

use crate::cli::{Cli, OutputFormat};
use crate::output::{ReportStyle, output_report};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(failed) => {
            if failed {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            }
        }
        Err(e) => {
            error!("{:?}", e);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let style = ReportStyle::new(!cli.no_color);

    if cli.format == OutputFormat::Text {
        println!(
            "{}\n",
            style.bold("Linting nested Markdown in code fences...")
        );
    }

    let config = match &cli.config {
        Some(path) => LinterConfig::from_file(path),
        None => LinterConfig::discover(Path::new(".")),
    }
    .into_diagnostic()?;
    debug!("Loaded {} rule settings", config.rules.len());

    let mut linter = Linter::new(config)
        .into_diagnostic()?
        .with_exclude(&cli.exclude)
        .into_diagnostic()?;
    if let Some(depth) = cli.max_depth {
        linter = linter.with_max_depth(depth);
    }

    let report = linter.lint_patterns(&cli.patterns).into_diagnostic()?;
    output_report(&report, cli.format, &style)
}
