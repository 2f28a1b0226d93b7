//! CLI argument definitions

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use fencelint_core::file_finder::{DEFAULT_EXCLUDE, DEFAULT_PATTERN};

/// fencelint - lint markdown nested inside markdown code fences
#[derive(Parser)]
#[command(name = "fencelint")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// File patterns to scan
    #[arg(default_values_t = [DEFAULT_PATTERN.to_string()])]
    pub patterns: Vec<String>,

    /// Configuration file path (defaults to .markdownlint.jsonc or .markdownlint.json)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Do not scan blocks nested deeper than this
    #[arg(long, value_name = "DEPTH")]
    pub max_depth: Option<usize>,

    /// Glob patterns to exclude
    #[arg(long, value_name = "GLOB", default_values_t = [DEFAULT_EXCLUDE.to_string()])]
    pub exclude: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::parse_from(["fencelint"]);
        assert_eq!(cli.patterns, vec!["**/*.md"]);
        assert_eq!(cli.exclude, vec!["**/node_modules/**"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert_eq!(cli.max_depth, None);
        assert!(!cli.no_color);
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "fencelint",
            "docs/*.md",
            "--format",
            "json",
            "--max-depth",
            "2",
            "--exclude",
            "vendor/**",
            "--no-color",
            "-c",
            "lint.jsonc",
        ]);
        assert_eq!(cli.patterns, vec!["docs/*.md"]);
        assert_eq!(cli.format, OutputFormat::Json);
        assert_eq!(cli.max_depth, Some(2));
        assert_eq!(cli.exclude, vec!["vendor/**"]);
        assert_eq!(cli.config, Some(PathBuf::from("lint.jsonc")));
        assert!(cli.no_color);
    }
}
