//! # airisk CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use airisk_cli::analyze::{run_analyze, AnalyzeArgs};
use airisk_cli::catalog::{
    run_framework, run_regions, run_search, FrameworkArgs, RegionsArgs, SearchArgs,
};
use airisk_cli::validate::{run_validate, ValidateArgs};

/// airisk: regulatory risk assessment for AI use cases.
#[derive(Parser, Debug)]
#[command(name = "airisk", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Directory with regulations.{json,yaml} and risk_framework.{json,yaml}.
    /// Defaults to the bundled knowledge bases.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Assess an analysis request file.
    Analyze(AnalyzeArgs),

    /// List regions, or print one region's catalog entry.
    Regions(RegionsArgs),

    /// Search regulations for a case-insensitive substring.
    Search(SearchArgs),

    /// Print the Risk Framework document.
    Framework(FrameworkArgs),

    /// Load and validate the knowledge bases and print their digest.
    Validate(ValidateArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let data_dir = cli.data_dir.as_deref();
    if let Some(dir) = data_dir {
        tracing::debug!(data_dir = %dir.display(), "using knowledge-base directory");
    }

    let result = match &cli.command {
        Commands::Analyze(args) => run_analyze(args, data_dir),
        Commands::Regions(args) => run_regions(args, data_dir),
        Commands::Search(args) => run_search(args, data_dir),
        Commands::Framework(args) => run_framework(args, data_dir),
        Commands::Validate(args) => run_validate(args, data_dir),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            eprintln!("error: {e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airisk_cli::OutputFormat;

    #[test]
    fn cli_parse_analyze() {
        let cli = Cli::try_parse_from(["airisk", "analyze", "request.json", "--strict"]).unwrap();
        if let Commands::Analyze(args) = cli.command {
            assert_eq!(args.file, PathBuf::from("request.json"));
            assert!(args.strict);
            assert!(!args.summary);
            assert_eq!(args.format, OutputFormat::Json);
        } else {
            panic!("expected analyze");
        }
    }

    #[test]
    fn cli_parse_analyze_requires_file() {
        assert!(Cli::try_parse_from(["airisk", "analyze"]).is_err());
    }

    #[test]
    fn cli_parse_regions_optional_code() {
        let cli = Cli::try_parse_from(["airisk", "regions"]).unwrap();
        assert!(matches!(cli.command, Commands::Regions(RegionsArgs { code: None, .. })));

        let cli = Cli::try_parse_from(["airisk", "regions", "eu", "--format", "yaml"]).unwrap();
        if let Commands::Regions(args) = cli.command {
            assert_eq!(args.code.as_deref(), Some("eu"));
            assert_eq!(args.format, OutputFormat::Yaml);
        } else {
            panic!("expected regions");
        }
    }

    #[test]
    fn cli_parse_search() {
        let cli = Cli::try_parse_from(["airisk", "search", "biometric"]).unwrap();
        if let Commands::Search(args) = cli.command {
            assert_eq!(args.query, "biometric");
        } else {
            panic!("expected search");
        }
    }

    #[test]
    fn cli_parse_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["airisk", "validate", "--data-dir", "/srv/kb", "-vv"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/srv/kb")));
        assert!(matches!(cli.command, Commands::Validate(_)));
    }

    #[test]
    fn cli_parse_framework() {
        let cli = Cli::try_parse_from(["airisk", "framework"]).unwrap();
        assert!(matches!(cli.command, Commands::Framework(_)));
    }

    #[test]
    fn cli_rejects_unknown_subcommand() {
        assert!(Cli::try_parse_from(["airisk", "deploy"]).is_err());
    }
}
