//! Fancyt CLI - command-line front end for the Fancypants tokenizer.
//!
//! Parses arguments with clap, sets up logging and the worker pool, loads
//! configuration, and dispatches to the command handlers.

mod commands;
mod config;
mod error;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    CheckArgs, CheckCommand, Command, InitArgs, InitCommand, TokenizeArgs, TokenizeCommand,
};
use config::Config;
use error::{FancytError, Result};

/// Fancyt - tokenize and check AppJet source files
#[derive(Parser, Debug)]
#[command(name = "fancyt")]
#[command(author = "Fancypants Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize and check AppJet source files", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "FANCYT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "FANCYT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "FANCYT_NO_COLOR")]
    no_color: bool,

    /// Number of files processed in parallel (default: from config)
    #[arg(short, long, global = true, env = "FANCYT_JOBS")]
    jobs: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the fancyt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the tokens of source files
    ///
    /// Each source line becomes one output line of `KIND "text"` pairs, or
    /// one entry in the JSON output.
    Tokenize(TokenizeCommandArgs),

    /// Report unrecognized characters and unterminated constructs
    ///
    /// Exits non-zero when any file has a problem.
    Check(CheckCommandArgs),

    /// Write a default fancyt.toml
    Init(InitCommandArgs),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommandArgs {
    /// Source files to tokenize
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Output format (text, json)
    #[arg(short = 'F', long)]
    format: Option<String>,

    /// Leave whitespace tokens out of the output
    #[arg(long)]
    skip_whitespace: bool,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Arguments for the check subcommand.
#[derive(Parser, Debug)]
struct CheckCommandArgs {
    /// Source files to check
    #[arg(required = true)]
    input: Vec<PathBuf>,

    /// Report unterminated comments and strings without failing
    #[arg(long)]
    allow_unterminated: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommandArgs {
    /// Directory to write fancyt.toml into (default: current directory)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing fancyt.toml
    #[arg(short, long)]
    force: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose, cli.no_color)?;

    let config = load_config(cli.config.as_deref())?;
    let verbose = cli.verbose || config.verbose;
    init_thread_pool(cli.jobs.unwrap_or_else(|| config.jobs()))?;

    execute_command(cli.command, verbose, config)
}

/// Installs the tracing subscriber. Logs go to stderr so they never mix
/// with command output.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    let subscriber = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| FancytError::Config(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Sizes the global rayon pool used for per-file work.
fn init_thread_pool(jobs: usize) -> Result<()> {
    if jobs == 0 {
        return Err(FancytError::Validation("jobs must be at least 1".to_string()));
    }

    rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build_global()
        .map_err(|e| FancytError::Config(format!("Failed to start worker pool: {}", e)))?;

    tracing::debug!(jobs, "worker pool ready");
    Ok(())
}

/// Execute the selected command.
fn execute_command(command: Commands, verbose: bool, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => {
            let args = TokenizeArgs {
                verbose,
                input: args.input,
                output: args.output,
                format: args.format,
                skip_whitespace: args.skip_whitespace,
                config: config.tokenize,
            };
            run::<TokenizeCommand>(args)
        },
        Commands::Check(args) => {
            let args = CheckArgs {
                verbose,
                input: args.input,
                allow_unterminated: args.allow_unterminated,
                config: config.check,
            };
            run::<CheckCommand>(args)
        },
        Commands::Init(args) => {
            let args = InitArgs {
                verbose,
                force: args.force,
                path: args.path,
            };
            run::<InitCommand>(args).map(|_| ())
        },
    }
}

fn run<C: Command>(args: C::Args) -> Result<C::Output> {
    tracing::debug!(command = C::name(), "running command");
    C::new(args).execute()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_tokenize() {
        let cli = Cli::parse_from(["fancyt", "tokenize", "a.js", "b.js"]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("a.js"), PathBuf::from("b.js")]);
            assert_eq!(args.format, None);
            assert!(!args.skip_whitespace);
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_parse_tokenize_options() {
        let cli = Cli::parse_from([
            "fancyt",
            "tokenize",
            "a.js",
            "-F",
            "json",
            "--skip-whitespace",
            "-o",
            "out.json",
        ]);
        if let Commands::Tokenize(args) = cli.command {
            assert_eq!(args.format, Some("json".to_string()));
            assert!(args.skip_whitespace);
            assert_eq!(args.output, Some(PathBuf::from("out.json")));
        } else {
            panic!("Expected Tokenize command");
        }
    }

    #[test]
    fn test_cli_tokenize_requires_input() {
        assert!(Cli::try_parse_from(["fancyt", "tokenize"]).is_err());
    }

    #[test]
    fn test_cli_parse_check() {
        let cli = Cli::parse_from(["fancyt", "check", "a.js", "--allow-unterminated"]);
        if let Commands::Check(args) = cli.command {
            assert_eq!(args.input, vec![PathBuf::from("a.js")]);
            assert!(args.allow_unterminated);
        } else {
            panic!("Expected Check command");
        }
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["fancyt", "init", "--path", "/tmp/project", "--force"]);
        if let Commands::Init(args) = cli.command {
            assert_eq!(args.path, Some(PathBuf::from("/tmp/project")));
            assert!(args.force);
        } else {
            panic!("Expected Init command");
        }
    }

    #[test]
    fn test_cli_parse_global_flags() {
        let cli = Cli::parse_from([
            "fancyt",
            "--verbose",
            "--no-color",
            "--config",
            "/path/to/fancyt.toml",
            "--jobs",
            "3",
            "init",
        ]);
        assert!(cli.verbose);
        assert!(cli.no_color);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/fancyt.toml")));
        assert_eq!(cli.jobs, Some(3));
    }

    #[test]
    fn test_cli_global_flag_after_subcommand() {
        let cli = Cli::parse_from(["fancyt", "check", "a.js", "-v"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_zero_jobs_rejected() {
        assert!(matches!(init_thread_pool(0), Err(FancytError::Validation(_))));
    }
}
