//! Qlt CLI - a command-line front end for the qlc query lexer.
//!
//! This is the main entry point for the qlt CLI application.
//! It uses clap for argument parsing and dispatches to appropriate
//! command handlers based on user input.

mod commands;
mod config;
mod error;

use std::io::{self, IsTerminal};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::{
    common::OutputFormat, run_init, run_repl, run_tokenize, InitArgs, ReplArgs, TokenizeArgs,
};
use config::Config;
use error::{QltError, Result};

/// Qlt - tokenize qlc queries
///
/// Qlt lexes queries into keyword, identifier, number, string and
/// punctuation tokens, and points at the first malformed one.
#[derive(Parser, Debug)]
#[command(name = "qlt")]
#[command(author = "Qlc Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Tokenize qlc queries", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, env = "QLT_VERBOSE")]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "QLT_CONFIG")]
    config: Option<PathBuf>,

    /// Disable color output
    #[arg(long, global = true, env = "QLT_NO_COLOR")]
    no_color: bool,

    /// Output format (default: from config)
    #[arg(short = 'F', long, global = true, value_enum)]
    format: Option<OutputFormat>,

    /// Don't print the end-of-input token
    #[arg(long, global = true)]
    no_eof: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands for the qlt CLI.
#[derive(Subcommand, Debug)]
enum Commands {
    /// Tokenize a single query
    ///
    /// Prints the token stream of the query given inline or read from
    /// a file. A malformed query is reported on stderr.
    Tokenize(TokenizeCommand),

    /// Tokenize queries read line by line from stdin
    ///
    /// Each line is lexed on its own; errors are reported and the
    /// session continues. `exit` or `quit` ends it.
    Repl(ReplCommand),

    /// Write a default configuration file
    ///
    /// Creates `qlt.toml` in the current directory, or at the given
    /// path, with every setting at its default value.
    Init(InitCommand),
}

/// Arguments for the tokenize subcommand.
#[derive(Parser, Debug)]
struct TokenizeCommand {
    /// Query text
    #[arg(required_unless_present = "file")]
    query: Option<String>,

    /// Read the query from a file
    #[arg(short, long, conflicts_with = "query")]
    file: Option<PathBuf>,
}

/// Arguments for the repl subcommand.
#[derive(Parser, Debug)]
struct ReplCommand {
    /// Prompt shown before each line (default: from config)
    #[arg(short, long)]
    prompt: Option<String>,

    /// Echo each query before its tokens
    #[arg(short, long)]
    echo: bool,
}

/// Arguments for the init subcommand.
#[derive(Parser, Debug)]
struct InitCommand {
    /// File or directory to write (default: ./qlt.toml)
    #[arg(short, long)]
    path: Option<PathBuf>,

    /// Overwrite an existing configuration file
    #[arg(long)]
    force: bool,
}

/// Main entry point for the qlt CLI.
///
/// Parses command-line arguments, initializes logging, loads configuration,
/// and dispatches to the appropriate command handler. Any error is printed
/// to stderr and turns into a failing exit status.
fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Initialize logging
    init_logging(cli.verbose, cli.no_color)?;

    // Load configuration, then let flags override it
    // init has to work even when an existing file does not parse
    let mut config = match cli.command {
        Commands::Init(_) => Config::default(),
        _ => load_config(cli.config.as_deref())?,
    };
    if let Some(format) = cli.format {
        config.format = format;
    }
    if cli.no_eof {
        config.show_end_of_input = false;
    }

    // Execute the selected command
    execute_command(cli.command, config)
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the verbosity flag. Events go to stderr
/// so token output on stdout stays machine readable.
fn init_logging(verbose: bool, no_color: bool) -> Result<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let subscriber = fmt::layer()
        .with_writer(io::stderr)
        .with_ansi(!no_color)
        .with_target(false)
        .with_thread_ids(false)
        .with_thread_names(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()
        .map_err(|e| QltError::Logging(format!("Failed to initialize logging: {}", e)))?;

    Ok(())
}

/// Load configuration from file or use defaults.
fn load_config(config_path: Option<&std::path::Path>) -> Result<Config> {
    match config_path {
        Some(path) => Config::load_from_path(path),
        None => Config::load(),
    }
}

/// Execute the selected command.
fn execute_command(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Tokenize(args) => execute_tokenize(args, config),
        Commands::Repl(args) => execute_repl(args, config),
        Commands::Init(args) => execute_init(args),
    }
}

/// Execute the init command.
fn execute_init(args: InitCommand) -> Result<()> {
    let init_args = InitArgs {
        path: args.path,
        force: args.force,
    };
    run_init(init_args, &mut io::stdout().lock())?;
    Ok(())
}

/// Execute the tokenize command.
fn execute_tokenize(args: TokenizeCommand, config: Config) -> Result<()> {
    let tokenize_args = TokenizeArgs {
        query: args.query,
        file: args.file,
        format: config.format,
        show_end_of_input: config.show_end_of_input,
    };
    run_tokenize(tokenize_args, &mut io::stdout().lock())
}

/// Execute the repl command.
fn execute_repl(args: ReplCommand, config: Config) -> Result<()> {
    let stdin = io::stdin();
    let prompt = stdin
        .is_terminal()
        .then(|| args.prompt.unwrap_or(config.repl.prompt));

    let repl_args = ReplArgs {
        prompt,
        echo: args.echo || config.repl.history_echo,
        format: config.format,
        show_end_of_input: config.show_end_of_input,
    };
    run_repl(
        repl_args,
        stdin.lock(),
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    )?;
    Ok(())
}
