// scorecheck CLI - batch verification of a player-stats transformation pipeline

mod exit_codes;
mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::EXIT_SUCCESS;

/// Structured command failure carrying its registered exit code.
#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

#[derive(Parser)]
#[command(name = "scorecheck")]
#[command(about = "Verify a stats pipeline's output against recomputed expectations")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run verification from a TOML config file
    #[command(after_help = "\
Examples:
  scorecheck run verify.toml
  scorecheck run verify.toml --json
  scorecheck run verify.toml --output result.csv")]
    Run {
        /// Path to the verify.toml config file
        config: PathBuf,

        /// Output full result JSON to stdout
        #[arg(long)]
        json: bool,

        /// Write the result CSV here instead of the configured results dir
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Validate a config without running
    #[command(after_help = "\
Examples:
  scorecheck validate verify.toml")]
    Validate {
        /// Path to the verify.toml config file
        config: PathBuf,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { config, json, output } => pipeline::cmd_run(config, json, output),
        Commands::Validate { config } => pipeline::cmd_validate(config),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {hint}");
            }
            ExitCode::from(err.code)
        }
    }
}
