// rollcall CLI - check submitted files against a class roster

mod check;
mod exit_codes;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use exit_codes::{EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE};

#[derive(Parser)]
#[command(name = "rollcall")]
#[command(about = "Check submitted files against a class roster")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a submission check from a TOML config file
    #[command(after_help = "\
Examples:
  rollcall check week3.toml
  rollcall check week3.toml --json
  rollcall check week3.toml --output result.json
  rollcall check week3.toml --find 100000001")]
    Check {
        /// Path to the check config file
        config: PathBuf,

        /// Output JSON to stdout instead of the missing list
        #[arg(long)]
        json: bool,

        /// Write JSON output to file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Print status rows whose id or name contains this text
        #[arg(long, value_name = "QUERY")]
        find: Option<String>,
    },

    /// Validate a check config without running
    #[command(after_help = "\
Examples:
  rollcall validate week3.toml")]
    Validate {
        /// Path to the check config file
        config: PathBuf,
    },

    /// Extract the 9-digit id from each given name
    #[command(after_help = "\
Examples:
  rollcall extract 100000001_hw1.py notes.txt")]
    Extract {
        /// File names (or arbitrary strings) to scan
        names: Vec<String>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Check {
            config,
            json,
            output,
            find,
        } => check::cmd_check(config, json, output, find),
        Commands::Validate { config } => check::cmd_validate(config),
        Commands::Extract { names } => cmd_extract(&names),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint }) => {
            eprintln!("error: {}", message);
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

fn cmd_extract(names: &[String]) -> Result<(), CliError> {
    if names.is_empty() {
        return Err(CliError::usage("at least one name is required"));
    }
    for name in names {
        match rollcall_core::extract_id(name) {
            Some(id) => println!("{id}\t{name}"),
            None => println!("-\t{name}"),
        }
    }
    Ok(())
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
}

impl CliError {
    pub fn new(code: u8, msg: impl Into<String>) -> Self {
        Self { code, message: msg.into(), hint: None }
    }

    pub fn general(msg: impl Into<String>) -> Self {
        Self::new(EXIT_ERROR, msg)
    }

    pub fn usage(msg: impl Into<String>) -> Self {
        Self::new(EXIT_USAGE, msg)
    }

    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}
