// Rust guideline compliant 2026-10-19

//! jrpc CLI Application
//!
//! Command-line interface for inspecting JSON-RPC responses.

use anyhow::Context;
use clap::Parser;
use jrpc_cli::{commands, create_formatter, logging};
use jrpc_core::Config;
use std::path::Path;
use std::process::ExitCode;

const DEFAULT_CONFIG_PATH: &str = "jrpc.toml";

#[derive(Parser, Debug)]
#[command(
    name = "jrpc",
    version,
    about = "Inspect JSON-RPC responses and classify structured errors",
    after_help = "Examples:\n  jrpc init\n  jrpc inspect response.json\n  echo '{\"id\":1,\"error\":\"boom\"}' | jrpc inspect --json\n  jrpc classify error.json --format plain\n"
)]
struct Cli {
    /// Enable JSON output
    #[arg(long, global = true)]
    json: bool,

    /// Output format
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    /// Custom config file path
    #[arg(long, global = true)]
    config: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, clap::ValueEnum)]
enum OutputFormat {
    Json,
    Table,
    Plain,
}

impl From<OutputFormat> for jrpc_core::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Json => jrpc_core::OutputFormat::Json,
            OutputFormat::Table => jrpc_core::OutputFormat::Table,
            OutputFormat::Plain => jrpc_core::OutputFormat::Plain,
        }
    }
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Write a config file with default values
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },

    /// Parse a raw response and show its fields and derived status
    Inspect {
        /// Input file ('-' or omitted for stdin)
        input: Option<String>,
    },

    /// Classify a structured error object
    Classify {
        /// Input file ('-' or omitted for stdin)
        input: Option<String>,
    },
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config_path = cli.config.as_deref().unwrap_or(DEFAULT_CONFIG_PATH);

    // Runs before loading so a broken config file can be replaced.
    if let Some(Commands::Init { force }) = cli.command {
        if let Err(err) = commands::init::execute(Path::new(config_path), force) {
            eprintln!("Error: {:#}", err);
            return Ok(ExitCode::FAILURE);
        }
        return Ok(ExitCode::SUCCESS);
    }

    let config = Config::load(Path::new(config_path))
        .with_context(|| format!("Failed to load config from {}", config_path))?;

    let log_level = cli.log_level.as_deref().unwrap_or(&config.log_level);
    logging::init_tracing(log_level)?;

    let format = match cli.format {
        Some(format) => format.into(),
        None if cli.json => jrpc_core::OutputFormat::Json,
        None => config.output_format,
    };
    let formatter = create_formatter(format, config.pretty_json);

    let outcome = match cli.command {
        Some(Commands::Inspect { input }) => {
            commands::inspect::execute(input.as_deref(), formatter.as_ref())
        }
        Some(Commands::Classify { input }) => {
            commands::classify::execute(input.as_deref(), formatter.as_ref())
        }
        Some(Commands::Init { .. }) => Ok(()),
        None => {
            println!("Use --help for usage information");
            Ok(())
        }
    };

    if let Err(err) = outcome {
        eprintln!("{}", formatter.format_error(&format!("{:#}", err)));
        return Ok(ExitCode::FAILURE);
    }

    Ok(ExitCode::SUCCESS)
}
