mod commands;
mod output;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use commands::Commands;
use output::{ErrorResponse, print_json};
use swiperate::Config;

/// swiperate - swipe classification and preference-aware prompts
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Config file (default: <config dir>/swiperate/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Logs go to stderr so stdout stays clean for prompts and JSON.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<ExitCode, swiperate::Error> {
    // Version runs without reading config so a broken file cannot hide it.
    if let Commands::Version = cli.command {
        return commands::handle_version(cli.json);
    }

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    commands::execute(&cli.command, &config, cli.json)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            if cli.json {
                print_json(&ErrorResponse {
                    error: e.to_string(),
                });
            } else {
                eprintln!("Error: {}", e);
            }
            ExitCode::FAILURE
        }
    }
}
