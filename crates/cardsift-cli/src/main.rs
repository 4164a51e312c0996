mod commands;
mod error;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;

use crate::commands::{extract, ledger, process, Context};
use crate::error::{exit_code_for, report_error};
use cardsift_config as config;
use cardsift_ledger::{paths, Ledger};

#[derive(Debug, Parser)]
#[command(name = "cardsift", version, about = "cardsift CLI")]
struct Cli {
    #[arg(long, global = true)]
    ledger_path: Option<PathBuf>,
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[arg(long, global = true)]
    json: bool,
    #[arg(long, short, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a document and show the unique/duplicate partition
    Extract(extract::ExtractArgs),
    /// Extract, deduplicate, and export contacts to a spreadsheet
    Process(process::ProcessArgs),
    #[command(subcommand)]
    Ledger(ledger::LedgerCommand),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let verbose = cli.verbose;
    init_logging(verbose);
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err, verbose);
            exit_code_for(&err)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let Cli {
        ledger_path,
        config: config_path,
        json,
        verbose,
        command,
    } = cli;

    let app_config = config::load(config_path.clone()).with_context(|| "load config")?;
    if verbose {
        match config::resolve_config_path(config_path) {
            Ok(path) => {
                if path.exists() {
                    debug!(path = %path.display(), "config resolved");
                } else {
                    debug!(path = %path.display(), "config missing, using defaults");
                }
            }
            Err(err) => {
                debug!(error = %err, "config unavailable");
            }
        }
    }

    let ledger_override = ledger_path.or_else(|| app_config.ledger_path.clone());
    let ledger_path =
        paths::resolve_ledger_path(ledger_override).with_context(|| "resolve ledger path")?;
    if verbose {
        debug!(path = %ledger_path.display(), "ledger path resolved");
    }
    let ledger = Ledger::open(&ledger_path);

    let ctx = Context {
        ledger: &ledger,
        json,
        config: &app_config,
    };

    match command {
        Command::Extract(args) => extract::extract(&ctx, args),
        Command::Process(args) => process::process(&ctx, args),
        Command::Ledger(cmd) => match cmd {
            ledger::LedgerCommand::Ls(args) => ledger::list_numbers(&ctx, args),
            ledger::LedgerCommand::Add(args) => ledger::add_numbers(&ctx, args),
            ledger::LedgerCommand::Rm(args) => ledger::remove_numbers(&ctx, args),
        },
    }
}

fn init_logging(verbose: bool) {
    use tracing_subscriber::{fmt, EnvFilter};
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init();
}
