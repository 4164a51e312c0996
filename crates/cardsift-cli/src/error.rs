use anyhow::Error;
use cardsift_config::ConfigError;
use cardsift_core::CoreError;
use cardsift_export::ExportError;
use cardsift_ledger::LedgerError;
use std::process::ExitCode;
use thiserror::Error as ThisError;

pub const EXIT_FAILURE: u8 = 1;
pub const EXIT_NOT_FOUND: u8 = 2;
pub const EXIT_INVALID_INPUT: u8 = 3;

#[derive(Debug, ThisError)]
pub enum CliError {
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("not found: {0}")]
    NotFound(String),
}

pub fn invalid_input(message: impl Into<String>) -> Error {
    CliError::InvalidInput(message.into()).into()
}

pub fn not_found(message: impl Into<String>) -> Error {
    CliError::NotFound(message.into()).into()
}

pub fn report_error(err: &Error, verbose: bool) {
    if verbose {
        eprintln!("error: {:#}", err);
    } else {
        eprintln!("error: {}", err);
    }
}

pub fn exit_code_for(err: &Error) -> ExitCode {
    for cause in err.chain() {
        if let Some(cli_err) = cause.downcast_ref::<CliError>() {
            return ExitCode::from(match cli_err {
                CliError::InvalidInput(_) => EXIT_INVALID_INPUT,
                CliError::NotFound(_) => EXIT_NOT_FOUND,
            });
        }
        if let Some(ledger_err) = cause.downcast_ref::<LedgerError>() {
            return ExitCode::from(ledger_exit_code(ledger_err));
        }
        if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
            return ExitCode::from(config_exit_code(config_err));
        }
        if let Some(export_err) = cause.downcast_ref::<ExportError>() {
            return ExitCode::from(export_exit_code(export_err));
        }
        if let Some(_core_err) = cause.downcast_ref::<CoreError>() {
            return ExitCode::from(EXIT_INVALID_INPUT);
        }
    }
    ExitCode::from(EXIT_FAILURE)
}

fn ledger_exit_code(err: &LedgerError) -> u8 {
    match err {
        LedgerError::Io(_) | LedgerError::MissingHomeDir => EXIT_FAILURE,
        LedgerError::InvalidDataPath(_) => EXIT_INVALID_INPUT,
    }
}

fn config_exit_code(err: &ConfigError) -> u8 {
    match err {
        ConfigError::MissingHomeDir => EXIT_FAILURE,
        ConfigError::InvalidConfigPath(_)
        | ConfigError::MissingConfigFile(_)
        | ConfigError::InvalidTitle(_)
        | ConfigError::Read { .. }
        | ConfigError::Parse { .. } => EXIT_INVALID_INPUT,
    }
}

fn export_exit_code(err: &ExportError) -> u8 {
    match err {
        ExportError::Workbook(_) | ExportError::Ledger(_) => EXIT_FAILURE,
    }
}
