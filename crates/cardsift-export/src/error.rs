use cardsift_ledger::LedgerError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("spreadsheet error: {0}")]
    Workbook(#[from] rust_xlsxwriter::XlsxError),
    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),
}

pub type Result<T> = std::result::Result<T, ExportError>;
