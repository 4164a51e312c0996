pub mod error;

pub use error::{ExportError, Result};

use cardsift_core::{NameCleaner, ResolvedContact};
use cardsift_ledger::Ledger;
use rust_xlsxwriter::Workbook;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

const SPREADSHEET_EXT: &str = "xlsx";

struct OutputRow {
    number: u64,
    name: String,
}

/// Writes the given contacts to a two-column spreadsheet ("Number",
/// "Name") under `output_dir`, suffixing the base name on collision,
/// and records the exported numbers in the ledger.
///
/// Returns `Ok(None)` when there is nothing to export or when the
/// written file cannot be verified on disk; in the former case neither
/// the filesystem nor the ledger is touched. The ledger is updated
/// only after the artifact is confirmed on disk, so a failed write
/// never marks numbers as processed.
pub fn export(
    contacts: &[ResolvedContact],
    cleaner: &NameCleaner,
    ledger: &Ledger,
    output_dir: &Path,
    base_name: &str,
) -> Result<Option<PathBuf>> {
    if contacts.is_empty() {
        return Ok(None);
    }

    let mut rows = Vec::with_capacity(contacts.len());
    let mut newly_processed: HashSet<String> = HashSet::new();
    for contact in contacts {
        // A number the dedup stage validated stays processed even when
        // its row cannot be written, so it is never re-offered as new.
        newly_processed.insert(contact.normalized_phone.clone());
        if let Ok(number) = contact.normalized_phone.parse::<u64>() {
            rows.push(OutputRow {
                number,
                name: cleaner.clean(&contact.original_name),
            });
        }
    }
    if rows.is_empty() {
        return Ok(None);
    }

    let output_path = available_path(output_dir, base_name);
    write_workbook(&rows, &output_path)?;
    if !output_path.exists() {
        return Ok(None);
    }

    ledger.append(&newly_processed)?;
    Ok(Some(output_path))
}

/// Picks `{base}.xlsx`, falling back to `{base}_1.xlsx`, `{base}_2.xlsx`, …
/// until an unused name is found.
fn available_path(output_dir: &Path, base_name: &str) -> PathBuf {
    let mut candidate = output_dir.join(format!("{base_name}.{SPREADSHEET_EXT}"));
    let mut counter = 1;
    while candidate.exists() {
        candidate = output_dir.join(format!("{base_name}_{counter}.{SPREADSHEET_EXT}"));
        counter += 1;
    }
    candidate
}

fn write_workbook(rows: &[OutputRow], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.write_string(0, 0, "Number")?;
    worksheet.write_string(0, 1, "Name")?;
    for (index, row) in rows.iter().enumerate() {
        let row_index = (index + 1) as u32;
        worksheet.write_number(row_index, 0, row.number as f64)?;
        worksheet.write_string(row_index, 1, &row.name)?;
    }

    workbook.save(path)?;
    Ok(())
}
