use crate::commands::{build_cleaner, load_batch, print_json, Context};
use crate::error::not_found;
use anyhow::{anyhow, Context as _, Result};
use clap::Args;
use serde::Serialize;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

#[derive(Debug, Args)]
pub struct ProcessArgs {
    pub file: PathBuf,
    /// Output directory; defaults to the input file's directory
    #[arg(long)]
    pub out: Option<PathBuf>,
    /// Re-export numbers already in the ledger, removing them first
    #[arg(long)]
    pub include_duplicates: bool,
}

#[derive(Debug, Serialize)]
struct ProcessReport {
    exported: usize,
    skipped_duplicates: usize,
    output: Option<String>,
}

pub fn process(ctx: &Context<'_>, args: ProcessArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(not_found(format!("input file {}", args.file.display())));
    }
    let batch = load_batch(ctx, &args.file);

    let mut contacts = batch.unique;
    let mut skipped_duplicates = batch.duplicate.len();
    if args.include_duplicates && !batch.duplicate.is_empty() {
        let numbers: HashSet<String> = batch
            .duplicate
            .iter()
            .map(|contact| contact.normalized_phone.clone())
            .collect();
        ctx.ledger
            .remove(&numbers)
            .with_context(|| "remove re-exported numbers from ledger")?;
        contacts.extend(batch.duplicate);
        skipped_duplicates = 0;
    }

    let output_dir = match &args.out {
        Some(dir) => dir.clone(),
        None => args
            .file
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from(".")),
    };
    let base_name = args
        .file
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("contacts");

    let cleaner = build_cleaner(ctx)?;
    let output = cardsift_export::export(&contacts, &cleaner, ctx.ledger, &output_dir, base_name)
        .with_context(|| "export spreadsheet")?;

    if output.is_none() && !contacts.is_empty() {
        return Err(anyhow!(
            "spreadsheet was not written to {}",
            output_dir.display()
        ));
    }

    if ctx.json {
        return print_json(&ProcessReport {
            exported: if output.is_some() { contacts.len() } else { 0 },
            skipped_duplicates,
            output: output.as_ref().map(|path| path.display().to_string()),
        });
    }

    match output {
        Some(path) => {
            println!("Exported {} contacts to {}", contacts.len(), path.display());
            if skipped_duplicates > 0 {
                println!(
                    "Skipped {} previously processed contacts (use --include-duplicates to re-export)",
                    skipped_duplicates
                );
            }
        }
        None => {
            println!("No new contacts to export.");
            if skipped_duplicates > 0 {
                println!(
                    "{} contacts were already processed (use --include-duplicates to re-export)",
                    skipped_duplicates
                );
            }
        }
    }
    Ok(())
}
