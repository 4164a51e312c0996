use crate::commands::{load_batch, print_json, Context};
use crate::error::not_found;
use anyhow::Result;
use cardsift_core::ResolvedContact;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    pub file: PathBuf,
}

#[derive(Debug, Serialize)]
struct ExtractReport<'a> {
    unique: &'a [ResolvedContact],
    duplicate: &'a [ResolvedContact],
}

pub fn extract(ctx: &Context<'_>, args: ExtractArgs) -> Result<()> {
    if !args.file.exists() {
        return Err(not_found(format!("input file {}", args.file.display())));
    }
    let batch = load_batch(ctx, &args.file);

    if ctx.json {
        return print_json(&ExtractReport {
            unique: &batch.unique,
            duplicate: &batch.duplicate,
        });
    }

    if batch.unique.is_empty() && batch.duplicate.is_empty() {
        println!("No contacts found.");
        return Ok(());
    }

    println!(
        "Found {} new and {} previously processed contacts",
        batch.unique.len(),
        batch.duplicate.len()
    );
    for contact in &batch.unique {
        println!("+ {} {}", contact.normalized_phone, contact.original_name);
    }
    for contact in &batch.duplicate {
        println!("= {} {}", contact.normalized_phone, contact.original_name);
    }
    Ok(())
}
