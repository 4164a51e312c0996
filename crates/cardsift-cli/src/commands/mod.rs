use anyhow::Result;
use cardsift_config::AppConfig;
use cardsift_core::{Batch, NameCleaner};
use cardsift_ledger::Ledger;
use serde::Serialize;
use std::io::{self, Write};
use std::path::Path;
use tracing::{debug, warn};

pub mod extract;
pub mod ledger;
pub mod process;

pub struct Context<'a> {
    pub ledger: &'a Ledger,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

pub fn build_cleaner(ctx: &Context<'_>) -> Result<NameCleaner> {
    Ok(NameCleaner::new(&ctx.config.titles_to_remove)?)
}

/// Parses the document and partitions it against the current ledger
/// snapshot. An unreadable or missing document yields an empty batch;
/// the engine treats that as "no contacts found".
pub fn load_batch(ctx: &Context<'_>, file: &Path) -> Batch {
    let raw = match cardsift_extract::load_document(file) {
        Some(document) => cardsift_extract::extract_contacts(&document),
        None => {
            warn!(path = %file.display(), "document unreadable, treating as empty");
            Vec::new()
        }
    };
    debug!(count = raw.len(), "contacts extracted");

    let snapshot = ctx.ledger.load();
    cardsift_core::partition(&raw, &snapshot)
}
