use crate::commands::{print_json, Context};
use crate::error::invalid_input;
use anyhow::{Context as _, Result};
use cardsift_core::normalize_phone;
use clap::{Args, Subcommand};
use std::collections::HashSet;

#[derive(Debug, Subcommand)]
pub enum LedgerCommand {
    /// List processed numbers
    Ls(LsArgs),
    /// Mark numbers as processed
    Add(AddArgs),
    /// Remove numbers so they can be exported again
    Rm(RmArgs),
}

#[derive(Debug, Args)]
pub struct LsArgs {}

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

#[derive(Debug, Args)]
pub struct RmArgs {
    #[arg(required = true)]
    pub numbers: Vec<String>,
}

pub fn list_numbers(ctx: &Context<'_>, _args: LsArgs) -> Result<()> {
    let mut numbers: Vec<String> = ctx.ledger.load().into_iter().collect();
    numbers.sort();

    if ctx.json {
        return print_json(&numbers);
    }

    for number in &numbers {
        println!("{number}");
    }
    Ok(())
}

pub fn add_numbers(ctx: &Context<'_>, args: AddArgs) -> Result<()> {
    let numbers = normalize_all(&args.numbers)?;
    ctx.ledger
        .append(&numbers)
        .with_context(|| "append to ledger")?;

    if ctx.json {
        return print_json(&numbers);
    }
    println!("Added {} numbers to the ledger", numbers.len());
    Ok(())
}

pub fn remove_numbers(ctx: &Context<'_>, args: RmArgs) -> Result<()> {
    let numbers = normalize_all(&args.numbers)?;
    ctx.ledger
        .remove(&numbers)
        .with_context(|| "remove from ledger")?;

    if ctx.json {
        return print_json(&numbers);
    }
    println!("Removed {} numbers from the ledger", numbers.len());
    Ok(())
}

fn normalize_all(values: &[String]) -> Result<HashSet<String>> {
    let mut numbers = HashSet::new();
    for value in values {
        let normalized = normalize_phone(value)
            .ok_or_else(|| invalid_input(format!("not a phone number: {value:?}")))?;
        numbers.insert(normalized);
    }
    Ok(numbers)
}
