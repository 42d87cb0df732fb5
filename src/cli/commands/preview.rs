use anyhow::{Context, Result};
use colored::Colorize;
use exampatch::storage;
use std::path::Path;

pub fn handle(file: &Path, config: Option<&Path>, diff: bool) -> Result<()> {
    // Settings come from the page's own folder unless a config file is named.
    let dir = match file.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let exampatch = super::open(dir, config)?;

    let content = storage::read_page(file)
        .with_context(|| format!("Failed to read file: {}", file.display()))?;

    println!("{}", "Exampatch Preview".bright_blue().bold());
    println!("{}", "=================".bright_blue());
    println!("File: {}\n", file.display());

    let rewrite = exampatch.rewrite(&content);

    if !rewrite.is_changed() {
        println!("{} Page is already up to date", "✓".bright_green());
        return Ok(());
    }

    println!("Steps: {}\n", rewrite.applied.join(", ").bright_cyan());

    if diff {
        println!("{}", "CURRENT PAGE:".bright_green().bold());
        println!("{}", "-------------".bright_green());
        println!("{}", content);
        println!();
        println!("{}", "REWRITTEN PAGE:".bright_yellow().bold());
        println!("{}", "---------------".bright_yellow());
        println!("{}", rewrite.content);
    } else {
        println!("{}", "What will be written:".bright_yellow().bold());
        println!("{}", rewrite.content);
        println!();
        println!("Use {} to compare with the current page", "--diff".bright_cyan());
    }

    Ok(())
}
