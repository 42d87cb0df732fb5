use anyhow::{Context, Result};
use colored::Colorize;
use exampatch::config::{Config, CONFIG_FILE_NAME};
use std::path::Path;

pub fn handle(dir: &Path) -> Result<()> {
    let existed = dir.join(CONFIG_FILE_NAME).exists();
    let path = Config::init(dir)
        .with_context(|| format!("Failed to initialize exampatch in {}", dir.display()))?;

    if existed {
        println!("{} {} already exists, left unchanged", "ℹ".bright_blue(), path.display());
        return Ok(());
    }

    println!("{} Created {}", "✓".bright_green(), path.display());
    println!("\n{}", "Next:".bright_blue().bold());
    println!("  1. Edit the {} list to match your exam pages", "files".bright_yellow());
    println!("  2. Run {} to preview the changes", "exampatch run --dry-run".bright_cyan());

    Ok(())
}
