use anyhow::{Context, Result};
use colored::Colorize;
use exampatch::{storage, ExamPatch};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

pub fn handle(dir: &Path, verbose: bool) -> Result<()> {
    println!("{}", "Exampatch Status".bright_blue().bold());
    println!("{}", "================".bright_blue());

    let exampatch = ExamPatch::new(dir)
        .context("Failed to load exampatch configuration")?;

    let mut pending: Vec<(PathBuf, Vec<&'static str>)> = Vec::new();
    let mut unreadable = Vec::new();
    let mut scanned = 0;

    for entry in WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| e.depth() == 0 || !is_ignored(e.path()))
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let path = entry.path();
        if !is_html(path) {
            continue;
        }
        scanned += 1;

        match storage::read_page(path) {
            Ok(content) => {
                let rewrite = exampatch.rewrite(&content);
                if rewrite.is_changed() {
                    pending.push((path.to_path_buf(), rewrite.applied));
                }
            }
            Err(err) => unreadable.push((path.to_path_buf(), err)),
        }
    }

    if pending.is_empty() {
        println!("\n{} All {} HTML pages are up to date", "✓".bright_green(), scanned);
    } else {
        println!("\n{}", format!("{} of {} HTML pages need updating:",
            pending.len(), scanned).bright_yellow());

        for (file, steps) in &pending {
            println!("  {} {}", "•".bright_cyan(), file.display());
            if verbose {
                for step in steps {
                    println!("      {} {}", "→".bright_black(), step.bright_black());
                }
            }
        }

        if !verbose {
            println!("\n{}", "Tip: Use --verbose to see which steps apply".bright_cyan());
        }
    }

    for (file, err) in &unreadable {
        println!("{} Could not read {}: {}", "✗".bright_red(), file.display(), err);
    }

    Ok(())
}

fn is_ignored(path: &Path) -> bool {
    path.file_name().map_or(false, |name| {
        let name = name.to_string_lossy();
        name.starts_with('.') || name == "node_modules" || name == "target"
    })
}

fn is_html(path: &Path) -> bool {
    path.extension()
        .map_or(false, |ext| ext.eq_ignore_ascii_case("html") || ext.eq_ignore_ascii_case("htm"))
}
