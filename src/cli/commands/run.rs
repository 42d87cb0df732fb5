use anyhow::Result;
use colored::Colorize;
use exampatch::config::Config;
use exampatch::{BatchOptions, BatchReport, FileStatus, Progress};

use crate::cli::RunArgs;

const RULE_WIDTH: usize = 60;

pub fn handle(args: RunArgs, verbose: bool) -> Result<()> {
    let exampatch = super::open(&args.dir, args.config.as_deref())?;

    let options = BatchOptions {
        dry_run: args.dry_run,
    };

    print_rule();
    println!("{}", "B2 Exam Pages Auto-Updater".bright_blue().bold());
    print_rule();
    println!();

    let report = exampatch.run(&args.files, &options, |progress| match progress {
        Progress::Processing { path, .. } => println!("Processing: {}", path.display()),
        Progress::Done(outcome) => match &outcome.status {
            FileStatus::Updated { steps } => {
                if options.dry_run {
                    println!("{} Would update: {}", "→".bright_cyan(), outcome.path.display());
                } else {
                    println!("{} Updated: {}", "✓".bright_green(), outcome.path.display());
                }
                if verbose {
                    println!("    {}", steps.join(", ").bright_black());
                }
            }
            FileStatus::Unchanged => {
                println!("{} Already up to date: {}", "✓".bright_green(), outcome.path.display());
            }
            FileStatus::NotFound => {
                println!("{} File not found: {}", "⚠".bright_yellow(), outcome.name);
            }
            FileStatus::Failed(reason) => {
                println!("{} Error processing {}: {}", "✗".bright_red(), outcome.name, reason);
            }
        },
    });

    print_summary(&report);
    print_next_steps(exampatch.config());

    Ok(())
}

fn print_rule() {
    println!("{}", "=".repeat(RULE_WIDTH));
}

fn print_summary(report: &BatchReport) {
    println!();
    print_rule();
    if report.dry_run {
        println!(
            "{} Dry run: {}/{} files would be updated",
            "→".bright_cyan(),
            report.changed(),
            report.total()
        );
    } else {
        println!(
            "{} Successfully updated {}/{} files",
            "✓".bright_green(),
            report.succeeded(),
            report.total()
        );
    }
    if report.not_found() > 0 || report.failed() > 0 {
        println!(
            "  {} not found, {} failed",
            report.not_found().to_string().bright_yellow(),
            report.failed().to_string().bright_red()
        );
    }
    print_rule();
    println!();
}

fn print_next_steps(config: &Config) {
    let assets = &config.data.assets;

    println!("{}", "Next steps:".bright_blue().bold());
    println!("1. Copy {} to your website folder", assets.stylesheet);
    println!("2. Copy {} to your website folder", assets.script);
    println!("3. Upload the updated HTML files");
    println!();
}
