pub mod commands;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "exampatch")]
#[command(about = "Move exam pages onto the shared stylesheet and script", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(short, long, global = true, help = "Show debug logging and step details")]
    pub verbose: bool,

    /// Without a subcommand the configured pages are updated in place.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Update exam pages in place")]
    Run(RunArgs),

    #[command(about = "Show the rewritten page without touching the file")]
    Preview {
        #[arg(help = "Page to preview")]
        file: PathBuf,
        #[arg(long, help = "Configuration file to use instead of the page folder's exampatch.toml")]
        config: Option<PathBuf>,
        #[arg(short, long, help = "Show the current and rewritten page one after the other")]
        diff: bool,
    },

    #[command(about = "List HTML pages that still need updating")]
    Status {
        #[arg(short = 'C', long = "dir", default_value = ".", help = "Directory to scan")]
        dir: PathBuf,
    },

    #[command(about = "Write a default exampatch.toml")]
    Init {
        #[arg(short = 'C', long = "dir", default_value = ".")]
        dir: PathBuf,
    },
}

#[derive(Args)]
pub struct RunArgs {
    #[arg(help = "Pages to update (defaults to the configured list)")]
    pub files: Vec<String>,

    #[arg(short = 'C', long = "dir", default_value = ".", help = "Directory the page names are resolved against")]
    pub dir: PathBuf,

    #[arg(long, help = "Config file (defaults to <dir>/exampatch.toml)")]
    pub config: Option<PathBuf>,

    #[arg(short = 'n', long, help = "Report what would change without writing")]
    pub dry_run: bool,
}

impl Default for RunArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            dir: PathBuf::from("."),
            config: None,
            dry_run: false,
        }
    }
}
