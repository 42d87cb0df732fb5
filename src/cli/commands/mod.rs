pub mod init;
pub mod preview;
pub mod run;
pub mod status;

use anyhow::{Context, Result};
use colored::Colorize;
use exampatch::config::Config;
use exampatch::error::{self, ExamPatchError};
use exampatch::ExamPatch;
use std::path::Path;

/// Opens `dir`, taking settings from `config` when given instead of `dir/exampatch.toml`.
pub fn open(dir: &Path, config: Option<&Path>) -> Result<ExamPatch> {
    match config {
        Some(path) => {
            let config = Config::load(path)
                .with_context(|| format!("Failed to load {}", path.display()))?;
            Ok(ExamPatch::with_config(dir, config))
        }
        None => ExamPatch::new(dir).context("Failed to load exampatch configuration"),
    }
}

/// Display an error message with proper formatting
pub fn display_error(err: &anyhow::Error) {
    eprintln!("\n{} {}", "✗".bright_red().bold(), "Operation failed".bright_red().bold());
    eprintln!("  {} {}", "├".bright_black(), err);

    for cause in err.chain().skip(1) {
        eprintln!("  {} {}", "├".bright_black(), cause);
    }

    if let Some(inner) = err.downcast_ref::<ExamPatchError>() {
        error::print_hint(inner);
    } else if err.to_string().contains("No such file") {
        eprintln!("  {} Check that the file path is correct", "└".bright_cyan());
    } else {
        eprintln!("  {} Run with {} for more details",
            "└".bright_black(),
            "--verbose".bright_cyan()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use exampatch::config::CONFIG_FILE_NAME;
    use std::fs;
    use tempfile::TempDir;

    const CUSTOM_ASSETS: &str = "[assets]\nstylesheet = \"b2.css\"\nscript = \"b2.js\"\n";

    #[test]
    fn test_open_reads_directory_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), CUSTOM_ASSETS)?;

        let exampatch = open(temp_dir.path(), None)?;
        let page = exampatch.rewrite("<head><style>x</style></head>").content;

        assert!(page.contains(r#"<link rel="stylesheet" href="b2.css">"#));
        Ok(())
    }

    #[test]
    fn test_open_prefers_explicit_config() -> anyhow::Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("shared.toml");
        fs::write(&config_path, CUSTOM_ASSETS)?;

        let exampatch = open(Path::new("."), Some(&config_path))?;

        assert_eq!(exampatch.config().data.assets.script, "b2.js");
        assert_eq!(exampatch.root(), Path::new("."));
        Ok(())
    }
}
