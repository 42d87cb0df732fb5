use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{ErrorContext, ExamPatchError, ExamPatchResult};

/// A page on disk that is read whole and replaced whole.
///
/// Writes go to a temporary sibling first and are renamed over the page, so
/// an interrupted write never leaves a truncated page behind.
pub struct AtomicFile {
    path: PathBuf,
    temp_path: PathBuf,
}

impl AtomicFile {
    pub fn new<P: AsRef<Path>>(path: P) -> ExamPatchResult<Self> {
        let path = path.as_ref().to_path_buf();
        let temp_path = Self::temp_path(&path)?;

        Ok(Self { path, temp_path })
    }

    fn temp_path(path: &Path) -> ExamPatchResult<PathBuf> {
        let file_name = path.file_name().ok_or_else(|| {
            ExamPatchError::InvalidInput(format!("Invalid file path: {}", path.display()))
        })?;

        let temp_name = format!(
            ".{}.tmp.{}",
            file_name.to_string_lossy(),
            std::process::id()
        );

        Ok(path.with_file_name(temp_name))
    }

    /// Reads the whole file, rejecting content that is not valid UTF-8.
    pub fn read_text(&self) -> ExamPatchResult<String> {
        let bytes = fs::read(&self.path)
            .with_context(|| format!("Failed to read {}", self.path.display()))?;

        String::from_utf8(bytes).map_err(|e| ExamPatchError::Encoding {
            path: self.path.clone(),
            offset: e.utf8_error().valid_up_to(),
        })
    }

    /// Replaces the file content, keeping the original permissions.
    pub fn write(&self, content: &[u8]) -> ExamPatchResult<()> {
        let permissions = fs::metadata(&self.path).map(|m| m.permissions()).ok();

        let result = self.write_temp(content, permissions);
        if result.is_err() && self.temp_path.exists() {
            let _ = fs::remove_file(&self.temp_path);
        }
        result
    }

    fn write_temp(&self, content: &[u8], permissions: Option<fs::Permissions>) -> ExamPatchResult<()> {
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&self.temp_path)
            .context("Failed to create temporary file")?;

        temp_file
            .write_all(content)
            .context("Failed to write to temporary file")?;

        temp_file
            .sync_all()
            .context("Failed to sync temporary file")?;

        if let Some(permissions) = permissions {
            fs::set_permissions(&self.temp_path, permissions)
                .context("Failed to copy file permissions")?;
        }

        fs::rename(&self.temp_path, &self.path)
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}
