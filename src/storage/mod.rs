pub mod atomic;

pub use atomic::AtomicFile;

use std::path::Path;

use crate::error::ExamPatchResult;

pub fn read_page(path: &Path) -> ExamPatchResult<String> {
    AtomicFile::new(path)?.read_text()
}

pub fn write_page(path: &Path, content: &str) -> ExamPatchResult<()> {
    AtomicFile::new(path)?.write(content.as_bytes())
}
