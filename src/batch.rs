use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::ExamPatchResult;
use crate::storage;
use crate::transform::{Pipeline, Rewrite};

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchOptions {
    /// Run the pipeline and report, but leave files untouched.
    pub dry_run: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    /// The page was rewritten (or would be, in a dry run).
    Updated { steps: Vec<&'static str> },
    /// The page already had every change applied.
    Unchanged,
    NotFound,
    Failed(String),
}

impl FileStatus {
    pub fn is_success(&self) -> bool {
        matches!(self, FileStatus::Updated { .. } | FileStatus::Unchanged)
    }
}

#[derive(Debug, Clone)]
pub struct FileOutcome {
    pub name: String,
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Progress notifications emitted while the batch runs.
#[derive(Debug)]
pub enum Progress<'a> {
    Processing { name: &'a str, path: &'a Path },
    Done(&'a FileOutcome),
}

#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    pub outcomes: Vec<FileOutcome>,
    pub dry_run: bool,
}

impl BatchReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn succeeded(&self) -> usize {
        self.count(FileStatus::is_success)
    }

    pub fn changed(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Updated { .. }))
    }

    pub fn not_found(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::NotFound))
    }

    pub fn failed(&self) -> usize {
        self.count(|status| matches!(status, FileStatus::Failed(_)))
    }

    fn count(&self, predicate: impl Fn(&FileStatus) -> bool) -> usize {
        self.outcomes.iter().filter(|o| predicate(&o.status)).count()
    }
}

/// Reads `path`, runs the pipeline and writes the result back in place.
///
/// The file is only written when the pipeline changed something and this is
/// not a dry run.
pub fn process_file(path: &Path, pipeline: &Pipeline, options: &BatchOptions) -> ExamPatchResult<Rewrite> {
    let content = storage::read_page(path)?;
    let rewrite = pipeline.run(&content);

    if rewrite.is_changed() && !options.dry_run {
        storage::write_page(path, &rewrite.content)?;
    }

    Ok(rewrite)
}

/// Processes every name in `files`, resolved against `root`, in order.
///
/// Missing files are skipped and failures are recorded; neither stops the
/// batch, and files already written stay written.
pub fn run_batch<S, F>(
    root: &Path,
    files: &[S],
    pipeline: &Pipeline,
    options: &BatchOptions,
    mut observe: F,
) -> BatchReport
where
    S: AsRef<str>,
    F: FnMut(Progress<'_>),
{
    let mut report = BatchReport {
        outcomes: Vec::with_capacity(files.len()),
        dry_run: options.dry_run,
    };

    for name in files {
        let name = name.as_ref();
        let path = root.join(name);

        let status = if path.exists() {
            observe(Progress::Processing { name, path: &path });
            match process_file(&path, pipeline, options) {
                Ok(rewrite) if rewrite.is_changed() => FileStatus::Updated {
                    steps: rewrite.applied,
                },
                Ok(_) => FileStatus::Unchanged,
                Err(err) => {
                    warn!(file = name, error = %err, "failed to process page");
                    FileStatus::Failed(err.to_string())
                }
            }
        } else {
            debug!(file = name, "page not found");
            FileStatus::NotFound
        };

        let outcome = FileOutcome {
            name: name.to_string(),
            path,
            status,
        };
        observe(Progress::Done(&outcome));
        report.outcomes.push(outcome);
    }

    report
}
