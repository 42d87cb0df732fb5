pub mod batch;
pub mod config;
pub mod error;
pub mod storage;
pub mod transform;

use std::path::{Path, PathBuf};

pub use batch::{BatchOptions, BatchReport, FileOutcome, FileStatus, Progress};
pub use error::{ExamPatchError, ExamPatchResult};
pub use transform::{Pipeline, Rewrite};

pub struct ExamPatch {
    config: config::Config,
    root: PathBuf,
    pipeline: Pipeline,
}

impl ExamPatch {
    /// Opens `root`, reading `exampatch.toml` there if it exists.
    pub fn new(root: impl AsRef<Path>) -> ExamPatchResult<Self> {
        let root = root.as_ref();
        let config = config::Config::load_or_default(root)?;

        Ok(Self::with_config(root, config))
    }

    pub fn with_config(root: impl AsRef<Path>, config: config::Config) -> Self {
        let pipeline = Pipeline::new(&config.data.assets);

        Self {
            config,
            root: root.as_ref().to_path_buf(),
            pipeline,
        }
    }

    pub fn config(&self) -> &config::Config {
        &self.config
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Configured target pages, in processing order.
    pub fn targets(&self) -> &[String] {
        &self.config.data.files
    }

    pub fn rewrite(&self, content: &str) -> Rewrite {
        self.pipeline.run(content)
    }

    /// Runs the batch over `files`, or over the configured targets when empty.
    pub fn run<F>(&self, files: &[String], options: &BatchOptions, observe: F) -> BatchReport
    where
        F: FnMut(Progress<'_>),
    {
        let files = if files.is_empty() { self.targets() } else { files };
        batch::run_batch(&self.root, files, &self.pipeline, options, observe)
    }
}
