use std::path::PathBuf;

/// Default directory holding the per-instance run directories.
pub const DEFAULT_RUN_DIR: &str = "/run";

/// Default prefix of each instance directory; the candidate index is appended.
pub const DEFAULT_INSTANCE_PREFIX: &str = "adsb-feeder-ultrafeeder_";

/// Default location of the outline file inside an instance directory.
pub const DEFAULT_OUTLINE_PATH: &str = "readsb/outline.json";

/// Where [`FsOutlineSource`](crate::source::FsOutlineSource) looks for
/// per-instance outline files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub run_dir: PathBuf,
    pub instance_prefix: String,
    pub outline_path: PathBuf,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            run_dir: PathBuf::from(DEFAULT_RUN_DIR),
            instance_prefix: DEFAULT_INSTANCE_PREFIX.to_owned(),
            outline_path: PathBuf::from(DEFAULT_OUTLINE_PATH),
        }
    }
}

impl SourceConfig {
    /// Sets the run directory.
    #[must_use]
    pub fn with_run_dir(mut self, run_dir: impl Into<PathBuf>) -> Self {
        self.run_dir = run_dir.into();
        self
    }

    /// Path of the outline file for candidate `index`.
    #[must_use]
    pub fn outline_file(&self, index: usize) -> PathBuf {
        self.run_dir
            .join(format!("{}{index}", self.instance_prefix))
            .join(&self.outline_path)
    }
}
