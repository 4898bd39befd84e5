use std::fs;

use super::OutlineSource;
use crate::config::SourceConfig;
use crate::error::SourceError;
use crate::outline::RawOutline;

/// Reads `outline.json` files from a feeder host's run directory.
#[derive(Debug, Clone, Default)]
pub struct FsOutlineSource {
    config: SourceConfig,
}

impl FsOutlineSource {
    /// Creates a source reading the layout described by `config`.
    #[must_use]
    pub fn new(config: SourceConfig) -> Self {
        Self { config }
    }
}

impl OutlineSource for FsOutlineSource {
    fn outline(&self, index: usize) -> Result<RawOutline, SourceError> {
        let path = self.config.outline_file(index);
        let json = fs::read_to_string(&path)
            .map_err(|e| SourceError::unavailable(index, format!("{}: {e}", path.display())))?;
        RawOutline::from_outline_json(&json)
            .map_err(|e| SourceError::unavailable(index, format!("{}: {e}", path.display())))
    }
}
