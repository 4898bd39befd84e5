use std::collections::BTreeMap;

use super::OutlineSource;
use crate::error::SourceError;
use crate::outline::RawOutline;

/// Outline source backed by an in-memory map of candidate index to outline.
#[derive(Debug, Clone, Default)]
pub struct MemoryOutlineSource {
    outlines: BTreeMap<usize, RawOutline>,
}

impl MemoryOutlineSource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces the outline of candidate `index`.
    #[must_use]
    pub fn with_outline(mut self, index: usize, outline: RawOutline) -> Self {
        self.insert(index, outline);
        self
    }

    /// Adds or replaces the outline of candidate `index`.
    pub fn insert(&mut self, index: usize, outline: RawOutline) {
        self.outlines.insert(index, outline);
    }
}

impl OutlineSource for MemoryOutlineSource {
    fn outline(&self, index: usize) -> Result<RawOutline, SourceError> {
        self.outlines
            .get(&index)
            .cloned()
            .ok_or_else(|| SourceError::unavailable(index, "no outline recorded"))
    }
}
