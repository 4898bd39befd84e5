mod fs;
mod memory;

pub use fs::FsOutlineSource;
pub use memory::MemoryOutlineSource;

use crate::error::SourceError;
use crate::outline::RawOutline;

/// Supplies the raw outline of each candidate feeder instance.
///
/// Candidates are numbered from 1. A candidate that cannot be read is
/// reported as [`SourceError::Unavailable`] and skipped by the caller.
pub trait OutlineSource {
    /// Returns the raw outline for candidate `index`.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Unavailable`] if the outline is missing or
    /// malformed.
    fn outline(&self, index: usize) -> Result<RawOutline, SourceError>;
}
