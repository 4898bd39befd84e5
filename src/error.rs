use thiserror::Error;

/// Errors from writing the merged document.
///
/// Per-candidate failures ([`SourceError`], [`RingError`]) never surface
/// here; they are recorded in the merge report instead.
#[derive(Debug, Error)]
pub enum MultiOutlineError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// A candidate's raw outline could not be obtained.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SourceError {
    #[error("outline #{index} unavailable: {reason}")]
    Unavailable { index: usize, reason: String },
}

impl SourceError {
    /// Creates an `Unavailable` error for candidate `index`.
    #[must_use]
    pub fn unavailable(index: usize, reason: impl Into<String>) -> Self {
        Self::Unavailable {
            index,
            reason: reason.into(),
        }
    }
}

/// A candidate's points cannot form a valid simple ring.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RingError {
    #[error("point {position} has fewer than two coordinates")]
    MalformedPoint { position: usize },

    #[error("point {position} has a non-finite coordinate")]
    NonFinite { position: usize },

    #[error("ring has {distinct} distinct points, at least 3 required")]
    TooFewPoints { distinct: usize },

    #[error("ring encloses zero area")]
    ZeroArea,

    #[error("ring edges {first} and {second} intersect")]
    SelfIntersecting { first: usize, second: usize },
}

/// Convenience type alias for results using [`MultiOutlineError`].
pub type Result<T> = std::result::Result<T, MultiOutlineError>;
