use std::collections::BTreeSet;

use tracing::{debug, warn};

use crate::error::{RingError, SourceError};
use crate::operations::assemble::AssembleMultiRange;
use crate::operations::cluster::ClusterOverlaps;
use crate::operations::creation::BuildRegion;
use crate::outline::MultiRange;
use crate::source::OutlineSource;

/// Why a candidate took no part in clustering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropCause {
    SourceUnavailable(SourceError),
    DegenerateRing(RingError),
}

/// A candidate that was skipped, with the reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DroppedCandidate {
    pub index: usize,
    pub cause: DropCause,
}

/// Everything one [`MultiOutline::create`] run produced.
#[derive(Debug, Clone, Default)]
pub struct MergeReport {
    /// The merged boundaries, ready to serialize.
    pub multi_range: MultiRange,
    /// Candidate indices merged into each cluster, in output order.
    pub clusters: Vec<BTreeSet<usize>>,
    /// Candidates that were skipped, ordered by index.
    pub dropped: Vec<DroppedCandidate>,
    /// Number of candidates that produced a valid region.
    pub active: usize,
}

/// Merges the reception outlines of several feeder instances into a
/// minimal set of coverage regions.
#[derive(Debug, Clone)]
pub struct MultiOutline<S> {
    source: S,
}

impl<S: OutlineSource> MultiOutline<S> {
    /// Creates a merger reading outlines from `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Reads candidates `1..=count`, drops the unusable ones and merges the
    /// rest. Never fails: with no usable candidate the result is empty.
    #[must_use]
    pub fn create(&self, count: usize) -> MergeReport {
        let mut dropped = Vec::new();
        let mut outlines = Vec::new();
        for index in 1..=count {
            match self.source.outline(index) {
                Ok(outline) => outlines.push((index, outline)),
                Err(err) => {
                    debug!(candidate = index, error = %err, "skipping outline");
                    dropped.push(DroppedCandidate {
                        index,
                        cause: DropCause::SourceUnavailable(err),
                    });
                }
            }
        }

        let mut regions = Vec::with_capacity(outlines.len());
        for (index, outline) in &outlines {
            match BuildRegion::new(outline).execute() {
                Ok(region) => regions.push((*index, region)),
                Err(err) => {
                    warn!(
                        candidate = index,
                        error = %err,
                        "can't create ring from outline, maybe there is no data yet"
                    );
                    dropped.push(DroppedCandidate {
                        index: *index,
                        cause: DropCause::DegenerateRing(err),
                    });
                }
            }
        }
        dropped.sort_by_key(|d| d.index);

        let active = regions.len();
        let clusters = ClusterOverlaps::labeled(regions).execute();
        let multi_range = AssembleMultiRange::new(&clusters.representatives).execute();
        debug!(
            candidates = count,
            active,
            clusters = clusters.len(),
            passes = clusters.passes,
            "merged outlines"
        );

        MergeReport {
            multi_range,
            clusters: clusters
                .representatives
                .into_iter()
                .map(|r| r.members)
                .collect(),
            dropped,
            active,
        }
    }
}
