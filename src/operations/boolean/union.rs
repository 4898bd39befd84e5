use tracing::trace;

use crate::region::RegionOps;

/// Computes the set union of two regions.
pub struct Union<'a, R> {
    region_a: &'a R,
    region_b: &'a R,
}

impl<'a, R: RegionOps> Union<'a, R> {
    /// Creates a new `Union` operation.
    #[must_use]
    pub fn new(region_a: &'a R, region_b: &'a R) -> Self {
        Self { region_a, region_b }
    }

    /// Executes the union. Holes and multiple pieces in the result are kept.
    #[must_use]
    pub fn execute(&self) -> R {
        let merged = self.region_a.union_with(self.region_b);
        trace!("merged two overlapping regions");
        merged
    }
}
