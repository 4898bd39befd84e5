use crate::operations::cluster::Representative;
use crate::outline::MultiRange;
use crate::region::RegionOps;

/// Collects the exterior boundary of each representative into a
/// [`MultiRange`] document.
///
/// Boundaries are emitted in representative order. Interior holes are
/// dropped, which loses accuracy when a union encloses a gap. A
/// representative whose union fell apart into several pieces contributes
/// one boundary per piece.
pub struct AssembleMultiRange<'a, R> {
    representatives: &'a [Representative<R>],
}

impl<'a, R: RegionOps> AssembleMultiRange<'a, R> {
    /// Creates a new `AssembleMultiRange` operation.
    #[must_use]
    pub fn new(representatives: &'a [Representative<R>]) -> Self {
        Self { representatives }
    }

    /// Executes the assembly.
    #[must_use]
    pub fn execute(&self) -> MultiRange {
        let mut result = MultiRange::default();
        for representative in self.representatives {
            for boundary in representative.region.exterior_points() {
                result.push_boundary(&boundary);
            }
        }
        result
    }
}
