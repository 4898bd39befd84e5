mod planar;

pub use planar::PlanarRegion;

use crate::math::Point2;

/// The planar-region capability the clustering pipeline is written against.
///
/// Swapping the geometry backend means implementing these three operations;
/// nothing in [`crate::operations`] depends on a concrete library.
pub trait RegionOps: Sized {
    /// Returns `true` if the two regions share no point, boundary included.
    fn disjoint(&self, other: &Self) -> bool;

    /// Returns the set union of the two regions. The result may consist of
    /// several pieces and may contain holes.
    fn union_with(&self, other: &Self) -> Self;

    /// Returns the exterior ring of every piece of the region, in the order
    /// the backend stores them. Holes are not reported.
    fn exterior_points(&self) -> Vec<Vec<Point2>>;
}
