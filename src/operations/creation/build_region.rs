use crate::error::RingError;
use crate::math::polygon_2d::{find_self_intersection, open_ring, signed_area_2d};
use crate::math::{Point2, TOLERANCE};
use crate::outline::RawOutline;
use crate::region::PlanarRegion;

/// Builds a validated planar region from one raw outline ring.
pub struct BuildRegion<'a> {
    outline: &'a RawOutline,
}

impl<'a> BuildRegion<'a> {
    /// Creates a new `BuildRegion` operation.
    #[must_use]
    pub fn new(outline: &'a RawOutline) -> Self {
        Self { outline }
    }

    /// Executes the operation.
    ///
    /// Coordinates past the first two of each point are ignored. Consecutive
    /// duplicates and an explicit closing point are removed before the ring
    /// is validated.
    ///
    /// # Errors
    ///
    /// Returns a [`RingError`] if a point is malformed or non-finite, fewer
    /// than three distinct points remain, the ring has zero area, or two of
    /// its edges intersect.
    pub fn execute(&self) -> Result<PlanarRegion, RingError> {
        let mut points = Vec::with_capacity(self.outline.points.len());
        for (position, coords) in self.outline.points.iter().enumerate() {
            let [x, y, ..] = coords.as_slice() else {
                return Err(RingError::MalformedPoint { position });
            };
            if !x.is_finite() || !y.is_finite() {
                return Err(RingError::NonFinite { position });
            }
            points.push(Point2::new(*x, *y));
        }

        let ring = open_ring(&points);
        if ring.len() < 3 {
            return Err(RingError::TooFewPoints {
                distinct: ring.len(),
            });
        }

        if signed_area_2d(&ring).abs() < TOLERANCE {
            return Err(RingError::ZeroArea);
        }

        if let Some((first, second)) = find_self_intersection(&ring) {
            return Err(RingError::SelfIntersecting { first, second });
        }

        Ok(PlanarRegion::from_ring(&ring))
    }
}
