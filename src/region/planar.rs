use geo::{Area, BooleanOps, Coord, Intersects, LineString, MultiPolygon, Polygon};

use super::RegionOps;
use crate::math::distance_2d::point_to_segment_dist;
use crate::math::Point2;

/// A planar region backed by a `geo` multi-polygon.
///
/// Freshly built regions hold exactly one polygon without holes. Unions may
/// produce several pieces and interior holes.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarRegion {
    shape: MultiPolygon<f64>,
}

impl PlanarRegion {
    /// Creates a region from an already validated open ring.
    ///
    /// Callers are expected to go through
    /// [`BuildRegion`](crate::operations::creation::BuildRegion), which
    /// rejects rings that are not simple.
    #[must_use]
    pub(crate) fn from_ring(ring: &[Point2]) -> Self {
        let exterior: LineString<f64> = ring.iter().map(|p| Coord { x: p.x, y: p.y }).collect();
        Self {
            shape: MultiPolygon::new(vec![Polygon::new(exterior, Vec::new())]),
        }
    }

    /// Total enclosed area, holes excluded.
    #[must_use]
    pub fn area(&self) -> f64 {
        self.shape.unsigned_area()
    }

    /// Number of disjoint polygon pieces.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        self.shape.0.len()
    }

    /// Number of interior holes across all pieces.
    #[must_use]
    pub fn hole_count(&self) -> usize {
        self.shape.0.iter().map(|poly| poly.interiors().len()).sum()
    }

    /// Returns `true` if `point` lies inside the region, or within
    /// `tolerance` of one of its rings.
    ///
    /// The union backend rounds output vertices to a grid, so a union can
    /// leave an input vertex a few nanodegrees outside its boundary; pass a
    /// tolerance above that grid step when checking containment of inputs.
    #[must_use]
    pub fn covers_point(&self, point: &Point2, tolerance: f64) -> bool {
        if self.shape.intersects(&geo::Point::new(point.x, point.y)) {
            return true;
        }
        self.shape
            .0
            .iter()
            .flat_map(|poly| std::iter::once(poly.exterior()).chain(poly.interiors()))
            .flat_map(|ring| ring.lines())
            .any(|line| {
                let a = Point2::new(line.start.x, line.start.y);
                let b = Point2::new(line.end.x, line.end.y);
                point_to_segment_dist(point, &a, &b) <= tolerance
            })
    }
}

impl RegionOps for PlanarRegion {
    fn disjoint(&self, other: &Self) -> bool {
        !self.shape.intersects(&other.shape)
    }

    fn union_with(&self, other: &Self) -> Self {
        Self {
            shape: self.shape.union(&other.shape),
        }
    }

    fn exterior_points(&self) -> Vec<Vec<Point2>> {
        self.shape
            .0
            .iter()
            .map(|poly| {
                poly.exterior()
                    .coords()
                    .map(|c| Point2::new(c.x, c.y))
                    .collect()
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square(x: f64, y: f64, size: f64) -> PlanarRegion {
        PlanarRegion::from_ring(&[
            Point2::new(x, y),
            Point2::new(x + size, y),
            Point2::new(x + size, y + size),
            Point2::new(x, y + size),
        ])
    }

    #[test]
    fn from_ring_closes_exterior() {
        let region = square(0.0, 0.0, 2.0);
        let rings = region.exterior_points();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 5);
        assert_eq!(rings[0][0], rings[0][4]);
        assert_relative_eq!(region.area(), 4.0, epsilon = 1e-9);
    }

    #[test]
    fn separated_squares_are_disjoint() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(5.0, 5.0, 1.0);
        assert!(a.disjoint(&b));
        assert!(b.disjoint(&a));
    }

    #[test]
    fn edge_contact_is_not_disjoint() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        assert!(!a.disjoint(&b));
    }

    #[test]
    fn union_of_overlapping_squares() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 1.0, 2.0);
        let merged = a.union_with(&b);
        assert_eq!(merged.piece_count(), 1);
        assert_eq!(merged.hole_count(), 0);
        assert_relative_eq!(merged.area(), 7.0, epsilon = 1e-9);
        assert!(merged.covers_point(&Point2::new(0.0, 0.0), 0.0));
        assert!(merged.covers_point(&Point2::new(3.0, 3.0), 0.0));
        assert!(!merged.covers_point(&Point2::new(0.5, 2.5), 0.0));
    }

    #[test]
    fn union_hole_is_dropped_from_exterior() {
        // A U shape closed off by a bar leaves a hole in the middle.
        let u_shape = PlanarRegion::from_ring(&[
            Point2::new(0.0, 0.0),
            Point2::new(3.0, 0.0),
            Point2::new(3.0, 3.0),
            Point2::new(2.0, 3.0),
            Point2::new(2.0, 1.0),
            Point2::new(1.0, 1.0),
            Point2::new(1.0, 3.0),
            Point2::new(0.0, 3.0),
        ]);
        let bar = PlanarRegion::from_ring(&[
            Point2::new(-0.5, 2.5),
            Point2::new(3.5, 2.5),
            Point2::new(3.5, 4.0),
            Point2::new(-0.5, 4.0),
        ]);
        let merged = u_shape.union_with(&bar);
        assert_eq!(merged.piece_count(), 1);
        assert_eq!(merged.hole_count(), 1);
        assert_relative_eq!(merged.area(), 12.0, epsilon = 1e-9);
        assert_eq!(merged.exterior_points().len(), 1);
    }
}
