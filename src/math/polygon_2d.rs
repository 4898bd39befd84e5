use super::intersect_2d::{is_fold_back, segments_touch_2d};
use super::{Point2, TOLERANCE};

/// Computes the signed area of a polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area_2d(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

fn coincident(a: &Point2, b: &Point2) -> bool {
    (a.x - b.x).abs() < TOLERANCE && (a.y - b.y).abs() < TOLERANCE
}

/// Removes consecutive duplicate vertices and any trailing vertices that
/// repeat the first one, leaving an open ring.
#[must_use]
pub fn open_ring(points: &[Point2]) -> Vec<Point2> {
    let mut ring: Vec<Point2> = Vec::with_capacity(points.len());
    for pt in points {
        if ring.last().is_some_and(|last| coincident(last, pt)) {
            continue;
        }
        ring.push(*pt);
    }
    while ring.len() > 1 && coincident(&ring[0], &ring[ring.len() - 1]) {
        ring.pop();
    }
    ring
}

/// Finds the first pair of edges of an open ring that violates simplicity.
///
/// Edge `i` runs from `ring[i]` to `ring[(i + 1) % n]`. Non-adjacent edges
/// must not share any point; adjacent edges must not double back. Returns
/// the offending edge indices `(i, j)` with `i < j`.
#[must_use]
pub fn find_self_intersection(ring: &[Point2]) -> Option<(usize, usize)> {
    let n = ring.len();
    if n < 3 {
        return None;
    }

    for i in 0..n {
        let a0 = &ring[i];
        let a1 = &ring[(i + 1) % n];
        let prev = (i + n - 1) % n;
        if is_fold_back(&ring[prev], a0, a1) {
            return Some((prev.min(i), prev.max(i)));
        }

        for j in (i + 2)..n {
            if i == 0 && j == n - 1 {
                continue;
            }
            let b0 = &ring[j];
            let b1 = &ring[(j + 1) % n];
            if segments_touch_2d(a0, a1, b0, b1) {
                return Some((i, j));
            }
        }
    }

    None
}
