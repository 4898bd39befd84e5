use super::{Point2, Vector2, TOLERANCE};

/// Twice the signed area of triangle `(a, b, c)`.
///
/// Positive when `c` lies to the left of the directed line `a -> b`,
/// negative when to the right, near zero when collinear.
#[must_use]
pub fn orient_2d(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

fn orientation_sign(value: f64) -> i8 {
    if value > TOLERANCE {
        1
    } else if value < -TOLERANCE {
        -1
    } else {
        0
    }
}

/// Returns `true` if `p` lies inside the bounding box of segment `a-b`.
///
/// Only meaningful when `p` is already known to be collinear with `a-b`.
fn within_segment_bounds(a: &Point2, b: &Point2, p: &Point2) -> bool {
    p.x >= a.x.min(b.x) - TOLERANCE
        && p.x <= a.x.max(b.x) + TOLERANCE
        && p.y >= a.y.min(b.y) - TOLERANCE
        && p.y <= a.y.max(b.y) + TOLERANCE
}

/// Returns `true` if the closed segments `a0-a1` and `b0-b1` share at least
/// one point, including endpoint touches and collinear overlaps.
#[must_use]
pub fn segments_touch_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let d1 = orientation_sign(orient_2d(b0, b1, a0));
    let d2 = orientation_sign(orient_2d(b0, b1, a1));
    let d3 = orientation_sign(orient_2d(a0, a1, b0));
    let d4 = orientation_sign(orient_2d(a0, a1, b1));

    if d1 * d2 < 0 && d3 * d4 < 0 {
        return true;
    }

    (d1 == 0 && within_segment_bounds(b0, b1, a0))
        || (d2 == 0 && within_segment_bounds(b0, b1, a1))
        || (d3 == 0 && within_segment_bounds(a0, a1, b0))
        || (d4 == 0 && within_segment_bounds(a0, a1, b1))
}

/// Returns `true` if the path `prev -> vertex -> next` doubles back on itself,
/// i.e. the two edges are collinear and point in opposite directions.
#[must_use]
pub fn is_fold_back(prev: &Point2, vertex: &Point2, next: &Point2) -> bool {
    if orientation_sign(orient_2d(prev, vertex, next)) != 0 {
        return false;
    }
    let incoming: Vector2 = vertex - prev;
    let outgoing: Vector2 = next - vertex;
    incoming.dot(&outgoing) < 0.0
}
