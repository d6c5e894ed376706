//! Pure 2D geometry helpers for the capture line.

use bevy::math::Vec2;

/// Determinants smaller than this are treated as parallel segments.
pub const PARALLEL_EPSILON: f32 = 1e-6;

/// Intersection test between segment `p1-p2` and segment `p3-p4`.
///
/// Solves `p1 + u * (p2 - p1) = p3 + v * (p4 - p3)` and returns the crossing
/// point when both `u` and `v` lie in `[0, 1]`. Parallel and collinear
/// segments never intersect.
pub fn segments_intersect(p1: Vec2, p2: Vec2, p3: Vec2, p4: Vec2) -> Option<Vec2> {
    let d1 = p2 - p1;
    let d2 = p4 - p3;

    let denominator = d1.perp_dot(d2);
    if denominator.abs() < PARALLEL_EPSILON {
        return None;
    }

    let offset = p3 - p1;
    let u = offset.perp_dot(d2) / denominator;
    let v = offset.perp_dot(d1) / denominator;

    if (0.0..=1.0).contains(&u) && (0.0..=1.0).contains(&v) {
        Some(p1 + d1 * u)
    } else {
        None
    }
}

/// Even-odd ray casting test. Points exactly on an edge may go either way.
pub fn point_in_polygon(point: Vec2, polygon: &[Vec2]) -> bool {
    if polygon.len() < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = polygon.len() - 1;
    for i in 0..polygon.len() {
        let a = polygon[i];
        let b = polygon[j];
        if (a.y > point.y) != (b.y > point.y) {
            let x_cross = a.x + (point.y - a.y) / (b.y - a.y) * (b.x - a.x);
            if point.x < x_cross {
                inside = !inside;
            }
        }
        j = i;
    }
    inside
}

/// Shortest distance from `point` to the segment `a-b`.
pub fn distance_to_segment(point: Vec2, a: Vec2, b: Vec2) -> f32 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq < PARALLEL_EPSILON {
        return point.distance(a);
    }
    let t = ((point - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    point.distance(a + ab * t)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square() -> Vec<Vec2> {
        vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 4.0),
            Vec2::new(0.0, 4.0),
        ]
    }

    #[test]
    fn crossing_segments_intersect_at_center() {
        let hit = segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(0.0, 2.0),
            Vec2::new(2.0, 0.0),
        )
        .unwrap();
        assert!((hit - Vec2::new(1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn parallel_segments_never_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(0.0, 1.0),
            Vec2::new(2.0, 1.0),
        )
        .is_none());

        // Collinear overlap is deliberately reported as no intersection
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(3.0, 0.0),
        )
        .is_none());
    }

    #[test]
    fn segments_that_would_cross_when_extended_do_not_intersect() {
        assert!(segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 0.0),
            Vec2::new(2.0, -1.0),
            Vec2::new(2.0, 1.0),
        )
        .is_none());
    }

    #[test]
    fn touching_endpoint_counts_as_intersection() {
        let hit = segments_intersect(
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
        );
        assert!(hit.is_some());
    }

    #[test]
    fn point_in_square() {
        let polygon = square();
        assert!(point_in_polygon(Vec2::new(2.0, 2.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(5.0, 5.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(-1.0, 2.0), &polygon));
    }

    #[test]
    fn degenerate_polygon_contains_nothing() {
        let line = [Vec2::ZERO, Vec2::new(1.0, 1.0)];
        assert!(!point_in_polygon(Vec2::new(0.5, 0.5), &line));
    }

    #[test]
    fn concave_polygon() {
        // U shape opening upward
        let polygon = vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(3.0, 0.0),
            Vec2::new(3.0, 3.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(2.0, 1.0),
            Vec2::new(1.0, 1.0),
            Vec2::new(1.0, 3.0),
            Vec2::new(0.0, 3.0),
        ];
        assert!(point_in_polygon(Vec2::new(0.5, 2.0), &polygon));
        assert!(!point_in_polygon(Vec2::new(1.5, 2.0), &polygon));
    }

    #[test]
    fn distance_to_segment_clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 0.0);
        assert!((distance_to_segment(Vec2::new(1.0, 1.0), a, b) - 1.0).abs() < 1e-6);
        assert!((distance_to_segment(Vec2::new(3.0, 0.0), a, b) - 1.0).abs() < 1e-6);
        assert!((distance_to_segment(Vec2::new(1.0, 0.0), a, a) - 1.0).abs() < 1e-6);
    }
}
