//! Self-intersection detection for the drawn line.

use bevy::math::Vec2;

use super::geometry::segments_intersect;

/// A self-crossing of the stroke.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Loop {
    /// Index of the earlier segment `(P[i], P[i + 1])` that the newest segment crossed.
    pub segment_index: usize,
    pub intersection: Vec2,
}

/// Closed ring used for one containment pass.
#[derive(Debug, Clone, PartialEq)]
pub struct CapturePolygon {
    pub vertices: Vec<Vec2>,
}

impl CapturePolygon {
    /// Ring from the crossed segment's start through the end of the line,
    /// with the final point replaced by the intersection.
    pub fn from_loop(points: &[Vec2], hit: &Loop) -> Option<Self> {
        if hit.segment_index + 2 >= points.len() {
            return None;
        }
        let mut vertices = points[hit.segment_index..].to_vec();
        if let Some(last) = vertices.last_mut() {
            *last = hit.intersection;
        }
        Some(Self { vertices })
    }

    pub fn contains(&self, point: Vec2) -> bool {
        super::geometry::point_in_polygon(point, &self.vertices)
    }
}

/// Check the newest segment against every earlier, non-adjacent segment.
///
/// Candidates are scanned oldest first and the first crossing wins, so an
/// enclosing loop takes priority over a smaller one nested inside it.
pub fn detect_loop(points: &[Vec2]) -> Option<Loop> {
    let n = points.len();
    if n < 4 {
        return None;
    }

    let newest_start = points[n - 2];
    let newest_end = points[n - 1];

    (0..=n - 4).find_map(|i| {
        segments_intersect(points[i], points[i + 1], newest_start, newest_end).map(
            |intersection| Loop {
                segment_index: i,
                intersection,
            },
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn straight_line_has_no_loop() {
        let points: Vec<Vec2> = (0..20).map(|i| Vec2::new(i as f32 * 0.2, 0.0)).collect();
        for end in 4..=points.len() {
            assert!(detect_loop(&points[..end]).is_none());
        }
    }

    #[test]
    fn needs_four_points() {
        let points = [Vec2::ZERO, Vec2::new(1.0, 0.0), Vec2::new(0.5, 1.0)];
        assert!(detect_loop(&points).is_none());
    }

    #[test]
    fn detects_simple_crossing() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(1.0, -1.0),
        ];
        let hit = detect_loop(&points).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert!((hit.intersection - Vec2::new(1.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn adjacent_segment_is_ignored() {
        // The newest segment doubles back over the previous one
        let points = [
            Vec2::new(0.0, 5.0),
            Vec2::new(0.0, 4.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(2.5, 0.0),
        ];
        assert!(detect_loop(&points).is_none());
    }

    #[test]
    fn earliest_segment_wins_tie_break() {
        // Two parallel horizontal segments (index 0 and index 2) both cross
        // the final vertical segment; the lower index must be chosen.
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(4.0, 0.0),
            Vec2::new(4.0, 1.0),
            Vec2::new(0.5, 1.0),
            Vec2::new(0.5, 3.0),
            Vec2::new(2.0, 3.0),
            Vec2::new(2.0, -1.0),
        ];
        let hit = detect_loop(&points).unwrap();
        assert_eq!(hit.segment_index, 0);
        assert!((hit.intersection - Vec2::new(2.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn polygon_replaces_last_point_with_intersection() {
        let points = [
            Vec2::new(0.0, 0.0),
            Vec2::new(2.0, 0.0),
            Vec2::new(2.0, 2.0),
            Vec2::new(1.0, 2.0),
            Vec2::new(1.0, -1.0),
        ];
        let hit = detect_loop(&points).unwrap();
        let polygon = CapturePolygon::from_loop(&points, &hit).unwrap();
        assert_eq!(polygon.vertices.len(), 5);
        assert_eq!(polygon.vertices[0], Vec2::new(0.0, 0.0));
        assert_eq!(*polygon.vertices.last().unwrap(), hit.intersection);
        assert!(polygon.contains(Vec2::new(1.5, 1.0)));
        assert!(!polygon.contains(Vec2::new(0.5, 1.0)));
    }
}
