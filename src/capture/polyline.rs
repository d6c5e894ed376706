//! Length-bounded buffer of sampled stroke points.

use bevy::math::Vec2;

/// The drawn line, oldest point first.
///
/// Keeps a running arc length that is updated on every mutation instead of
/// being recomputed from scratch.
#[derive(Debug, Clone)]
pub struct Polyline {
    points: Vec<Vec2>,
    length: f32,
    interval: f32,
    max_length: f32,
}

impl Polyline {
    pub fn new(interval: f32, max_length: f32) -> Self {
        Self {
            points: Vec::new(),
            length: 0.0,
            interval,
            max_length,
        }
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Total arc length across consecutive points.
    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    /// Newest segment, if the line has at least two points.
    pub fn last_segment(&self) -> Option<(Vec2, Vec2)> {
        match self.points.as_slice() {
            [.., a, b] => Some((*a, *b)),
            _ => None,
        }
    }

    /// Add a sample to the end of the line.
    ///
    /// Returns `false` without changing anything if the sample is closer
    /// than the sampling interval to the current last point.
    pub fn append(&mut self, point: Vec2) -> bool {
        if let Some(last) = self.last() {
            let step = last.distance(point);
            if step < self.interval {
                return false;
            }
            self.length += step;
        }
        self.points.push(point);
        true
    }

    /// Drop points from the front until the line fits the length budget.
    ///
    /// Always leaves at least two points. Returns how many were removed.
    pub fn trim_to_max_length(&mut self) -> usize {
        let mut removed = 0;
        while self.length > self.max_length && self.points.len() - removed > 2 {
            self.length -= self.points[removed].distance(self.points[removed + 1]);
            removed += 1;
        }
        if removed > 0 {
            self.points.drain(..removed);
            self.length = self.length.max(0.0);
        }
        removed
    }

    /// Cut the line after the segment starting at `segment_index` and end it
    /// at `intersection`, so drawing can continue from the crossing point.
    ///
    /// A no-op if `segment_index` does not name a segment.
    pub fn splice_at_loop(&mut self, segment_index: usize, intersection: Vec2) {
        if segment_index + 1 >= self.points.len() {
            return;
        }

        for pair in self.points[segment_index..].windows(2) {
            self.length -= pair[0].distance(pair[1]);
        }
        self.points.truncate(segment_index + 1);
        self.length = self.length.max(0.0);

        // A crossing right next to the anchor replaces it to keep the sampling floor
        let anchor = self.points[segment_index];
        if anchor.distance(intersection) < self.interval {
            self.points.pop();
            match self.last() {
                Some(previous) => {
                    self.length -= previous.distance(anchor);
                    let step = previous.distance(intersection);
                    // Too close to the point before as well: the line ends there
                    if step >= self.interval {
                        self.length += step;
                        self.points.push(intersection);
                    }
                }
                None => self.points.push(intersection),
            }
            self.length = self.length.max(0.0);
        } else {
            self.length += anchor.distance(intersection);
            self.points.push(intersection);
        }
    }

    pub fn clear(&mut self) {
        self.points.clear();
        self.length = 0.0;
    }
}
