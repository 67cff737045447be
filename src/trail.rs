//! Bounded position history for rendered trails.

use glam::Vec3;

/// Ring buffer over a pre-allocated array, holding the most recent
/// `capacity` positions in chronological order.
///
/// `push` is O(1): until the buffer fills it appends, afterwards it
/// overwrites the oldest slot. The backing storage never grows past
/// `capacity`, so per-frame trail maintenance does not allocate.
#[derive(Debug, Clone)]
pub struct Trail {
    points: Vec<Vec3>,
    /// Index of the oldest retained position once the buffer has wrapped.
    head: usize,
    capacity: usize,
}

impl Trail {
    /// Create an empty trail that retains at most `capacity` positions.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "trail capacity must be non-zero");
        Self {
            points: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    /// Append a position, evicting the oldest if the trail is full.
    pub fn push(&mut self, position: Vec3) {
        if self.points.len() < self.capacity {
            self.points.push(position);
        } else {
            self.points[self.head] = position;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Number of retained positions.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True until the first push.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Maximum number of retained positions.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Retained positions, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = Vec3> + '_ {
        let (older, newer) = self.points.split_at(self.head);
        newer.iter().chain(older.iter()).copied()
    }

    /// Most recently pushed position, if any.
    pub fn latest(&self) -> Option<Vec3> {
        if self.points.is_empty() {
            None
        } else if self.head == 0 {
            self.points.last().copied()
        } else {
            Some(self.points[self.head - 1])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn p(i: usize) -> Vec3 {
        Vec3::new(i as f32, 0.0, 0.0)
    }

    #[test]
    fn length_is_min_of_pushes_and_capacity() {
        let mut trail = Trail::new(5);
        for i in 0..3 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 3);
        for i in 3..20 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 5);
    }

    #[test]
    fn keeps_last_capacity_pushes_in_order() {
        let mut trail = Trail::new(4);
        for i in 0..10 {
            trail.push(p(i));
        }
        let got: Vec<Vec3> = trail.iter().collect();
        assert_eq!(got, vec![p(6), p(7), p(8), p(9)]);
    }

    #[test]
    fn order_before_wrap() {
        let mut trail = Trail::new(8);
        for i in 0..5 {
            trail.push(p(i));
        }
        let got: Vec<Vec3> = trail.iter().collect();
        assert_eq!(got, vec![p(0), p(1), p(2), p(3), p(4)]);
    }

    #[test]
    fn latest_tracks_newest_push() {
        let mut trail = Trail::new(3);
        assert_eq!(trail.latest(), None);
        trail.push(p(0));
        assert_eq!(trail.latest(), Some(p(0)));
        for i in 1..7 {
            trail.push(p(i));
        }
        assert_eq!(trail.latest(), Some(p(6)));
    }

    #[test]
    fn storage_never_exceeds_capacity() {
        let mut trail = Trail::new(16);
        for i in 0..1000 {
            trail.push(p(i));
        }
        assert_eq!(trail.len(), 16);
        assert_eq!(trail.capacity(), 16);
    }
}
