//! Frame timing.
//!
//! Advisory only: the simulation advances a fixed number of sub-steps per
//! frame, so nothing here feeds back into the integration step. The clock
//! exists for the FPS readout and for anyone instrumenting the loop.

use std::time::{Duration, Instant};

/// Wall-clock tracking for the render loop.
#[derive(Debug)]
pub struct Time {
    start: Instant,
    last_frame: Instant,
    delta_secs: f32,
    frame_count: u64,
    fps: f32,
    fps_frame_count: u64,
    fps_update_time: Instant,
    fps_update_interval: Duration,
}

impl Time {
    /// Create a new time tracker starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            delta_secs: 0.0,
            frame_count: 0,
            fps: 0.0,
            fps_frame_count: 0,
            fps_update_time: now,
            fps_update_interval: Duration::from_millis(500),
        }
    }

    /// Update timing values. Call once per frame.
    pub fn update(&mut self) {
        let now = Instant::now();
        self.delta_secs = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        self.frame_count += 1;

        let fps_elapsed = now.duration_since(self.fps_update_time);
        if fps_elapsed >= self.fps_update_interval {
            let frames_since = self.frame_count - self.fps_frame_count;
            self.fps = frames_since as f32 / fps_elapsed.as_secs_f32();
            self.fps_frame_count = self.frame_count;
            self.fps_update_time = now;
        }
    }

    /// Total elapsed time in seconds since start.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Time since last frame in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Total frames since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Frames per second, recalculated every half second.
    #[inline]
    pub fn fps(&self) -> f32 {
        self.fps
    }
}

impl Default for Time {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn starts_at_frame_zero() {
        let time = Time::new();
        assert_eq!(time.frame(), 0);
        assert_eq!(time.delta(), 0.0);
        assert_eq!(time.fps(), 0.0);
    }

    #[test]
    fn update_advances_frame_and_delta() {
        let mut time = Time::new();
        thread::sleep(Duration::from_millis(10));
        time.update();

        assert_eq!(time.frame(), 1);
        assert!(time.delta() > 0.0);
        assert!(time.elapsed() >= time.delta());
    }
}
