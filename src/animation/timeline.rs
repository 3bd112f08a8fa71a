//! Looping timeline driver.
//!
//! Advances a normalized playhead from 0 to 1 over a fixed duration, then
//! wraps back to 0 and repeats indefinitely. Everything downstream reads the
//! playhead once per frame; nothing else owns timing state.

use super::easing::{ease, Easing};

pub const DEFAULT_CYCLE_SECONDS: f32 = 30.0;

/// Repeating playhead in [0, 1)
#[derive(Debug, Clone)]
pub struct Timeline {
    /// Cycle duration in seconds
    duration: f32,
    /// Elapsed time within the current cycle
    elapsed: f32,
    easing: Easing,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            duration: DEFAULT_CYCLE_SECONDS,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }
}

impl Timeline {
    pub fn new(duration: f32, easing: Easing) -> Self {
        Self {
            duration: duration.max(f32::EPSILON),
            elapsed: 0.0,
            easing,
        }
    }

    /// Advance by a frame delta. Wraps at the cycle boundary, carrying any
    /// overshoot into the next cycle so long frames do not stall the loop.
    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt.max(0.0)) % self.duration;
    }

    /// Current eased progress in [0, 1)
    pub fn playhead(&self) -> f32 {
        ease(self.elapsed / self.duration, self.easing)
    }

    /// Jump straight to a playhead value. Test and debug seam; the render
    /// loop itself only ever calls `update`.
    pub fn set_playhead(&mut self, playhead: f32) {
        self.elapsed = playhead.clamp(0.0, 1.0) * self.duration;
        if self.elapsed >= self.duration {
            self.elapsed = 0.0;
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_progress() {
        let mut timeline = Timeline::new(30.0, Easing::Linear);
        assert_eq!(timeline.playhead(), 0.0);

        timeline.update(15.0);
        assert!((timeline.playhead() - 0.5).abs() < 1e-5);

        timeline.update(7.5);
        assert!((timeline.playhead() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn test_wraps_after_full_cycle() {
        let mut timeline = Timeline::new(30.0, Easing::Linear);
        timeline.update(30.0);
        assert!(timeline.playhead() < 1e-5);

        // Overshoot carries into the next cycle
        timeline.update(31.0);
        assert!((timeline.playhead() - 1.0 / 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_monotone_within_cycle() {
        let mut timeline = Timeline::new(30.0, Easing::Linear);
        let mut prev = timeline.playhead();
        for _ in 0..290 {
            timeline.update(0.1);
            let p = timeline.playhead();
            assert!(p > prev);
            prev = p;
        }
        // Crossing the cycle boundary wraps back toward 0
        timeline.update(2.0);
        assert!(timeline.playhead() < prev);
    }

    #[test]
    fn test_set_playhead_seam() {
        let mut timeline = Timeline::default();
        timeline.set_playhead(0.5);
        assert!((timeline.playhead() - 0.5).abs() < 1e-5);

        timeline.set_playhead(1.0);
        assert_eq!(timeline.playhead(), 0.0); // 1.0 is the wrap point

        timeline.set_playhead(-3.0);
        assert_eq!(timeline.playhead(), 0.0);
    }

    #[test]
    fn test_negative_dt_ignored() {
        let mut timeline = Timeline::default();
        timeline.update(5.0);
        let before = timeline.playhead();
        timeline.update(-2.0);
        assert_eq!(timeline.playhead(), before);
    }

    #[test]
    fn test_zero_duration_guard() {
        let mut timeline = Timeline::new(0.0, Easing::Linear);
        timeline.update(1.0);
        let p = timeline.playhead();
        assert!(p.is_finite());
    }
}
