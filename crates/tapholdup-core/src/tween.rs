//! Time-based interpolation between two values.

use crate::color::ArgbColor;
use crate::time::{Duration, Instant};

/// Trait for types that can be linearly interpolated.
pub trait Lerp {
    fn lerp(&self, target: &Self, fraction: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        self + (target - self) * fraction
    }
}

impl Lerp for ArgbColor {
    /// Blends each channel independently.
    fn lerp(&self, target: &Self, fraction: f64) -> Self {
        fn channel(from: u8, to: u8, fraction: f64) -> u8 {
            let value = from as f64 + (to as f64 - from as f64) * fraction;
            value.round().clamp(0.0, 255.0) as u8
        }
        ArgbColor::new(
            channel(self.a, target.a, fraction),
            channel(self.r, target.r, fraction),
            channel(self.g, target.g, fraction),
            channel(self.b, target.b, fraction),
        )
    }
}

/// Easing curves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Starts fast and slows down towards the end.
    #[default]
    Decelerate,
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(self, fraction: f64) -> f64 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Decelerate => 1.0 - (1.0 - t) * (1.0 - t),
        }
    }
}

/// Interpolation from `start` to `end` over a fixed duration.
#[derive(Debug, Clone)]
pub struct Tween<T> {
    start: T,
    end: T,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl<T: Lerp + Clone> Tween<T> {
    pub fn new(start: T, end: T, started_at: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            start,
            end,
            started_at,
            duration,
            easing,
        }
    }

    /// Instant at which the tween reaches its end value.
    pub fn finishes_at(&self) -> Instant {
        self.started_at + self.duration
    }

    /// Linear progress in [0, 1] at `now`.
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    /// Value at `now` and whether the tween has reached its end.
    pub fn sample(&self, now: Instant) -> (T, bool) {
        let progress = self.progress(now);
        if progress >= 1.0 {
            return (self.end.clone(), true);
        }
        let eased = self.easing.transform(progress);
        (self.start.lerp(&self.end, eased), false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decelerate_curve() {
        assert_eq!(Easing::Decelerate.transform(0.0), 0.0);
        assert_eq!(Easing::Decelerate.transform(1.0), 1.0);
        assert!((Easing::Decelerate.transform(0.5) - 0.75).abs() < 1e-9);
        // Ahead of linear everywhere inside the interval
        for i in 1..10 {
            let t = i as f64 / 10.0;
            assert!(Easing::Decelerate.transform(t) > t);
        }
    }

    #[test]
    fn test_tween_samples() {
        let t0 = Instant::now();
        let tween = Tween::new(1.0, 0.8, t0, Duration::from_millis(100), Easing::Linear);

        let (value, done) = tween.sample(t0);
        assert!((value - 1.0).abs() < 1e-9);
        assert!(!done);

        let (value, done) = tween.sample(t0 + Duration::from_millis(50));
        assert!((value - 0.9).abs() < 1e-9);
        assert!(!done);

        let (value, done) = tween.sample(t0 + Duration::from_millis(250));
        assert_eq!(value, 0.8);
        assert!(done);
        assert_eq!(tween.finishes_at(), t0 + Duration::from_millis(100));
    }

    #[test]
    fn test_zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let tween = Tween::new(0.0, 1.0, t0, Duration::ZERO, Easing::Decelerate);
        assert_eq!(tween.sample(t0), (1.0, true));
    }

    #[test]
    fn test_color_lerp_per_channel() {
        let from = ArgbColor::new(255, 255, 0, 0);
        let to = ArgbColor::new(55, 0, 0, 255);
        assert_eq!(from.lerp(&to, 0.0), from);
        assert_eq!(from.lerp(&to, 1.0), to);
        assert_eq!(from.lerp(&to, 0.5), ArgbColor::new(155, 128, 0, 128));
    }
}
