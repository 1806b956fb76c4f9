use std::time::Instant;

use crate::AnimationError;

/// Multiplier applied to wall-clock seconds before animating.
pub const DEFAULT_TIME_SCALE: f64 = 3.0;

/// Abstraction over where elapsed time originates from.
pub trait TimeSource {
    /// Restarts the source so the next sample counts from zero.
    fn reset(&mut self);
    /// Seconds elapsed since the source was created or last reset. Never
    /// decreases between calls.
    fn elapsed_seconds(&mut self) -> f64;
}

/// Time source backed by the system monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct SystemTimeSource {
    origin: Instant,
}

impl SystemTimeSource {
    /// Creates a system time source initialised to `Instant::now()`.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Default for SystemTimeSource {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl TimeSource for SystemTimeSource {
    fn reset(&mut self) {
        self.origin = Instant::now();
    }

    fn elapsed_seconds(&mut self) -> f64 {
        self.origin.elapsed().as_secs_f64()
    }
}

/// Maps elapsed wall-clock seconds onto the animation time `t`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    scale: f64,
    offset: f64,
}

impl TimeScale {
    /// `offset` is added to the elapsed seconds before `scale` is applied, so
    /// it shifts the starting point of the animation in unscaled seconds.
    pub fn new(scale: f64, offset: f64) -> Result<Self, AnimationError> {
        if !scale.is_finite() || scale <= 0.0 {
            return Err(AnimationError::InvalidTimeScale(scale));
        }
        if !offset.is_finite() {
            return Err(AnimationError::InvalidTimeOffset(offset));
        }
        Ok(Self { scale, offset })
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn apply(&self, elapsed_seconds: f64) -> f64 {
        (elapsed_seconds + self.offset) * self.scale
    }
}

impl Default for TimeScale {
    fn default() -> Self {
        Self {
            scale: DEFAULT_TIME_SCALE,
            offset: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_source_is_monotonic() {
        let mut source = SystemTimeSource::new();
        let mut last = source.elapsed_seconds();
        for _ in 0..1_000 {
            let next = source.elapsed_seconds();
            assert!(next >= last);
            last = next;
        }
    }

    #[test]
    fn reset_restarts_from_zero() {
        let mut source = SystemTimeSource::new();
        std::thread::sleep(std::time::Duration::from_millis(20));
        let before = source.elapsed_seconds();
        source.reset();
        assert!(source.elapsed_seconds() < before);
    }

    #[test]
    fn default_scale_triples_elapsed_time() {
        let scale = TimeScale::default();
        assert_eq!(scale.apply(0.0), 0.0);
        assert_eq!(scale.apply(2.0), 6.0);
    }

    #[test]
    fn offset_applies_before_scaling() {
        let scale = TimeScale::new(2.0, 10.0).unwrap();
        assert_eq!(scale.apply(1.5), 23.0);
    }

    #[test]
    fn rejects_invalid_scales() {
        assert_eq!(
            TimeScale::new(0.0, 0.0),
            Err(AnimationError::InvalidTimeScale(0.0))
        );
        assert!(TimeScale::new(-1.0, 0.0).is_err());
        assert!(TimeScale::new(f64::NAN, 0.0).is_err());
        assert_eq!(
            TimeScale::new(1.0, f64::INFINITY),
            Err(AnimationError::InvalidTimeOffset(f64::INFINITY))
        );
    }
}
