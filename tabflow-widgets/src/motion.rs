//! Time-based animation primitives for widget transitions.
//!
//! Animations here are pure functions of a start instant and a [Transition]:
//! widgets store an [Animated] value and sample it each frame, so rendering
//! never mutates animation state and a dropped frame only delays what is
//! shown, never what is true. Retargeting mid-flight restarts the timer from
//! the current sampled value, which keeps motion continuous when the target
//! changes before the previous animation settles.

use std::time::{Duration, Instant};
use vello::kurbo::Rect;

/// An easing curve mapping linear progress to eased progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Cubic acceleration from rest.
    EaseIn,
    /// Cubic deceleration into rest.
    EaseOut,
    /// Cubic acceleration and deceleration.
    EaseInOut,
}

impl Easing {
    /// Apply the curve to a progress value, clamping input to `0.0..=1.0`.
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t * t,
            Easing::EaseOut => 1.0 - (1.0 - t).powi(3),
            Easing::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
                }
            }
        }
    }
}

/// The timing of an animation: how long it runs and along which curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    /// The total duration of the animation.
    pub duration: Duration,
    /// The easing curve.
    pub easing: Easing,
}

impl Transition {
    /// Create a transition with the given duration and easing.
    pub const fn new(duration: Duration, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// A zero-duration transition: every sample lands on the target.
    ///
    /// Useful for disabling motion, and for deterministic tests that should
    /// not depend on wall-clock time.
    pub const fn instant() -> Self {
        Self {
            duration: Duration::ZERO,
            easing: Easing::Linear,
        }
    }
}

/// Values that can be linearly interpolated.
pub trait Lerp: Clone + PartialEq {
    /// Interpolate between `start` and `end` at progress `t` in `0.0..=1.0`.
    fn lerp(start: &Self, end: &Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        start + (end - start) * t
    }
}

impl Lerp for f64 {
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        start + (end - start) * t as f64
    }
}

impl Lerp for Rect {
    fn lerp(start: &Self, end: &Self, t: f32) -> Self {
        Rect::new(
            f64::lerp(&start.x0, &end.x0, t),
            f64::lerp(&start.y0, &end.y0, t),
            f64::lerp(&start.x1, &end.x1, t),
            f64::lerp(&start.y1, &end.y1, t),
        )
    }
}

/// A value animating from one state to another under a [Transition].
#[derive(Debug, Clone)]
pub struct Animated<T: Lerp> {
    from: T,
    to: T,
    started: Instant,
    transition: Transition,
}

impl<T: Lerp> Animated<T> {
    /// Create a settled animation resting at `value`.
    pub fn new(value: T, transition: Transition) -> Self {
        Self {
            from: value.clone(),
            to: value,
            started: Instant::now(),
            transition,
        }
    }

    /// The value the animation is heading towards.
    pub fn target(&self) -> &T {
        &self.to
    }

    /// Linear progress at `now`, in `0.0..=1.0`.
    fn progress(&self, now: Instant) -> f32 {
        if self.transition.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.started).as_secs_f32();
        (elapsed / self.transition.duration.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Sample the eased value at `now`.
    pub fn sample(&self, now: Instant) -> T {
        if self.from == self.to {
            return self.to.clone();
        }
        let t = self.transition.easing.apply(self.progress(now));
        T::lerp(&self.from, &self.to, t)
    }

    /// Whether the animation has reached its target at `now`.
    pub fn is_settled(&self, now: Instant) -> bool {
        self.from == self.to || self.progress(now) >= 1.0
    }

    /// Start animating towards `target` from the value currently shown.
    ///
    /// A no-op when `target` is already the destination, so calling this
    /// every frame with an unchanged target does not restart the animation.
    pub fn retarget(&mut self, target: T, now: Instant) {
        if target == self.to {
            return;
        }
        self.from = self.sample(now);
        self.to = target;
        self.started = now;
    }

    /// Snap to `value` without animating.
    pub fn jump(&mut self, value: T) {
        self.from = value.clone();
        self.to = value;
    }

    /// Replace the transition used by subsequent samples and retargets.
    pub fn set_transition(&mut self, transition: Transition) {
        self.transition = transition;
    }
}
