//! Tweening for the press-scale effect.
//!
//! The curves are the standard cubic-bezier timing functions, so a 200ms
//! ease-out here matches the ease-out every platform toolkit ships.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation.
    Linear,
    /// Cubic bezier (0.42, 0, 1, 1).
    EaseIn,
    /// Cubic bezier (0, 0, 0.58, 1). Fast start, gentle landing.
    #[default]
    EaseOut,
    /// Cubic bezier (0.42, 0, 0.58, 1).
    EaseInOut,
    /// Jump straight to the target.
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::EaseIn => cubic_bezier(0.42, 0.0, 1.0, 1.0, t),
            Self::EaseOut => cubic_bezier(0.0, 0.0, 0.58, 1.0, t),
            Self::EaseInOut => cubic_bezier(0.42, 0.0, 0.58, 1.0, t),
            Self::Instant => 1.0,
        }
    }
}

/// Evaluates a unit cubic bezier timing curve at progress `x`.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, x: f32) -> f32 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }

    // Bernstein form with P0 = (0,0) and P3 = (1,1).
    let curve = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |p1: f32, p2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    // Newton first, bisection if the slope flattens out.
    let mut s = x;
    for _ in 0..8 {
        let error = curve(x1, x2, s) - x;
        if error.abs() < 1e-6 {
            return curve(y1, y2, s);
        }
        let d = slope(x1, x2, s);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - error / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
    s = x;
    for _ in 0..32 {
        let value = curve(x1, x2, s);
        if (value - x).abs() < 1e-6 {
            break;
        }
        if value < x {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) * 0.5;
    }
    curve(y1, y2, s)
}

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Animation {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Animation {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.2;

    /// Creates a new animation resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates an animation with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns true if the animation is at rest.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, starting animation from current value.
    ///
    /// Retargeting mid-flight restarts the curve from wherever the value is now.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.progress = 1.0;
    }

    /// Updates the animation.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Animation {
    fn default() -> Self {
        Self::new(0.0, Easing::EaseOut)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_curves_hit_endpoints() {
        for easing in [Easing::Linear, Easing::EaseIn, Easing::EaseOut, Easing::EaseInOut] {
            assert_eq!(easing.apply(0.0), 0.0, "{easing:?}");
            assert_eq!(easing.apply(1.0), 1.0, "{easing:?}");
        }
    }

    #[test]
    fn test_ease_out_leads_linear() {
        let easing = Easing::EaseOut;
        for t in [0.1, 0.25, 0.5, 0.75, 0.9] {
            assert!(easing.apply(t) > t, "ease-out should be ahead at {t}");
        }
    }

    #[test]
    fn test_ease_in_out_symmetric() {
        let easing = Easing::EaseInOut;
        assert!((easing.apply(0.5) - 0.5).abs() < 1e-3);
        assert!((easing.apply(0.2) + easing.apply(0.8) - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_ease_out_monotonic() {
        let mut last = 0.0;
        for step in 1..=100 {
            let value = Easing::EaseOut.apply(step as f32 / 100.0);
            assert!(value >= last);
            last = value;
        }
    }

    #[test]
    fn test_animation_reaches_target() {
        let mut anim = Animation::new(1.0, Easing::EaseOut);
        anim.set_target(0.95);

        for _ in 0..20 {
            anim.update(0.016);
        }

        assert_eq!(anim.value(), 0.95);
        assert!(anim.is_complete());
    }

    #[test]
    fn test_retarget_starts_from_current() {
        let mut anim = Animation::new(1.0, Easing::Linear);
        anim.set_target(0.0);
        anim.update(0.1);
        let midway = anim.value();
        assert!((midway - 0.5).abs() < 1e-4);

        anim.set_target(1.0);
        anim.update(0.0);
        assert!((anim.value() - midway).abs() < 1e-4);
        assert!(!anim.is_complete());
    }
}
