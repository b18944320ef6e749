//! Pointer-following background glow.

use std::fmt;

use crate::constants::{
    BACKGROUND_TWEEN_SEC, GRADIENT_ACCENT, GRADIENT_FADE_STOP_PCT, GRADIENT_RADIUS_PX,
};
use crate::pointer::PointerPosition;

/// Radial gradient centred on a pointer position.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BackgroundStyle {
    pub center: PointerPosition,
}

impl BackgroundStyle {
    pub fn for_pointer(center: PointerPosition) -> Self {
        Self { center }
    }

    pub fn to_css(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for BackgroundStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "radial-gradient({}px at {}px {}px, {}, transparent {}%)",
            GRADIENT_RADIUS_PX,
            self.center.x,
            self.center.y,
            GRADIENT_ACCENT,
            GRADIENT_FADE_STOP_PCT
        )
    }
}

/// Linear tween of the gradient centre.
///
/// Retargeting starts from whatever is on screen at that moment, so a new
/// pointer update always supersedes the transition in flight. Times are
/// seconds on any monotonic clock the caller chooses.
#[derive(Clone, Debug)]
pub struct BackgroundTween {
    from: PointerPosition,
    to: PointerPosition,
    started_at: f64,
    duration: f64,
}

impl BackgroundTween {
    pub fn new(initial: PointerPosition) -> Self {
        Self::with_duration(initial, BACKGROUND_TWEEN_SEC)
    }

    pub fn with_duration(initial: PointerPosition, duration: f64) -> Self {
        Self {
            from: initial,
            to: initial,
            started_at: 0.0,
            duration: duration.max(0.0),
        }
    }

    pub fn target(&self) -> PointerPosition {
        self.to
    }

    pub fn retarget(&mut self, target: PointerPosition, now: f64) {
        self.from = self.position_at(now);
        self.to = target;
        self.started_at = now;
    }

    pub fn progress(&self, now: f64) -> f64 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        ((now - self.started_at) / self.duration).clamp(0.0, 1.0)
    }

    pub fn position_at(&self, now: f64) -> PointerPosition {
        let t = self.progress(now);
        if t >= 1.0 {
            self.to
        } else {
            self.from.lerp(self.to, t)
        }
    }

    pub fn sample(&self, now: f64) -> BackgroundStyle {
        BackgroundStyle::for_pointer(self.position_at(now))
    }

    pub fn is_settled(&self, now: f64) -> bool {
        self.progress(now) >= 1.0
    }
}
