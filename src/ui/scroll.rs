// SPDX-License-Identifier: MPL-2.0
//! Smooth scrolling to named sections of the draft pane.
//!
//! The web build resolved a CSS selector and asked the browser for smooth
//! scrolling; here a [`SectionRegistry`] resolves section names to vertical
//! offsets and an [`Animator`] eases the viewport toward the target across
//! ticks, each step feeding `scrollable::scroll_to`. Unknown section names
//! resolve to nothing and scrolling is skipped.

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Length of the scroll animation.
pub const SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Maps section names to absolute vertical offsets in the draft pane.
#[derive(Debug, Clone, Default)]
pub struct SectionRegistry {
    sections: BTreeMap<String, f32>,
}

impl SectionRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or moves) a named section at `offset_y`.
    pub fn register(&mut self, name: impl Into<String>, offset_y: f32) {
        self.sections.insert(name.into(), offset_y);
    }

    /// Resolves a section name to its offset, if registered.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Option<f32> {
        self.sections.get(name).copied()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }
}

/// Tick-driven ease-out animation between two scroll offsets.
#[derive(Debug, Clone, Default)]
pub struct Animator {
    animation: Option<Animation>,
}

#[derive(Debug, Clone)]
struct Animation {
    from: f32,
    to: f32,
    started_at: Instant,
}

impl Animator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts animating from `from` toward `target - offset`, clamped at 0.
    ///
    /// A start while another animation runs abandons the old one; the
    /// viewport continues from wherever it currently is.
    pub fn start(&mut self, from: f32, target: f32, offset: f32, now: Instant) {
        self.animation = Some(Animation {
            from,
            to: (target - offset).max(0.0),
            started_at: now,
        });
    }

    /// The offset the viewport should sit at, at `now`.
    ///
    /// Returns `None` once the animation has finished (or none is running);
    /// the final frame lands exactly on the target before that.
    pub fn offset_at(&mut self, now: Instant) -> Option<f32> {
        let animation = self.animation.as_ref()?;

        let elapsed = now.saturating_duration_since(animation.started_at);
        if elapsed >= SCROLL_DURATION {
            let to = animation.to;
            self.animation = None;
            return Some(to);
        }

        let progress = elapsed.as_secs_f32() / SCROLL_DURATION.as_secs_f32();
        let eased = ease_out_cubic(progress);
        Some(animation.from + (animation.to - animation.from) * eased)
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.animation.is_some()
    }

    /// Abandons any running animation (e.g. when the user grabs the wheel).
    pub fn cancel(&mut self) {
        self.animation = None;
    }
}

fn ease_out_cubic(progress: f32) -> f32 {
    let inverted = 1.0 - progress.clamp(0.0, 1.0);
    1.0 - inverted * inverted * inverted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assert_abs_diff_eq, F32_EPSILON};

    #[test]
    fn registry_resolves_registered_sections() {
        let mut registry = SectionRegistry::new();
        registry.register("Markets", 360.0);

        assert_eq!(registry.resolve("Markets"), Some(360.0));
    }

    #[test]
    fn unknown_section_resolves_to_none() {
        let registry = SectionRegistry::new();
        assert_eq!(registry.resolve("Nonexistent"), None);
    }

    #[test]
    fn ease_out_cubic_is_anchored_and_monotonic() {
        assert_abs_diff_eq!(ease_out_cubic(0.0), 0.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(ease_out_cubic(1.0), 1.0, epsilon = F32_EPSILON);

        let mut last = 0.0;
        for step in 1..=10 {
            let eased = ease_out_cubic(step as f32 / 10.0);
            assert!(eased >= last);
            last = eased;
        }
    }

    #[test]
    fn animation_moves_toward_target_and_finishes() {
        let now = Instant::now();
        let mut animator = Animator::new();
        animator.start(0.0, 500.0, 0.0, now);

        let halfway = animator
            .offset_at(now + SCROLL_DURATION / 2)
            .expect("still animating");
        assert!(halfway > 0.0 && halfway < 500.0);

        let final_frame = animator
            .offset_at(now + SCROLL_DURATION)
            .expect("final frame lands on the target");
        assert_abs_diff_eq!(final_frame, 500.0, epsilon = F32_EPSILON);

        assert!(!animator.is_animating());
        assert_eq!(animator.offset_at(now + SCROLL_DURATION * 2), None);
    }

    #[test]
    fn offset_subtracts_from_the_target_but_never_goes_negative() {
        let now = Instant::now();
        let mut animator = Animator::new();

        animator.start(100.0, 360.0, 60.0, now);
        let landing = animator.offset_at(now + SCROLL_DURATION).expect("frame");
        assert_abs_diff_eq!(landing, 300.0, epsilon = F32_EPSILON);

        animator.start(0.0, 20.0, 60.0, now);
        let clamped = animator.offset_at(now + SCROLL_DURATION).expect("frame");
        assert_abs_diff_eq!(clamped, 0.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn cancel_abandons_the_animation() {
        let now = Instant::now();
        let mut animator = Animator::new();
        animator.start(0.0, 500.0, 0.0, now);

        animator.cancel();
        assert!(!animator.is_animating());
        assert_eq!(animator.offset_at(now + SCROLL_DURATION), None);
    }
}
