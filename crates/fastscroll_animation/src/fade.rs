//! Hold-then-fade opacity clock
//!
//! Opacity is never stored. It is always derived from the time elapsed since
//! the last interaction, so a stale cached alpha can never keep the overlay
//! stuck on screen.
//!
//! ```text
//! opacity
//!   1.0 ┤━━━━━━━━━━━━━━━━━━━┓
//!       │        hold       ┃╲  fade
//!   0.0 ┤                   ┃  ╲━━━━━━━━━ hidden
//!       └───────────────────┴───┴──────── elapsed
//!                          hold  hold + fade
//! ```

use std::time::{Duration, Instant};

use crate::easing::Easing;

/// Where in the hold/fade cycle a given elapsed time falls
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FadePhase {
    /// Fully opaque, waiting for the hold period to expire
    Holding,
    /// Ramping down; `progress` goes from 0.0 to 1.0 across the fade
    Fading { progress: f32 },
    /// Fully transparent
    Hidden,
}

/// Maps "time since last interaction" to an opacity in `0.0..=1.0`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FadeClock {
    hold: Duration,
    fade: Duration,
    easing: Easing,
}

impl FadeClock {
    pub const DEFAULT_HOLD: Duration = Duration::from_millis(1500);
    pub const DEFAULT_FADE: Duration = Duration::from_millis(300);

    pub fn new(hold: Duration, fade: Duration) -> Self {
        Self {
            hold,
            fade,
            easing: Easing::Linear,
        }
    }

    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    pub fn hold(&self) -> Duration {
        self.hold
    }

    /// Hold plus fade: the elapsed time at which the overlay is fully hidden
    pub fn total(&self) -> Duration {
        self.hold.saturating_add(self.fade)
    }

    pub fn phase(&self, elapsed: Duration) -> FadePhase {
        if elapsed < self.hold {
            return FadePhase::Holding;
        }
        if elapsed >= self.total() {
            return FadePhase::Hidden;
        }
        // fade is non-zero here, otherwise total() == hold and we returned above
        let into_fade = (elapsed - self.hold).as_secs_f32();
        let progress = (into_fade / self.fade.as_secs_f32()).clamp(0.0, 1.0);
        FadePhase::Fading { progress }
    }

    pub fn opacity(&self, elapsed: Duration) -> f32 {
        match self.phase(elapsed) {
            FadePhase::Holding => 1.0,
            FadePhase::Fading { progress } => (1.0 - self.easing.apply(progress)).clamp(0.0, 1.0),
            FadePhase::Hidden => 0.0,
        }
    }

    /// How long until the end of the current phase: the rest of the hold
    /// while holding, the rest of the fade while fading. `None` once hidden.
    pub fn next_wakeup(&self, elapsed: Duration) -> Option<Duration> {
        match self.phase(elapsed) {
            FadePhase::Holding => Some(self.hold - elapsed),
            FadePhase::Fading { .. } => Some(self.total() - elapsed),
            FadePhase::Hidden => None,
        }
    }
}

impl Default for FadeClock {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HOLD, Self::DEFAULT_FADE)
    }
}

/// The moment of the last interaction
///
/// A timer that was never reset reads as "long ago": the overlay starts out
/// hidden until the first scroll or drag.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FadeTimer {
    last_active_at: Option<Instant>,
}

impl FadeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self, now: Instant) {
        self.last_active_at = Some(now);
    }

    pub fn last_active_at(&self) -> Option<Instant> {
        self.last_active_at
    }

    /// Time since the last interaction, `None` if there never was one
    pub fn elapsed(&self, now: Instant) -> Option<Duration> {
        self.last_active_at.map(|at| now.saturating_duration_since(at))
    }

    /// Opacity at `now` according to `clock`
    pub fn opacity(&self, clock: &FadeClock, now: Instant) -> f32 {
        self.elapsed(now).map_or(0.0, |elapsed| clock.opacity(elapsed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_default_timing() {
        let clock = FadeClock::default();
        assert_eq!(clock.opacity(ms(0)), 1.0);
        assert_eq!(clock.opacity(ms(1000)), 1.0);
        assert_eq!(clock.opacity(ms(1500)), 1.0);
        assert!((clock.opacity(ms(1650)) - 0.5).abs() < 1e-3);
        assert_eq!(clock.opacity(ms(1800)), 0.0);
        assert_eq!(clock.opacity(ms(60_000)), 0.0);
    }

    #[test]
    fn test_fade_is_non_increasing() {
        let clock = FadeClock::default();
        let mut last = clock.opacity(ms(1500));
        for step in 1500..=1800 {
            let value = clock.opacity(ms(step));
            assert!(value <= last, "opacity rose at {step}ms");
            last = value;
        }
    }

    #[test]
    fn test_phases() {
        let clock = FadeClock::default();
        assert_eq!(clock.phase(ms(10)), FadePhase::Holding);
        assert!(matches!(clock.phase(ms(1600)), FadePhase::Fading { .. }));
        assert_eq!(clock.phase(ms(1800)), FadePhase::Hidden);
    }

    #[test]
    fn test_zero_fade_hides_at_hold() {
        let clock = FadeClock::new(ms(500), Duration::ZERO);
        assert_eq!(clock.opacity(ms(499)), 1.0);
        assert_eq!(clock.opacity(ms(500)), 0.0);
    }

    #[test]
    fn test_next_wakeup() {
        let clock = FadeClock::default();
        assert_eq!(clock.next_wakeup(ms(400)), Some(ms(1100)));
        assert_eq!(clock.next_wakeup(ms(1600)), Some(ms(200)));
        assert_eq!(clock.next_wakeup(ms(1500)), Some(ms(300)));
        assert_eq!(clock.next_wakeup(ms(2000)), None);
    }

    #[test]
    fn test_eased_fade_keeps_endpoints() {
        let clock = FadeClock::default().with_easing(Easing::EaseOut);
        assert_eq!(clock.opacity(ms(1500)), 1.0);
        assert_eq!(clock.opacity(ms(1800)), 0.0);
    }

    #[test]
    fn test_timer_never_reset_is_hidden() {
        let timer = FadeTimer::new();
        assert_eq!(timer.opacity(&FadeClock::default(), Instant::now()), 0.0);
    }

    #[test]
    fn test_timer_reset() {
        let t0 = Instant::now();
        let mut timer = FadeTimer::new();
        timer.reset(t0);
        let clock = FadeClock::default();
        assert_eq!(timer.opacity(&clock, t0 + ms(1000)), 1.0);
        assert_eq!(timer.opacity(&clock, t0 + ms(1800)), 0.0);

        timer.reset(t0 + ms(1800));
        assert_eq!(timer.opacity(&clock, t0 + ms(1900)), 1.0);
    }
}
