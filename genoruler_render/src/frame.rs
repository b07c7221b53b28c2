// Copyright 2025 the Genoruler Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::time::Duration;

/// Default minimum time between drawn frames (about 60 Hz).
pub const DEFAULT_MIN_FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Per-ruler redraw throttle.
///
/// Timestamps are supplied by the caller as offsets from any fixed origin,
/// so the limiter never reads a clock. It only gates drawing; state updates
/// that led to a skipped frame are kept and drawn by a later frame or by
/// [`FrameLimiter::flush`].
///
/// ```
/// use core::time::Duration;
/// use genoruler_render::FrameLimiter;
///
/// let mut limiter = FrameLimiter::default();
/// assert!(limiter.should_draw(Duration::from_millis(100)));
/// assert!(!limiter.should_draw(Duration::from_millis(105)));
/// assert!(limiter.is_pending());
/// assert!(limiter.flush(Duration::from_millis(106)));
/// assert!(!limiter.is_pending());
/// ```
#[derive(Clone, Debug)]
pub struct FrameLimiter {
    min_interval: Duration,
    last_frame: Option<Duration>,
    pending: bool,
}

impl Default for FrameLimiter {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_FRAME_INTERVAL)
    }
}

impl FrameLimiter {
    /// Creates a limiter that accepts at most one frame per `min_interval`.
    #[must_use]
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_frame: None,
            pending: false,
        }
    }

    /// Minimum time between accepted frames.
    #[must_use]
    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Returns `true` if a frame may be drawn at `now` and records it.
    ///
    /// A rejected frame sets the pending flag. Timestamps earlier than the
    /// last accepted frame count as zero elapsed time.
    pub fn should_draw(&mut self, now: Duration) -> bool {
        if let Some(last) = self.last_frame
            && now.saturating_sub(last) < self.min_interval
        {
            log::trace!("frame at {now:?} skipped; last drawn at {last:?}");
            self.pending = true;
            return false;
        }
        self.mark_drawn(now);
        true
    }

    /// Returns `true` if a frame was skipped since the last accepted one.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Accepts the pending frame, if any, regardless of the interval.
    ///
    /// Returns `true` if the caller should draw now.
    pub fn flush(&mut self, now: Duration) -> bool {
        if !self.pending {
            return false;
        }
        self.mark_drawn(now);
        true
    }

    /// Forgets the last frame so the next [`FrameLimiter::should_draw`]
    /// succeeds.
    pub fn reset(&mut self) {
        self.last_frame = None;
        self.pending = false;
    }

    /// Records a frame drawn at `now` without consulting the interval.
    pub fn mark_drawn(&mut self, now: Duration) {
        self.last_frame = Some(now);
        self.pending = false;
    }
}

#[cfg(test)]
mod tests {
    use core::time::Duration;

    use super::FrameLimiter;

    fn ms(v: u64) -> Duration {
        Duration::from_millis(v)
    }

    #[test]
    fn first_frame_is_accepted() {
        let mut l = FrameLimiter::default();
        assert!(l.should_draw(ms(0)));
        assert!(!l.is_pending());
    }

    #[test]
    fn frames_inside_interval_are_rejected() {
        let mut l = FrameLimiter::default();
        assert!(l.should_draw(ms(1_000)));
        assert!(!l.should_draw(ms(1_001)));
        assert!(!l.should_draw(ms(1_015)));
        assert!(l.is_pending());
        assert!(l.should_draw(ms(1_016)));
        assert!(!l.is_pending());
    }

    #[test]
    fn flush_draws_only_when_pending() {
        let mut l = FrameLimiter::default();
        assert!(!l.flush(ms(0)));
        assert!(l.should_draw(ms(10)));
        assert!(!l.flush(ms(11)));
        assert!(!l.should_draw(ms(12)));
        assert!(l.flush(ms(13)));
        assert!(!l.flush(ms(14)));
        // Flushing counts as a drawn frame.
        assert!(!l.should_draw(ms(20)));
    }

    #[test]
    fn clock_going_backwards_is_throttled() {
        let mut l = FrameLimiter::new(ms(5));
        assert!(l.should_draw(ms(100)));
        assert!(!l.should_draw(ms(50)));
        l.reset();
        assert!(l.should_draw(ms(50)));
    }

    #[test]
    fn zero_interval_accepts_everything() {
        let mut l = FrameLimiter::new(Duration::ZERO);
        assert!(l.should_draw(ms(1)));
        assert!(l.should_draw(ms(1)));
        assert_eq!(l.min_interval(), Duration::ZERO);
    }
}
