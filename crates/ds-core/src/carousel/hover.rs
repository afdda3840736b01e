//! Hover-reveal state for the position-indicator row

use std::time::{Duration, Instant};

/// Quiet period after the last interaction before the indicator row hides
pub const DEFAULT_REVEAL_DECAY: Duration = Duration::from_millis(600);

/// A cancellable single-shot timer.
///
/// At most one deadline is pending at any time: arming again replaces the
/// previous deadline, cancelling drops it. `fire_if_due` reports the
/// deadline passing exactly once.
#[derive(Debug, Clone, Default)]
pub struct DecayTimer {
    deadline: Option<Instant>,
}

impl DecayTimer {
    pub fn new() -> Self {
        Self { deadline: None }
    }

    /// Schedule the timer to fire at `now + delay`, replacing any pending deadline
    pub fn arm(&mut self, now: Instant, delay: Duration) {
        self.deadline = Some(now + delay);
    }

    /// Drop the pending deadline, if any
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Time left until the pending deadline
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.deadline.map(|d| d.saturating_duration_since(now))
    }

    /// Returns true exactly once when the deadline has passed, clearing it
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

/// Visibility state for the indicator row.
///
/// Any qualifying interaction shows the row and restarts the decay timer;
/// the pointer leaving the component hides it immediately, overriding any
/// pending decay.
#[derive(Debug, Clone)]
pub struct HoverReveal {
    active: bool,
    decay: DecayTimer,
    delay: Duration,
}

impl HoverReveal {
    pub fn new(delay: Duration) -> Self {
        Self {
            active: false,
            decay: DecayTimer::new(),
            delay,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Record a qualifying interaction: show the row and restart the decay
    pub fn touch(&mut self, now: Instant) {
        self.active = true;
        self.decay.arm(now, self.delay);
    }

    /// Hide immediately and drop any pending decay
    pub fn clear(&mut self) {
        self.active = false;
        self.decay.cancel();
    }

    /// Advance to `now`, hiding the row once the quiet period has elapsed
    pub fn tick(&mut self, now: Instant) {
        if self.decay.fire_if_due(now) {
            self.active = false;
        }
    }

    /// Time left before the row hides, if a decay is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.decay.remaining(now)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decay_timer_fires_once() {
        let start = Instant::now();
        let mut timer = DecayTimer::new();
        timer.arm(start, Duration::from_millis(600));

        assert!(!timer.fire_if_due(start + Duration::from_millis(599)));
        assert!(timer.fire_if_due(start + Duration::from_millis(600)));
        // Deadline is consumed, a second poll stays quiet
        assert!(!timer.fire_if_due(start + Duration::from_millis(700)));
    }

    #[test]
    fn test_rearming_replaces_pending_deadline() {
        let start = Instant::now();
        let mut timer = DecayTimer::new();
        timer.arm(start, Duration::from_millis(600));
        timer.arm(start + Duration::from_millis(500), Duration::from_millis(600));

        // The original deadline no longer fires
        assert!(!timer.fire_if_due(start + Duration::from_millis(700)));
        assert!(timer.fire_if_due(start + Duration::from_millis(1100)));
    }

    #[test]
    fn test_cancel_drops_deadline() {
        let start = Instant::now();
        let mut timer = DecayTimer::new();
        timer.arm(start, Duration::from_millis(600));
        timer.cancel();

        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(start + Duration::from_secs(10)));
    }

    #[test]
    fn test_remaining_counts_down() {
        let start = Instant::now();
        let mut timer = DecayTimer::new();
        assert_eq!(timer.remaining(start), None);

        timer.arm(start, Duration::from_millis(600));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(200)),
            Some(Duration::from_millis(400))
        );
        // Past the deadline the remaining time saturates at zero
        assert_eq!(
            timer.remaining(start + Duration::from_millis(800)),
            Some(Duration::ZERO)
        );
    }

    #[test]
    fn test_hover_reveal_decays() {
        let start = Instant::now();
        let mut hover = HoverReveal::new(Duration::from_millis(600));
        assert!(!hover.is_active());

        hover.touch(start);
        assert!(hover.is_active());

        hover.tick(start + Duration::from_millis(599));
        assert!(hover.is_active());

        hover.tick(start + Duration::from_millis(600));
        assert!(!hover.is_active());
    }

    #[test]
    fn test_hover_reveal_clear_overrides_decay() {
        let start = Instant::now();
        let mut hover = HoverReveal::new(Duration::from_millis(600));
        hover.touch(start);
        hover.clear();

        assert!(!hover.is_active());
        // The cancelled decay must not re-fire later
        hover.tick(start + Duration::from_secs(5));
        assert!(!hover.is_active());
    }
}
