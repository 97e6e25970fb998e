//! Deferred hold-detection timer.
//!
//! The host owns the real clock. A [`Scheduler`] records when a wakeup is
//! due, and the button polls it from `advance`. Every armed timer carries a
//! [`TimerToken`] generation, so a wakeup that was cancelled or superseded can
//! never act on newer state.

use crate::time::{Duration, Instant};

/// Generation id of an armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(u64);

/// Host-provided deferred callback facility, owned by one button.
pub trait Scheduler {
    /// Arrange for `token` to become due `delay` after `now`.
    fn schedule(&mut self, now: Instant, delay: Duration, token: TimerToken);

    /// Drop every pending wakeup. Dropped tokens are never returned by `poll_due`.
    fn cancel_all(&mut self);

    /// Remove and return the tokens due at `now`, earliest first.
    fn poll_due(&mut self, now: Instant) -> Vec<TimerToken>;

    /// Earliest pending deadline.
    fn next_deadline(&self) -> Option<Instant>;
}

/// In-process scheduler backed by a list of deadlines.
#[derive(Debug, Clone, Default)]
pub struct DeadlineQueue {
    pending: Vec<(Instant, TimerToken)>,
}

impl DeadlineQueue {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for DeadlineQueue {
    fn schedule(&mut self, now: Instant, delay: Duration, token: TimerToken) {
        self.pending.push((now + delay, token));
    }

    fn cancel_all(&mut self) {
        self.pending.clear();
    }

    fn poll_due(&mut self, now: Instant) -> Vec<TimerToken> {
        let mut due: Vec<(Instant, TimerToken)> = Vec::new();
        self.pending.retain(|&(deadline, token)| {
            if deadline <= now {
                due.push((deadline, token));
                false
            } else {
                true
            }
        });
        due.sort();
        due.into_iter().map(|(_, token)| token).collect()
    }

    fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|&(deadline, _)| deadline).min()
    }
}

/// One-shot timer with at most one armed instance.
#[derive(Debug, Clone, Default)]
pub struct HoldTimer {
    generation: u64,
    armed: Option<TimerToken>,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel whatever is pending and arm a fresh timer.
    pub fn arm(&mut self, scheduler: &mut dyn Scheduler, now: Instant, delay: Duration) -> TimerToken {
        scheduler.cancel_all();
        self.generation += 1;
        let token = TimerToken(self.generation);
        scheduler.schedule(now, delay, token);
        self.armed = Some(token);
        token
    }

    /// Cancel the armed timer, if any.
    pub fn cancel(&mut self, scheduler: &mut dyn Scheduler) {
        scheduler.cancel_all();
        self.armed = None;
    }

    /// Consume a fired token. Returns false for stale or cancelled tokens.
    pub fn accept(&mut self, token: TimerToken) -> bool {
        if self.armed == Some(token) {
            self.armed = None;
            true
        } else {
            false
        }
    }

    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }
}
